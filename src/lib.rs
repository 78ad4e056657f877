pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod sheet_selector;
