//! Roster Extractor Common Library
//!
//! 勤務表の正規化・名前抽出・週グループ化とxlsx出力のコア

pub mod types;
pub mod dates;
pub mod error;
pub mod normalizer;
pub mod extractor;
pub mod export;

pub use types::{CellEntry, CellValue, DayRecord, Match, WeekGroup, WeeklyRoster, YearMonth};
pub use dates::{date_to_excel_serial, parse_date_text, week_start, DateOrder};
pub use error::{Error, Result};
pub use normalizer::{normalize_sheet, SheetLayout};
pub use extractor::{extract_weekly, latest_month};
