//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 日付として解釈できる行が1つもない
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// 対象月に表示するデータがない
    #[error("No data: {0}")]
    NoData(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl Error {
    /// 利用者に警告として見せるエラーか（入力を変えて再実行すればよいもの）
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::MalformedInput(_) | Error::NoData(_))
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
