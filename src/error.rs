use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（xlsx/xlsm/xls/xlsb/ods/csv に対応）")]
    UnsupportedFormat(String),

    #[error("シートが見つかりません: {0}")]
    SheetNotFound(String),

    #[error("ブック読み込みエラー: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Extract(#[from] roster_common::Error),
}

impl RosterError {
    /// 再実行で解消する入力起因の警告か（日付なし・該当なし）
    pub fn is_user_facing(&self) -> bool {
        matches!(self, RosterError::Extract(e) if e.is_user_facing())
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
