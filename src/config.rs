use crate::error::{RosterError, Result};
use roster_common::{DateOrder, SheetLayout};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 検索名の既定値
pub const DEFAULT_NAME: &str = "Magda";

/// 検索名を上書きする環境変数
pub const NAME_ENV_VAR: &str = "ROSTER_EXTRACT_NAME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_name: String,
    pub header_rows: usize,
    pub date_column: usize,
    pub weekday_column: Option<usize>,
    pub day_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        let layout = SheetLayout::default();
        Self {
            default_name: DEFAULT_NAME.into(),
            header_rows: layout.header_rows,
            date_column: layout.date_column,
            weekday_column: layout.weekday_column,
            day_first: layout.date_order == DateOrder::DayFirst,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定を読み込み");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RosterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("roster-extract").join("config.json"))
    }

    /// 検索名を決定（引数 → 環境変数 → 設定ファイル）
    pub fn resolve_name(&self, cli_name: Option<&str>) -> String {
        if let Some(name) = cli_name {
            return name.trim().to_string();
        }
        if let Ok(name) = std::env::var(NAME_ENV_VAR) {
            if !name.trim().is_empty() {
                return name.trim().to_string();
            }
        }
        self.default_name.trim().to_string()
    }

    pub fn set_default_name(&mut self, name: String) -> Result<()> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RosterError::Config("名前が空です".into()));
        }
        self.default_name = name;
        self.save()
    }

    pub fn layout(&self) -> SheetLayout {
        SheetLayout {
            header_rows: self.header_rows,
            date_column: self.date_column,
            weekday_column: self.weekday_column,
            date_order: if self.day_first {
                DateOrder::DayFirst
            } else {
                DateOrder::MonthFirst
            },
        }
    }
}
