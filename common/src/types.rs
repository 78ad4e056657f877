//! 勤務表の型定義
//!
//! CLIとライブラリで共有される型:
//! - CellValue: 読み込み時に解決されたセル値
//! - DayRecord: 日付ごとの行データ（Normalizerの出力）
//! - Match / WeekGroup / WeeklyRoster: 抽出結果（Extractorの出力）

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// セル値（読み込み時に一度だけ解決する）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellValue {
    Date(NaiveDate),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// 空白のみの文字列はEmptyとして扱う
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// 行内のテキストセル1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellEntry {
    /// シート上の列番号（0始まり）
    pub column: usize,
    /// ヘッダー1行目（場所）
    pub place: String,
    /// ヘッダー2行目（シフト）
    pub shift: String,
    pub text: String,
}

/// 1日分のレコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,
    /// 曜日列の表記（シートに書かれたまま）
    #[serde(default)]
    pub weekday_label: Option<String>,
    pub cell_values: Vec<CellEntry>,
}

impl DayRecord {
    pub fn year_month(&self) -> YearMonth {
        YearMonth::of(self.date)
    }
}

/// 年月（年→月の辞書順で比較）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// 名前を含むセル1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub date: NaiveDate,
    #[serde(default)]
    pub weekday_label: Option<String>,
    pub place: String,
    pub shift: String,
    pub matched_text: String,
}

/// 月曜始まりの1週間分の一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGroup {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub matches: Vec<Match>,
}

impl WeekGroup {
    /// 表示用ラベル（例: "Jun 03 – Jun 09"）
    pub fn label(&self) -> String {
        format!(
            "{} – {}",
            self.week_start.format("%b %d"),
            self.week_end.format("%b %d")
        )
    }
}

/// 抽出結果全体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRoster {
    pub target_name: String,
    pub month: YearMonth,
    pub groups: Vec<WeekGroup>,
}

impl WeeklyRoster {
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.groups.iter().flat_map(|g| g.matches.iter())
    }

    /// 割り当て総数
    pub fn total_matches(&self) -> usize {
        self.groups.iter().map(|g| g.matches.len()).sum()
    }

    /// 勤務日数（重複日を除く）
    pub fn distinct_days(&self) -> usize {
        self.matches().map(|m| m.date).collect::<BTreeSet<_>>().len()
    }

    /// 既定の出力ファイル名（例: `magda_2024-06_assignments.xlsx`）
    pub fn export_file_name(&self, extension: &str) -> String {
        format!(
            "{}_{}_assignments.{}",
            self.target_name.to_lowercase(),
            self.month,
            extension
        )
    }

    /// 場所の種類数
    pub fn distinct_places(&self) -> usize {
        self.matches()
            .map(|m| m.place.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
