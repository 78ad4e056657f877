//! シート正規化モジュール
//!
//! 読み込み済みのセルグリッドを日付ごとの `DayRecord` 列に変換する。
//!
//! ## 勤務表のレイアウト
//! - 行0: 場所（結合セルは左から右へ前方補完）
//! - 行1: シフト（同上）
//! - 列0: 日付、列1: 曜日
//! - それ以外の列: 自由記述（名前など）

use crate::dates::{parse_date_text, DateOrder};
use crate::error::{Error, Result};
use crate::types::{CellEntry, CellValue, DayRecord};
use serde::{Deserialize, Serialize};

/// シートのレイアウト設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SheetLayout {
    /// ヘッダー行数（0〜2）
    pub header_rows: usize,
    /// 日付列
    pub date_column: usize,
    /// 曜日列（なければNone）
    pub weekday_column: Option<usize>,
    /// テキスト日付の日・月の並び
    pub date_order: DateOrder,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            header_rows: 2,
            date_column: 0,
            weekday_column: Some(1),
            date_order: DateOrder::MonthFirst,
        }
    }
}

impl SheetLayout {
    pub const MAX_HEADER_ROWS: usize = 2;

    pub fn validate(&self) -> Result<()> {
        if self.header_rows > Self::MAX_HEADER_ROWS {
            return Err(Error::Config(format!(
                "header_rowsは0〜{}で指定してください: {}",
                Self::MAX_HEADER_ROWS,
                self.header_rows
            )));
        }
        if self.weekday_column == Some(self.date_column) {
            return Err(Error::Config(format!(
                "日付列と曜日列が同じです: {}",
                self.date_column
            )));
        }
        Ok(())
    }

    fn is_label_column(&self, column: usize) -> bool {
        column == self.date_column || self.weekday_column == Some(column)
    }
}

/// ヘッダー行を左から右へ前方補完した列ラベル
fn forward_filled(row: Option<&Vec<CellValue>>, width: usize) -> Vec<String> {
    let mut labels = Vec::with_capacity(width);
    let mut current = String::new();
    for column in 0..width {
        match row.and_then(|r| r.get(column)) {
            Some(CellValue::Text(s)) => current = s.trim().to_string(),
            Some(CellValue::Date(d)) => current = d.to_string(),
            _ => {}
        }
        labels.push(current.clone());
    }
    labels
}

fn resolve_date(cell: Option<&CellValue>, order: DateOrder) -> Option<chrono::NaiveDate> {
    match cell? {
        CellValue::Date(d) => Some(*d),
        CellValue::Text(s) => parse_date_text(s, order),
        CellValue::Empty => None,
    }
}

/// グリッドを `DayRecord` 列に変換する
///
/// 日付として解釈できない行は読み飛ばす。日付行が1つもなければ
/// `Error::MalformedInput` を返す。
///
/// # Arguments
/// * `grid` - シート座標そのままのセルグリッド
/// * `layout` - レイアウト設定
pub fn normalize_sheet(grid: &[Vec<CellValue>], layout: &SheetLayout) -> Result<Vec<DayRecord>> {
    layout.validate()?;

    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    let places = if layout.header_rows >= 1 {
        forward_filled(grid.first(), width)
    } else {
        vec![String::new(); width]
    };
    let shifts = if layout.header_rows >= 2 {
        forward_filled(grid.get(1), width)
    } else {
        vec![String::new(); width]
    };

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row_idx, row) in grid.iter().enumerate().skip(layout.header_rows) {
        let Some(date) = resolve_date(row.get(layout.date_column), layout.date_order) else {
            if row.iter().any(|c| !c.is_empty()) {
                tracing::trace!(row = row_idx, "日付のない行をスキップ");
                skipped += 1;
            }
            continue;
        };

        let weekday_label = layout
            .weekday_column
            .and_then(|c| row.get(c))
            .and_then(CellValue::as_text)
            .map(|s| s.trim().to_string());

        let cell_values = row
            .iter()
            .enumerate()
            .filter(|(column, _)| !layout.is_label_column(*column))
            .filter_map(|(column, cell)| {
                let text = cell.as_text()?.trim();
                if text.is_empty() {
                    return None;
                }
                Some(CellEntry {
                    column,
                    place: places.get(column).cloned().unwrap_or_default(),
                    shift: shifts.get(column).cloned().unwrap_or_default(),
                    text: text.to_string(),
                })
            })
            .collect();

        records.push(DayRecord {
            date,
            weekday_label,
            cell_values,
        });
    }

    if records.is_empty() {
        return Err(Error::MalformedInput(format!(
            "{}列目に日付として読める行がありません",
            layout.date_column + 1
        )));
    }

    tracing::debug!(records = records.len(), skipped, "シートを正規化");
    Ok(records)
}
