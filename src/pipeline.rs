//! 読み込み → 正規化 → 抽出 を1回通す

use crate::error::Result;
use crate::reader;
use roster_common::{extract_weekly, normalize_sheet, SheetLayout, WeeklyRoster};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub target_name: String,
    /// 省略時は先頭シート
    pub sheet: Option<String>,
    pub layout: SheetLayout,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub sheet_name: String,
    /// 日付として認識できた行数
    pub day_count: usize,
    pub roster: WeeklyRoster,
}

pub fn run_extraction(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let span = tracing::info_span!("extract", file = %path.display());
    let _guard = span.enter();

    let grid = reader::read_sheet(path, options.sheet.as_deref())?;
    let records = normalize_sheet(&grid.cells, &options.layout)?;
    let roster = extract_weekly(&records, &options.target_name)?;

    tracing::info!(
        sheet = %grid.name,
        days = records.len(),
        month = %roster.month,
        matches = roster.total_matches(),
        "抽出完了"
    );

    Ok(Extraction {
        sheet_name: grid.name,
        day_count: records.len(),
        roster,
    })
}
