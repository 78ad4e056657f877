//! 勤務表ファイル読み込みモジュール
//!
//! Excel系（calamine）とCSVを読み込み、シート座標そのままの
//! `CellValue` グリッドに変換する。

mod cell;

pub use cell::cell_from_data;

use crate::error::{RosterError, Result};
use calamine::{open_workbook_auto, Data, Range, Reader};
use roster_common::CellValue;
use std::path::Path;

/// 読み込んだシート
#[derive(Debug, Clone)]
pub struct SheetGrid {
    pub name: String,
    pub cells: Vec<Vec<CellValue>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Workbook,
    Csv,
}

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// 拡張子から読み込み方式を判定
pub fn source_kind(path: &Path) -> Result<SourceKind> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if WORKBOOK_EXTENSIONS.contains(&ext.as_str()) {
        Ok(SourceKind::Workbook)
    } else if ext == "csv" {
        Ok(SourceKind::Csv)
    } else {
        Err(RosterError::UnsupportedFormat(path.display().to_string()))
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(RosterError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn csv_sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "csv".to_string())
}

/// シート名一覧（ブック内の順序）
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;
    match source_kind(path)? {
        SourceKind::Workbook => {
            let workbook = open_workbook_auto(path)?;
            Ok(workbook.sheet_names())
        }
        SourceKind::Csv => Ok(vec![csv_sheet_name(path)]),
    }
}

/// シートを読み込む（`sheet` 省略時は先頭シート）
pub fn read_sheet(path: &Path, sheet: Option<&str>) -> Result<SheetGrid> {
    ensure_exists(path)?;
    match source_kind(path)? {
        SourceKind::Workbook => read_workbook_sheet(path, sheet),
        SourceKind::Csv => {
            let name = csv_sheet_name(path);
            if let Some(requested) = sheet {
                if requested != name {
                    return Err(RosterError::SheetNotFound(requested.to_string()));
                }
            }
            Ok(SheetGrid {
                cells: read_csv_cells(path)?,
                name,
            })
        }
    }
}

fn read_workbook_sheet(path: &Path, sheet: Option<&str>) -> Result<SheetGrid> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let name = match sheet {
        Some(requested) => names
            .iter()
            .find(|n| n.as_str() == requested)
            .cloned()
            .ok_or_else(|| RosterError::SheetNotFound(requested.to_string()))?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| RosterError::SheetNotFound("（シートがありません）".to_string()))?,
    };

    let range = workbook.worksheet_range(&name)?;
    let cells = range_to_cells(&range);
    tracing::info!(sheet = %name, rows = cells.len(), "シートを読み込み");

    Ok(SheetGrid { name, cells })
}

/// 使用範囲の左上がA1でない場合も、シート座標に合わせて空セルで埋める
pub fn range_to_cells(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut out = vec![CellValue::Empty; col_offset];
        out.extend(row.iter().map(cell_from_data));
        cells.push(out);
    }
    cells
}

fn read_csv_cells(path: &Path) -> Result<Vec<Vec<CellValue>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut cells = Vec::new();
    for record in reader.records() {
        let record = record?;
        cells.push(record.iter().map(CellValue::text).collect());
    }
    tracing::info!(rows = cells.len(), "CSVを読み込み");
    Ok(cells)
}
