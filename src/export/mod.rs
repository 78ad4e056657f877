pub mod excel;

use crate::error::{RosterError, Result};
use roster_common::WeeklyRoster;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

/// 出力先パスと形式を決める
///
/// ディレクトリ（または拡張子なし）なら `{名前}_{年月}_assignments.xlsx` を作る。
pub fn resolve_output(output: &Path, roster: &WeeklyRoster) -> Result<(PathBuf, ExportFormat)> {
    if output.is_dir() || output.extension().is_none() {
        let format = ExportFormat::Excel;
        return Ok((output.join(roster.export_file_name(format.extension())), format));
    }

    let ext = output
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let format = match ext.as_str() {
        "xlsx" => ExportFormat::Excel,
        "json" => ExportFormat::Json,
        _ => return Err(RosterError::UnsupportedFormat(output.display().to_string())),
    };
    Ok((output.to_path_buf(), format))
}

/// 抽出結果をファイルに書き出し、書き出したパスを返す
///
/// 標準出力には何も書かない（`--format json` の出力を壊さないため）。
pub fn export_roster(roster: &WeeklyRoster, output: &Path) -> Result<PathBuf> {
    let (path, format) = resolve_output(output, roster)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    match format {
        ExportFormat::Excel => excel::generate_excel(roster, &path)?,
        ExportFormat::Json => {
            let json = serde_json::to_string_pretty(roster)?;
            std::fs::write(&path, json)?;
        }
    }
    tracing::info!(path = %path.display(), format = format.extension(), "出力完了");

    Ok(path)
}
