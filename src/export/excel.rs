//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルに書き出す

use crate::error::Result;
use roster_common::export::excel_core::generate_excel_buffer;
use roster_common::WeeklyRoster;
use std::path::Path;

pub fn generate_excel(roster: &WeeklyRoster, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(roster)?;
    std::fs::write(output_path, buffer)?;
    tracing::debug!(path = %output_path.display(), "xlsxを書き出し");
    Ok(())
}
