//! calamineのセル値 → `CellValue`

use calamine::{Data, ExcelDateTime};
use chrono::NaiveDate;
use roster_common::{parse_date_text, CellValue, DateOrder};

/// Excelで表せる最後の日（9999-12-31）のシリアル値
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// 日付書式セルの日付（1900年/1904年基準はcalamineが吸収）
///
/// 時刻だけのセルや範囲外の値はNone。
fn excel_date(dt: &ExcelDateTime) -> Option<NaiveDate> {
    if !(1.0..=MAX_EXCEL_SERIAL).contains(&dt.as_f64()) {
        return None;
    }
    dt.as_datetime().map(|d| d.date())
}

/// セル値を一度だけ解決する
///
/// - 日付書式のセル・ISO日時文字列 → Date
/// - 文字列・数値・真偽値・期間 → Text
/// - 空セル・エラーセル → Empty
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::DateTime(dt) if dt.is_datetime() => excel_date(dt)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::text(dt.as_f64().to_string())),
        Data::DateTime(dt) => CellValue::text(dt.as_f64().to_string()),
        // ISO表記は日と月の並びが曖昧にならない
        Data::DateTimeIso(s) => parse_date_text(s, DateOrder::MonthFirst)
            .map(CellValue::Date)
            .unwrap_or_else(|| CellValue::text(s.as_str())),
        Data::DurationIso(s) => CellValue::text(s.as_str()),
        Data::Int(i) => CellValue::Text(i.to_string()),
        Data::Float(f) => CellValue::Text(f.to_string()),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::Error(e) => {
            tracing::trace!(error = ?e, "エラーセルを空として扱う");
            CellValue::Empty
        }
    }
}
