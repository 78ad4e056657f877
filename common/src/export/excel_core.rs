//! Excel生成（共通ライブラリ）
//!
//! 最新月の割り当て一覧をxlsxとして生成する
//! - Assignmentsシート: 1行1割り当て（Date / Weekday / Place / Shift / CellText）
//! - Weeksシート: 1行1週（週ラベル・開始日・終了日・件数）

use crate::dates::date_to_excel_serial;
use crate::error::{Error, Result};
use crate::types::WeeklyRoster;
use rust_xlsxwriter::*;

pub const ASSIGNMENTS_SHEET: &str = "Assignments";
pub const WEEKS_SHEET: &str = "Weeks";

const ASSIGNMENT_HEADERS: [(&str, f64); 5] = [
    ("Date", 12.0),
    ("Weekday", 10.0),
    ("Place", 20.0),
    ("Shift", 14.0),
    ("CellText", 36.0),
];

const WEEK_HEADERS: [(&str, f64); 4] = [
    ("Week", 20.0),
    ("Start", 12.0),
    ("End", 12.0),
    ("Assignments", 12.0),
];

fn xlsx_err(context: &str) -> impl Fn(XlsxError) -> Error + '_ {
    move |e| Error::Export(format!("{}: {}", context, e))
}

fn write_headers(worksheet: &mut Worksheet, headers: &[(&str, f64)], format: &Format) -> Result<()> {
    for (col, (label, width)) in headers.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *label, format)
            .map_err(xlsx_err("ヘッダー書き込みエラー"))?;
        worksheet
            .set_column_width(col, *width)
            .map_err(xlsx_err("列幅設定エラー"))?;
    }
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(xlsx_err("ウィンドウ枠固定エラー"))?;
    Ok(())
}

/// Excelをバッファに生成
///
/// # Arguments
/// * `roster` - 抽出結果
///
/// # Returns
/// xlsxファイルのバイト列
pub fn generate_excel_buffer(roster: &WeeklyRoster) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Hair)
        .set_border_color(Color::RGB(0xAAAAAA));

    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(ASSIGNMENTS_SHEET)
        .map_err(xlsx_err("シート名設定エラー"))?;
    write_headers(worksheet, &ASSIGNMENT_HEADERS, &header_format)?;

    for (i, m) in roster.matches().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_number_with_format(row, 0, date_to_excel_serial(m.date), &date_format)
            .map_err(xlsx_err("日付書き込みエラー"))?;
        let weekday = m
            .weekday_label
            .clone()
            .unwrap_or_else(|| m.date.format("%a").to_string());
        let values = [weekday.as_str(), m.place.as_str(), m.shift.as_str(), m.matched_text.as_str()];
        for (offset, value) in values.iter().enumerate() {
            worksheet
                .write_string(row, offset as u16 + 1, *value)
                .map_err(xlsx_err("値書き込みエラー"))?;
        }
    }

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(WEEKS_SHEET)
        .map_err(xlsx_err("シート名設定エラー"))?;
    write_headers(worksheet, &WEEK_HEADERS, &header_format)?;

    for (i, group) in roster.groups.iter().enumerate() {
        let row = i as u32 + 1;
        worksheet
            .write_string(row, 0, group.label())
            .map_err(xlsx_err("値書き込みエラー"))?;
        worksheet
            .write_number_with_format(row, 1, date_to_excel_serial(group.week_start), &date_format)
            .map_err(xlsx_err("日付書き込みエラー"))?;
        worksheet
            .write_number_with_format(row, 2, date_to_excel_serial(group.week_end), &date_format)
            .map_err(xlsx_err("日付書き込みエラー"))?;
        worksheet
            .write_number(row, 3, group.matches.len() as f64)
            .map_err(xlsx_err("値書き込みエラー"))?;
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(xlsx_err("Excel保存エラー"))
}
