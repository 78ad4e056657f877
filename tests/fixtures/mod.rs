//! テスト用勤務表の生成

#![allow(dead_code)]

use chrono::{Duration, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn excel_serial(d: NaiveDate) -> f64 {
    (d - date(1899, 12, 30)).num_days() as f64
}

/// 2024-05-01〜2024-06-10 の勤務表
///
/// - 行0: Datum / Den / Ward A / (結合) / Ward B
/// - 行1: - / - / AM / PM / Night
/// - Magdaは5月の毎週月曜と、6/3（Ward A AM）・6/5（Ward B Night "Bára +Magda"）
pub fn roster_rows() -> Vec<(NaiveDate, [&'static str; 3])> {
    let mut rows = Vec::new();
    let mut day = date(2024, 5, 1);
    while day <= date(2024, 6, 10) {
        let cells = if day == date(2024, 6, 3) {
            ["Magda", "Eva", "Bára"]
        } else if day == date(2024, 6, 5) {
            ["Eva", "", "Bára +Magda"]
        } else if day < date(2024, 6, 1) && day.format("%a").to_string() == "Mon" {
            ["MAGDA shift", "Eva", ""]
        } else {
            ["Eva", "Bára", "Zdena"]
        };
        rows.push((day, cells));
        day += Duration::days(1);
    }
    rows
}

/// 日付書式のセルで勤務表xlsxを書き出す
pub fn write_roster_xlsx(path: &Path) {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd");

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Roster").unwrap();
    worksheet.write_string(0, 0, "Datum").unwrap();
    worksheet.write_string(0, 1, "Den").unwrap();
    worksheet.write_string(0, 2, "Ward A").unwrap();
    worksheet.write_string(0, 4, "Ward B").unwrap();
    worksheet.write_string(1, 2, "AM").unwrap();
    worksheet.write_string(1, 3, "PM").unwrap();
    worksheet.write_string(1, 4, "Night").unwrap();

    for (i, (day, cells)) in roster_rows().iter().enumerate() {
        let row = i as u32 + 2;
        worksheet
            .write_number_with_format(row, 0, excel_serial(*day), &date_format)
            .unwrap();
        worksheet.write_string(row, 1, day.format("%a").to_string()).unwrap();
        for (offset, text) in cells.iter().enumerate() {
            if !text.is_empty() {
                worksheet.write_string(row, offset as u16 + 2, *text).unwrap();
            }
        }
    }

    // 2枚目: 日付のないシート
    let notes = workbook.add_worksheet();
    notes.set_name("Notes").unwrap();
    notes.write_string(0, 0, "Poznámky").unwrap();
    notes.write_string(1, 0, "Magda dovolená").unwrap();

    workbook.save(path).unwrap();
}

/// 同じ勤務表をCSV（テキスト日付）で書き出す
pub fn write_roster_csv(path: &Path) {
    let mut out = String::from("Datum,Den,Ward A,,Ward B\n,,AM,PM,Night\n");
    for (day, cells) in roster_rows() {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            day.format("%d.%m.%Y"),
            day.format("%a"),
            cells[0],
            cells[1],
            cells[2]
        ));
    }
    std::fs::write(path, out).unwrap();
}
