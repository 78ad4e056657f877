//! 日付の解釈と週計算
//!
//! - 日付 → Excelシリアル値（出力用、1900年基準）
//! - テキスト → 日付（ISO / ドット区切り / スラッシュ区切り）
//! - 月曜始まりの週の開始日

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// スラッシュ・ハイフン区切り日付の日と月の並び
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrder {
    /// 03/06/2024 → 2024-03-06
    #[default]
    MonthFirst,
    /// 03/06/2024 → 2024-06-03
    DayFirst,
}

/// Excelシリアル値の起点（1900年基準、1900-02-29バグ込み）
fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN)
}

/// 日付をExcelシリアル値に変換
pub fn date_to_excel_serial(date: NaiveDate) -> f64 {
    (date - excel_epoch()).num_days() as f64
}

const YEAR_FIRST_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// テキストを日付として解釈する
///
/// 受け付ける形式:
/// 1. `YYYY-MM-DD` / `YYYY/MM/DD` / `YYYY.MM.DD`
/// 2. ISO日時（`T`または空白区切り）
/// 3. `DD.MM.YYYY`（ドットの後の空白は許容、常に日が先）
/// 4. `DD/MM/YYYY` または `MM/DD/YYYY`（`order`で決定、`-`区切りも同様）
///
/// # Examples
/// ```
/// use roster_common::{parse_date_text, DateOrder};
///
/// let d = parse_date_text("3. 6. 2024", DateOrder::MonthFirst).unwrap();
/// assert_eq!(d.to_string(), "2024-06-03");
/// ```
pub fn parse_date_text(text: &str, order: DateOrder) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if starts_with_year(text) {
        for fmt in YEAR_FIRST_FORMATS {
            if let Ok(d) = NaiveDate::parse_from_str(text, fmt) {
                return Some(d);
            }
        }

        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
                return Some(dt.date());
            }
        }
        return None;
    }

    if text.contains('.') {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        return NaiveDate::parse_from_str(compact.trim_end_matches('.'), "%d.%m.%Y").ok();
    }

    let (a, b) = match order {
        DateOrder::MonthFirst => ("%m/%d/%Y", "%m-%d-%Y"),
        DateOrder::DayFirst => ("%d/%m/%Y", "%d-%m-%Y"),
    };
    NaiveDate::parse_from_str(text, a)
        .or_else(|_| NaiveDate::parse_from_str(text, b))
        .ok()
}

/// 先頭が4桁の年か
fn starts_with_year(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 4 && bytes[..4].iter().all(u8::is_ascii_digit) && !bytes[4].is_ascii_digit()
}

/// 週の開始日（月曜日）
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// 週の終了日（日曜日）
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}
