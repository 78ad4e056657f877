//! 週別一覧の表示
//!
//! 見出し行・概要表のあと、週ごとに `Week of Jun 03 – Jun 09` と
//! その週の割り当て表を並べる。

use chrono::NaiveDate;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use roster_common::{WeekGroup, WeeklyRoster};
use std::fmt::Write;

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// 日付ラベル（例: "Monday, Jun 03"）
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %b %d").to_string()
}

fn overview_table(roster: &WeeklyRoster) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("勤務日数").add_attribute(Attribute::Bold),
        Cell::new("割り当て数").add_attribute(Attribute::Bold),
        Cell::new("場所数").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(roster.distinct_days()).set_alignment(CellAlignment::Right),
        Cell::new(roster.total_matches()).set_alignment(CellAlignment::Right),
        Cell::new(roster.distinct_places()).set_alignment(CellAlignment::Right),
    ]);
    table
}

fn week_table(group: &WeekGroup) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Date").add_attribute(Attribute::Bold),
        Cell::new("Place").add_attribute(Attribute::Bold),
        Cell::new("Shift").add_attribute(Attribute::Bold),
        Cell::new("Text").add_attribute(Attribute::Bold),
    ]);
    for m in &group.matches {
        table.add_row(vec![
            Cell::new(day_label(m.date)),
            Cell::new(&m.place),
            Cell::new(&m.shift),
            Cell::new(&m.matched_text),
        ]);
    }
    table
}

/// 抽出結果を端末表示用の文字列にする
pub fn render_report(roster: &WeeklyRoster) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} – {}（{}件）\n",
        roster.target_name,
        roster.month,
        roster.total_matches()
    );
    let _ = writeln!(out, "{}", overview_table(roster));

    for group in &roster.groups {
        let _ = writeln!(out, "\nWeek of {}", group.label());
        let _ = writeln!(out, "{}", week_table(group));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_common::{Match, YearMonth};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn roster() -> WeeklyRoster {
        let m = |d: u32, text: &str| Match {
            date: date(d),
            weekday_label: None,
            place: "Ward A".into(),
            shift: "AM".into(),
            matched_text: text.into(),
        };
        WeeklyRoster {
            target_name: "Magda".into(),
            month: YearMonth { year: 2024, month: 6 },
            groups: vec![
                WeekGroup {
                    week_start: date(3),
                    week_end: date(9),
                    matches: vec![m(3, "Magda"), m(5, "Bára +Magda")],
                },
                WeekGroup {
                    week_start: date(10),
                    week_end: date(16),
                    matches: vec![m(12, "Magda till 15")],
                },
            ],
        }
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(date(3)), "Monday, Jun 03");
    }

    #[test]
    fn test_render_report_sections_in_order() {
        let out = render_report(&roster());
        assert!(out.starts_with("Magda – 2024-06（3件）"));

        let first = out.find("Week of Jun 03 – Jun 09").unwrap();
        let second = out.find("Week of Jun 10 – Jun 16").unwrap();
        assert!(first < second);

        let a = out.find("Monday, Jun 03").unwrap();
        let b = out.find("Wednesday, Jun 05").unwrap();
        assert!(a < b && b < second);
        assert!(out.contains("Magda till 15"));
    }
}
