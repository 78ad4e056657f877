//! Excel/JSON出力の統合テスト

mod fixtures;

use calamine::{open_workbook_auto, Data, Reader};
use fixtures::{date, write_roster_xlsx};
use roster_common::{SheetLayout, WeeklyRoster};
use roster_extract::export::{export_roster, resolve_output, ExportFormat};
use roster_extract::pipeline::{run_extraction, ExtractOptions};
use tempfile::tempdir;

fn magda_roster(dir: &std::path::Path) -> WeeklyRoster {
    let path = dir.join("roster.xlsx");
    write_roster_xlsx(&path);
    let options = ExtractOptions {
        target_name: "Magda".into(),
        sheet: None,
        layout: SheetLayout::default(),
    };
    run_extraction(&path, &options).expect("抽出に失敗").roster
}

#[test]
fn test_excel_export_to_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let roster = magda_roster(dir.path());

    let out_dir = dir.path().join("out");
    std::fs::create_dir_all(&out_dir).unwrap();
    let written = export_roster(&roster, &out_dir).expect("Excel出力に失敗");

    assert_eq!(written, out_dir.join("magda_2024-06_assignments.xlsx"));
    assert!(written.exists(), "Excelファイルが作成されていない");

    // 書き出したファイルを読み戻して中身を確認
    let mut workbook = open_workbook_auto(&written).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Assignments".to_string(), "Weeks".to_string()]);

    let range = workbook.worksheet_range("Assignments").unwrap();
    let rows: Vec<_> = range.rows().collect();
    assert_eq!(rows.len(), 3, "ヘッダー + 2件");
    assert_eq!(rows[0][0], Data::String("Date".into()));
    assert_eq!(rows[1][2], Data::String("Ward A".into()));
    assert_eq!(rows[2][4], Data::String("Bára +Magda".into()));

    let weeks = workbook.worksheet_range("Weeks").unwrap();
    assert_eq!(weeks.rows().count(), 2);
}

#[test]
fn test_exported_dates_read_back_as_dates() {
    let dir = tempdir().expect("Failed to create temp dir");
    let roster = magda_roster(dir.path());
    let written = export_roster(&roster, &dir.path().join("magda.xlsx")).unwrap();

    let mut workbook = open_workbook_auto(&written).unwrap();
    let range = workbook.worksheet_range("Assignments").unwrap();
    let cells = roster_extract::reader::range_to_cells(&range);
    assert_eq!(cells[1][0], roster_common::CellValue::Date(date(2024, 6, 3)));
    assert_eq!(cells[2][0], roster_common::CellValue::Date(date(2024, 6, 5)));
}

#[test]
fn test_json_export() {
    let dir = tempdir().expect("Failed to create temp dir");
    let roster = magda_roster(dir.path());

    let path = dir.path().join("result.json");
    export_roster(&roster, &path).expect("JSON出力に失敗");

    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: WeeklyRoster = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed, roster);
    assert!(content.contains("\"weekStart\": \"2024-06-03\""));
}

#[test]
fn test_resolve_output_formats() {
    let dir = tempdir().expect("Failed to create temp dir");
    let roster = magda_roster(dir.path());

    let (path, format) = resolve_output(&dir.path().join("a.XLSX"), &roster).unwrap();
    assert_eq!(format, ExportFormat::Excel);
    assert!(path.ends_with("a.XLSX"));

    let (_, format) = resolve_output(&dir.path().join("a.json"), &roster).unwrap();
    assert_eq!(format, ExportFormat::Json);

    assert!(resolve_output(&dir.path().join("a.pdf"), &roster).is_err());
}
