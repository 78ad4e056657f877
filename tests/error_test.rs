//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use roster_extract::error::RosterError;
use roster_extract::reader;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_read_nonexistent_file() {
    let result = reader::read_sheet(Path::new("/nonexistent/path/roster.xlsx"), None);
    assert!(matches!(result, Err(RosterError::FileNotFound(_))));

    let result = reader::list_sheets(Path::new("/nonexistent/path/roster.xlsx"));
    assert!(matches!(result, Err(RosterError::FileNotFound(_))));
}

/// 対応していない拡張子
#[test]
fn test_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("roster.pdf");
    std::fs::write(&path, "dummy").unwrap();

    let result = reader::read_sheet(&path, None);
    assert!(matches!(result, Err(RosterError::UnsupportedFormat(_))));
}

/// 拡張子はxlsxだが中身が壊れている場合
#[test]
fn test_corrupt_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, "not a zip").unwrap();

    let result = reader::read_sheet(&path, None);
    assert!(matches!(result, Err(RosterError::Workbook(_))));
}

/// 空のCSVは日付なしとして警告扱い
#[test]
fn test_empty_csv_is_malformed() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let grid = reader::read_sheet(&path, None).unwrap();
    let err: RosterError =
        roster_common::normalize_sheet(&grid.cells, &Default::default()).unwrap_err().into();
    assert!(err.is_user_facing());
}

/// RosterErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        RosterError::Config("テスト設定エラー".to_string()),
        RosterError::FileNotFound("roster.xlsx".to_string()),
        RosterError::UnsupportedFormat("roster.pdf".to_string()),
        RosterError::SheetNotFound("Červen".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
        assert!(!err.is_user_facing());
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: RosterError = io_err.into();

    assert!(matches!(err, RosterError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: RosterError = json_err.into();

    assert!(matches!(err, RosterError::JsonParse(_)));
}

/// 共通ライブラリのエラーは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = roster_common::Error::NoData("2024-06 に該当なし".to_string());
    let err: RosterError = common_err.into();

    assert!(matches!(err, RosterError::Extract(_)));
    assert!(err.is_user_facing());
    assert_eq!(format!("{}", err), "No data: 2024-06 に該当なし");
}
