//! Tests for CSV tokenizing

use super::*;
use crate::Error;
use crate::app::services::record_parser::read_rows;

#[test]
fn test_read_rows_keys_by_header() {
    let rows = read_rows(&create_test_los_csv(), "fixture").unwrap();

    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].get("Group"), Some("All visitors by air"));
    assert_eq!(rows[0].get("1999"), Some("7.1"));
    assert_eq!(rows[1].get("2000"), Some(""));
}

#[test]
fn test_read_rows_quoted_footer_stays_one_cell() {
    let rows = read_rows(&create_test_los_csv(), "fixture").unwrap();
    assert_eq!(
        rows[6].get("Group"),
        Some("Source of Data: DBEDT, Hawaii Tourism Authority")
    );
}

#[test]
fn test_read_rows_short_row_leaves_cells_absent() {
    let csv = "Group,Indicator,2020,2021\nAir,Oahu,5.0\n";
    let rows = read_rows(csv, "short").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("2020"), Some("5.0"));
    assert_eq!(rows[0].get("2021"), None);
}

#[test]
fn test_read_rows_ignores_surplus_cells() {
    let csv = "Group,2020\nAir,5.0,extra,more\n";
    let rows = read_rows(csv, "long").unwrap();
    assert_eq!(rows[0].len(), 2);
}

#[test]
fn test_read_rows_skips_blank_lines() {
    let csv = "Group,2020\n\nAir,5.0\n\n\nSea,4.0\n";
    let rows = read_rows(csv, "blank").unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_read_rows_duplicate_header_last_wins() {
    let csv = "Group,2020,2020\nAir,5.0,6.0\n";
    let rows = read_rows(csv, "dup").unwrap();
    assert_eq!(rows[0].get("2020"), Some("6.0"));
}

#[test]
fn test_read_rows_empty_text() {
    let rows = read_rows("", "empty").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_read_rows_invalid_utf8_is_syntax_error() {
    let bytes: &[u8] = b"Group,2020\nAir,\xff\xfe\n";
    let err = read_rows(bytes, "broken.csv").unwrap_err();

    assert!(err.is_fetch_error());
    match err {
        Error::CsvSyntax { source_name, .. } => assert_eq!(source_name, "broken.csv"),
        other => panic!("expected CsvSyntax, got {:?}", other),
    }
}

#[test]
fn test_read_rows_invalid_utf8_header_is_syntax_error() {
    let bytes: &[u8] = b"Gr\xffoup,2020\nAir,5.0\n";
    assert!(matches!(
        read_rows(bytes, "broken.csv"),
        Err(Error::CsvSyntax { .. })
    ));
}
