//! Excel export tests: write a workbook, read it back

use netmon_export::config::ExportConfig;
use netmon_export::error::ExportError;
use netmon_export::excel::{ExcelExport, ExcelInspector};
use netmon_export::export::{run_export, TableExport};
use netmon_export::parser::parse_readings;
use netmon_export::types::ReadingLog;
use pretty_assertions::assert_eq;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn sample_log() -> ReadingLog {
    let mut log = ReadingLog::new(strings(&["timestamp", "network_type", "google_connection_test"]));
    log.push_row(strings(&["18:00", "WIFI", "PASS"]));
    log.push_row(strings(&["18:05", "MOBILE", "FAIL"]));
    log.push_row(strings(&["18:10", "WIFI", "pass"]));
    log
}

// ═══════════════════════════════════════════════════════════════════════════
// THREE-PHASE PROTOCOL
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_header_rows_footer_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    exporter
        .write_header(&strings(&["timestamp", "google_connection_test"]))
        .unwrap();
    exporter.write_row(1, &strings(&["18:00", "PASS"])).unwrap();
    exporter.write_row(2, &strings(&["18:05", "FAIL"])).unwrap();
    exporter.write_footer().unwrap();

    let path = temp_dir.path().join("networkmonitor.xlsx");
    let summary = ExcelInspector::new(&path).inspect().unwrap();

    assert_eq!(summary.sheet_name, "Network Monitor");
    assert_eq!(summary.columns, strings(&["timestamp", "google_connection_test"]));
    assert_eq!(
        summary.rows,
        vec![strings(&["18:00", "PASS"]), strings(&["18:05", "FAIL"])]
    );
    assert_eq!(summary.pass_count, 1);
    assert_eq!(summary.fail_count, 1);
}

#[test]
fn test_run_export_summary_matches_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let summary = run_export(&mut exporter, &sample_log()).unwrap();

    assert_eq!(summary.path, temp_dir.path().join("networkmonitor.xlsx"));
    assert_eq!(summary.rows_written, 3);
    // lowercase "pass" is not a sentinel
    assert_eq!(summary.pass_cells, 1);
    assert_eq!(summary.fail_cells, 1);

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert_eq!(sheet.row_count(), 3);
    assert_eq!(sheet.pass_count, summary.pass_cells);
    assert_eq!(sheet.fail_count, summary.fail_cells);
}

#[test]
fn test_custom_sheet_name() {
    let temp_dir = TempDir::new().unwrap();
    let config = ExportConfig::new(temp_dir.path()).with_sheet_name("Readings");
    let mut exporter = ExcelExport::new(config);

    let summary = run_export(&mut exporter, &sample_log()).unwrap();

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert_eq!(sheet.sheet_name, "Readings");
}

#[test]
fn test_empty_header_produces_valid_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let summary = run_export(&mut exporter, &ReadingLog::default()).unwrap();
    assert!(summary.path.exists());

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert!(sheet.columns.is_empty());
    assert_eq!(sheet.row_count(), 0);
}

#[test]
fn test_header_only_export() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let log = ReadingLog::new(strings(&["timestamp", "status"]));
    let summary = run_export(&mut exporter, &log).unwrap();

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert_eq!(sheet.columns, strings(&["timestamp", "status"]));
    assert_eq!(sheet.row_count(), 0);
}

#[test]
fn test_ragged_rows_are_written_as_is() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let mut log = ReadingLog::new(strings(&["a", "b", "c"]));
    log.push_row(strings(&["1", "2", "3"]));
    log.push_row(strings(&["4"]));
    let summary = run_export(&mut exporter, &log).unwrap();

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert_eq!(sheet.rows[1], strings(&["4", "", ""]));
}

#[test]
fn test_failed_row_still_saves_earlier_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let mut log = ReadingLog::new(strings(&["payload"]));
    log.push_row(strings(&["ok"]));
    log.push_row(vec!["x".repeat(40_000)]);

    let result = run_export(&mut exporter, &log);
    assert!(matches!(result, Err(ExportError::Xlsx(_))));
    assert!(!exporter.is_open());

    let sheet = ExcelInspector::new(exporter.output_path()).inspect().unwrap();
    assert_eq!(sheet.rows, vec![strings(&["ok"])]);
}

#[test]
fn test_export_from_yaml_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let log = parse_readings(Path::new("test-data/readings.yaml")).unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let summary = run_export(&mut exporter, &log).unwrap();

    assert_eq!(summary.rows_written, 4);
    assert_eq!(summary.pass_cells, 5);
    assert_eq!(summary.fail_cells, 3);

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert_eq!(sheet.columns.len(), 6);
    assert_eq!(sheet.rows[2][2], "");
    assert_eq!(sheet.rows[0][5], "87");
}

#[test]
fn test_inspect_without_header_keeps_rows() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let mut log = ReadingLog::new(vec![]);
    log.push_row(strings(&["a", "PASS"]));
    log.push_row(strings(&["b", "FAIL"]));
    let summary = run_export(&mut exporter, &log).unwrap();

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert!(sheet.columns.is_empty());
    assert_eq!(sheet.rows, vec![strings(&["a", "PASS"]), strings(&["b", "FAIL"])]);
    assert_eq!(sheet.pass_count, summary.pass_cells);
    assert_eq!(sheet.fail_count, summary.fail_cells);
}

#[test]
fn test_inspect_keeps_blank_leading_column() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let mut log = ReadingLog::new(strings(&["", "status"]));
    log.push_row(strings(&["", "PASS"]));
    let summary = run_export(&mut exporter, &log).unwrap();

    let sheet = ExcelInspector::new(&summary.path).inspect().unwrap();
    assert_eq!(sheet.columns, strings(&["", "status"]));
    assert_eq!(sheet.rows, vec![strings(&["", "PASS"])]);
    assert_eq!(sheet.pass_count, 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// WRITTEN FORMATTING
// ═══════════════════════════════════════════════════════════════════════════

/// Read one XML part out of a saved workbook
fn read_part(path: &Path, name: &str) -> String {
    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// Text between the first `open` and the following `close`
fn section<'a>(xml: &'a str, open: &str, close: &str) -> &'a str {
    let start = xml.find(open).unwrap();
    let end = start + xml[start..].find(close).unwrap();
    &xml[start..end]
}

/// Style index of a cell, 0 when the cell uses the default format
fn cell_style(sheet_xml: &str, cell_ref: &str) -> usize {
    let tag = section(sheet_xml, &format!("<c r=\"{}\"", cell_ref), ">");
    tag.split(" s=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .map(|idx| idx.parse().unwrap())
        .unwrap_or(0)
}

/// `<font>` element used by a cell style index
fn font_for_style(styles_xml: &str, style: usize) -> String {
    let xfs = section(styles_xml, "<cellXfs", "</cellXfs>");
    let xf = xfs.split("<xf ").nth(style + 1).unwrap();
    let font_id: usize = xf
        .split("fontId=\"")
        .nth(1)
        .and_then(|rest| rest.split('"').next())
        .unwrap()
        .parse()
        .unwrap();

    let fonts = section(styles_xml, "<fonts", "</fonts>");
    fonts.split("<font>").nth(font_id + 1).unwrap().to_string()
}

#[test]
fn test_written_file_has_bold_header_and_colored_outcomes() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    exporter
        .write_header(&strings(&["timestamp", "google", "http"]))
        .unwrap();
    exporter.write_row(1, &strings(&["18:00", "PASS", "FAIL"])).unwrap();
    exporter.write_row(2, &strings(&["18:05", "pass", "FAIL"])).unwrap();
    exporter.write_footer().unwrap();

    let path = temp_dir.path().join("networkmonitor.xlsx");
    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    let styles = read_part(&path, "xl/styles.xml");

    let header = cell_style(&sheet, "A1");
    assert_ne!(header, 0);
    assert_eq!(cell_style(&sheet, "C1"), header);
    assert!(font_for_style(&styles, header).contains("<b/>"));

    let pass = cell_style(&sheet, "B2");
    assert!(font_for_style(&styles, pass).contains("rgb=\"FF008000\""));

    let fail = cell_style(&sheet, "C2");
    assert!(font_for_style(&styles, fail).contains("rgb=\"FFFF0000\""));
    assert_eq!(cell_style(&sheet, "C3"), fail);

    // plain values and near-miss sentinels keep the default format
    assert_eq!(cell_style(&sheet, "A2"), 0);
    assert_eq!(cell_style(&sheet, "B3"), 0);
}

#[test]
fn test_written_file_freezes_header_and_two_columns() {
    let temp_dir = TempDir::new().unwrap();
    let mut exporter = ExcelExport::new(ExportConfig::new(temp_dir.path()));

    let summary = run_export(&mut exporter, &sample_log()).unwrap();

    let sheet = read_part(&summary.path, "xl/worksheets/sheet1.xml");
    let pane = section(&sheet, "<pane ", "/>");
    assert!(pane.contains("xSplit=\"2\""));
    assert!(pane.contains("ySplit=\"1\""));
    assert!(pane.contains("state=\"frozen\""));
}

#[test]
fn test_written_file_without_freeze_has_no_pane() {
    let temp_dir = TempDir::new().unwrap();
    let config = ExportConfig::new(temp_dir.path()).with_freeze(0, 0);
    let mut exporter = ExcelExport::new(config);

    let summary = run_export(&mut exporter, &sample_log()).unwrap();

    let sheet = read_part(&summary.path, "xl/worksheets/sheet1.xml");
    assert!(!sheet.contains("<pane "));
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECTOR ERRORS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_inspect_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = ExcelInspector::new(temp_dir.path().join("missing.xlsx")).inspect();
    assert!(matches!(result, Err(ExportError::Read(_))));
}

#[test]
fn test_inspect_non_excel_file() {
    let result = ExcelInspector::new("test-data/readings.yaml").inspect();
    assert!(matches!(result, Err(ExportError::Read(_))));
}
