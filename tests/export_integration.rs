//! Integration tests for spreadsheet exports.
//!
//! These tests run the real adapters end to end:
//! 1. ExportDistributionHandler computes the distribution
//! 2. PlottersChartRenderer draws the chart (headless, no fonts)
//! 3. XlsxSpreadsheetWriter produces the workbook
//! 4. The bytes are read back with calamine and zip

use std::io::{Cursor, Read};
use std::sync::Arc;

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use chrono::NaiveDate;

use gauss_export::adapters::{
    FixedClock, LocalExportStorage, PlottersChartRenderer, XlsxSpreadsheetWriter,
};
use gauss_export::application::{
    ComputeDistributionCommand, ComputeDistributionHandler, DistributionParams,
    ExportDistributionCommand, ExportDistributionHandler,
};
use gauss_export::domain::export::ExportLayout;
use gauss_export::domain::foundation::{ErrorCode, RoundingPolicy};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

fn handler() -> ExportDistributionHandler {
    ExportDistributionHandler::new(
        Arc::new(PlottersChartRenderer::new(300, 120).without_labels()),
        Arc::new(XlsxSpreadsheetWriter::new()),
        Arc::new(FixedClock(export_date())),
    )
}

fn params(count: u32, mean: f64, std_dev: f64, total: f64) -> DistributionParams {
    DistributionParams {
        count,
        mean,
        std_dev,
        total_quantity: total,
    }
}

fn command(
    params: DistributionParams,
    layout: ExportLayout,
    annotation: Option<&str>,
) -> ExportDistributionCommand {
    ExportDistributionCommand {
        params,
        layout,
        rounding: RoundingPolicy::default(),
        annotation: annotation.map(str::to_string),
    }
}

fn open(bytes: &[u8]) -> Xlsx<Cursor<Vec<u8>>> {
    open_workbook_from_rs(Cursor::new(bytes.to_vec())).unwrap()
}

fn zip_part(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let mut file = archive.by_name(name).ok()?;
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    Some(content)
}

fn has_part(bytes: &[u8], name: &str) -> bool {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
    let found = archive.by_name(name).is_ok();
    found
}

fn text(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn number(range: &calamine::Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        _ => None,
    }
}

fn rounded_table(params: DistributionParams) -> Vec<(u32, f64, f64)> {
    ComputeDistributionHandler::new()
        .handle(ComputeDistributionCommand {
            params,
            rounding: RoundingPolicy::default(),
        })
        .unwrap()
        .presented
        .iter()
        .map(|p| (p.index, p.percentage, p.allocated_quantity))
        .collect()
}

// =============================================================================
// Vertical layout
// =============================================================================

#[test]
fn vertical_workbook_round_trips() {
    let p = params(10, 5.0, 2.0, 1000.0);
    let workbook = handler()
        .handle(command(p, ExportLayout::Vertical, None))
        .unwrap();

    let mut xlsx = open(&workbook.content);
    assert_eq!(xlsx.sheet_names(), vec!["Distribución".to_string()]);
    let range = xlsx.worksheet_range("Distribución").unwrap();

    assert_eq!(text(&range, 0, 0).as_deref(), Some("X"));
    assert_eq!(text(&range, 0, 1).as_deref(), Some("Porcentaje (%)"));
    assert_eq!(text(&range, 0, 2).as_deref(), Some("Cajas estimadas"));
    assert_eq!(range.height(), 11);

    for (row, (index, percentage, quantity)) in (1u32..).zip(rounded_table(p)) {
        assert_eq!(number(&range, row, 0), Some(f64::from(index)));
        assert_eq!(number(&range, row, 1), Some(percentage));
        assert_eq!(number(&range, row, 2), Some(quantity));
    }

    assert!(!has_part(&workbook.content, "xl/drawings/drawing1.xml"));
}

#[test]
fn vertical_workbook_with_far_mean_is_monotonic() {
    let p = params(10, 30.0, 2.0, 0.0);
    let workbook = handler()
        .handle(command(p, ExportLayout::Vertical, None))
        .unwrap();

    let range = open(&workbook.content)
        .worksheet_range("Distribución")
        .unwrap();
    let percentages: Vec<f64> = (1..=10).map(|row| number(&range, row, 1).unwrap()).collect();
    assert!(percentages.windows(2).all(|w| w[0] <= w[1]));
    assert!(percentages[9] > 0.0);
}

// =============================================================================
// Horizontal layout
// =============================================================================

#[test]
fn horizontal_workbook_matches_reference_scenario() {
    let p = params(10, 5.0, 2.0, 1000.0);
    let workbook = handler()
        .handle(command(p, ExportLayout::Horizontal, Some("test\nline2")))
        .unwrap();
    assert_eq!(workbook.filename, "distribucion_gauss_2024-05-01.xlsx");

    let mut xlsx = open(&workbook.content);
    let range = xlsx.worksheet_range("Distribución Horizontal").unwrap();

    // Header row and the two data rows.
    assert_eq!(text(&range, 0, 0), None);
    assert_eq!(number(&range, 0, 0), None);
    for col in 1..=10u32 {
        assert_eq!(text(&range, 0, col), Some(format!("X{col}")));
    }
    assert_eq!(text(&range, 1, 0).as_deref(), Some("Porcentaje (%)"));
    assert_eq!(text(&range, 2, 0).as_deref(), Some("Cajas estimadas"));
    for (col, (_, percentage, quantity)) in (1u32..).zip(rounded_table(p)) {
        assert_eq!(number(&range, 1, col), Some(percentage));
        assert_eq!(number(&range, 2, col), Some(quantity));
    }

    // Annotation block in the ninth column.
    assert_eq!(text(&range, 5, 8).as_deref(), Some("Descripción:"));
    assert_eq!(text(&range, 6, 8).as_deref(), Some("test"));
    assert_eq!(text(&range, 7, 8).as_deref(), Some("line2"));

    // Chart anchored at (5, 0).
    let drawing = zip_part(&workbook.content, "xl/drawings/drawing1.xml").unwrap();
    let from = drawing
        .split("<xdr:from>")
        .nth(1)
        .and_then(|rest| rest.split("</xdr:from>").next())
        .unwrap();
    assert!(from.contains("<xdr:col>0</xdr:col>"));
    assert!(from.contains("<xdr:row>5</xdr:row>"));
    assert!(has_part(&workbook.content, "xl/media/image1.png"));
}

#[test]
fn horizontal_workbook_keeps_unicode_annotation() {
    let workbook = handler()
        .handle(command(
            params(5, 3.0, 1.0, 0.0),
            ExportLayout::Horizontal,
            Some("  Campaña de otoño ✓\r\nSegunda línea  "),
        ))
        .unwrap();

    let range = open(&workbook.content)
        .worksheet_range("Distribución Horizontal")
        .unwrap();
    assert_eq!(text(&range, 6, 8).as_deref(), Some("Campaña de otoño ✓"));
    assert_eq!(text(&range, 7, 8).as_deref(), Some("Segunda línea"));
}

#[test]
fn horizontal_workbook_without_annotation_has_no_block() {
    let workbook = handler()
        .handle(command(params(10, 5.0, 2.0, 0.0), ExportLayout::Horizontal, None))
        .unwrap();

    let range = open(&workbook.content)
        .worksheet_range("Distribución Horizontal")
        .unwrap();
    assert_eq!(text(&range, 5, 8), None);
    assert!(has_part(&workbook.content, "xl/drawings/drawing1.xml"));
}

// =============================================================================
// Determinism and persistence
// =============================================================================

#[test]
fn identical_exports_are_byte_identical() {
    let cmd = command(
        params(20, 8.5, 3.0, 250.0),
        ExportLayout::Horizontal,
        Some("nota"),
    );
    let first = handler().handle(cmd.clone()).unwrap();
    let second = handler().handle(cmd).unwrap();
    assert_eq!(first.content, second.content);

    let core = zip_part(&first.content, "docProps/core.xml").unwrap();
    assert!(core.contains("2024-05-01T00:00:00Z"));
}

#[test]
fn save_writes_dated_workbook_to_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let storage = LocalExportStorage::new(dir.path());

    let saved = handler()
        .save(
            command(params(10, 5.0, 2.0, 100.0), ExportLayout::Vertical, None),
            &storage,
        )
        .unwrap();

    assert_eq!(saved.path, dir.path().join("distribucion_gauss_2024-05-01.xlsx"));
    assert_eq!(std::fs::read(&saved.path).unwrap(), saved.workbook.content);
}

#[test]
fn too_wide_horizontal_export_fails_cleanly() {
    let dir = tempfile::TempDir::new().unwrap();
    let storage = LocalExportStorage::new(dir.path());

    let err = handler()
        .save(
            command(params(16_384, 8000.0, 500.0, 0.0), ExportLayout::Horizontal, None),
            &storage,
        )
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::ExportFailed);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
