use super::*;
use chrono::TimeZone;
use std::io::{Cursor, Read};

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn sample_products() -> Vec<ProductRecord> {
    vec![
        ProductRecord::new(100, "796")
            .with_full_name("Аспирин")
            .with_trade_mark("Bayer")
            .with_classification_code("21.20.11.110")
            .with_country_name("Германия"),
        ProductRecord::new(2, "778").with_full_name("R&D <sample>"),
    ]
}

#[test]
fn test_package_contains_sheet_parts() {
    let bytes = WorkbookExporter::new().export(&sample_products()).unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
    let names: Vec<&str> = archive.file_names().collect();

    for part in [
        "[Content_Types].xml",
        "docProps/core.xml",
        "xl/workbook.xml",
        "xl/styles.xml",
        "xl/sharedStrings.xml",
        "xl/worksheets/sheet1.xml",
    ] {
        assert!(names.contains(&part), "missing part {part}");
    }
}

#[test]
fn test_worksheet_rows() {
    let bytes = WorkbookExporter::new().export(&sample_products()).unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    let strings = read_part(&bytes, "xl/sharedStrings.xml");

    assert_eq!(sheet.matches("<row ").count(), 3);
    assert!(sheet.contains(r#"<c r="A2"><v>100</v></c>"#));
    assert!(sheet.contains(r#"<c r="A3"><v>2</v></c>"#));
    assert!(strings.contains("<t>№ п/п</t>"));
    assert!(strings.contains("<t>796</t>"));
    assert!(strings.contains("<t>Аспирин</t>"));
    assert!(strings.contains("<t>Bayer</t>"));
}

#[test]
fn test_empty_fields_leave_cells_blank() {
    let bytes = WorkbookExporter::new().export(&sample_products()).unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");

    // Second product only carries index, unit and name
    assert!(sheet.contains(r#"<c r="B3""#));
    assert!(sheet.contains(r#"<c r="H3""#));
    assert!(!sheet.contains(r#"<c r="I3""#));
    assert!(!sheet.contains(r#"<c r="C3""#));
}

#[test]
fn test_text_is_escaped() {
    let bytes = WorkbookExporter::new().export(&sample_products()).unwrap();
    let strings = read_part(&bytes, "xl/sharedStrings.xml");
    assert!(strings.contains("R&amp;D &lt;sample&gt;"));
}

#[test]
fn test_control_characters_survive_rendering() {
    let products = vec![ProductRecord::new(1, "796").with_full_name("a\u{1}b")];
    let bytes = WorkbookExporter::new().export(&products).unwrap();
    let strings = read_part(&bytes, "xl/sharedStrings.xml");
    assert!(!strings.contains('\u{1}'));
    assert!(strings.contains("<t>a"));
}

#[test]
fn test_empty_product_list_writes_header_only() {
    let bytes = WorkbookExporter::new().export(&[]).unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(sheet.matches("<row ").count(), 1);
    assert_eq!(sheet.matches("<c ").count(), SheetColumn::ALL.len());
}

#[test]
fn test_header_is_bold_by_default() {
    let bytes = WorkbookExporter::new().export(&[]).unwrap();
    let styles = read_part(&bytes, "xl/styles.xml");
    assert!(styles.contains("<b/>"));
}

#[test]
fn test_header_can_be_plain() {
    let config = WorkbookConfig {
        bold_header: false,
        auto_size_columns: false,
        ..Default::default()
    };
    let bytes = WorkbookExporter::with_config(config).export(&[]).unwrap();
    let styles = read_part(&bytes, "xl/styles.xml");
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(!styles.contains("<b/>"));
    assert!(!sheet.contains("<cols>"));
}

#[test]
fn test_columns_are_auto_sized() {
    let bytes = WorkbookExporter::new().export(&sample_products()).unwrap();
    let sheet = read_part(&bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<cols>"));
    assert!(sheet.contains("customWidth=\"1\""));
}

#[test]
fn test_sheet_name_and_timestamp() {
    let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    let config = WorkbookConfig::default()
        .with_sheet_name("Catalog")
        .with_created(created);
    let bytes = WorkbookExporter::with_config(config).export(&[]).unwrap();

    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Catalog""#));

    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("2024-03-01T12:30:00Z"));
    assert!(core.contains("catalog2xlsx"));
}

#[test]
fn test_default_sheet_name() {
    let bytes = WorkbookExporter::new().export(&[]).unwrap();
    let workbook = read_part(&bytes, "xl/workbook.xml");
    assert!(workbook.contains(DEFAULT_SHEET_NAME));
}

#[test]
fn test_invalid_sheet_names() {
    let too_long = "x".repeat(32);
    for name in ["", "   ", "a/b", "[x]", "what?", "'quoted'", too_long.as_str()] {
        let config = WorkbookConfig::default().with_sheet_name(name);
        let err = WorkbookExporter::with_config(config).export(&[]).unwrap_err();
        assert!(matches!(err, SheetError::InvalidSheetName { .. }), "{name:?} accepted");
    }
    assert!(validate_sheet_name(&"я".repeat(31)).is_ok());
}

#[test]
fn test_column_values() {
    let product = ProductRecord::new(5, "796").with_full_name("Name");
    assert_eq!(SheetColumn::SequenceIndex.value(&product), CellValue::Number(5));
    assert_eq!(SheetColumn::FullName.value(&product), CellValue::Text("Name"));
    assert_eq!(SheetColumn::ALL[0], SheetColumn::SequenceIndex);
}
