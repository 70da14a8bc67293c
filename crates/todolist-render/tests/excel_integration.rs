//! Integration tests for Excel rendering
//!
//! These open the generated workbook as a ZIP archive and inspect the
//! worksheet XML directly.

use std::io::{Cursor, Read};

use pretty_assertions::assert_eq;
use todolist_core::{partition, MonthRange, Renderer, SheetDescriptor};
use todolist_render::ExcelRenderer;

fn sheets(year: i32, month: u32) -> Vec<SheetDescriptor> {
    partition(&MonthRange::new(year, month).unwrap())
}

fn read_part(xlsx: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(xlsx)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

fn sheet_xml(xlsx: &[u8], position: usize) -> String {
    read_part(xlsx, &format!("xl/worksheets/sheet{position}.xml"))
}

/// Sheet names in workbook order
fn workbook_sheet_names(xlsx: &[u8]) -> Vec<String> {
    let workbook = read_part(xlsx, "xl/workbook.xml");
    workbook
        .split("<sheet ")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find("name=\"")? + "name=\"".len();
            let end = start + chunk[start..].find('"')?;
            Some(chunk[start..end].to_string())
        })
        .collect()
}

#[test]
fn sheet_order_matches_partition() {
    let descriptors = sheets(2025, 11);
    let xlsx = ExcelRenderer::new().render(&descriptors).unwrap();

    let expected: Vec<String> = descriptors.iter().map(|s| s.name.clone()).collect();
    assert_eq!(workbook_sheet_names(&xlsx), expected);
}

#[test]
fn workday_sheet_formatting() {
    let xlsx = ExcelRenderer::new().render(&sheets(2025, 11)).unwrap();

    // 03-11-2025 is a Monday
    let monday = sheet_xml(&xlsx, 1);
    assert!(monday.contains("tabColor"));
    assert!(monday.contains("FF4682B4"));
    assert!(monday.contains("notContainsBlanks"));
    assert!(monday.contains("A2:G1000"));
    assert!(monday.contains("sqref=\"B2:B1000\""));
    assert!(monday.contains("sqref=\"C2:C1000\""));
    assert!(monday.contains("Failed on test - Ready for dev"));
    assert!(monday.contains("Tech-Story"));

    // 07-11-2025 is a Friday
    let friday = sheet_xml(&xlsx, 5);
    assert!(friday.contains("FFDC143C"));
}

#[test]
fn headers_are_written() {
    let xlsx = ExcelRenderer::new().render(&sheets(2025, 11)).unwrap();
    let strings = read_part(&xlsx, "xl/sharedStrings.xml");

    for header in ["Jira ticket", "status", "type", "project", "comment", "reporter", "assignee"] {
        assert!(strings.contains(header), "missing header {header}");
    }
}

#[test]
fn header_style() {
    let xlsx = ExcelRenderer::new().render(&sheets(2025, 11)).unwrap();
    let styles = read_part(&xlsx, "xl/styles.xml");

    assert!(styles.contains("<b/>"), "bold header font");
    assert!(styles.contains("FF000099"), "header background");
    assert!(styles.contains("FFFFFFFF"), "white header font");
    assert!(styles.contains(r#"horizontal="center" vertical="center""#));
    assert!(styles.contains(r#"style="thin""#));

    let monday = sheet_xml(&xlsx, 1);
    assert!(monday.contains(r#"<c r="A1" s=""#), "header cell carries a style");
    assert!(monday.contains(r#"<c r="G1" s=""#));
}

#[test]
fn column_widths() {
    let xlsx = ExcelRenderer::new().render(&sheets(2025, 11)).unwrap();

    let monday = sheet_xml(&xlsx, 1);
    assert!(monday.contains(r#"<col min="1" max="7" width="20.7109375""#), "{monday}");
    assert!(!monday.contains(r#"<col min="8""#));

    let weekend = sheet_xml(&xlsx, 6);
    let cols = &weekend[weekend.find("<cols>").unwrap()..weekend.find("</cols>").unwrap()];
    assert!(cols.contains(r#"width="20.7109375""#));
    assert!(cols.contains("style="), "weekend columns carry the grey format");
}

#[test]
fn weekend_sheet_formatting() {
    let xlsx = ExcelRenderer::new().render(&sheets(2025, 11)).unwrap();

    // Sixth sheet is WEEKEND 1
    let weekend = sheet_xml(&xlsx, 6);
    assert!(weekend.contains("FFD3D3D3"));
    assert!(weekend.contains("A1:G1000"));
    assert!(weekend.contains("<cols>"));
    assert!(!weekend.contains("dataValidation"));
    assert!(!weekend.contains("<c r=\"A1\""));
}

#[test]
fn last_row_option_moves_ranges() {
    let xlsx = ExcelRenderer::new()
        .last_row(250)
        .render(&sheets(2025, 11))
        .unwrap();

    let monday = sheet_xml(&xlsx, 1);
    assert!(monday.contains("sqref=\"B2:B250\""));
    assert!(!monday.contains("B2:B1000"));
}

#[test]
fn rendering_is_repeatable() {
    let descriptors = sheets(2026, 2);
    let renderer = ExcelRenderer::new();
    let first = renderer.render(&descriptors).unwrap();
    let second = renderer.render(&descriptors).unwrap();

    assert_eq!(read_part(&first, "xl/workbook.xml"), read_part(&second, "xl/workbook.xml"));
    assert_eq!(read_part(&first, "xl/styles.xml"), read_part(&second, "xl/styles.xml"));
    for position in 1..=descriptors.len() {
        assert_eq!(sheet_xml(&first, position), sheet_xml(&second, position));
    }
}

#[test]
fn month_ending_friday_has_no_trailing_weekend_sheet() {
    let xlsx = ExcelRenderer::new().render(&sheets(2025, 10)).unwrap();
    let names = workbook_sheet_names(&xlsx);
    assert_eq!(names.last().map(String::as_str), Some("31-10-2025"));
}

#[test]
fn save_then_reopen_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("TO DO LIST-12-December 2025.xlsx");
    let descriptors = sheets(2025, 12);

    ExcelRenderer::new().save(&descriptors, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(workbook_sheet_names(&bytes).len(), descriptors.len());
}
