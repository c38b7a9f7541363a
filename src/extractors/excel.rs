//! XLSX extraction using calamine.
//!
//! Output layout, per sheet in workbook order:
//!
//! ```text
//! Sheet: <name>
//! <cell>\t<cell>...
//!
//! ```
//!
//! Rows whose joined text is entirely whitespace are skipped; a blank line
//! closes each sheet.

use std::path::Path;

use calamine::{open_workbook_auto, Reader};

use crate::error::Result;

/// Extract all sheets of a workbook as tab-separated text.
pub fn extract_xlsx(path: &Path) -> Result<String> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();
    tracing::debug!(sheet_count = sheet_names.len(), "loaded XLSX workbook");

    let mut text = String::new();
    for name in sheet_names {
        let range = workbook.worksheet_range(&name)?;
        text.push_str("Sheet: ");
        text.push_str(&name);
        text.push('\n');

        // The range is anchored at the first used cell, not A1; pad each row
        // so cells keep their true column positions.
        let leading_columns = range.start().map_or(0, |(_, col)| col as usize);
        for row in range.rows() {
            let mut cells = vec![String::new(); leading_columns];
            cells.extend(row.iter().map(|cell| cell.to_string()));
            let row_text = cells.join("\t");
            if !row_text.trim().is_empty() {
                text.push_str(&row_text);
                text.push('\n');
            }
        }

        text.push('\n');
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{SimpleFileOptions, ZipWriter};

    /// Build a minimal single-sheet XLSX with inline strings.
    fn write_xlsx(path: &Path, sheet_name: &str, rows: &[&[&str]]) {
        let mut sheet_data = String::new();
        for (row_idx, row) in rows.iter().enumerate() {
            sheet_data.push_str(&format!(r#"<row r="{}">"#, row_idx + 1));
            for (col_idx, value) in row.iter().enumerate() {
                let column = (b'A' + col_idx as u8) as char;
                sheet_data.push_str(&format!(
                    r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    column,
                    row_idx + 1,
                    value
                ));
            }
            sheet_data.push_str("</row>");
        }
        write_xlsx_raw(path, sheet_name, &sheet_data);
    }

    /// Like `write_xlsx`, but with the `sheetData` XML supplied directly so
    /// tests can place cells at arbitrary references.
    fn write_xlsx_raw(path: &Path, sheet_name: &str, sheet_data: &str) {
        let file = std::fs::File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#,
        )
        .unwrap();

        zip.start_file("_rels/.rels", options).unwrap();
        zip.write_all(br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#).unwrap();

        let workbook_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#,
            sheet_name
        );
        zip.start_file("xl/workbook.xml", options).unwrap();
        zip.write_all(workbook_xml.as_bytes()).unwrap();

        zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
        zip.write_all(br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#).unwrap();

        let sheet_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
            sheet_data
        );
        zip.start_file("xl/worksheets/sheet1.xml", options).unwrap();
        zip.write_all(sheet_xml.as_bytes()).unwrap();

        zip.finish().unwrap();
    }

    #[test]
    fn test_sheet_header_rows_and_blank_row_skipped() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        write_xlsx(file.path(), "Sheet1", &[&["a", "b"], &["", ""]]);

        let text = extract_xlsx(file.path()).unwrap();
        assert_eq!(text, "Sheet: Sheet1\na\tb\n\n");
    }

    #[test]
    fn test_cells_are_tab_joined() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        write_xlsx(file.path(), "Data", &[&["x", "y", "z"]]);

        let text = extract_xlsx(file.path()).unwrap();
        assert!(text.contains("x\ty\tz\n"));
        assert!(text.starts_with("Sheet: Data\n"));
    }

    #[test]
    fn test_leading_empty_columns_keep_their_tabs() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        write_xlsx_raw(
            file.path(),
            "Data",
            r#"<row r="1"><c r="B1" t="inlineStr"><is><t>x</t></is></c></row><row r="2"><c r="B2" t="inlineStr"><is><t>y</t></is></c></row>"#,
        );

        let text = extract_xlsx(file.path()).unwrap();
        assert_eq!(text, "Sheet: Data\n\tx\n\ty\n\n");
    }

    #[test]
    fn test_invalid_workbook_is_error() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        std::fs::write(file.path(), b"definitely not a workbook").unwrap();

        assert!(extract_xlsx(file.path()).is_err());
    }
}
