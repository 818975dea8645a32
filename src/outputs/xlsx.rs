//! Spreadsheet export.
//!
//! Writes a minimal Office Open XML workbook: one sheet named `Sheet1`, a
//! header row with the column titles, then one row per record. Cells are
//! inline strings, so no shared-string table or style sheet is needed.

use crate::errors::Result;
use crate::models::{COLUMNS, ResultSet};
use quick_xml::escape::escape;
use std::fmt::Write as _;
use std::io::{Cursor, Write};
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const SHEET_NAME: &str = "Sheet1";

/// Longest text a spreadsheet cell accepts.
const MAX_CELL_CHARS: usize = 32_767;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn workbook_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{SHEET_NAME}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
    )
}

/// Drop characters XML 1.0 cannot carry and clip to the cell limit.
fn cell_text(value: &str) -> String {
    value
        .chars()
        .filter(|&c| matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}'))
        .take(MAX_CELL_CHARS)
        .collect()
}

fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn push_row(xml: &mut String, row: usize, cells: &[String]) {
    write!(xml, r#"<row r="{row}">"#).unwrap();
    for (col, value) in cells.iter().enumerate() {
        write!(
            xml,
            r#"<c r="{}{row}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
            column_letter(col),
            escape(cell_text(value).as_str())
        )
        .unwrap();
    }
    xml.push_str("</row>");
}

fn sheet_xml(results: &ResultSet) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    let header: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();
    push_row(&mut xml, 1, &header);
    for (i, record) in results.iter().enumerate() {
        push_row(&mut xml, i + 2, &record.cells());
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Build the workbook archive in memory.
pub fn workbook_bytes(results: &ResultSet) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES.to_string()),
        ("_rels/.rels", ROOT_RELS.to_string()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(results)),
    ];
    for (name, body) in parts {
        writer.start_file(name, options)?;
        writer.write_all(body.as_bytes())?;
    }

    Ok(writer.finish()?.into_inner())
}

/// Write the workbook for `results` to `path`.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_workbook(results: &ResultSet, path: &Path) -> Result<()> {
    let bytes = workbook_bytes(results)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, &bytes).await?;
    info!(
        rows = results.len(),
        bytes = bytes.len(),
        "Wrote spreadsheet"
    );
    Ok(())
}
