//! Markdown table rendering for the terminal.
//!
//! Long cells are clipped for display only; the spreadsheet and JSON dump
//! always carry the full text.

use crate::models::{COLUMNS, ResultSet};
use crate::utils::{single_line, truncate_for_log};
use std::fmt::Write;

/// Display width for the long text columns.
const MAX_CELL_BYTES: usize = 80;

fn display_cell(value: &str) -> String {
    truncate_for_log(&single_line(value), MAX_CELL_BYTES).replace('|', "\\|")
}

pub fn render(results: &ResultSet) -> String {
    let mut md = String::new();
    writeln!(md, "| {} |", COLUMNS.join(" | ")).unwrap();
    writeln!(md, "|{}", "---|".repeat(COLUMNS.len())).unwrap();
    for record in results {
        let cells: Vec<String> = record.cells().iter().map(|c| display_cell(c)).collect();
        writeln!(md, "| {} |", cells.join(" | ")).unwrap();
    }
    md
}
