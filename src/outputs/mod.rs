//! Result set exports.
//!
//! # Submodules
//!
//! - [`xlsx`]: single-sheet spreadsheet with one row per record
//! - [`json`]: the same records as a dated JSON file
//! - [`table`]: Markdown table printed at the end of a run
//!
//! # Output Structure
//!
//! ```text
//! news_data_with_sentiment.xlsx   # --xlsx-output
//! json_output_dir/                # --json-output-dir (optional)
//! └── 2024-03-31.json
//! ```

pub mod json;
pub mod table;
pub mod xlsx;

use crate::errors::Result;
use crate::models::ResultSet;
use chrono::NaiveDate;
use std::path::Path;
use tracing::error;

/// Write the spreadsheet and, when a directory is given, the JSON dump.
///
/// # Arguments
/// * `results` - Records of the run.
/// * `xlsx_path` - Spreadsheet destination.
/// * `json_output_dir` - Optional directory for `{date}.json`.
/// * `date` - Date naming the JSON file.
///
/// # Returns
/// `Ok(())` when every requested file was written. A failed spreadsheet does
/// not stop the JSON dump; the first failure is returned after both ran.
pub async fn export(
    results: &ResultSet,
    xlsx_path: &Path,
    json_output_dir: Option<&Path>,
    date: NaiveDate,
) -> Result<()> {
    let workbook = xlsx::write_workbook(results, xlsx_path).await;
    if let Err(e) = &workbook {
        error!(path = %xlsx_path.display(), error = %e, "Failed to write spreadsheet");
    }

    let dump = match json_output_dir {
        Some(dir) => json::write_results(results, dir, date).await.map(|_| ()),
        None => Ok(()),
    };
    if let (Err(e), Some(dir)) = (&dump, json_output_dir) {
        error!(path = %dir.display(), error = %e, "Failed to write JSON results");
    }

    workbook.and(dump)
}
