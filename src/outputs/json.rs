//! JSON dump of a result set.
//!
//! ```text
//! json_output_dir/
//! └── 2024-03-31.json
//! ```
//!
//! The file holds the records array; keys are the spreadsheet column titles.

use crate::errors::Result;
use crate::models::ResultSet;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Write `results` to `{json_output_dir}/{date}.json`, creating the
/// directory if needed. Returns the written path.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir.display(), %date))]
pub async fn write_results(
    results: &ResultSet,
    json_output_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let json = serde_json::to_string(results)?;

    info!("Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(json_output_dir).await {
        error!(error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = json_output_dir.join(format!("{date}.json"));
    info!(path = %output_json_filename.display(), "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(
        path = %output_json_filename.display(),
        records = results.len(),
        "Wrote JSON results file"
    );

    Ok(output_json_filename)
}
