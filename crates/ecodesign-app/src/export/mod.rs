//! Comparison export (xlsx, csv)

mod csv_export;
mod excel;

pub use csv_export::{breakdown_rows, export_to_csv, write_csv, BreakdownRow};
pub use excel::export_to_excel;

use ecodesign_domain::model::{CalculationResult, ProjectParameters};
use ecodesign_types::{Error, Result};
use std::path::Path;

/// Export by file extension (.xlsx or .csv)
pub fn export_comparison(
    result: &CalculationResult,
    params: &ProjectParameters,
    currency: &str,
    output_path: &Path,
) -> Result<()> {
    match output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("xlsx") => export_to_excel(result, params, currency, output_path),
        Some("csv") => export_to_csv(result, output_path),
        _ => Err(Error::UnsupportedFormat(output_path.display().to_string())),
    }
}
