//! Flat CSV export: one row per axis and category

use ecodesign_domain::model::{CalculationResult, Category};
use ecodesign_types::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownRow {
    pub axis: &'static str,
    pub category: &'static str,
    pub classic: f64,
    pub mixed: f64,
    pub eco: f64,
    pub diff: f64,
}

pub fn breakdown_rows(result: &CalculationResult) -> Vec<BreakdownRow> {
    let mut rows = Vec::with_capacity(Category::ALL.len() * 2);
    for (axis, carbon) in [("cost", false), ("carbon", true)] {
        for category in Category::ALL {
            let b = if carbon {
                result.carbon_breakdown(category)
            } else {
                result.cost_breakdown(category)
            };
            rows.push(BreakdownRow {
                axis,
                category: category.key(),
                classic: b.classic,
                mixed: b.mixed,
                eco: b.eco,
                diff: b.diff,
            });
        }
    }
    rows
}

pub fn write_csv<W: Write>(result: &CalculationResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in breakdown_rows(result) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_to_csv(result: &CalculationResult, output_path: &Path) -> Result<()> {
    let file = std::fs::File::create(output_path)?;
    write_csv(result, file)?;
    info!(path = %output_path.display(), "exported comparison csv");
    Ok(())
}
