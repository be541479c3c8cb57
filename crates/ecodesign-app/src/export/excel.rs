//! Excel export of a scenario comparison

use chrono::Local;
use ecodesign_domain::model::{Breakdown, CalculationResult, Category, ProjectParameters, Scenario};
use ecodesign_domain::service::format_payback;
use ecodesign_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::info;

/// Export a comparison to an xlsx workbook (Summary, Cost, Carbon)
pub fn export_to_excel(
    result: &CalculationResult,
    params: &ProjectParameters,
    currency: &str,
    output_path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, result, params, currency)?;

    let cost_sheet = workbook.add_worksheet();
    write_breakdown_sheet(cost_sheet, "Cost", &format!("Cost ({})", currency), |c| {
        result.cost_breakdown(c)
    })?;
    let row = (Category::ALL.len() + 1) as u32;
    cost_sheet
        .write_string(row, 0, "Carbon value")
        .map_err(|e| Error::Excel(e.to_string()))?;
    cost_sheet
        .write_number(row, 2, result.cost.carbon_value.mixed)
        .map_err(|e| Error::Excel(e.to_string()))?;
    cost_sheet
        .write_number(row, 3, result.cost.carbon_value.eco)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let carbon_sheet = workbook.add_worksheet();
    write_breakdown_sheet(carbon_sheet, "Carbon", "Carbon (tCO2)", |c| {
        result.carbon_breakdown(c)
    })?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    info!(path = %output_path.display(), "exported comparison workbook");
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    result: &CalculationResult,
    params: &ProjectParameters,
    currency: &str,
) -> Result<()> {
    sheet
        .set_name("Summary")
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "Eco-design Comparison", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let info_rows = [
        ("Generated:", Local::now().to_rfc3339()),
        ("Project:", params.project.description.clone()),
        ("Type:", params.project.project_type.label().to_string()),
        ("Location:", params.project.location.clone()),
        ("Currency:", currency.to_string()),
    ];
    for (i, (label, value)) in info_rows.iter().enumerate() {
        let row = 2 + i as u32;
        sheet
            .write_string(row, 0, *label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_string(row, 1, value)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Totals per scenario
    let mut row = 8;
    for (col, header) in ["Scenario", "Total cost", "Total carbon (tCO2)"].iter().enumerate() {
        sheet
            .write_string_with_format(row, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }
    for scenario in Scenario::ALL {
        row += 1;
        sheet
            .write_string(row, 0, scenario.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, result.cost.totals.get(scenario))
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, result.carbon.totals.get(scenario))
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    row += 2;
    sheet
        .write_string_with_format(row, 0, "Indicator", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string_with_format(row, 1, "Eco-design", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string_with_format(row, 2, "Mixed", &header_format)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let indicators = [
        ("Surcharge", result.cost.surcharge, result.cost.surcharge_mixed),
        ("Carbon saved (tCO2)", result.carbon.savings_tco2, result.carbon.savings_tco2_mixed),
        ("Carbon value", result.carbon.savings_currency, result.carbon.savings_currency_mixed),
        (
            "Adjusted global cost",
            result.cost.adjusted_global_cost_eco,
            result.cost.adjusted_global_cost_mixed,
        ),
    ];
    for (label, eco, mixed) in indicators {
        row += 1;
        sheet
            .write_string(row, 0, label)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 1, eco)
            .map_err(|e| Error::Excel(e.to_string()))?;
        sheet
            .write_number(row, 2, mixed)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    // Payback is text so the "no payback" case reads as n/a
    row += 1;
    sheet
        .write_string(row, 0, "Payback")
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(row, 1, format_payback(result.payback.eco_years()))
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .write_string(row, 2, format_payback(result.payback.mixed_years()))
        .map_err(|e| Error::Excel(e.to_string()))?;

    sheet
        .set_column_width(0, 24)
        .map_err(|e| Error::Excel(e.to_string()))?;
    sheet
        .set_column_width(1, 28)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

fn write_breakdown_sheet<F>(sheet: &mut Worksheet, name: &str, title: &str, line: F) -> Result<()>
where
    F: Fn(Category) -> Breakdown,
{
    sheet
        .set_name(name)
        .map_err(|e| Error::Excel(e.to_string()))?;

    let header_format = Format::new().set_bold();
    let headers = [title, "Classic", "Mixed", "Eco-design", "Eco - Classic"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| Error::Excel(e.to_string()))?;
    }

    for (row_idx, category) in Category::ALL.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        let b = line(*category);
        sheet
            .write_string(row, 0, category.label())
            .map_err(|e| Error::Excel(e.to_string()))?;
        for (col, value) in [b.classic, b.mixed, b.eco, b.diff].iter().enumerate() {
            sheet
                .write_number(row, (col + 1) as u16, *value)
                .map_err(|e| Error::Excel(e.to_string()))?;
        }
    }

    sheet
        .set_column_width(0, 22)
        .map_err(|e| Error::Excel(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecodesign_domain::model::ILLUSTRATIVE_PARAMETERS;
    use ecodesign_domain::service::calculate;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comparison.xlsx");
        let result = calculate(&ILLUSTRATIVE_PARAMETERS);
        export_to_excel(&result, &ILLUSTRATIVE_PARAMETERS, "EUR", &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // xlsx is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("comparison.xlsx");
        let result = calculate(&ILLUSTRATIVE_PARAMETERS);
        let err = export_to_excel(&result, &ILLUSTRATIVE_PARAMETERS, "EUR", &path).unwrap_err();
        assert!(matches!(err, Error::Excel(_)));
    }
}
