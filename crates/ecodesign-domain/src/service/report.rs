//! Plain-text comparison report

use crate::catalog::{Catalog, OptionKind};
use crate::model::{Breakdown, CalculationResult, Category, ProjectParameters, Scenario};

pub fn generate_comparison_report(
    result: &CalculationResult,
    params: &ProjectParameters,
    catalog: &Catalog,
    currency: &str,
) -> String {
    let mut report = String::new();
    report.push_str("==================================================================\n");
    report.push_str("                 Eco-design Comparison Report                     \n");
    report.push_str("==================================================================\n\n");

    report.push_str("[Totals]\n");
    report.push_str(&format!(
        "  {:<12} {:>18} {:>18}\n",
        "Scenario",
        format!("Cost ({})", currency),
        "Carbon (tCO2)"
    ));
    for scenario in Scenario::ALL {
        report.push_str(&format!(
            "  {:<12} {:>18.2} {:>18.2}\n",
            scenario.label(),
            result.cost.totals.get(scenario),
            result.carbon.totals.get(scenario)
        ));
    }
    report.push('\n');

    push_selected_options(&mut report, params, catalog);
    report.push('\n');

    push_breakdown_table(&mut report, &format!("Cost by category ({})", currency), |c| {
        result.cost_breakdown(c)
    });
    report.push_str(&format!(
        "  {:<20} {:>14} {:>14} {:>14}\n",
        "Carbon value",
        "-",
        format!("{:.2}", result.cost.carbon_value.mixed),
        format!("{:.2}", result.cost.carbon_value.eco)
    ));
    report.push('\n');

    push_breakdown_table(&mut report, "Carbon by category (tCO2)", |c| result.carbon_breakdown(c));
    report.push('\n');

    report.push_str("[Indicators]\n");
    report.push_str(&format!(
        "  Surcharge eco / mixed:              {:>14.2} / {:.2} {}\n",
        result.cost.surcharge, result.cost.surcharge_mixed, currency
    ));
    report.push_str(&format!(
        "  Carbon saved eco / mixed:           {:>14.2} / {:.2} tCO2\n",
        result.carbon.savings_tco2, result.carbon.savings_tco2_mixed
    ));
    report.push_str(&format!(
        "  Carbon value eco / mixed:           {:>14.2} / {:.2} {}\n",
        result.carbon.savings_currency, result.carbon.savings_currency_mixed, currency
    ));
    report.push_str(&format!(
        "  Adjusted global cost eco / mixed:   {:>14.2} / {:.2} {}\n",
        result.cost.adjusted_global_cost_eco, result.cost.adjusted_global_cost_mixed, currency
    ));
    report.push_str(&format!(
        "  Payback eco / mixed:                {:>14} / {}\n",
        format_payback(result.payback.eco_years()),
        format_payback(result.payback.mixed_years())
    ));
    report.push('\n');
    report.push_str("==================================================================\n");
    report
}

fn push_breakdown_table<F>(report: &mut String, title: &str, line: F)
where
    F: Fn(Category) -> Breakdown,
{
    report.push_str(&format!("[{}]\n", title));
    report.push_str(&format!(
        "  {:<20} {:>14} {:>14} {:>14} {:>14}\n",
        "Category", "Classic", "Mixed", "Eco-design", "Eco - Classic"
    ));
    report.push_str("  ");
    report.push_str("-".repeat(78).as_str());
    report.push('\n');
    for category in Category::ALL {
        let b = line(category);
        report.push_str(&format!(
            "  {:<20} {:>14.2} {:>14.2} {:>14.2} {:>+14.2}\n",
            category.label(),
            b.classic,
            b.mixed,
            b.eco,
            b.diff
        ));
    }
}

/// Catalog option names matching the footprints in use
fn push_selected_options(report: &mut String, params: &ProjectParameters, catalog: &Catalog) {
    let name = |kind: OptionKind, footprint: f64| {
        catalog
            .option_by_footprint(kind, footprint)
            .map(|o| o.name.clone())
            .unwrap_or_else(|| format!("custom ({} tCO2/t)", footprint))
    };
    let rows = [
        (
            OptionKind::Binder,
            params.concrete.classic_binder_footprint,
            params.concrete.eco_binder_footprint,
        ),
        (OptionKind::Steel, params.steel.classic_factor, params.steel.eco_factor),
        (OptionKind::Aluminum, params.aluminum.classic_factor, params.aluminum.eco_factor),
    ];

    report.push_str("[Selected options]\n");
    report.push_str(&format!("  {:<20} {:<36} {}\n", "", "Classic", "Eco-design"));
    for (kind, classic, eco) in rows {
        report.push_str(&format!(
            "  {:<20} {:<36} {}\n",
            kind.label(),
            name(kind, classic),
            name(kind, eco)
        ));
    }
}

pub fn format_payback(years: Option<f64>) -> String {
    match years {
        Some(y) => format!("{:.1} years", y),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ILLUSTRATIVE_PARAMETERS;
    use crate::service::calculate;

    #[test]
    fn test_report_lists_every_category() {
        let result = calculate(&ILLUSTRATIVE_PARAMETERS);
        let report = generate_comparison_report(&result, &ILLUSTRATIVE_PARAMETERS, &Catalog::builtin(), "EUR");
        for category in Category::ALL {
            assert!(report.contains(category.label()), "missing {}", category.label());
        }
        assert!(report.contains("Cost (EUR)"));
        assert!(report.contains("Eco-design"));
    }

    #[test]
    fn test_report_names_selected_options() {
        let result = calculate(&ILLUSTRATIVE_PARAMETERS);
        let report = generate_comparison_report(&result, &ILLUSTRATIVE_PARAMETERS, &Catalog::builtin(), "EUR");
        assert!(report.contains("[Selected options]"));
        assert!(report.contains("CEM I "));
        assert!(report.contains("CEM III/A"));
        assert!(report.contains("Blast furnace (BF-BOF)"));
        assert!(report.contains("Electric arc furnace, scrap"));
        assert!(report.contains("Primary, world average"));
        assert!(report.contains("Primary, hydro power"));
    }

    #[test]
    fn test_report_marks_footprint_without_option() {
        let mut params = ILLUSTRATIVE_PARAMETERS;
        params.steel.eco_factor = 0.95;
        let result = calculate(&params);
        let report = generate_comparison_report(&result, &params, &Catalog::builtin(), "EUR");
        assert!(report.contains("custom (0.95 tCO2/t)"));
    }

    #[test]
    fn test_payback_formatting() {
        assert_eq!(format_payback(None), "n/a");
        assert_eq!(format_payback(Some(250.0)), "250.0 years");
    }
}
