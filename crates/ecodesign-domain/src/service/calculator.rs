//! Scenario calculator
//!
//! Pure function from [`ProjectParameters`] to [`CalculationResult`]. Classic
//! and eco values are computed per category first; the Mixed value is then
//! blended from those totals, never from quantities and prices separately.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::categories::CATEGORY_TABLE;
use super::metrics::DerivedMetrics;
use crate::model::{
    Breakdown, CalculationResult, CarbonSummary, CarbonValueEntry, CostSummary, Payback,
    ProjectParameters, ScenarioTotals,
};

/// Compute cost and carbon for the Classic, Mixed and Eco scenarios
pub fn calculate(params: &ProjectParameters) -> CalculationResult {
    let mut cost_breakdown = BTreeMap::new();
    let mut carbon_breakdown = BTreeMap::new();
    let mut cost_totals = ScenarioTotals::default();
    let mut carbon_totals = ScenarioTotals::default();

    for descriptor in CATEGORY_TABLE.iter() {
        let pct = descriptor.blend.percentage(&params.blend);
        if let Some(p) = pct {
            if !(0.0..=100.0).contains(&p) {
                warn!(category = descriptor.category.key(), pct = p, "blend percentage outside 0-100, extrapolating");
            }
        }

        let cost = Breakdown::from_pair((descriptor.cost)(params), pct);
        let carbon = Breakdown::from_pair((descriptor.carbon)(params), pct);

        accumulate(&mut cost_totals, &cost);
        accumulate(&mut carbon_totals, &carbon);
        cost_breakdown.insert(descriptor.category, cost);
        carbon_breakdown.insert(descriptor.category, carbon);
    }

    let metrics = DerivedMetrics::compute(
        &cost_totals,
        &carbon_totals,
        params.carbon_price_per_tonne,
        params.lifetime_years,
    );

    debug!(
        cost_classic = cost_totals.classic,
        cost_eco = cost_totals.eco,
        carbon_classic = carbon_totals.classic,
        carbon_eco = carbon_totals.eco,
        "scenario calculation complete"
    );

    CalculationResult {
        cost: CostSummary {
            totals: cost_totals,
            surcharge: metrics.surcharge,
            surcharge_mixed: metrics.surcharge_mixed,
            adjusted_global_cost_eco: metrics.adjusted_global_cost_eco,
            adjusted_global_cost_mixed: metrics.adjusted_global_cost_mixed,
            breakdown: cost_breakdown,
            carbon_value: CarbonValueEntry {
                eco: -metrics.savings_currency,
                mixed: -metrics.savings_currency_mixed,
            },
        },
        carbon: CarbonSummary {
            totals: carbon_totals,
            savings_tco2: metrics.savings_tco2,
            savings_tco2_mixed: metrics.savings_tco2_mixed,
            savings_currency: metrics.savings_currency,
            savings_currency_mixed: metrics.savings_currency_mixed,
            breakdown: carbon_breakdown,
        },
        payback: Payback {
            eco: metrics.payback,
            mixed: metrics.payback_mixed,
        },
    }
}

fn accumulate(totals: &mut ScenarioTotals, line: &Breakdown) {
    totals.classic += line.classic;
    totals.eco += line.eco;
    totals.mixed += line.mixed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, ILLUSTRATIVE_PARAMETERS, NO_PAYBACK};

    fn concrete_only() -> ProjectParameters {
        let mut params = ProjectParameters::default();
        params.concrete.classic_volume_m3 = 100.0;
        params.concrete.eco_volume_m3 = 100.0;
        params.concrete.classic_unit_price = 150.0;
        params.concrete.eco_unit_price = 180.0;
        params.concrete.cement_mass_kg_per_m3 = 350.0;
        params.concrete.classic_binder_footprint = 0.752;
        params.concrete.eco_binder_footprint = 0.407;
        params.blend.concrete = 50.0;
        params
    }

    #[test]
    fn test_concrete_only_scenario() {
        let result = calculate(&concrete_only());
        let cost = result.cost_breakdown(Category::Concrete);
        let carbon = result.carbon_breakdown(Category::Concrete);

        assert!((cost.classic - 15000.0).abs() < 1e-9);
        assert!((cost.eco - 18000.0).abs() < 1e-9);
        assert!((cost.mixed - 16500.0).abs() < 1e-9);
        assert!((cost.diff - 3000.0).abs() < 1e-9);
        // 100 m³ x 0.35 x 0.752 = 26.32 tCO₂
        assert!((carbon.classic - 26.32).abs() < 1e-9);

        assert!((result.cost.totals.classic - 15000.0).abs() < 1e-9);
        assert!((result.carbon.totals.classic - 26.32).abs() < 1e-9);
    }

    #[test]
    fn test_eco_quantity_is_independent() {
        let mut params = concrete_only();
        params.concrete.eco_volume_m3 = 80.0;
        let cost = calculate(&params).cost_breakdown(Category::Concrete);
        assert!((cost.classic - 15000.0).abs() < 1e-9);
        assert!((cost.eco - 14400.0).abs() < 1e-9);
        assert!((cost.mixed - 14700.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_blended_categories_follow_classic() {
        let result = calculate(&ILLUSTRATIVE_PARAMETERS);
        for category in [Category::Freight, Category::Energy, Category::Equipment] {
            let cost = result.cost_breakdown(category);
            let carbon = result.carbon_breakdown(category);
            assert_eq!(cost.mixed, cost.classic, "{:?}", category);
            assert_eq!(carbon.mixed, carbon.classic, "{:?}", category);
        }
    }

    #[test]
    fn test_equipment_carbon_counted_but_not_cost() {
        let result = calculate(&ILLUSTRATIVE_PARAMETERS);
        let cost = result.cost_breakdown(Category::Equipment);
        assert_eq!(cost, Breakdown::default());
        assert_eq!(result.carbon_breakdown(Category::Equipment).classic, 10.0);
        assert_eq!(result.carbon_breakdown(Category::Equipment).eco, 5.0);
    }

    #[test]
    fn test_carbon_value_entry_is_negative_savings() {
        let result = calculate(&ILLUSTRATIVE_PARAMETERS);
        assert_eq!(result.cost.carbon_value.eco, -result.carbon.savings_currency);
        assert_eq!(result.cost.carbon_value.mixed, -result.carbon.savings_currency_mixed);
    }

    #[test]
    fn test_adjusted_cost_identity() {
        let params = ILLUSTRATIVE_PARAMETERS;
        let result = calculate(&params);
        let expected = result.cost.totals.eco - result.carbon.savings_tco2 * params.carbon_price_per_tonne;
        assert!((result.cost.adjusted_global_cost_eco - expected).abs() < 1e-6);
    }

    #[test]
    fn test_eco_cheaper_means_no_payback() {
        let mut params = concrete_only();
        params.concrete.eco_unit_price = 120.0;
        params.carbon_price_per_tonne = 100.0;
        params.lifetime_years = 50.0;
        let result = calculate(&params);
        assert!(result.cost.surcharge < 0.0);
        assert!(result.carbon.savings_currency > 0.0);
        assert_eq!(result.payback.eco, NO_PAYBACK);
    }

    #[test]
    fn test_neutral_parameters_give_zero_everywhere() {
        let result = calculate(&ProjectParameters::default());
        assert_eq!(result.cost.totals, ScenarioTotals::default());
        assert_eq!(result.carbon.totals, ScenarioTotals::default());
        assert_eq!(result.payback.eco, NO_PAYBACK);
        assert_eq!(result.payback.mixed, NO_PAYBACK);
        assert_eq!(result.cost.breakdown.len(), Category::ALL.len());
        assert_eq!(result.carbon.breakdown.len(), Category::ALL.len());
    }

    #[test]
    fn test_out_of_range_percentage_does_not_panic() {
        let mut params = concrete_only();
        params.blend.concrete = 150.0;
        let cost = calculate(&params).cost_breakdown(Category::Concrete);
        // 15000 x -0.5 + 18000 x 1.5 = 19500
        assert!((cost.mixed - 19500.0).abs() < 1e-9);
    }
}
