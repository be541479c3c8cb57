//! Derived financial metrics: surcharge, carbon savings, adjusted cost, payback

use crate::model::{ScenarioTotals, NO_PAYBACK};

/// Years for annualised carbon savings to repay a surcharge.
///
/// Returns [`NO_PAYBACK`] unless surcharge, savings and lifetime are all
/// strictly positive. Never produces infinity or NaN.
pub fn payback_years(surcharge: f64, savings_currency: f64, lifetime_years: f64) -> f64 {
    if surcharge > 0.0 && savings_currency > 0.0 && lifetime_years > 0.0 {
        surcharge / (savings_currency / lifetime_years)
    } else {
        NO_PAYBACK
    }
}

/// Scalars derived from the per-scenario totals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    pub surcharge: f64,
    pub surcharge_mixed: f64,
    pub savings_tco2: f64,
    pub savings_tco2_mixed: f64,
    pub savings_currency: f64,
    pub savings_currency_mixed: f64,
    pub adjusted_global_cost_eco: f64,
    pub adjusted_global_cost_mixed: f64,
    pub payback: f64,
    pub payback_mixed: f64,
}

impl DerivedMetrics {
    pub fn compute(
        cost: &ScenarioTotals,
        carbon: &ScenarioTotals,
        carbon_price_per_tonne: f64,
        lifetime_years: f64,
    ) -> Self {
        let surcharge = cost.eco - cost.classic;
        let surcharge_mixed = cost.mixed - cost.classic;

        let savings_tco2 = carbon.classic - carbon.eco;
        let savings_tco2_mixed = carbon.classic - carbon.mixed;
        let savings_currency = savings_tco2 * carbon_price_per_tonne;
        let savings_currency_mixed = savings_tco2_mixed * carbon_price_per_tonne;

        Self {
            surcharge,
            surcharge_mixed,
            savings_tco2,
            savings_tco2_mixed,
            savings_currency,
            savings_currency_mixed,
            adjusted_global_cost_eco: cost.eco - savings_currency,
            adjusted_global_cost_mixed: cost.mixed - savings_currency_mixed,
            payback: payback_years(surcharge, savings_currency, lifetime_years),
            payback_mixed: payback_years(surcharge_mixed, savings_currency_mixed, lifetime_years),
        }
    }
}
