//! Calculation output snapshot

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::breakdown::{Breakdown, CarbonValueEntry};
use super::category::Category;
use super::scenario::ScenarioTotals;

/// Payback value meaning "no payback period applies"
///
/// Zero stays available for an instantaneous payback.
pub const NO_PAYBACK: f64 = -1.0;

/// Monetary axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub totals: ScenarioTotals,
    /// eco total - classic total
    pub surcharge: f64,
    /// mixed total - classic total
    pub surcharge_mixed: f64,
    pub adjusted_global_cost_eco: f64,
    pub adjusted_global_cost_mixed: f64,
    pub breakdown: BTreeMap<Category, Breakdown>,
    pub carbon_value: CarbonValueEntry,
}

/// Carbon axis, in tCO₂
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonSummary {
    pub totals: ScenarioTotals,
    /// classic total - eco total
    pub savings_tco2: f64,
    pub savings_tco2_mixed: f64,
    pub savings_currency: f64,
    pub savings_currency_mixed: f64,
    pub breakdown: BTreeMap<Category, Breakdown>,
}

/// Years for monetised carbon savings to offset the surcharge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payback {
    pub eco: f64,
    pub mixed: f64,
}

impl Payback {
    pub fn eco_years(&self) -> Option<f64> {
        period(self.eco)
    }

    pub fn mixed_years(&self) -> Option<f64> {
        period(self.mixed)
    }
}

fn period(value: f64) -> Option<f64> {
    if value == NO_PAYBACK {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub cost: CostSummary,
    pub carbon: CarbonSummary,
    pub payback: Payback,
}

impl CalculationResult {
    pub fn cost_breakdown(&self, category: Category) -> Breakdown {
        self.cost.breakdown.get(&category).copied().unwrap_or_default()
    }

    pub fn carbon_breakdown(&self, category: Category) -> Breakdown {
        self.carbon.breakdown.get(&category).copied().unwrap_or_default()
    }
}
