//! Per-category breakdown values

use serde::{Deserialize, Serialize};

use super::scenario::{Scenario, ScenarioPair};

/// Linear blend between classic and eco values
///
/// `pct` is the share of eco in percent. Values outside 0-100 extrapolate
/// the same line. The result equals `classic` at 0 and `eco` at 100 exactly.
pub fn blend_value(classic: f64, eco: f64, pct: f64) -> f64 {
    let share = pct / 100.0;
    classic * (1.0 - share) + eco * share
}

/// Classic / eco / mixed values of one category on one axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub classic: f64,
    pub eco: f64,
    pub mixed: f64,
    /// eco - classic
    pub diff: f64,
}

impl Breakdown {
    /// Builds a breakdown from totals already computed per design.
    ///
    /// With no percentage the mixed value follows classic.
    pub fn from_pair(values: ScenarioPair, pct: Option<f64>) -> Self {
        let mixed = match pct {
            Some(p) => blend_value(values.classic, values.eco, p),
            None => values.classic,
        };
        Self {
            classic: values.classic,
            eco: values.eco,
            mixed,
            diff: values.eco - values.classic,
        }
    }

    pub fn get(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Classic => self.classic,
            Scenario::Mixed => self.mixed,
            Scenario::Eco => self.eco,
        }
    }
}

/// Monetised carbon savings recorded as a negative cost.
///
/// Classic carries no carbon-value adjustment, so only eco and mixed exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonValueEntry {
    pub eco: f64,
    pub mixed: f64,
}
