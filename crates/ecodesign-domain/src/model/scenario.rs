//! Design scenarios and per-scenario value holders

use serde::{Deserialize, Serialize};

/// The three compared designs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Classic,
    Mixed,
    Eco,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Classic, Scenario::Mixed, Scenario::Eco];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Classic => "Classic",
            Scenario::Mixed => "Mixed",
            Scenario::Eco => "Eco-design",
        }
    }
}

/// Fully computed classic and eco values for one category on one axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioPair {
    pub classic: f64,
    pub eco: f64,
}

impl ScenarioPair {
    pub fn new(classic: f64, eco: f64) -> Self {
        Self { classic, eco }
    }

    /// quantity x rate for each design
    pub fn product(classic_quantity: f64, classic_rate: f64, eco_quantity: f64, eco_rate: f64) -> Self {
        Self {
            classic: classic_quantity * classic_rate,
            eco: eco_quantity * eco_rate,
        }
    }

    /// Adds the same amount to both designs
    pub fn plus_common(self, amount: f64) -> Self {
        Self {
            classic: self.classic + amount,
            eco: self.eco + amount,
        }
    }
}

/// One total per scenario
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioTotals {
    pub classic: f64,
    pub mixed: f64,
    pub eco: f64,
}

impl ScenarioTotals {
    pub fn get(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Classic => self.classic,
            Scenario::Mixed => self.mixed,
            Scenario::Eco => self.eco,
        }
    }
}
