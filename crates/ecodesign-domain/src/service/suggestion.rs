//! Blend-percentage suggestions from an external optimizer
//!
//! Suggestions are validated as a whole before anything is merged, so a
//! rejected suggestion never leaves parameters partially updated.

use std::collections::{BTreeMap, BTreeSet};

use ecodesign_types::SuggestionError;
use serde::{Deserialize, Serialize};

use super::calculator::calculate;
use super::categories::{descriptor, BlendRule};
use crate::model::{Category, ProjectParameters};

/// Category key -> eco percentage (0-100)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PercentageSuggestion(pub BTreeMap<String, f64>);

impl PercentageSuggestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, category: Category, pct: f64) -> Self {
        self.0.insert(category.key().to_string(), pct);
        self
    }

    /// Resolve every key and check every value, or fail without side effects
    pub fn validate(&self) -> Result<Vec<(Category, f64)>, SuggestionError> {
        if self.0.is_empty() {
            return Err(SuggestionError::Empty);
        }
        let mut seen = BTreeSet::new();
        self.0
            .iter()
            .map(|(key, &value)| {
                let category = Category::from_key(key)
                    .ok_or_else(|| SuggestionError::UnknownCategory(key.clone()))?;
                if !seen.insert(category) {
                    return Err(SuggestionError::DuplicateCategory(category.key().to_string()));
                }
                if !descriptor(category).blend.is_blendable() {
                    return Err(SuggestionError::NotBlendable(key.clone()));
                }
                if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                    return Err(SuggestionError::OutOfRange {
                        category: key.clone(),
                        value,
                    });
                }
                Ok((category, value))
            })
            .collect()
    }
}

impl ProjectParameters {
    /// New parameter set with the suggested percentages merged in
    pub fn with_suggestion(&self, suggestion: &PercentageSuggestion) -> Result<ProjectParameters, SuggestionError> {
        let updates = suggestion.validate()?;
        let mut merged = self.clone();
        for (category, pct) in updates {
            if let BlendRule::Percentage(slot) = descriptor(category).blend {
                *(slot.get_mut)(&mut merged.blend) = pct;
            }
        }
        Ok(merged)
    }
}

/// Metrics an optimizer claims for its suggestion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimedMetrics {
    #[serde(alias = "coutTotal")]
    pub total_cost: f64,
    #[serde(alias = "carboneTotal")]
    pub total_carbon: f64,
    #[serde(alias = "surcout")]
    pub surcharge: f64,
    #[serde(alias = "economieCarbone")]
    pub carbon_savings: f64,
}

/// Full response schema of the external optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerResponse {
    pub optimized_percentages: PercentageSuggestion,
    pub optimized_metrics: ClaimedMetrics,
    pub explanation: String,
}

impl OptimizerResponse {
    pub fn validate(&self) -> Result<Vec<(Category, f64)>, SuggestionError> {
        if self.explanation.trim().is_empty() {
            return Err(SuggestionError::MissingExplanation);
        }
        let m = &self.optimized_metrics;
        for (name, value) in [
            ("totalCost", m.total_cost),
            ("totalCarbon", m.total_carbon),
            ("surcharge", m.surcharge),
            ("carbonSavings", m.carbon_savings),
        ] {
            if !value.is_finite() {
                return Err(SuggestionError::NonFiniteMetric(name.to_string()));
            }
        }
        self.optimized_percentages.validate()
    }

    /// Re-run the calculator on the merged parameters
    pub fn evaluate(&self, params: &ProjectParameters) -> Result<SuggestionEvaluation, SuggestionError> {
        self.validate()?;
        let merged = params.with_suggestion(&self.optimized_percentages)?;
        let result = calculate(&merged);
        Ok(SuggestionEvaluation {
            claimed: self.optimized_metrics.clone(),
            recomputed: ClaimedMetrics {
                total_cost: result.cost.totals.mixed,
                total_carbon: result.carbon.totals.mixed,
                surcharge: result.cost.surcharge_mixed,
                carbon_savings: result.carbon.savings_tco2_mixed,
            },
            parameters: merged,
        })
    }
}

/// Claimed metrics next to what the calculator actually gives
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionEvaluation {
    pub claimed: ClaimedMetrics,
    pub recomputed: ClaimedMetrics,
    pub parameters: ProjectParameters,
}

impl SuggestionEvaluation {
    /// Largest relative gap between claimed and recomputed metrics
    pub fn max_relative_gap(&self) -> f64 {
        let pairs = [
            (self.claimed.total_cost, self.recomputed.total_cost),
            (self.claimed.total_carbon, self.recomputed.total_carbon),
            (self.claimed.surcharge, self.recomputed.surcharge),
            (self.claimed.carbon_savings, self.recomputed.carbon_savings),
        ];
        pairs
            .iter()
            .map(|(claimed, actual)| {
                let scale = actual.abs().max(1.0);
                (claimed - actual).abs() / scale
            })
            .fold(0.0, f64::max)
    }
}
