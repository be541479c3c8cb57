//! Recalculation session
//!
//! Holds the current parameters and the last (parameters, result) pair, so
//! an interactive caller can ask for the result after every edit and only
//! pay for a calculation when the parameters actually changed.

use ecodesign_domain::model::{CalculationResult, ProjectParameters};
use ecodesign_domain::service::{
    calculate, optimize_blend, OptimizationOutcome, OptimizerResponse, PercentageSuggestion,
    SuggestionEvaluation,
};
use ecodesign_types::Result;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ComparisonSession {
    parameters: ProjectParameters,
    cache: Option<(ProjectParameters, CalculationResult)>,
    recalculations: usize,
}

impl ComparisonSession {
    pub fn new(parameters: ProjectParameters) -> Self {
        Self {
            parameters,
            cache: None,
            recalculations: 0,
        }
    }

    pub fn parameters(&self) -> &ProjectParameters {
        &self.parameters
    }

    /// Number of calculations actually run
    pub fn recalculations(&self) -> usize {
        self.recalculations
    }

    /// Result for the current parameters, recomputed only when they changed
    pub fn result(&mut self) -> &CalculationResult {
        let parameters = &self.parameters;
        let fresh = matches!(&self.cache, Some((cached, _)) if cached == parameters);
        if !fresh {
            self.cache = None;
            self.recalculations += 1;
            debug!(count = self.recalculations, "recalculating scenarios");
        }
        let (_, result) = self
            .cache
            .get_or_insert_with(|| (parameters.clone(), calculate(parameters)));
        result
    }

    pub fn update<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut ProjectParameters),
    {
        edit(&mut self.parameters);
    }

    /// Merge blend percentages; on error the session is left untouched
    pub fn apply_suggestion(&mut self, suggestion: &PercentageSuggestion) -> Result<()> {
        let merged = self.parameters.with_suggestion(suggestion)?;
        self.parameters = merged;
        info!(entries = suggestion.0.len(), "applied blend suggestion");
        Ok(())
    }

    /// Validate a full optimizer response, re-evaluate it, then merge it
    pub fn apply_optimizer_response(&mut self, response: &OptimizerResponse) -> Result<SuggestionEvaluation> {
        let evaluation = response.evaluate(&self.parameters)?;
        self.parameters = evaluation.parameters.clone();
        info!(
            gap = evaluation.max_relative_gap(),
            "applied optimizer response"
        );
        Ok(evaluation)
    }

    /// Parse a raw optimizer payload and apply it; malformed JSON changes nothing
    pub fn apply_optimizer_json(&mut self, payload: &str) -> Result<SuggestionEvaluation> {
        let response: OptimizerResponse = serde_json::from_str(payload)?;
        self.apply_optimizer_response(&response)
    }

    /// Run the local optimizer and adopt its percentages
    pub fn optimize(&mut self, max_surcharge_pct: f64) -> OptimizationOutcome {
        let outcome = optimize_blend(&self.parameters, max_surcharge_pct);
        self.parameters.blend = outcome.percentages;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecodesign_domain::model::{Category, ILLUSTRATIVE_PARAMETERS};
    use ecodesign_types::{Error, SuggestionError};

    #[test]
    fn test_result_cached_until_parameters_change() {
        let mut session = ComparisonSession::new(ILLUSTRATIVE_PARAMETERS);
        let first = session.result().clone();
        let _ = session.result();
        assert_eq!(session.recalculations(), 1);

        session.update(|p| p.blend.concrete = 80.0);
        let second = session.result().clone();
        assert_eq!(session.recalculations(), 2);
        assert!(second.cost.totals.mixed > first.cost.totals.mixed);
    }

    #[test]
    fn test_edit_back_to_same_value_hits_cache() {
        let mut session = ComparisonSession::new(ILLUSTRATIVE_PARAMETERS);
        let _ = session.result();
        session.update(|p| p.lifetime_years = 50.0);
        let _ = session.result();
        assert_eq!(session.recalculations(), 1);
    }

    #[test]
    fn test_cached_result_matches_direct_calculation() {
        let mut session = ComparisonSession::new(ILLUSTRATIVE_PARAMETERS);
        assert_eq!(session.result(), &calculate(&ILLUSTRATIVE_PARAMETERS));
    }

    #[test]
    fn test_rejected_suggestion_leaves_session_untouched() {
        let mut session = ComparisonSession::new(ILLUSTRATIVE_PARAMETERS);
        let suggestion = PercentageSuggestion::new()
            .with(Category::Concrete, 90.0)
            .with(Category::Energy, 10.0);
        let err = session.apply_suggestion(&suggestion).unwrap_err();
        assert!(matches!(err, Error::Suggestion(SuggestionError::NotBlendable(_))));
        assert_eq!(session.parameters(), &ILLUSTRATIVE_PARAMETERS);
    }

    #[test]
    fn test_malformed_payload_leaves_session_untouched() {
        let mut session = ComparisonSession::new(ILLUSTRATIVE_PARAMETERS);
        let err = session.apply_optimizer_json("{\"optimizedPercentages\": ").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(session.parameters(), &ILLUSTRATIVE_PARAMETERS);
    }

    #[test]
    fn test_valid_payload_is_merged() {
        let mut session = ComparisonSession::new(ILLUSTRATIVE_PARAMETERS);
        let payload = r#"{
            "optimizedPercentages": {"copper": 100, "steel": 75},
            "optimizedMetrics": {"totalCost": 0, "totalCarbon": 0, "surcharge": 0, "carbonSavings": 0},
            "explanation": "Recycled copper is cheaper and saves the most carbon."
        }"#;
        let evaluation = session.apply_optimizer_json(payload).unwrap();
        assert_eq!(session.parameters().blend.copper, 100.0);
        assert_eq!(session.parameters().blend.steel, 75.0);
        assert_eq!(session.parameters().blend.concrete, 50.0);
        assert!((session.result().cost.totals.mixed - evaluation.recomputed.total_cost).abs() < 1e-6);
    }

    #[test]
    fn test_optimize_adopts_percentages() {
        let mut session = ComparisonSession::new(ILLUSTRATIVE_PARAMETERS);
        let outcome = session.optimize(0.0);
        assert_eq!(session.parameters().blend, outcome.percentages);
        assert_eq!(session.result(), &outcome.result);
    }
}
