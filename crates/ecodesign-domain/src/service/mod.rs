//! Domain services

pub mod calculator;
pub mod categories;
pub mod metrics;
pub mod optimizer;
pub mod report;
pub mod suggestion;

pub use calculator::calculate;
pub use categories::{blendable_categories, descriptor, BlendRule, CategoryDescriptor, CATEGORY_TABLE};
pub use metrics::{payback_years, DerivedMetrics};
pub use optimizer::{optimize_blend, Lever, OptimizationOutcome};
pub use report::{format_payback, generate_comparison_report};
pub use suggestion::{ClaimedMetrics, OptimizerResponse, PercentageSuggestion, SuggestionEvaluation};
