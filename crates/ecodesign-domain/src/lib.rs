//! Scenario calculator for eco-design comparisons
//!
//! Compares Classic, Mixed and Eco-design material and logistics choices on
//! total cost and total carbon, with carbon-adjusted cost and payback.

pub mod catalog;
pub mod model;
pub mod service;

pub use model::{CalculationResult, ProjectParameters, ILLUSTRATIVE_PARAMETERS};
pub use service::calculate;
