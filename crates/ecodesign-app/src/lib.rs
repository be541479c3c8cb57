//! Application layer for ecodesign-comparator
//!
//! Configuration, catalog overrides, project files, the recalculation
//! session and comparison export.

pub mod app;
pub mod catalog;
pub mod config;
pub mod export;
pub mod project_file;

pub use app::ComparisonSession;
pub use config::Config;
pub use export::export_comparison;
pub use project_file::{load_project, save_project};
