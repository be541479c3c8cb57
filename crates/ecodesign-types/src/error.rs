//! Error types for ecodesign-comparator

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Rejections of blend-percentage suggestions coming from an optimizer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SuggestionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category given more than once: {0}")]
    DuplicateCategory(String),

    #[error("Category has no blend percentage: {0}")]
    NotBlendable(String),

    #[error("Percentage for {category} is out of range: {value}")]
    OutOfRange { category: String, value: f64 },

    #[error("Metric {0} is not a finite number")]
    NonFiniteMetric(String),

    #[error("Optimizer response has no explanation")]
    MissingExplanation,

    #[error("Optimizer response contains no percentages")]
    Empty,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid suggestion: {0}")]
    Suggestion(#[from] SuggestionError),

    #[error("Unsupported schema version {found} (supported up to {supported})")]
    SchemaVersion { found: u32, supported: u32 },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
