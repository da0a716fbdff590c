//! Domain error types

use thiserror::Error;

use crate::domain::form::FieldId;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>h, <number>m, <number>s or a combination (e.g., 30s, 5m, 24h, 1h30m)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown roadmap horizon is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid roadmap duration: \"{input}\". Valid durations are: 6 months, 1 year, 2 years, 3 years, 5 years, 10 years")]
pub struct InvalidRoadmapError {
    pub input: String,
}

/// Error when a dispatch is attempted with required fields absent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please complete all required fields (missing: {})", format_fields(.missing))]
pub struct IncompleteForm {
    pub missing: Vec<FieldId>,
}

impl IncompleteForm {
    pub fn new(missing: Vec<FieldId>) -> Self {
        Self { missing }
    }
}

fn format_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
