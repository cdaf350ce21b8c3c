//! Error types for costmodel-core

use std::fmt;
use thiserror::Error;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Call-cost table lacks a required entry
    MissingCallCost,
    /// Unroll factor outside the unroll table
    InvalidUnroll,
    /// Negative or non-finite trip count
    InvalidTripCount,
    /// Input document errors (version, schema)
    Input,
    /// Serialization/deserialization errors
    Serialization,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingCallCost => "missing_call_cost",
            ErrorKind::InvalidUnroll => "invalid_unroll",
            ErrorKind::InvalidTripCount => "invalid_trip_count",
            ErrorKind::Input => "input",
            ErrorKind::Serialization => "serialization",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cost model error type
#[derive(Debug, Error)]
pub enum CostModelError {
    /// Required external call has no cost entry
    #[error("Missing call cost for '{key}'. The call-cost table must provide every call the model looks up.")]
    MissingCallCost { key: String },

    /// Unroll factor is not a key of the unroll table
    #[error("Invalid unroll factor {value}: must be an integer in {min}..={max}")]
    InvalidUnroll { value: u32, min: u32, max: u32 },

    /// Trip count is negative, NaN or infinite
    #[error("Invalid trip count for '{field}': {value}. Trip counts must be finite and non-negative")]
    InvalidTripCount { field: &'static str, value: f64 },

    /// Missing version field in input document
    #[error("Missing 'version' field in model input. Add 'version: 1' to the top of the document.")]
    MissingVersion,

    /// Unsupported input document version
    #[error("Unsupported model input version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u32, supported: Vec<u32> },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CostModelError {
    pub fn missing_call_cost(key: impl Into<String>) -> Self {
        Self::MissingCallCost { key: key.into() }
    }

    pub fn invalid_trip_count(field: &'static str, value: f64) -> Self {
        Self::InvalidTripCount { field, value }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCallCost { .. } => ErrorKind::MissingCallCost,
            Self::InvalidUnroll { .. } => ErrorKind::InvalidUnroll,
            Self::InvalidTripCount { .. } => ErrorKind::InvalidTripCount,
            Self::MissingVersion | Self::UnsupportedVersion { .. } => ErrorKind::Input,
            Self::Yaml(_) | Self::Json(_) => ErrorKind::Serialization,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CostModelError>;
