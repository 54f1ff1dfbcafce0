// File: crates/vitals-core/src/error.rs
// Summary: Error type shared by sampling, option loading and rendering.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("series '{label}' is not finite at x = {x}")]
    NonFinite { label: String, x: f64 },

    #[error("expression error: {0}")]
    Expression(String),

    #[error("invalid option `{field}`: {message}")]
    InvalidOption { field: String, message: String },

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl ChartError {
    pub(crate) fn option(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption { field: field.into(), message: message.into() }
    }
}
