use std::path::PathBuf;

use thiserror::Error;

use crate::entities::Month;

#[derive(Debug, Error)]
pub enum PnlError {
    // Configuration-related.
    #[error("Cannot read configuration file {}: {cause}.", .path.display())]
    ConfigurationError { path: PathBuf, cause: String },
    #[error("Unknown chart: '{chart_id}'.")]
    UnknownChart { chart_id: String },
    #[error("Neither 'query', 'account' or 'type' found in series definition '{name}'.")]
    MalformedSeriesSpec { name: String },
    #[error(
        "Invalid value '{value}' for type parameter. Allowed values: 'other_income' and 'other_expenses'."
    )]
    InvalidSeriesType { value: String },

    // Month-range-related.
    #[error("Invalid month range: start ({start}) is after end ({end}).")]
    InvalidRange { start: Month, end: Month },

    // Ledger IO-related.
    #[error("Error reading file {}: {cause}.", .path.display())]
    ReadError { path: PathBuf, cause: String },

    // Ledger parsing-related.
    #[error("Invalid CSV format: {details}.")]
    InvalidCsv { details: String },
    #[error("Invalid ISO date: '{date}'.")]
    InvalidIsoDate { date: String },
    #[error("Invalid amount: '{value}'.")]
    InvalidAmount { value: String },
    #[error("Invalid ISO currency code: '{code}'.")]
    InvalidCurrencyCode { code: String },

    // Ledger query-related.
    #[error("Invalid filter expression '{expression}': {details}.")]
    InvalidFilterExpression { expression: String, details: String },
    #[error("No price found to convert {commodity} into {currency}.")]
    MissingPrice { commodity: String, currency: String },

    // Presentation-related.
    #[error("Failed to serialize report: {details}.")]
    SerializationError { details: String },
}

impl PnlError {
    pub(crate) fn configuration<E: std::fmt::Display>(path: impl Into<PathBuf>, cause: E) -> Self {
        PnlError::ConfigurationError {
            path: path.into(),
            cause: cause.to_string(),
        }
    }

    pub(crate) fn invalid_csv<E: std::fmt::Display>(details: E) -> Self {
        PnlError::InvalidCsv {
            details: details.to_string(),
        }
    }

    pub(crate) fn invalid_filter(expression: &str, details: impl Into<String>) -> Self {
        PnlError::InvalidFilterExpression {
            expression: expression.to_string(),
            details: details.into(),
        }
    }
}
