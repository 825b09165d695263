//! Error types for the settlement engine
//!
//! This module provides a unified error handling system for the fee and
//! portfolio calculation crates. All `Invalid*` errors are local,
//! synchronous contract violations: the calculators refuse to coerce bad
//! input into a plausible-looking answer, so callers must validate before
//! invoking. Documented fallbacks (unknown delivery method, unknown SIP
//! frequency, unknown KYC level) are explicit branches in the models, not
//! errors.

use std::fmt::Display;
use thiserror::Error;

/// Settlement engine error type
#[derive(Debug, Error)]
pub enum Error {
    /// A quantity, price, or notional was negative or non-positive where
    /// a positive amount is required
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A percentage rate fell outside its permitted range
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    /// Trade inputs failed validation as a whole
    #[error("Invalid trade parameters: {0}")]
    InvalidTradeParameters(String),

    /// An asset is missing from the fixed catalog or an injected table
    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    /// Generic validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An injected fee table or rate schedule is malformed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decimal conversion error
    #[error("Decimal conversion error: {0}")]
    DecimalError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait to add context to error results
pub trait ErrorExt<T> {
    /// Add context information to an error
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display;
}

impl<T> ErrorExt<T> for Result<T> {
    fn with_context<C, F>(self, context_fn: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Display,
    {
        self.map_err(|e| {
            let context = context_fn().to_string();
            match e {
                Error::InvalidAmount(msg) => Error::InvalidAmount(format!("{}: {}", context, msg)),
                Error::InvalidRate(msg) => Error::InvalidRate(format!("{}: {}", context, msg)),
                Error::InvalidTradeParameters(msg) => {
                    Error::InvalidTradeParameters(format!("{}: {}", context, msg))
                }
                Error::UnknownAsset(msg) => Error::UnknownAsset(format!("{}: {}", context, msg)),
                Error::ValidationError(msg) => Error::ValidationError(format!("{}: {}", context, msg)),
                Error::ConfigurationError(msg) => {
                    Error::ConfigurationError(format!("{}: {}", context, msg))
                }
                Error::Internal(msg) => Error::Internal(format!("{}: {}", context, msg)),
                Error::Serialization(e) => Error::Serialization(e),
                Error::DecimalError(msg) => Error::DecimalError(format!("{}: {}", context, msg)),
            }
        })
    }
}

/// Convert string messages into an error
impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::Internal(message)
    }
}

/// Convert static string references into an error
impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::Internal(message.to_string())
    }
}

/// From rust_decimal::Error
impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::DecimalError(err.to_string())
    }
}
