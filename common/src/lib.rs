//! Common types and utilities for the settlement engine
//!
//! This library contains the shared domain models, decimal/money helpers,
//! and the unified error type used by the fee and portfolio calculation
//! crates. Everything here is a value object: created per calculation,
//! owned by the caller, never mutated in place.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;

// Re-export utoipa for use in model ToSchema derives
#[cfg(feature = "utoipa")]
pub use utoipa;
