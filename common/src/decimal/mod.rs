//! Decimal type utilities for precise monetary calculations
//!
//! All money math runs on `rust_decimal::Decimal`, a scaled-integer type,
//! so intermediate values carry no binary-float drift. Rounding to paise
//! happens only at the output boundary via [`round2`].

use rust_decimal::{Decimal, RoundingStrategy};
pub use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Monetary amount in the settlement currency (INR)
pub type Money = Decimal;

/// Price per unit (INR per gram, or per token for the stablecoin)
pub type Price = Decimal;

/// Quantity in asset units (grams, or stablecoin tokens)
pub type Quantity = Decimal;

/// Canonical currency precision: paise, i.e. 2 decimal places
pub const CURRENCY_PRECISION: u32 = 2;

/// Round a monetary amount to currency precision.
///
/// Uses round-half-away-from-zero. Every monetary output of every
/// calculator passes through this before being returned; negative input
/// is a contract violation. Idempotent: `round2(round2(x)) == round2(x)`.
pub fn round2(amount: Money) -> Result<Money> {
    if amount.is_sign_negative() {
        return Err(Error::InvalidAmount(format!(
            "monetary amount must be non-negative: {}",
            amount
        )));
    }
    Ok(amount.round_dp_with_strategy(CURRENCY_PRECISION, RoundingStrategy::MidpointAwayFromZero))
}

/// Validate that a quantity or price is strictly positive
pub fn ensure_positive(value: Decimal, what: &str) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(Error::InvalidAmount(format!(
            "{} must be positive: {}",
            what, value
        )));
    }
    Ok(())
}
