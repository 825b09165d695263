//! Bid/ask spread calculation around a mid price

use common::decimal::{ensure_positive, round2, Money, Price};
use common::error::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Bid/ask quote derived from a mid price
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadQuote {
    /// Price the platform buys at
    pub bid: Price,
    /// Price the platform sells at
    pub ask: Price,
    /// Mid market price the quote was derived from
    pub mid: Price,
    /// Ask minus bid, rounded to paise
    pub spread_absolute: Money,
    /// Spread rate expressed in percent
    pub spread_percent: Decimal,
}

/// Computes buy/sell prices around a mid market price
#[derive(Debug, Clone)]
pub struct SpreadCalculator {
    rate: Decimal,
}

impl SpreadCalculator {
    /// Create a calculator with a custom spread rate.
    /// The rate must lie strictly between 0 and 1.
    pub fn new(rate: Decimal) -> Result<Self> {
        if rate <= Decimal::ZERO || rate >= Decimal::ONE {
            return Err(Error::InvalidRate(format!(
                "spread rate must be in (0, 1): {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    /// The configured spread rate
    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Bid/ask quote around `mid_price`
    pub fn quote(&self, mid_price: Price) -> Result<SpreadQuote> {
        ensure_positive(mid_price, "mid price")?;
        let bid = round2(mid_price * (Decimal::ONE - self.rate))?;
        let ask = round2(mid_price * (Decimal::ONE + self.rate))?;
        let spread_absolute = round2(ask - bid)?;
        Ok(SpreadQuote {
            bid,
            ask,
            mid: mid_price,
            spread_absolute,
            spread_percent: self.rate * dec!(100),
        })
    }
}

impl Default for SpreadCalculator {
    /// Default spread rate: 1%
    fn default() -> Self {
        Self { rate: dec!(0.01) }
    }
}
