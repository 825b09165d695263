//! Tiered swap fee schedule

use common::decimal::{round2, Money};
use common::error::{Error, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{SwapFeeConfig, SwapFeeTier};

/// Rate and fee selected for a swap notional
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapFeeQuote {
    /// Fee rate of the matched tier
    pub rate: Decimal,
    /// Fee amount, rounded to paise
    pub fee: Money,
}

/// Percentage fee schedule for asset-to-asset swaps, tiered by notional
#[derive(Debug, Clone)]
pub struct SwapFeeSchedule {
    /// Tiers ordered highest threshold first
    tiers: Vec<SwapFeeTier>,
}

impl SwapFeeSchedule {
    /// Build a schedule from a tier table.
    ///
    /// The table must contain a base tier at notional 0, and rates must
    /// strictly decrease as thresholds increase.
    pub fn new(config: SwapFeeConfig) -> Result<Self> {
        let mut tiers = config.tiers;
        if tiers.is_empty() {
            return Err(Error::ConfigurationError(
                "swap fee table must not be empty".to_string(),
            ));
        }
        tiers.sort_by(|a, b| b.min_notional.cmp(&a.min_notional));
        for pair in tiers.windows(2) {
            if pair[0].rate >= pair[1].rate {
                return Err(Error::ConfigurationError(format!(
                    "swap fee rates must decrease as thresholds increase: rate {} at {} vs rate {} at {}",
                    pair[0].rate, pair[0].min_notional, pair[1].rate, pair[1].min_notional
                )));
            }
        }
        match tiers.last() {
            Some(base) if base.min_notional.is_zero() => {}
            _ => {
                return Err(Error::ConfigurationError(
                    "swap fee table must include a base tier at notional 0".to_string(),
                ))
            }
        }
        Ok(Self { tiers })
    }

    /// Fee for swapping `notional` worth of one asset into another.
    ///
    /// Scans tiers highest threshold first; a notional exactly on a
    /// boundary belongs to the higher tier.
    pub fn fee(&self, notional: Money) -> Result<SwapFeeQuote> {
        if notional < Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "swap notional must be non-negative: {}",
                notional
            )));
        }
        let tier = self
            .tiers
            .iter()
            .find(|t| notional >= t.min_notional)
            .ok_or_else(|| {
                Error::ConfigurationError("swap fee table has no matching tier".to_string())
            })?;
        Ok(SwapFeeQuote {
            rate: tier.rate,
            fee: round2(notional * tier.rate)?,
        })
    }
}

impl Default for SwapFeeSchedule {
    fn default() -> Self {
        // The production table is already ordered and validated
        Self {
            tiers: SwapFeeConfig::default().tiers,
        }
    }
}
