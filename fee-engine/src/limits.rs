//! Order size limits by asset and account tier

use common::decimal::{Money, Quantity};
use common::error::{Error, Result};
use common::model::asset::{AccountTier, AssetKind};
use serde::Serialize;

use crate::config::OrderLimitConfig;

/// Effective order limits for one asset and account tier
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLimits {
    /// Smallest tradable quantity
    pub min_amount: Quantity,
    /// Unit the minimum is denominated in
    pub min_unit: String,
    /// INR value floor for an order
    pub min_inr_equivalent: Money,
    /// Largest tradable quantity for the tier
    pub max_amount: Quantity,
    /// INR value ceiling for the tier
    pub max_inr_equivalent: Money,
}

/// Resolves per-asset order limits scaled by account tier
#[derive(Debug, Clone, Default)]
pub struct OrderLimitPolicy {
    config: OrderLimitConfig,
}

impl OrderLimitPolicy {
    /// Create a policy with the given base limit catalog
    pub fn new(config: OrderLimitConfig) -> Self {
        Self { config }
    }

    /// Limits for an asset at an account tier.
    ///
    /// Minimums are tier-independent; only the maximums scale with the
    /// tier multiplier. An asset missing from the injected catalog is an
    /// error, never silently priced off another asset's limits.
    pub fn limits_for(&self, asset: AssetKind, tier: AccountTier) -> Result<OrderLimits> {
        let base = self.config.base_limits.get(&asset).ok_or_else(|| {
            Error::UnknownAsset(format!("no order limits configured for asset: {}", asset))
        })?;
        let multiplier = tier.multiplier();
        Ok(OrderLimits {
            min_amount: base.min_amount,
            min_unit: base.min_unit.clone(),
            min_inr_equivalent: base.min_inr_equivalent,
            max_amount: base.max_amount * multiplier,
            max_inr_equivalent: base.max_inr_equivalent * multiplier,
        })
    }
}
