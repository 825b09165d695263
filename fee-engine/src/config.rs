//! Fee tables and engine configuration
//!
//! Every rate table is an immutable value injected at construction, so
//! tests and operators can override a schedule without touching global
//! state. The `Default` impls carry the production tables.

use std::collections::HashMap;

use common::decimal::{Money, Quantity};
use common::model::asset::AssetKind;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rates for trade fee calculation
#[derive(Debug, Clone)]
pub struct TradeFeeConfig {
    /// Bid/ask spread fee rate applied to the principal
    pub spread_rate: Decimal,
    /// Platform fee rate applied to the principal.
    ///
    /// The rate is the same for every trade direction. An asymmetric
    /// buy/sell fee has been floated historically; until product decides,
    /// this stays a single constant.
    pub platform_rate: Decimal,
    /// GST rate charged on top of combined spread + platform fees
    pub gst_rate: Decimal,
}

impl Default for TradeFeeConfig {
    fn default() -> Self {
        Self {
            spread_rate: dec!(0.01),
            platform_rate: dec!(0.001),
            gst_rate: dec!(0.18),
        }
    }
}

/// One swap fee tier: the rate charged at and above a notional threshold
#[derive(Debug, Clone)]
pub struct SwapFeeTier {
    /// Inclusive lower bound on the swap notional
    pub min_notional: Money,
    /// Fee rate for the tier
    pub rate: Decimal,
}

/// Tiered swap fee table
#[derive(Debug, Clone)]
pub struct SwapFeeConfig {
    /// Tiers, any order; the schedule sorts and validates them
    pub tiers: Vec<SwapFeeTier>,
}

impl Default for SwapFeeConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                SwapFeeTier {
                    min_notional: dec!(1_000_000),
                    rate: dec!(0.001),
                },
                SwapFeeTier {
                    min_notional: dec!(500_000),
                    rate: dec!(0.002),
                },
                SwapFeeTier {
                    min_notional: dec!(100_000),
                    rate: dec!(0.003),
                },
                SwapFeeTier {
                    min_notional: dec!(50_000),
                    rate: dec!(0.004),
                },
                SwapFeeTier {
                    min_notional: dec!(0),
                    rate: dec!(0.005),
                },
            ],
        }
    }
}

/// SIP fee configuration
#[derive(Debug, Clone)]
pub struct SipFeeConfig {
    /// Flat fee for a monthly plan; weekly and daily cadences prorate it
    pub monthly_fee: Money,
}

impl Default for SipFeeConfig {
    fn default() -> Self {
        Self {
            monthly_fee: dec!(50),
        }
    }
}

/// Redemption fee configuration
#[derive(Debug, Clone)]
pub struct RedemptionFeeConfig {
    /// Transit insurance rate on the redeemed value
    pub insurance_rate: Decimal,
    /// Processing rate on the redeemed value
    pub processing_rate: Decimal,
    /// Home delivery fee for orders up to `home_small_max_grams`
    pub home_small_fee: Money,
    pub home_small_max_grams: Quantity,
    /// Home delivery fee for orders up to `home_medium_max_grams`
    pub home_medium_fee: Money,
    pub home_medium_max_grams: Quantity,
    /// Home delivery fee above the medium slab
    pub home_large_fee: Money,
    /// Partner store pickup fee
    pub store_fee: Money,
    /// Insured vault transfer fee
    pub vault_fee: Money,
    /// Flat fee for unrecognized delivery methods
    pub standard_fee: Money,
}

impl Default for RedemptionFeeConfig {
    fn default() -> Self {
        Self {
            insurance_rate: dec!(0.005),
            processing_rate: dec!(0.01),
            home_small_fee: dec!(50),
            home_small_max_grams: dec!(10),
            home_medium_fee: dec!(100),
            home_medium_max_grams: dec!(50),
            home_large_fee: dec!(200),
            store_fee: dec!(0),
            vault_fee: dec!(25),
            standard_fee: dec!(50),
        }
    }
}

/// Base order limits for one asset, before tier scaling
#[derive(Debug, Clone)]
pub struct AssetLimits {
    /// Smallest tradable quantity
    pub min_amount: Quantity,
    /// Unit the minimum is denominated in
    pub min_unit: String,
    /// INR value floor for an order
    pub min_inr_equivalent: Money,
    /// Largest tradable quantity at the Premium (1.0x) tier
    pub max_amount: Quantity,
    /// INR value ceiling at the Premium (1.0x) tier
    pub max_inr_equivalent: Money,
}

/// Per-asset base limit catalog
#[derive(Debug, Clone)]
pub struct OrderLimitConfig {
    /// Base limits per catalog asset
    pub base_limits: HashMap<AssetKind, AssetLimits>,
}

impl Default for OrderLimitConfig {
    fn default() -> Self {
        let mut base_limits = HashMap::new();
        base_limits.insert(
            AssetKind::Gold,
            AssetLimits {
                min_amount: dec!(0.1),
                min_unit: "gram".to_string(),
                min_inr_equivalent: dec!(100),
                max_amount: dec!(1000),
                max_inr_equivalent: dec!(6_000_000),
            },
        );
        base_limits.insert(
            AssetKind::Silver,
            AssetLimits {
                min_amount: dec!(1),
                min_unit: "gram".to_string(),
                min_inr_equivalent: dec!(100),
                max_amount: dec!(50_000),
                max_inr_equivalent: dec!(4_000_000),
            },
        );
        base_limits.insert(
            AssetKind::Platinum,
            AssetLimits {
                min_amount: dec!(0.1),
                min_unit: "gram".to_string(),
                min_inr_equivalent: dec!(100),
                max_amount: dec!(500),
                max_inr_equivalent: dec!(1_500_000),
            },
        );
        base_limits.insert(
            AssetKind::Stablecoin,
            AssetLimits {
                min_amount: dec!(100),
                min_unit: "BINR".to_string(),
                min_inr_equivalent: dec!(100),
                max_amount: dec!(2_000_000),
                max_inr_equivalent: dec!(2_000_000),
            },
        );
        Self { base_limits }
    }
}
