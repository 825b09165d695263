//! Trade request and fee breakdown models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Price, Quantity};
use crate::model::asset::{AccountTier, AssetKind};
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Direction of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum TradeType {
    Buy,
    Sell,
    /// Selling leg of an asset-to-asset swap
    SwapSell,
    /// Buying leg of an asset-to-asset swap
    SwapBuy,
}

/// A point-in-time market price for an asset.
///
/// Quotes are read-only inputs, valid only for the single calculation that
/// consumes them. Staleness checks and price-locking between quote and
/// settlement belong to the order orchestrator, not this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct MarketQuote {
    /// Asset being quoted
    pub asset: AssetKind,
    /// Mid market price per unit
    pub mid_price: Price,
    /// When the price was produced
    pub timestamp: DateTime<Utc>,
}

impl MarketQuote {
    /// Create a quote stamped with the current time
    pub fn new(asset: AssetKind, mid_price: Price) -> Self {
        Self {
            asset,
            mid_price,
            timestamp: Utc::now(),
        }
    }
}

/// A request to buy, sell, or swap an asset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct TradeRequest {
    /// Trade direction
    pub trade_type: TradeType,
    /// Asset being traded
    pub asset: AssetKind,
    /// Quantity in asset units, must be positive
    pub quantity: Quantity,
    /// Market quote the trade is priced against
    pub quote: MarketQuote,
    /// KYC tier of the requesting account
    pub account_tier: AccountTier,
}

/// Itemized fees for a single trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct FeeBreakdown {
    /// Bid/ask spread markup
    pub spread_fee: Money,
    /// Platform commission
    pub platform_fee: Money,
    /// GST charged on spread + platform fees
    pub gst: Money,
    /// Sum of all fee components, rounded to paise
    pub total_fee: Money,
    /// Total fee as a percentage of the principal. Left unrounded;
    /// formatting is a display concern for the caller.
    pub total_fee_percentage: Decimal,
}
