//! Portfolio snapshot and analytics models

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{Money, Price, Quantity};
use crate::model::asset::AssetKind;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// A single asset position within a portfolio
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct Position {
    /// Held quantity in asset units
    pub balance: Quantity,
    /// Total amount invested into the position
    pub total_invested: Money,
    /// Current market price per unit
    pub current_price: Price,
}

impl Position {
    /// Current market value of the position
    pub fn current_value(&self) -> Money {
        self.balance * self.current_price
    }
}

/// Point-in-time view of an account's holdings.
///
/// Assembled by the orchestrator from persisted balances; assets absent
/// from the map are treated as zero-value positions by the analytics.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    /// Account the snapshot belongs to
    pub account_id: Uuid,
    /// Per-asset positions
    pub positions: HashMap<AssetKind, Position>,
}

impl PortfolioSnapshot {
    /// Create an empty snapshot for an account
    pub fn new(account_id: Uuid) -> Self {
        Self {
            account_id,
            positions: HashMap::new(),
        }
    }

    /// Add or replace a position
    pub fn set_position(&mut self, asset: AssetKind, position: Position) {
        self.positions.insert(asset, position);
    }

    /// Look up a position by asset
    pub fn position(&self, asset: AssetKind) -> Option<&Position> {
        self.positions.get(&asset)
    }
}

/// Profit or loss of a position or portfolio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct ProfitLoss {
    /// Current value minus invested amount; negative on a loss
    pub profit: Decimal,
    /// Profit as a percentage of the invested amount; zero when nothing
    /// was invested
    pub profit_percent: Decimal,
    /// Whether the position is at or above break-even
    pub is_profit: bool,
}

/// Portfolio weight and value of one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct AssetAllocation {
    /// Share of total portfolio value, in percent, rounded to 2 places
    pub weight: Decimal,
    /// Market value of the holding, rounded to paise
    pub value: Money,
}

/// Concentration risk band derived from the diversification score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Herfindahl-based portfolio concentration metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationResult {
    /// Weight and value per catalog asset; empty for a zero-value
    /// portfolio
    pub allocation: HashMap<AssetKind, AssetAllocation>,
    /// Herfindahl-Hirschman index: sum of squared fractional shares
    pub hhi: Decimal,
    /// 0-100 score, higher is better diversified
    pub diversification_score: u32,
    /// Risk band for the score
    pub risk_level: RiskLevel,
}
