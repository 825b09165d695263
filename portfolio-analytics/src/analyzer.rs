//! Herfindahl-based diversification scoring and position P&L

use std::collections::HashMap;

use common::decimal::{round2, Money};
use common::error::{Error, Result};
use common::model::asset::AssetKind;
use common::model::portfolio::{
    AssetAllocation, DiversificationResult, PortfolioSnapshot, ProfitLoss, RiskLevel,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::debug;

/// Derives profit/loss and concentration metrics from holdings
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioAnalyzer;

impl PortfolioAnalyzer {
    /// Create an analyzer
    pub fn new() -> Self {
        Self
    }

    /// Profit or loss given an invested amount and the current value.
    ///
    /// A position with nothing invested reports 0% rather than dividing
    /// by zero. Break-even counts as profit.
    pub fn profit_loss(&self, invested: Money, current_value: Money) -> Result<ProfitLoss> {
        if invested < Decimal::ZERO || current_value < Decimal::ZERO {
            return Err(Error::InvalidAmount(format!(
                "invested and current value must be non-negative: invested={}, current_value={}",
                invested, current_value
            )));
        }
        let profit = current_value - invested;
        let profit_percent = if invested > Decimal::ZERO {
            profit / invested * dec!(100)
        } else {
            Decimal::ZERO
        };
        Ok(ProfitLoss {
            profit,
            profit_percent,
            is_profit: profit >= Decimal::ZERO,
        })
    }

    /// Per-asset profit/loss across a snapshot
    pub fn snapshot_profit_loss(
        &self,
        snapshot: &PortfolioSnapshot,
    ) -> Result<HashMap<AssetKind, ProfitLoss>> {
        let mut result = HashMap::new();
        for (asset, position) in &snapshot.positions {
            result.insert(
                *asset,
                self.profit_loss(position.total_invested, position.current_value())?,
            );
        }
        Ok(result)
    }

    /// Herfindahl-based diversification metrics for a snapshot.
    ///
    /// Assets absent from the snapshot count as zero value. A zero-value
    /// portfolio scores 0 with an empty allocation map. The HHI is the
    /// sum of squared fractional shares; a perfectly even four-asset
    /// portfolio scores 75.
    pub fn diversification(&self, snapshot: &PortfolioSnapshot) -> Result<DiversificationResult> {
        let mut values = Vec::with_capacity(AssetKind::ALL.len());
        let mut total_value = Decimal::ZERO;
        for asset in AssetKind::ALL {
            let value = snapshot
                .position(asset)
                .map(|p| p.current_value())
                .unwrap_or(Decimal::ZERO);
            total_value += value;
            values.push((asset, value));
        }

        if total_value.is_zero() {
            return Ok(DiversificationResult {
                allocation: HashMap::new(),
                hhi: Decimal::ZERO,
                diversification_score: 0,
                risk_level: RiskLevel::Low,
            });
        }

        let mut allocation = HashMap::new();
        let mut hhi = Decimal::ZERO;
        for (asset, value) in values {
            let weight = value / total_value * dec!(100);
            let share = weight / dec!(100);
            hhi += share * share;
            allocation.insert(
                asset,
                AssetAllocation {
                    weight: round2(weight)?,
                    value: round2(value)?,
                },
            );
        }

        let score = (dec!(100) * (Decimal::ONE - hhi))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
            .unwrap_or(0);
        let risk_level = if score >= 70 {
            RiskLevel::Low
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };

        debug!(
            "Diversification for account {}: hhi {}, score {}, risk {:?}",
            snapshot.account_id, hhi, score, risk_level
        );

        Ok(DiversificationResult {
            allocation,
            hhi,
            diversification_score: score,
            risk_level,
        })
    }
}
