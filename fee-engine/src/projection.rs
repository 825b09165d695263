//! Annual fee projection across SIP plans

use common::decimal::{round2, Money};
use common::error::{ErrorExt, Result};
use common::model::sip::SipPlan;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::config::TradeFeeConfig;

/// Projected annual trading fees by direction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedTradingFees {
    /// Projected buy-side fees on SIP volume
    pub buy: Money,
    /// Projected sell-side fees on SIP volume
    pub sell: Money,
    /// Always zero: no swap volume assumption is modeled
    pub swap: Money,
}

/// Estimated fees for a year of SIP investing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualFeeProjection {
    /// Twelve months of SIP installment fees, rounded to paise
    pub annual_sip_fees: Money,
    /// Projected trading fees on the annualized SIP volume
    pub projected_trading_fees: ProjectedTradingFees,
    /// Sum of SIP and trading fee projections, rounded to paise
    pub total_annual_fees: Money,
}

/// Rolls SIP fees and projected trading fees into an annual estimate
#[derive(Debug, Clone, Default)]
pub struct FeeProjectionAggregator {
    config: TradeFeeConfig,
}

impl FeeProjectionAggregator {
    /// Create an aggregator projecting with the given trade fee rates
    pub fn new(config: TradeFeeConfig) -> Self {
        Self { config }
    }

    /// Annual fee estimate across the given SIP plans.
    ///
    /// Each plan contributes twelve installments of its fee plus spread
    /// fees on twelve months of buys and eventual sells of the invested
    /// amount. An empty plan list projects to all zeros.
    pub fn annual_projection(&self, plans: &[SipPlan]) -> Result<AnnualFeeProjection> {
        let mut sip_fees = Decimal::ZERO;
        let mut buy = Decimal::ZERO;
        let mut sell = Decimal::ZERO;
        for plan in plans {
            sip_fees += plan.fee * dec!(12);
            let annual_amount = plan.amount * dec!(12);
            buy += annual_amount * self.config.spread_rate;
            sell += annual_amount * self.config.spread_rate;
        }
        let swap = Decimal::ZERO;

        let annual_sip_fees =
            round2(sip_fees).with_context(|| "aggregating annual SIP fees")?;
        let total_annual_fees = round2(annual_sip_fees + buy + sell + swap)
            .with_context(|| "aggregating annual fee projection")?;

        Ok(AnnualFeeProjection {
            annual_sip_fees,
            projected_trading_fees: ProjectedTradingFees {
                buy: round2(buy)?,
                sell: round2(sell)?,
                swap,
            },
            total_annual_fees,
        })
    }
}
