//! Trade fee calculation

use common::decimal::{round2, Price, Quantity};
use common::error::{Error, Result};
use common::model::trade::{FeeBreakdown, TradeType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::config::TradeFeeConfig;

/// Computes the fee breakdown for buy, sell, and swap trades
#[derive(Debug, Clone, Default)]
pub struct TradeFeeEngine {
    config: TradeFeeConfig,
}

impl TradeFeeEngine {
    /// Create an engine with the given rate configuration
    pub fn new(config: TradeFeeConfig) -> Self {
        Self { config }
    }

    /// Calculate the itemized fees for a trade.
    ///
    /// The principal is kept at full precision; only the individual fee
    /// components are rounded to paise. GST is charged on the two rounded
    /// sub-fees. `total_fee_percentage` is left unrounded for downstream
    /// aggregation.
    pub fn calculate(
        &self,
        trade_type: TradeType,
        quantity: Quantity,
        mid_price: Price,
    ) -> Result<FeeBreakdown> {
        if quantity <= Decimal::ZERO || mid_price <= Decimal::ZERO {
            return Err(Error::InvalidTradeParameters(format!(
                "quantity and mid price must be positive: quantity={}, mid_price={}",
                quantity, mid_price
            )));
        }

        let principal = quantity * mid_price;
        let spread_fee = round2(principal * self.config.spread_rate)?;
        let platform_fee = round2(principal * self.config.platform_rate)?;
        let gst = round2((spread_fee + platform_fee) * self.config.gst_rate)?;
        let total_fee = round2(spread_fee + platform_fee + gst)?;
        let total_fee_percentage = if principal > Decimal::ZERO {
            (spread_fee + platform_fee + gst) / principal * dec!(100)
        } else {
            Decimal::ZERO
        };

        debug!(
            "Trade fees for {:?} {} @ {}: spread {}, platform {}, gst {}, total {}",
            trade_type, quantity, mid_price, spread_fee, platform_fee, gst, total_fee
        );

        Ok(FeeBreakdown {
            spread_fee,
            platform_fee,
            gst,
            total_fee,
            total_fee_percentage,
        })
    }
}
