//! Physical redemption fee calculation

use common::decimal::{ensure_positive, round2, Money, Price, Quantity};
use common::error::Result;
use common::model::redemption::{DeliveryMethod, RedemptionFees, RedemptionRequest};
use tracing::debug;

use crate::config::RedemptionFeeConfig;

/// Computes delivery, insurance, and processing fees for redeeming
/// physical metal
#[derive(Debug, Clone, Default)]
pub struct RedemptionFeeCalculator {
    config: RedemptionFeeConfig,
}

impl RedemptionFeeCalculator {
    /// Create a calculator with the given fee configuration
    pub fn new(config: RedemptionFeeConfig) -> Self {
        Self { config }
    }

    /// Fees for physically delivering the requested quantity, valued at
    /// `price_per_gram`.
    ///
    /// Net value derives from the already-rounded fee components and is
    /// not rounded again.
    pub fn calculate(
        &self,
        request: &RedemptionRequest,
        price_per_gram: Price,
    ) -> Result<RedemptionFees> {
        ensure_positive(request.quantity_grams, "redemption quantity")?;
        ensure_positive(price_per_gram, "reference price")?;

        let value = request.quantity_grams * price_per_gram;
        let delivery_fee = self.delivery_fee(request.delivery_method, request.quantity_grams);
        let insurance_fee = round2(value * self.config.insurance_rate)?;
        let processing_fee = round2(value * self.config.processing_rate)?;
        let total_fees = round2(delivery_fee + insurance_fee + processing_fee)?;
        let net_value = value - total_fees;

        debug!(
            "Redemption fees for {} {}g via {:?}: total {}",
            request.asset, request.quantity_grams, request.delivery_method, total_fees
        );

        Ok(RedemptionFees {
            delivery_fee,
            insurance_fee,
            processing_fee,
            total_fees,
            net_value,
        })
    }

    /// Delivery fee slab for the chosen channel
    fn delivery_fee(&self, method: DeliveryMethod, grams: Quantity) -> Money {
        match method {
            DeliveryMethod::Home => {
                if grams <= self.config.home_small_max_grams {
                    self.config.home_small_fee
                } else if grams <= self.config.home_medium_max_grams {
                    self.config.home_medium_fee
                } else {
                    self.config.home_large_fee
                }
            }
            DeliveryMethod::Store => self.config.store_fee,
            DeliveryMethod::Vault => self.config.vault_fee,
            DeliveryMethod::Standard => self.config.standard_fee,
        }
    }
}
