//! SIP fee proration

use common::decimal::Money;
use common::model::sip::SipFrequency;
use rust_decimal_macros::dec;

use crate::config::SipFeeConfig;

/// Prorates the flat monthly SIP fee to weekly and daily cadences
#[derive(Debug, Clone, Default)]
pub struct SipFeeScheduler {
    config: SipFeeConfig,
}

impl SipFeeScheduler {
    /// Create a scheduler with the given fee configuration
    pub fn new(config: SipFeeConfig) -> Self {
        Self { config }
    }

    /// Fee charged per installment for the given cadence.
    ///
    /// Weekly and daily fees prorate the monthly fee over 4 weeks and
    /// 30 days. The daily value is deliberately left unrounded so
    /// downstream aggregation keeps full precision; rounding is a
    /// display concern.
    pub fn fee(&self, frequency: SipFrequency) -> Money {
        match frequency {
            SipFrequency::Monthly => self.config.monthly_fee,
            SipFrequency::Weekly => self.config.monthly_fee / dec!(4),
            SipFrequency::Daily => self.config.monthly_fee / dec!(30),
        }
    }
}
