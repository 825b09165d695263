//! Fee calculation engines for the settlement layer
//!
//! Every engine here is a pure, stateless calculator: rate tables are
//! injected at construction and invocations share no mutable state, so
//! concurrent calls need no synchronization.

pub mod config;
pub mod spread;
pub mod trade;
pub mod swap;
pub mod sip;
pub mod redemption;
pub mod limits;
pub mod projection;

pub use config::{
    AssetLimits, OrderLimitConfig, RedemptionFeeConfig, SipFeeConfig, SwapFeeConfig, SwapFeeTier,
    TradeFeeConfig,
};
pub use limits::{OrderLimitPolicy, OrderLimits};
pub use projection::{AnnualFeeProjection, FeeProjectionAggregator, ProjectedTradingFees};
pub use redemption::RedemptionFeeCalculator;
pub use sip::SipFeeScheduler;
pub use spread::{SpreadCalculator, SpreadQuote};
pub use swap::{SwapFeeQuote, SwapFeeSchedule};
pub use trade::TradeFeeEngine;
