//! Systematic investment plan models

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::model::asset::AssetKind;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// SIP purchase cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum SipFrequency {
    Daily,
    Weekly,
    /// Unknown wire frequencies fall back to the monthly cadence and its
    /// fee. This is a documented default, not an error.
    #[serde(other)]
    Monthly,
}

/// A recurring scheduled purchase of an asset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct SipPlan {
    /// Asset purchased by the plan
    pub asset: AssetKind,
    /// Amount invested per installment
    pub amount: Money,
    /// Installment cadence
    pub frequency: SipFrequency,
    /// Fee charged per installment
    pub fee: Money,
}
