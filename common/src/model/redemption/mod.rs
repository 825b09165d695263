//! Physical redemption models

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Quantity};
use crate::model::asset::AssetKind;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Delivery channel for a physical redemption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum DeliveryMethod {
    /// Courier delivery to the account's registered address
    Home,
    /// Pickup at a partner store
    Store,
    /// Transfer into insured vault custody
    Vault,
    /// Fallback for unrecognized delivery methods; charged the flat
    /// default delivery fee. A documented default, not an error.
    #[serde(other)]
    Standard,
}

/// A request to redeem metal holdings for physical delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct RedemptionRequest {
    /// Asset being redeemed
    pub asset: AssetKind,
    /// Quantity to redeem in grams, must be positive
    pub quantity_grams: Quantity,
    /// How the metal is delivered
    pub delivery_method: DeliveryMethod,
}

/// Itemized fees for a physical redemption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub struct RedemptionFees {
    /// Fee for the chosen delivery channel
    pub delivery_fee: Money,
    /// Transit insurance, charged on the redeemed value
    pub insurance_fee: Money,
    /// Handling fee, charged on the redeemed value
    pub processing_fee: Money,
    /// Sum of all fee components, rounded to paise
    pub total_fees: Money,
    /// Redeemed value net of fees, derived from the rounded components
    pub net_value: Money,
}
