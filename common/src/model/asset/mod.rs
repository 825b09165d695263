//! Asset catalog and account tier models

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::Error;
#[cfg(feature = "utoipa")]
use crate::utoipa::ToSchema;

/// Tradable asset kinds
///
/// The catalog is fixed: every rate or limit table keyed by asset must map
/// all four entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum AssetKind {
    Gold,
    Silver,
    Platinum,
    /// BINR, the platform's INR-pegged stablecoin
    #[serde(rename = "binr")]
    Stablecoin,
}

impl AssetKind {
    /// The fixed asset catalog
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Gold,
        AssetKind::Silver,
        AssetKind::Platinum,
        AssetKind::Stablecoin,
    ];

    /// Wire symbol for the asset
    pub fn symbol(&self) -> &'static str {
        match self {
            AssetKind::Gold => "gold",
            AssetKind::Silver => "silver",
            AssetKind::Platinum => "platinum",
            AssetKind::Stablecoin => "binr",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AssetKind {
    type Err = Error;

    /// Unknown symbols are an error, never priced as some default asset
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gold" => Ok(AssetKind::Gold),
            "silver" => Ok(AssetKind::Silver),
            "platinum" => Ok(AssetKind::Platinum),
            "binr" | "stablecoin" => Ok(AssetKind::Stablecoin),
            other => Err(Error::UnknownAsset(format!(
                "asset not in catalog: {}",
                other
            ))),
        }
    }
}

/// KYC verification tier gating maximum tradable amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "utoipa", derive(ToSchema))]
pub enum AccountTier {
    Basic,
    Verified,
    Premium,
    Vip,
}

impl AccountTier {
    /// Multiplier applied to the base maximum order limits.
    /// Minimum limits are tier-independent.
    pub fn multiplier(&self) -> Decimal {
        match self {
            AccountTier::Basic => dec!(0.1),
            AccountTier::Verified => dec!(0.5),
            AccountTier::Premium => dec!(1.0),
            AccountTier::Vip => dec!(2.0),
        }
    }

    /// Map a raw KYC level to a tier.
    /// Unrecognized levels fall back to the most conservative tier.
    pub fn from_kyc_level(level: u8) -> Self {
        match level {
            1 => AccountTier::Basic,
            2 => AccountTier::Verified,
            3 => AccountTier::Premium,
            4 => AccountTier::Vip,
            _ => AccountTier::Basic,
        }
    }
}
