//! Domain models for the settlement engine

pub mod asset;
pub mod trade;
pub mod sip;
pub mod redemption;
pub mod portfolio;
