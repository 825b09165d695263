//! Portfolio profit/loss and diversification analytics
//!
//! Pure reporting functions over a [`common::model::portfolio::PortfolioSnapshot`]
//! assembled by the orchestrator; nothing here reads or writes storage.

pub mod analyzer;

pub use analyzer::PortfolioAnalyzer;
