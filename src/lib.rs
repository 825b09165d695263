// This is a metapackage for workspace-level tests
// Re-export the calculation crates as modules

pub use common;
pub use fee_engine;
pub use portfolio_analytics;
