use common::error::Error;
use common::model::asset::AssetKind;
use common::model::portfolio::{PortfolioSnapshot, Position, RiskLevel};
use portfolio_analytics::PortfolioAnalyzer;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn position(balance: Decimal, total_invested: Decimal, current_price: Decimal) -> Position {
    Position {
        balance,
        total_invested,
        current_price,
    }
}

#[test]
fn test_profit_loss_gain() {
    let analyzer = PortfolioAnalyzer::new();

    let pnl = analyzer.profit_loss(dec!(1000), dec!(1250)).unwrap();
    assert_eq!(pnl.profit, dec!(250));
    assert_eq!(pnl.profit_percent, dec!(25));
    assert!(pnl.is_profit);
}

#[test]
fn test_profit_loss_loss() {
    let analyzer = PortfolioAnalyzer::new();

    let pnl = analyzer.profit_loss(dec!(100), dec!(80)).unwrap();
    assert_eq!(pnl.profit, dec!(-20));
    assert_eq!(pnl.profit_percent, dec!(-20));
    assert!(!pnl.is_profit);
}

#[test]
fn test_profit_loss_zero_invested() {
    let analyzer = PortfolioAnalyzer::new();

    // No division by zero: percent is 0 when nothing was invested
    let pnl = analyzer.profit_loss(dec!(0), dec!(100)).unwrap();
    assert_eq!(pnl.profit, dec!(100));
    assert_eq!(pnl.profit_percent, dec!(0));
    assert!(pnl.is_profit);
}

#[test]
fn test_profit_loss_rejects_negative_inputs() {
    let analyzer = PortfolioAnalyzer::new();
    assert!(matches!(
        analyzer.profit_loss(dec!(-1), dec!(100)),
        Err(Error::InvalidAmount(_))
    ));
}

#[test]
fn test_snapshot_profit_loss() {
    let analyzer = PortfolioAnalyzer::new();
    let mut snapshot = PortfolioSnapshot::new(Uuid::new_v4());
    snapshot.set_position(AssetKind::Gold, position(dec!(2), dec!(11000), dec!(6000)));
    snapshot.set_position(AssetKind::Silver, position(dec!(100), dec!(8000), dec!(75)));

    let pnl = analyzer.snapshot_profit_loss(&snapshot).unwrap();

    let gold = &pnl[&AssetKind::Gold];
    assert_eq!(gold.profit, dec!(1000));
    assert!(gold.is_profit);

    let silver = &pnl[&AssetKind::Silver];
    assert_eq!(silver.profit, dec!(-500));
    assert!(!silver.is_profit);
}

#[test]
fn test_diversification_single_asset() {
    let analyzer = PortfolioAnalyzer::new();
    let mut snapshot = PortfolioSnapshot::new(Uuid::new_v4());
    snapshot.set_position(AssetKind::Gold, position(dec!(10), dec!(60000), dec!(6000)));

    let result = analyzer.diversification(&snapshot).unwrap();

    assert_eq!(result.hhi, dec!(1));
    assert_eq!(result.diversification_score, 0);
    assert_eq!(result.risk_level, RiskLevel::High);

    // The full catalog appears in the allocation; absent assets weigh 0
    assert_eq!(result.allocation.len(), 4);
    assert_eq!(result.allocation[&AssetKind::Gold].weight, dec!(100));
    assert_eq!(result.allocation[&AssetKind::Silver].weight, dec!(0));
}

#[test]
fn test_diversification_equal_weights() {
    let analyzer = PortfolioAnalyzer::new();
    let mut snapshot = PortfolioSnapshot::new(Uuid::new_v4());
    // Four positions each worth 10000
    snapshot.set_position(AssetKind::Gold, position(dec!(2), dec!(9000), dec!(5000)));
    snapshot.set_position(AssetKind::Silver, position(dec!(100), dec!(9500), dec!(100)));
    snapshot.set_position(AssetKind::Platinum, position(dec!(4), dec!(11000), dec!(2500)));
    snapshot.set_position(AssetKind::Stablecoin, position(dec!(10000), dec!(10000), dec!(1)));

    let result = analyzer.diversification(&snapshot).unwrap();

    assert_eq!(result.hhi, dec!(0.25));
    assert_eq!(result.diversification_score, 75);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.allocation[&AssetKind::Platinum].weight, dec!(25));
    assert_eq!(result.allocation[&AssetKind::Platinum].value, dec!(10000));
}

#[test]
fn test_diversification_two_assets_is_medium_risk() {
    let analyzer = PortfolioAnalyzer::new();
    let mut snapshot = PortfolioSnapshot::new(Uuid::new_v4());
    snapshot.set_position(AssetKind::Gold, position(dec!(1), dec!(6000), dec!(6000)));
    snapshot.set_position(AssetKind::Silver, position(dec!(80), dec!(6000), dec!(75)));

    let result = analyzer.diversification(&snapshot).unwrap();

    assert_eq!(result.hhi, dec!(0.5));
    assert_eq!(result.diversification_score, 50);
    assert_eq!(result.risk_level, RiskLevel::Medium);
}

#[test]
fn test_diversification_empty_portfolio() {
    let analyzer = PortfolioAnalyzer::new();
    let snapshot = PortfolioSnapshot::new(Uuid::new_v4());

    let result = analyzer.diversification(&snapshot).unwrap();

    assert_eq!(result.hhi, dec!(0));
    assert_eq!(result.diversification_score, 0);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.allocation.is_empty());
}

#[test]
fn test_diversification_ignores_zero_balance_positions() {
    let analyzer = PortfolioAnalyzer::new();
    let mut snapshot = PortfolioSnapshot::new(Uuid::new_v4());
    snapshot.set_position(AssetKind::Gold, position(dec!(1), dec!(6000), dec!(6000)));
    snapshot.set_position(AssetKind::Silver, position(dec!(0), dec!(0), dec!(75)));

    let result = analyzer.diversification(&snapshot).unwrap();

    // Silver holds nothing, so gold carries the whole portfolio
    assert_eq!(result.hhi, dec!(1));
    assert_eq!(result.diversification_score, 0);
}
