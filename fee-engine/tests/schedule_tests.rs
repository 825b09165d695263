use common::error::Error;
use common::model::asset::AssetKind;
use common::model::sip::{SipFrequency, SipPlan};
use fee_engine::config::{SipFeeConfig, SwapFeeConfig, SwapFeeTier, TradeFeeConfig};
use fee_engine::projection::FeeProjectionAggregator;
use fee_engine::sip::SipFeeScheduler;
use fee_engine::swap::SwapFeeSchedule;
use rust_decimal_macros::dec;

#[test]
fn test_swap_tier_selection() {
    let schedule = SwapFeeSchedule::default();

    assert_eq!(schedule.fee(dec!(0)).unwrap().rate, dec!(0.005));
    assert_eq!(schedule.fee(dec!(49_999.99)).unwrap().rate, dec!(0.005));
    assert_eq!(schedule.fee(dec!(50_000)).unwrap().rate, dec!(0.004));
    assert_eq!(schedule.fee(dec!(100_000)).unwrap().rate, dec!(0.003));
    assert_eq!(schedule.fee(dec!(500_000)).unwrap().rate, dec!(0.002));
    assert_eq!(schedule.fee(dec!(999_999.99)).unwrap().rate, dec!(0.002));
    assert_eq!(schedule.fee(dec!(1_000_000)).unwrap().rate, dec!(0.001));
}

#[test]
fn test_swap_fee_amounts() {
    let schedule = SwapFeeSchedule::default();

    let quote = schedule.fee(dec!(999_999.99)).unwrap();
    assert_eq!(quote.fee, dec!(2000));

    let quote = schedule.fee(dec!(1_000_000)).unwrap();
    assert_eq!(quote.fee, dec!(1000));
}

#[test]
fn test_swap_rate_never_increases_with_notional() {
    let schedule = SwapFeeSchedule::default();
    let notionals = [
        dec!(0),
        dec!(49_999),
        dec!(50_000),
        dec!(99_999),
        dec!(100_000),
        dec!(499_999),
        dec!(500_000),
        dec!(999_999),
        dec!(1_000_000),
        dec!(5_000_000),
    ];

    let mut previous_rate = None;
    for notional in notionals {
        let rate = schedule.fee(notional).unwrap().rate;
        if let Some(previous) = previous_rate {
            assert!(rate <= previous, "rate increased at notional {}", notional);
        }
        previous_rate = Some(rate);
    }
}

#[test]
fn test_swap_rejects_negative_notional() {
    let schedule = SwapFeeSchedule::default();
    assert!(matches!(
        schedule.fee(dec!(-1)),
        Err(Error::InvalidAmount(_))
    ));
}

#[test]
fn test_swap_config_validation() {
    // Rates must decrease as thresholds increase
    let misordered = SwapFeeSchedule::new(SwapFeeConfig {
        tiers: vec![
            SwapFeeTier {
                min_notional: dec!(0),
                rate: dec!(0.001),
            },
            SwapFeeTier {
                min_notional: dec!(100_000),
                rate: dec!(0.005),
            },
        ],
    });
    assert!(matches!(misordered, Err(Error::ConfigurationError(_))));

    // A base tier at notional 0 is required
    let no_base = SwapFeeSchedule::new(SwapFeeConfig {
        tiers: vec![SwapFeeTier {
            min_notional: dec!(100),
            rate: dec!(0.005),
        }],
    });
    assert!(matches!(no_base, Err(Error::ConfigurationError(_))));

    assert!(SwapFeeSchedule::new(SwapFeeConfig::default()).is_ok());
}

#[test]
fn test_sip_fee_proration() {
    let scheduler = SipFeeScheduler::default();

    assert_eq!(scheduler.fee(SipFrequency::Monthly), dec!(50));
    assert_eq!(scheduler.fee(SipFrequency::Weekly), dec!(12.5));
    assert_eq!(scheduler.fee(SipFrequency::Weekly) * dec!(4), dec!(50));

    // Daily fee carries full precision; 30 installments recover the
    // monthly fee within tolerance
    let daily = scheduler.fee(SipFrequency::Daily);
    assert!((daily * dec!(30) - dec!(50)).abs() < dec!(0.0000001));
}

#[test]
fn test_sip_fee_custom_base() {
    let scheduler = SipFeeScheduler::new(SipFeeConfig {
        monthly_fee: dec!(100),
    });
    assert_eq!(scheduler.fee(SipFrequency::Weekly), dec!(25));
}

#[test]
fn test_unknown_frequency_falls_back_to_monthly() {
    let frequency: SipFrequency = serde_json::from_str("\"fortnightly\"").unwrap();
    assert_eq!(frequency, SipFrequency::Monthly);

    let scheduler = SipFeeScheduler::default();
    assert_eq!(scheduler.fee(frequency), dec!(50));
}

fn monthly_plan(amount: rust_decimal::Decimal, fee: rust_decimal::Decimal) -> SipPlan {
    SipPlan {
        asset: AssetKind::Gold,
        amount,
        frequency: SipFrequency::Monthly,
        fee,
    }
}

#[test]
fn test_annual_projection_single_plan() {
    let aggregator = FeeProjectionAggregator::default();

    let projection = aggregator
        .annual_projection(&[monthly_plan(dec!(1000), dec!(50))])
        .unwrap();

    assert_eq!(projection.annual_sip_fees, dec!(600));
    assert_eq!(projection.projected_trading_fees.buy, dec!(120));
    assert_eq!(projection.projected_trading_fees.sell, dec!(120));
    assert_eq!(projection.projected_trading_fees.swap, dec!(0));
    assert_eq!(projection.total_annual_fees, dec!(840));
}

#[test]
fn test_annual_projection_multiple_plans() {
    let aggregator = FeeProjectionAggregator::default();

    let projection = aggregator
        .annual_projection(&[
            monthly_plan(dec!(1000), dec!(50)),
            monthly_plan(dec!(500), dec!(12.5)),
        ])
        .unwrap();

    // SIP: (50 + 12.5) * 12 = 750; trading: 18000 * 0.01 per side
    assert_eq!(projection.annual_sip_fees, dec!(750));
    assert_eq!(projection.projected_trading_fees.buy, dec!(180));
    assert_eq!(projection.projected_trading_fees.sell, dec!(180));
    assert_eq!(projection.total_annual_fees, dec!(1110));
}

#[test]
fn test_annual_projection_empty() {
    let aggregator = FeeProjectionAggregator::new(TradeFeeConfig::default());

    let projection = aggregator.annual_projection(&[]).unwrap();

    assert_eq!(projection.annual_sip_fees, dec!(0));
    assert_eq!(projection.projected_trading_fees.buy, dec!(0));
    assert_eq!(projection.projected_trading_fees.sell, dec!(0));
    assert_eq!(projection.projected_trading_fees.swap, dec!(0));
    assert_eq!(projection.total_annual_fees, dec!(0));
}
