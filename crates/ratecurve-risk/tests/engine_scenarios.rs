//! Integration tests: end-to-end engine scenarios through the public API.
//!
//! Covers the documented numeric scenarios (two-point linear and log-linear
//! reads, exact grid swap pricing) and the invariants that hold for any
//! curve: non-negative DV01, pay/receive symmetry, inclusive daily series.

use approx::assert_relative_eq;
use proptest::prelude::*;

use ratecurve_core::Date;
use ratecurve_curves::{CurveBuilder, InterpolationPolicy, MarketQuote};
use ratecurve_risk::prelude::*;

fn one_and_two_year() -> Vec<MarketQuote> {
    vec![
        MarketQuote::new("1Y", 5.445, 365),
        MarketQuote::new("2Y", 4.990, 730),
    ]
}

fn sofr_quotes() -> Vec<MarketQuote> {
    [
        ("1W", 5.309, 7),
        ("2W", 5.312, 14),
        ("3W", 5.314, 21),
        ("1M", 5.318, 30),
        ("2M", 5.351, 60),
        ("3M", 5.382, 90),
        ("6M", 5.452, 180),
        ("1Y", 5.445, 365),
        ("2Y", 4.990, 730),
        ("3Y", 4.650, 1095),
        ("5Y", 4.352, 1825),
        ("10Y", 4.201, 3650),
    ]
    .into_iter()
    .map(|(t, r, d)| MarketQuote::new(t, r, d))
    .collect()
}

#[test]
fn linear_read_between_one_and_two_years() {
    let curve = set_policy(
        &build_curve(one_and_two_year()).unwrap(),
        InterpolationPolicy::Linear,
    )
    .unwrap();

    let rate = get_rate(&curve, 547.0).unwrap();
    let expected = 5.445 + ((547.0 - 365.0) / (730.0 - 365.0)) * (4.990 - 5.445);
    assert_relative_eq!(rate, expected, epsilon = 1e-12);
    assert!((rate - 5.218).abs() < 0.001);
}

#[test]
fn log_linear_read_matches_closed_form() {
    let curve = build_curve(one_and_two_year()).unwrap();
    assert_eq!(curve.policy(), InterpolationPolicy::LogLinear);

    let df1 = (-0.05445f64 * 1.0).exp();
    let df2 = (-0.04990f64 * 2.0).exp();
    let t = (547.0 - 365.0) / (730.0 - 365.0);
    let df = df1 * (df2 / df1).powf(t);
    let expected = -df.ln() / (547.0 / 365.0) * 100.0;

    let rate = get_rate(&curve, 547.0).unwrap();
    assert_relative_eq!(rate, expected, epsilon = 1e-12);
    assert!((rate - 5.218).abs() > 1e-4);
}

#[test]
fn five_year_swap_reads_exact_grid_rate() {
    let curve = build_curve(sofr_quotes()).unwrap();
    let swap = SwapDetails::new(1_000_000.0, "5Y", 4.5, Direction::Pay).with_floating_index("SOFR");

    let valuation = value_swap(&curve, &swap, &Dv01Settings::default()).unwrap();
    assert_eq!(valuation.rate, 4.352);

    let metrics = price_swap(&curve, &swap).unwrap();
    assert_eq!(metrics, valuation.metrics);
    assert_eq!(metrics.dv01_by_tenor.len(), 12);
    assert_eq!(metrics.dv01_by_tenor[0].tenor, "1W");
    assert_eq!(metrics.dv01_by_tenor[11].tenor, "10Y");
}

#[test]
fn dv01_is_local_even_off_grid() {
    // A 4Y swap reads an interpolated rate, but DV01 still only reflects
    // each quoted point in isolation.
    let curve = build_curve(sofr_quotes()).unwrap();
    let four_year = price_swap(&curve, &SwapDetails::new(1e6, "4Y", 4.5, Direction::Pay)).unwrap();
    let five_year = price_swap(&curve, &SwapDetails::new(1e6, "5Y", 4.5, Direction::Pay)).unwrap();
    assert_eq!(four_year.dv01_by_tenor, five_year.dv01_by_tenor);
}

#[test]
fn every_policy_prices_and_reports() {
    let base = build_curve(sofr_quotes()).unwrap();
    for policy in InterpolationPolicy::ALL {
        let curve = set_policy(&base, policy).unwrap();
        let forwards = get_forward_rates(&curve).unwrap();
        assert_eq!(forwards.len(), 12);

        let report = curve_report(&curve, &Dv01Settings::default()).unwrap();
        assert_eq!(report.len(), 12);

        let dv01 = compute_dv01(&curve).unwrap();
        assert!(dv01.iter().all(|d| d.dv01 >= 0.0));
    }
}

#[test]
fn daily_series_covers_inclusive_range() {
    let valuation = Date::from_ymd(2024, 1, 2).unwrap();
    let curve = CurveBuilder::new()
        .valuation_date(valuation)
        .add_quotes(sofr_quotes())
        .build()
        .unwrap();

    let start = Date::from_ymd(2024, 2, 1).unwrap();
    let end = Date::from_ymd(2024, 3, 1).unwrap();
    let series = get_daily_forward_series(&curve, start, end).unwrap();

    // 2024 is a leap year: Feb 1 to Mar 1 inclusive is 30 days.
    assert_eq!(series.len(), 30);
    let items: Vec<DailyForward> = series.clone().collect::<RiskResult<_>>().unwrap();
    assert_eq!(items.first().unwrap().date, start);
    assert_eq!(items.last().unwrap().date, end);
    assert_eq!(items[0].days, 30);

    // The clone was independent of the original.
    assert_eq!(series.count(), 30);
}

#[test]
fn daily_series_rejects_reversed_range() {
    let curve = build_curve(sofr_quotes()).unwrap();
    let start = Date::from_ymd(2024, 3, 1).unwrap();
    let end = Date::from_ymd(2024, 2, 1).unwrap();
    assert!(matches!(
        get_daily_forward_series(&curve, start, end),
        Err(RiskError::InvalidDateRange { .. })
    ));
}

proptest! {
    #[test]
    fn pay_and_receive_are_mirror_images(
        notional in 1.0f64..1e9,
        fixed in 0.0f64..10.0,
        years in 1u32..15,
    ) {
        let curve = build_curve(sofr_quotes()).unwrap();
        let maturity = format!("{years}Y");
        let pay = SwapDetails::new(notional, maturity.clone(), fixed, Direction::Pay);
        let receive = SwapDetails::new(notional, maturity, fixed, Direction::Receive);
        let pay = price_swap(&curve, &pay).unwrap();
        let receive = price_swap(&curve, &receive).unwrap();
        prop_assert_eq!(pay.pv, -receive.pv);
    }

    #[test]
    fn dv01_never_negative(rates in prop::collection::vec(-1.0f64..15.0, 12)) {
        let quotes: Vec<MarketQuote> = sofr_quotes()
            .into_iter()
            .zip(rates)
            .map(|(q, r)| MarketQuote { rate: r, ..q })
            .collect();
        let curve = build_curve(quotes).unwrap();
        for d in compute_dv01(&curve).unwrap() {
            prop_assert!(d.dv01 >= 0.0);
        }
    }
}
