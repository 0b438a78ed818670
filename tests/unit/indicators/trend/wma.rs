//! Unit tests for the weighted moving average

use chrono::{Days, NaiveDate};
use trendkit::indicators::weighted_moving_average;
use trendkit::models::PriceSeries;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset)
}

fn create_test_series(prices: &[f64]) -> PriceSeries {
    let dates = (0..prices.len() as u64).map(day).collect();
    PriceSeries::new(dates, prices.to_vec()).unwrap()
}

#[test]
fn test_wma_omits_dates_without_full_window() {
    let series = create_test_series(&[10.0, 20.0, 30.0, 40.0, 50.0]);
    let wma = weighted_moving_average(&series, 3);
    assert_eq!(wma.len(), 3);
    assert_eq!(wma[0].0, day(2));
    assert_eq!(wma[2].0, day(4));
}

#[test]
fn test_wma_weighs_recent_prices_more() {
    let series = create_test_series(&[10.0, 20.0, 30.0]);
    let wma = weighted_moving_average(&series, 3);
    assert_eq!(wma.len(), 1);
    // (10*1 + 20*2 + 30*3) / 6, above the plain mean of 20.
    assert!((wma[0].1 - 140.0 / 6.0).abs() < 1e-9);
}

#[test]
fn test_wma_window_of_one_reproduces_prices() {
    let series = create_test_series(&[100.0, 101.5, 99.8]);
    let values: Vec<f64> = weighted_moving_average(&series, 1)
        .into_iter()
        .map(|(_, value)| value)
        .collect();
    assert_eq!(values, vec![100.0, 101.5, 99.8]);
}

#[test]
fn test_wma_insufficient_data() {
    let series = create_test_series(&[100.0, 101.5]);
    assert!(weighted_moving_average(&series, 3).is_empty());
}

#[test]
fn test_wma_zero_window_yields_nothing() {
    let series = create_test_series(&[100.0, 101.5]);
    assert!(weighted_moving_average(&series, 0).is_empty());
}

#[test]
fn test_wma_sliding_sum_matches_direct_computation() {
    let prices: Vec<f64> = (0..60)
        .map(|i| 100.0 + ((i * 37) % 19) as f64 * 0.7 - ((i * 11) % 7) as f64 * 1.3)
        .collect();
    let series = create_test_series(&prices);
    let window = 14;
    let wma = weighted_moving_average(&series, window);
    assert_eq!(wma.len(), prices.len() - window + 1);

    let divisor = (window * (window + 1)) as f64 / 2.0;
    for (offset, (_, value)) in wma.iter().enumerate() {
        let direct: f64 = prices[offset..offset + window]
            .iter()
            .enumerate()
            .map(|(k, price)| (k + 1) as f64 * price)
            .sum::<f64>()
            / divisor;
        assert!(
            (value - direct).abs() < 1e-9,
            "window ending at {}: {} vs {}",
            offset + window - 1,
            value,
            direct
        );
    }
}
