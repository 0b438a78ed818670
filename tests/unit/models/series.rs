//! Unit tests for price series validation

use chrono::{Days, NaiveDate};
use trendkit::error::AnalysisError;
use trendkit::models::PriceSeries;

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(offset)
}

#[test]
fn test_valid_series_is_accepted() {
    let series = PriceSeries::new(vec![day(0), day(1), day(2)], vec![100.0, 101.5, 99.8]).unwrap();
    assert_eq!(series.len(), 3);
    assert!(!series.is_empty());
    assert_eq!(series.prices()[1], 101.5);
    assert_eq!(series.dates()[2], day(2));
}

#[test]
fn test_iteration_preserves_input_order() {
    let series = PriceSeries::new(vec![day(0), day(1)], vec![1.0, 2.0]).unwrap();
    let pairs: Vec<(NaiveDate, f64)> = series.iter().collect();
    assert_eq!(pairs, vec![(day(0), 1.0), (day(1), 2.0)]);
}

#[test]
fn test_empty_series_is_rejected() {
    let err = PriceSeries::new(Vec::new(), Vec::new()).unwrap_err();
    assert_eq!(err, AnalysisError::EmptySeries);
}

#[test]
fn test_length_mismatch_is_rejected() {
    let err = PriceSeries::new(vec![day(0), day(1)], vec![100.0]).unwrap_err();
    assert_eq!(err, AnalysisError::LengthMismatch { dates: 2, prices: 1 });
}

#[test]
fn test_out_of_order_dates_are_rejected() {
    let err = PriceSeries::new(vec![day(0), day(2), day(1)], vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, AnalysisError::NonMonotonicDates { index: 2 });
}

#[test]
fn test_duplicate_dates_are_rejected() {
    let err = PriceSeries::new(vec![day(0), day(0), day(1)], vec![1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(err, AnalysisError::NonMonotonicDates { index: 1 });
}
