//! Unit tests for trend signals and the signal summary

use rust_decimal::Decimal;
use serde_json::json;
use trendkit::models::{SignalSummary, TrendSignal};

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[test]
fn test_crossover_comparison() {
    assert_eq!(
        TrendSignal::from_crossover(dec("100.37"), dec("100.32")),
        TrendSignal::Buy
    );
    assert_eq!(
        TrendSignal::from_crossover(dec("100.32"), dec("100.37")),
        TrendSignal::Sell
    );
    assert_eq!(
        TrendSignal::from_crossover(dec("100.37"), dec("100.37")),
        TrendSignal::Hold
    );
}

#[test]
fn test_crossover_ignores_decimal_scale() {
    assert_eq!(
        TrendSignal::from_crossover(dec("101"), dec("101.00")),
        TrendSignal::Hold
    );
}

#[test]
fn test_signal_wire_values() {
    assert_eq!(TrendSignal::Buy.value(), 1);
    assert_eq!(TrendSignal::Hold.value(), 0);
    assert_eq!(TrendSignal::Sell.value(), -1);
}

#[test]
fn test_signals_serialize_as_integers() {
    assert_eq!(serde_json::to_string(&TrendSignal::Buy).unwrap(), "1");
    assert_eq!(serde_json::to_string(&TrendSignal::Hold).unwrap(), "0");
    assert_eq!(serde_json::to_string(&TrendSignal::Sell).unwrap(), "-1");
}

#[test]
fn test_summary_tallies_signals() {
    let mut summary = SignalSummary::default();
    summary.record(TrendSignal::Buy);
    summary.record(TrendSignal::Buy);
    summary.record(TrendSignal::Sell);
    assert_eq!(summary.buy, 2);
    assert_eq!(summary.hold, 0);
    assert_eq!(summary.sell, 1);
    assert_eq!(summary.total(), 3);
}

#[test]
fn test_summary_always_reports_all_buckets() {
    let summary = SignalSummary::default();
    let body = serde_json::to_value(summary).unwrap();
    assert_eq!(body, json!({ "1": 0, "0": 0, "-1": 0 }));
}
