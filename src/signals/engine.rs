//! Main trend analysis engine: WMA crossover signals and their summary.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

use crate::error::{AnalysisError, Result};
use crate::indicators::trend::weighted_moving_average;
use crate::models::{PriceSeries, SignalSummary, TrendAnalysis, TrendSignal};

/// Stateless analyzer producing buy/sell/hold signals from the crossover of
/// a short- and a long-window weighted moving average.
///
/// Every call reads its inputs and returns a fresh result value, so the
/// analyzer is safe to invoke concurrently without synchronization.
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Analyze one price series.
    ///
    /// Window sizes must cover at least one observation. `short_window` is
    /// expected to be smaller than `long_window` for the crossover to mean
    /// anything, but that is the caller's contract and is not enforced
    /// here. WMA values are rounded half-to-even to `precision` fractional
    /// digits once, at output assembly, and signals compare the rounded
    /// values so the Buy/Hold/Sell boundary is stable.
    ///
    /// A series shorter than a window yields an empty map for that window,
    /// and signals exist only for dates present in both maps. A history
    /// shorter than both windows therefore produces empty maps and an
    /// all-zero summary: uninformative, but well-formed.
    pub fn analyze(
        company_name: &str,
        series: &PriceSeries,
        short_window: usize,
        long_window: usize,
        precision: u32,
    ) -> Result<TrendAnalysis> {
        if short_window == 0 {
            return Err(AnalysisError::InvalidWindow { which: "short" });
        }
        if long_window == 0 {
            return Err(AnalysisError::InvalidWindow { which: "long" });
        }

        let short_wma = Self::rounded_wma(series, short_window, precision)?;
        let long_wma = Self::rounded_wma(series, long_window, precision)?;

        let mut signals = BTreeMap::new();
        let mut summary = SignalSummary::default();
        for (date, short) in &short_wma {
            if let Some(long) = long_wma.get(date) {
                let signal = TrendSignal::from_crossover(*short, *long);
                summary.record(signal);
                signals.insert(*date, signal);
            }
        }

        Ok(TrendAnalysis {
            company_name: company_name.to_string(),
            short_wma,
            long_wma,
            signals,
            summary,
        })
    }

    /// One WMA series with output rounding applied.
    fn rounded_wma(
        series: &PriceSeries,
        window: usize,
        precision: u32,
    ) -> Result<BTreeMap<NaiveDate, Decimal>> {
        weighted_moving_average(series, window)
            .into_iter()
            .map(|(date, raw)| Ok((date, round_half_even(raw, precision)?)))
            .collect()
    }
}

/// Round to `precision` fractional digits using banker's rounding, then pin
/// the scale so every value formats with exactly that many digits.
fn round_half_even(value: f64, precision: u32) -> Result<Decimal> {
    let mut rounded = Decimal::from_f64(value)
        .ok_or(AnalysisError::ValueOutOfRange { value })?
        .round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(precision);
    Ok(rounded)
}
