use chrono::NaiveDate;

use crate::error::{AnalysisError, Result};

/// An ordered series of daily closing prices.
///
/// Construction guarantees the invariants the analyzer relies on: `dates`
/// and `prices` are parallel vectors, the series is non-empty, and dates are
/// strictly increasing (which also makes them unique). The series is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    dates: Vec<NaiveDate>,
    prices: Vec<f64>,
}

impl PriceSeries {
    /// Build a series from parallel date and price vectors.
    pub fn new(dates: Vec<NaiveDate>, prices: Vec<f64>) -> Result<Self> {
        if dates.len() != prices.len() {
            return Err(AnalysisError::LengthMismatch {
                dates: dates.len(),
                prices: prices.len(),
            });
        }
        if dates.is_empty() {
            return Err(AnalysisError::EmptySeries);
        }
        if let Some(index) = dates.windows(2).position(|pair| pair[0] >= pair[1]) {
            // Report the offending element, not the start of the pair.
            return Err(AnalysisError::NonMonotonicDates { index: index + 1 });
        }

        Ok(Self { dates, prices })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Date/price pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.prices.iter().copied())
    }
}
