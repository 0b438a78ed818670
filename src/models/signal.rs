use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Trading recommendation derived from comparing a short-window average
/// against a long-window one.
///
/// Serialized as the integers 1 (buy), -1 (sell) and 0 (hold); internal code
/// always works with the enum so the wire values live only at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendSignal {
    Buy,
    Sell,
    Hold,
}

impl TrendSignal {
    /// Derive the signal for one date from the two rounded averages.
    ///
    /// Both inputs must already be rounded to the same precision; the
    /// comparison is exact, so the Buy/Hold/Sell boundary is stable.
    pub fn from_crossover(short: Decimal, long: Decimal) -> Self {
        match short.cmp(&long) {
            Ordering::Greater => TrendSignal::Buy,
            Ordering::Less => TrendSignal::Sell,
            Ordering::Equal => TrendSignal::Hold,
        }
    }

    /// Wire value used in API responses.
    pub fn value(self) -> i8 {
        match self {
            TrendSignal::Buy => 1,
            TrendSignal::Sell => -1,
            TrendSignal::Hold => 0,
        }
    }
}

impl Serialize for TrendSignal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.value())
    }
}

/// Per-signal counts over a whole signal series.
///
/// All three buckets are always serialized, zero or not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SignalSummary {
    #[serde(rename = "1")]
    pub buy: usize,
    #[serde(rename = "0")]
    pub hold: usize,
    #[serde(rename = "-1")]
    pub sell: usize,
}

impl SignalSummary {
    pub fn record(&mut self, signal: TrendSignal) {
        match signal {
            TrendSignal::Buy => self.buy += 1,
            TrendSignal::Hold => self.hold += 1,
            TrendSignal::Sell => self.sell += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.buy + self.hold + self.sell
    }
}
