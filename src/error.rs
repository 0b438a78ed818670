//! Error taxonomy for trend analysis.

use thiserror::Error;

/// Validation and analysis failures.
///
/// Every variant is a deterministic consequence of the inputs, so nothing
/// here is ever retried; callers surface these directly.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("price series is empty")]
    EmptySeries,

    #[error("dates and prices differ in length ({dates} dates, {prices} prices)")]
    LengthMismatch { dates: usize, prices: usize },

    #[error("dates must be strictly increasing (violation at index {index})")]
    NonMonotonicDates { index: usize },

    #[error("{which} window must cover at least one observation")]
    InvalidWindow { which: &'static str },

    #[error("computed average {value} is outside the representable decimal range")]
    ValueOutOfRange { value: f64 },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
