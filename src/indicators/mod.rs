//! Indicator computations over price series.

pub mod trend;

pub use trend::weighted_moving_average;
