//! Trend indicators: WMA

pub mod wma;

pub use wma::*;
