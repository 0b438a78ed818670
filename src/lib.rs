//! Stock trend analysis toolkit.
//!
//! Computes short- and long-window weighted moving averages over a daily
//! closing price series, derives buy/sell/hold signals from their crossover
//! and serves the result through a small HTTP API.

pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod signals;

pub use error::{AnalysisError, Result};
pub use models::{PriceSeries, SignalSummary, TrendAnalysis, TrendSignal};
pub use signals::TrendAnalyzer;
