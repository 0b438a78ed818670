//! Shared data models spanning the analyzer layers.

pub mod analysis;
pub mod series;
pub mod signal;

pub use analysis::TrendAnalysis;
pub use series::PriceSeries;
pub use signal::{SignalSummary, TrendSignal};
