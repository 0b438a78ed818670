use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::signal::{SignalSummary, TrendSignal};

/// Complete output of one trend analysis call.
///
/// The WMA maps hold one rounded value per date carrying a full window of
/// history; `signals` covers the intersection of the two key sets and
/// `summary` tallies it, so `summary.total() == signals.len()` always holds.
/// Maps are keyed by date and therefore serialize in input date order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub company_name: String,
    pub short_wma: BTreeMap<NaiveDate, Decimal>,
    pub long_wma: BTreeMap<NaiveDate, Decimal>,
    pub signals: BTreeMap<NaiveDate, TrendSignal>,
    pub summary: SignalSummary,
}
