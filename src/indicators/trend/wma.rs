//! WMA (Weighted Moving Average) indicator.
//!
//! WMA assigns linearly increasing weight to more recent prices:
//! WMA[i] = (1*P[i-n+1] + 2*P[i-n+2] + ... + n*P[i]) / (n*(n+1)/2)

use chrono::NaiveDate;

use crate::models::PriceSeries;

/// Compute the linear WMA of a price series for one window size.
///
/// A value exists only for dates with a full window of history, so the
/// first `window - 1` dates are omitted and a series shorter than `window`
/// yields an empty vector. Entries keep input date order. Values are raw
/// `f64`s; rounding happens when the analyzer assembles its output.
///
/// A sliding recurrence keeps the cost linear in series length: with
/// S = plain sum and N = weighted sum of the current window,
/// N' = N - S + window * incoming and S' = S + incoming - outgoing.
pub fn weighted_moving_average(series: &PriceSeries, window: usize) -> Vec<(NaiveDate, f64)> {
    if window == 0 || series.len() < window {
        return Vec::new();
    }

    let dates = series.dates();
    let prices = series.prices();
    let divisor = (window * (window + 1)) as f64 / 2.0;

    let mut values = Vec::with_capacity(series.len() - window + 1);
    let mut weighted_sum = 0.0;
    let mut window_sum = 0.0;

    for (i, &price) in prices.iter().enumerate() {
        if i < window {
            // Filling the first window: the k-th observation gets weight k.
            weighted_sum += (i + 1) as f64 * price;
            window_sum += price;
        } else {
            weighted_sum += window as f64 * price - window_sum;
            window_sum += price - prices[i - window];
        }

        if i >= window - 1 {
            values.push((dates[i], weighted_sum / divisor));
        }
    }

    values
}
