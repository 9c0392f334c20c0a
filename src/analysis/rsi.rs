use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_RSI_WINDOWS;
use crate::domain::PriceSeries;

/// RSI readings aligned to a newest-first series.
///
/// `values[k]` is the reading at newest-first position `k`; its window covers
/// positions `k..=k + period`. There are `len - period` readings for a series
/// of `len` points, and none at all when `len <= period`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct RsiSeries {
    pub period: usize,
    pub values: Vec<f64>,
}

impl RsiSeries {
    /// Reading at newest-first position `index`, if that position has a full window
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Reading at position 0 (the most recent day)
    pub fn latest(&self) -> Option<f64> {
        self.get(0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Simplified Wilder RSI: plain means over a sliding window of `period` daily changes.
///
/// The series is walked newest-first whatever its declared order. Where a
/// window is all one direction, the missing side is filled with
/// `f64::EPSILON` instead of zero, so the ratio never divides by zero. A flat
/// day counts as an epsilon loss against an epsilon gain, so a perfectly
/// flat window reads exactly 50. One-directional windows saturate near 0 or 100.
///
/// Never fails. `period == 0` or too few points gives an empty result.
pub fn compute_rsi(series: &PriceSeries, period: usize) -> RsiSeries {
    let mut rsi = RsiSeries {
        period,
        values: Vec::new(),
    };
    if period == 0 || series.len() <= period {
        return rsi;
    }

    let prices = series.newest_first().prices();
    let mut gains: Vec<f64> = Vec::with_capacity(prices.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(prices.len() - 1);
    rsi.values.reserve(prices.len() - period);

    for i in 1..prices.len() {
        // Positive means the later day closed higher
        let change = prices[i - 1] - prices[i];
        if change > 0.0 {
            gains.push(change);
            losses.push(-f64::EPSILON);
        } else {
            gains.push(f64::EPSILON);
            losses.push(if change == 0.0 { -f64::EPSILON } else { change });
        }

        if i >= period {
            let start = i - period;
            let avg_gain = gains[start..i].iter().sum::<f64>() / period as f64;
            // Losses are stored negative; negate for a positive magnitude
            let avg_loss = -losses[start..i].iter().sum::<f64>() / period as f64;
            let rs = avg_gain / avg_loss;
            let value = 100.0 - (100.0 / (1.0 + rs));

            #[cfg(debug_assertions)]
            if PRINT_RSI_WINDOWS {
                log::info!(
                    "RSI[{}] = {:.4} (avg gain {:.6}, avg loss {:.6})",
                    start,
                    value,
                    avg_gain,
                    avg_loss
                );
            }
            rsi.values.push(value);
        }
    }

    rsi
}
