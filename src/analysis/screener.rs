use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::rsi::compute_rsi;
use crate::analysis::zone_annotator::annotate_with;
use crate::config::{ANALYSIS, RsiThresholds};
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SCREENER_PROGRESS;
use crate::domain::PriceSeries;
use crate::models::Signal;

/// One symbol's price history, ready to screen
#[derive(Debug, Clone)]
pub struct SymbolSeries {
    pub symbol: String,
    pub series: PriceSeries,
}

impl SymbolSeries {
    pub fn new(symbol: impl Into<String>, series: PriceSeries) -> Self {
        Self {
            symbol: symbol.into(),
            series,
        }
    }
}

/// Current RSI reading for a single symbol
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerRow {
    pub symbol: String,
    pub last_price: Option<f64>,
    pub last_rsi: Option<f64>,
    pub signal: Signal,
    /// Buy/sell zones found over the whole history
    pub zone_count: usize,
}

/// Screen every symbol in parallel with the configured thresholds.
///
/// Rows are ordered by RSI ascending (most oversold first); symbols without a
/// usable reading go last, by name.
pub fn screen(symbols: &[SymbolSeries], period: usize) -> Vec<ScreenerRow> {
    screen_with(symbols, period, &ANALYSIS.rsi.thresholds)
}

pub fn screen_with(
    symbols: &[SymbolSeries],
    period: usize,
    thresholds: &RsiThresholds,
) -> Vec<ScreenerRow> {
    let mut rows: Vec<ScreenerRow> = symbols
        .par_iter()
        .map(|entry| screen_one(entry, period, thresholds))
        .collect();

    rows.sort_by(|a, b| match (a.last_rsi, b.last_rsi) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.symbol.cmp(&b.symbol)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.symbol.cmp(&b.symbol),
    });
    rows
}

fn screen_one(entry: &SymbolSeries, period: usize, thresholds: &RsiThresholds) -> ScreenerRow {
    let series = entry.series.newest_first();
    let last_rsi = compute_rsi(&series, period)
        .latest()
        .filter(|rsi| !rsi.is_nan());
    let zone_count = annotate_with(&series, period, thresholds)
        .map_or(0, |found| found.annotations.len());

    #[cfg(debug_assertions)]
    if PRINT_SCREENER_PROGRESS {
        log::info!(
            "Screened {}: rsi {:?}, {} zones",
            entry.symbol,
            last_rsi,
            zone_count
        );
    }

    ScreenerRow {
        symbol: entry.symbol.clone(),
        last_price: series.latest().map(|p| p.price),
        last_rsi,
        signal: last_rsi.map_or(Signal::Hold, |rsi| Signal::from_rsi(rsi, thresholds)),
        zone_count,
    }
}
