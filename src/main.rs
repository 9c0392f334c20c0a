use std::time::Instant;

use anyhow::{Result, bail};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;

use rsi_zones::utils::time_utils::{date_to_timestamp_ms, epoch_ms_to_utc};
use rsi_zones::{AxisWindow, ChartViewport, Cli, DailySeries, ScreenerRow, SymbolSeries, screen};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewportReport {
    symbol: String,
    window_start: String,
    window_end: String,
    viewport: ChartViewport,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScreenerReport {
    period: usize,
    rows: Vec<ScreenerRow>,
}

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    if args.period == 0 {
        bail!("--period must be at least 1");
    }
    if args.lookback_days <= 0 {
        bail!("--lookback-days must be positive");
    }

    // C. Load documents
    let start_time = Instant::now();
    let documents: Vec<DailySeries> = args
        .files
        .par_iter()
        .map(|path| DailySeries::load_from_path(path))
        .collect::<Result<_>>()?;
    log::info!(
        "Loaded {} price document(s) in {:?}",
        documents.len(),
        start_time.elapsed()
    );

    // D. Report
    let json = match documents.as_slice() {
        [single] => {
            let report = viewport_report(single, &args)?;
            to_json(&report, args.pretty)?
        }
        many => {
            let symbols: Vec<SymbolSeries> = many
                .iter()
                .map(|doc| SymbolSeries::new(doc.symbol(), doc.to_series()))
                .collect();
            let report = ScreenerReport {
                period: args.period,
                rows: screen(&symbols, args.period),
            };
            to_json(&report, args.pretty)?
        }
    };

    println!("{}", json);
    Ok(())
}

fn viewport_report(document: &DailySeries, args: &Cli) -> Result<ViewportReport> {
    let series = document.to_series();
    if series.is_empty() {
        bail!("No daily bars for {:?}", document.symbol());
    }

    let end_ms = match &args.end {
        Some(end) => date_to_timestamp_ms(end),
        None => series.latest().map_or(f64::NAN, |p| p.timestamp_ms),
    };
    if end_ms.is_nan() {
        match &args.end {
            Some(end) => bail!("Invalid --end date {:?}, expected YYYY-MM-DD", end),
            None => bail!("Newest bar for {:?} has no usable date", document.symbol()),
        }
    }
    let window = AxisWindow::ending_at(end_ms, args.lookback_days);
    let viewport = ChartViewport::compute(&series, window, args.period);

    if viewport.annotations.is_none() {
        log::info!("No RSI zones in the window for {}", document.symbol());
    }

    Ok(ViewportReport {
        symbol: document.symbol().to_string(),
        window_start: epoch_ms_to_utc(viewport.window.min),
        window_end: epoch_ms_to_utc(viewport.window.max),
        viewport,
    })
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
