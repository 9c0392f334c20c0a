// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use analysis::{
    ChartViewport, Indicator, RsiSeries, ScreenerRow, SymbolSeries, annotate, compute_rsi, screen,
};
pub use data::DailySeries;
pub use domain::{AxisWindow, PriceRow, PriceSeries, SeriesOrder, SeriesPoint, limit_axis_window, transform};
pub use models::{Annotation, AnnotationSet, RsiAnnotations, Signal, Zone, ZoneKind};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Daily price documents (JSON). One file prints a chart viewport, several print a screener table
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// RSI look-back period in days
    #[arg(long, default_value_t = config::ANALYSIS.rsi.period)]
    pub period: usize,

    /// Width of the chart window in days
    #[arg(long, default_value_t = config::ANALYSIS.viewport.lookback_days)]
    pub lookback_days: i64,

    /// Last day of the chart window (YYYY-MM-DD); defaults to the newest bar
    #[arg(long)]
    pub end: Option<String>,

    /// Pretty-print the JSON report
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}
