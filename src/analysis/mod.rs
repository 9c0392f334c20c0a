// Indicator computation and chart annotation
pub mod rsi;
pub mod screener;
pub mod viewport;
pub mod zone_annotator;

// Re-export commonly used types
pub use rsi::{RsiSeries, compute_rsi};
pub use screener::{ScreenerRow, SymbolSeries, screen};
pub use viewport::{ChartViewport, Indicator};
pub use zone_annotator::{annotate, annotate_with, find_zones};
