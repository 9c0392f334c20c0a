// Domain types and value objects
pub mod axis_window;
pub mod price_row;
pub mod series;

// Re-export commonly used types
pub use axis_window::{AxisWindow, limit_axis_window};
pub use price_row::PriceRow;
pub use series::{PriceSeries, SeriesOrder, SeriesPoint, transform};
