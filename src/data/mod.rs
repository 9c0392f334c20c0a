// Decoding of already-fetched price documents
pub mod alpha_vantage;

// Re-export commonly used types
pub use alpha_vantage::{DailyBar, DailySeries, MetaData};
