//! Configuration module for the RSI zone engine.

pub mod analysis;
pub mod debug;
pub mod plot;

// Re-export commonly used items
pub use analysis::{ANALYSIS, RsiThresholds};
pub use plot::ANNOTATION_STYLE;
