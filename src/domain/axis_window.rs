use serde::{Deserialize, Serialize};

use crate::config::ANALYSIS;
use crate::utils::TimeUtils;

/// A `[min, max]` range of epoch-millisecond timestamps on a chart's x-axis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisWindow {
    pub min: f64,
    pub max: f64,
}

impl AxisWindow {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Window of `days` ending at `end_ms`
    pub fn ending_at(end_ms: f64, days: i64) -> Self {
        // Float maths so an oversized day count cannot overflow
        Self::new(end_ms - days as f64 * TimeUtils::MS_IN_D as f64, end_ms)
    }

    /// Longest span any window may cover
    pub fn max_span_ms() -> f64 {
        ANALYSIS.viewport.max_window_years * TimeUtils::MS_IN_JULIAN_YEAR
    }

    /// Clamp `max` so the window spans at most five years. `min` never moves.
    pub fn limit(self) -> Self {
        let (min, max) = limit_axis_window(self.min, self.max);
        Self { min, max }
    }

    pub fn span_ms(&self) -> f64 {
        self.max - self.min
    }

    /// Inclusive on both ends
    pub fn contains(&self, timestamp_ms: f64) -> bool {
        timestamp_ms >= self.min && timestamp_ms <= self.max
    }
}

/// Clamp a requested `[min, max]` window to the maximum span.
///
/// Total: inverted or negative ranges are passed through arithmetically.
pub fn limit_axis_window(min: f64, max: f64) -> (f64, f64) {
    (min, max.min(min + AxisWindow::max_span_ms()))
}
