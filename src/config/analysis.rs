//! Indicator and chart-window configuration

/// RSI band boundaries. Readings strictly below `buy_below` are buy territory,
/// strictly above `sell_above` are sell territory, everything else is neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiThresholds {
    pub buy_below: f64,
    pub sell_above: f64,
}

/// Settings for the RSI stream
pub struct RsiSettings {
    // Look-back window (number of daily changes averaged per reading)
    pub period: usize,
    pub thresholds: RsiThresholds,
}

/// Settings for the chart viewing window
pub struct ViewportSettings {
    // Initial window shown when no explicit range is requested
    pub lookback_days: i64,
    // Hard cap on the span of any window (Julian years)
    pub max_window_years: f64,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub rsi: RsiSettings,
    pub viewport: ViewportSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    rsi: RsiSettings {
        period: 7,
        thresholds: RsiThresholds {
            buy_below: 30.0,
            sell_above: 70.0,
        },
    },

    viewport: ViewportSettings {
        lookback_days: 90,
        max_window_years: 5.0,
    },
};
