use itertools::Itertools;
use serde::Serialize;

use crate::analysis::zone_annotator::annotate_with;
use crate::config::{ANALYSIS, RsiThresholds};
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_VIEWPORT;
use crate::domain::{AxisWindow, PriceSeries, SeriesOrder, SeriesPoint};
use crate::models::{RsiAnnotations, Signal};
use crate::utils::maths_utils::finite_min_max;

/// The "current" reading shown above the chart
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub price: f64,
    pub rsi: f64,
    pub signal: Signal,
    pub timestamp_ms: f64,
}

/// Everything a chart needs to redraw after a pan or zoom
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartViewport {
    /// The requested window after limiting
    pub window: AxisWindow,
    /// Whether the request had to be shortened
    pub was_limited: bool,
    pub visible_points: usize,
    pub lookback_points: usize,
    pub annotations: Option<RsiAnnotations>,
    pub indicator: Option<Indicator>,
    /// `(floor(min), ceil(max))` of the visible prices
    pub y_range: Option<(f64, f64)>,
}

impl ChartViewport {
    /// Recompute the viewport for `requested` using the configured thresholds.
    pub fn compute(series: &PriceSeries, requested: AxisWindow, period: usize) -> Self {
        Self::compute_with(series, requested, period, &ANALYSIS.rsi.thresholds)
    }

    /// Viewport for the configured default look-back ending at the newest point.
    /// `None` for an empty series (or one whose newest timestamp is unusable).
    pub fn initial(series: &PriceSeries, period: usize) -> Option<Self> {
        let end_ms = series
            .points()
            .iter()
            .map(|p| p.timestamp_ms)
            .filter(|ts| ts.is_finite())
            .reduce(f64::max)?;
        let window = AxisWindow::ending_at(end_ms, ANALYSIS.viewport.lookback_days);
        Some(Self::compute(series, window, period))
    }

    pub fn compute_with(
        series: &PriceSeries,
        requested: AxisWindow,
        period: usize,
        thresholds: &RsiThresholds,
    ) -> Self {
        let window = requested.limit();

        // Newest first by timestamp regardless of how the series was declared
        let sorted: Vec<SeriesPoint> = series
            .points()
            .iter()
            .copied()
            .sorted_by(|a, b| b.timestamp_ms.total_cmp(&a.timestamp_ms))
            .collect();

        let visible: Vec<SeriesPoint> = sorted
            .iter()
            .copied()
            .filter(|p| window.contains(p.timestamp_ms))
            .collect();

        // Older points so the oldest visible day still gets a full RSI window
        let lookback: Vec<SeriesPoint> = sorted
            .iter()
            .copied()
            .filter(|p| p.timestamp_ms < window.min)
            .take(period)
            .collect();

        let visible_prices: Vec<f64> = visible.iter().map(|p| p.price).collect();
        let y_range = finite_min_max(&visible_prices).map(|(lo, hi)| (lo.floor(), hi.ceil()));

        let visible_points = visible.len();
        let lookback_points = lookback.len();
        let mut working = visible;
        working.extend(lookback);
        let working = PriceSeries::new(working, SeriesOrder::NewestFirst);

        let annotations = annotate_with(&working, period, thresholds);
        // A zero or NaN reading leaves the previous indicator in place on the chart
        let indicator = match (&annotations, working.latest()) {
            (Some(found), Some(newest)) if found.last_rsi != 0.0 && !found.last_rsi.is_nan() => {
                Some(Indicator {
                    price: newest.price,
                    rsi: found.last_rsi,
                    signal: Signal::from_rsi(found.last_rsi, thresholds),
                    timestamp_ms: newest.timestamp_ms,
                })
            }
            _ => None,
        };

        #[cfg(debug_assertions)]
        if PRINT_VIEWPORT {
            log::info!(
                "Viewport [{}, {}]: {} visible, {} look-back, y {:?}, {} annotations",
                window.min,
                window.max,
                visible_points,
                lookback_points,
                y_range,
                annotations.as_ref().map_or(0, |a| a.annotations.len())
            );
        }

        Self {
            window,
            was_limited: window != requested,
            visible_points,
            lookback_points,
            annotations,
            indicator,
            y_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ZoneKind;
    use crate::utils::TimeUtils;

    const DAY_MS: f64 = TimeUtils::MS_IN_D as f64;
    const JAN_1_2023: f64 = 1_672_531_200_000.0;

    fn daily(prices: &[f64]) -> PriceSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| SeriesPoint::new(JAN_1_2023 + i as f64 * DAY_MS, p))
            .collect();
        PriceSeries::new(points, SeriesOrder::OldestFirst)
    }

    fn day(n: usize) -> f64 {
        JAN_1_2023 + n as f64 * DAY_MS
    }

    #[test]
    fn test_visible_and_lookback_selection() {
        let series = daily(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0]);
        let viewport = ChartViewport::compute(&series, AxisWindow::new(day(5), day(8)), 3);

        assert_eq!(viewport.visible_points, 4);
        assert_eq!(viewport.lookback_points, 3);
        assert!(!viewport.was_limited);
        assert_eq!(viewport.y_range, Some((15.0, 18.0)));
    }

    #[test]
    fn test_lookback_is_capped_by_available_history() {
        let series = daily(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let viewport = ChartViewport::compute(&series, AxisWindow::new(day(1), day(4)), 3);
        assert_eq!(viewport.visible_points, 4);
        assert_eq!(viewport.lookback_points, 1);
    }

    #[test]
    fn test_rising_window_reports_sell_indicator() {
        let series = daily(&[10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0, 17.0, 18.0, 19.0]);
        let viewport = ChartViewport::compute(&series, AxisWindow::new(day(5), day(9)), 3);

        let annotations = viewport.annotations.expect("rising prices annotate");
        assert_eq!(annotations.annotations.count_of(ZoneKind::Sell), 1);

        let indicator = viewport.indicator.expect("indicator");
        assert_eq!(indicator.price, 19.0);
        assert_eq!(indicator.timestamp_ms, day(9));
        assert_eq!(indicator.signal, Signal::Sell);
    }

    #[test]
    fn test_flat_window_has_no_indicator() {
        let series = daily(&[50.0; 20]);
        let viewport = ChartViewport::compute(&series, AxisWindow::new(day(10), day(19)), 3);
        assert!(viewport.annotations.is_none());
        assert!(viewport.indicator.is_none());
        assert_eq!(viewport.y_range, Some((50.0, 50.0)));
    }

    #[test]
    fn test_oversized_request_is_limited() {
        let series = daily(&[1.0, 2.0, 3.0]);
        let requested = AxisWindow::new(0.0, 10.0 * TimeUtils::MS_IN_JULIAN_YEAR);
        let viewport = ChartViewport::compute(&series, requested, 3);
        assert!(viewport.was_limited);
        assert_eq!(viewport.window.max, 5.0 * TimeUtils::MS_IN_JULIAN_YEAR);
    }

    #[test]
    fn test_empty_window() {
        let series = daily(&[1.0, 2.0, 3.0]);
        let viewport = ChartViewport::compute(&series, AxisWindow::new(day(50), day(60)), 3);
        assert_eq!(viewport.visible_points, 0);
        assert_eq!(viewport.lookback_points, 3);
        assert_eq!(viewport.y_range, None);
    }

    #[test]
    fn test_initial_window_ends_at_newest_point() {
        let prices: Vec<f64> = (0..200).map(|i| 100.0 + (i % 7) as f64).collect();
        let viewport = ChartViewport::initial(&daily(&prices), 7).expect("non-empty series");
        assert_eq!(viewport.window.max, day(199));
        assert_eq!(viewport.visible_points, 91);
        assert_eq!(viewport.lookback_points, 7);
        assert!(ChartViewport::initial(&daily(&[]), 7).is_none());
    }

    #[test]
    fn test_declared_order_does_not_matter() {
        let series = daily(&[10.0, 9.0, 8.0, 9.5, 7.0, 6.0, 5.0, 5.5]);
        let window = AxisWindow::new(day(2), day(7));
        assert_eq!(
            ChartViewport::compute(&series, window, 2),
            ChartViewport::compute(&series.newest_first(), window, 2)
        );
    }

    #[test]
    fn test_steep_fall_reads_zero_and_has_no_indicator() {
        let prices: Vec<f64> = (0..20).map(|i| 200.0 - 5.0 * i as f64).collect();
        let window = AxisWindow::new(day(10), day(19));
        let viewport = ChartViewport::compute(&daily(&prices), window, 3);

        let annotations = viewport.annotations.expect("falling prices annotate");
        assert_eq!(annotations.annotations.count_of(ZoneKind::Buy), 1);
        assert_eq!(annotations.annotations.count_of(ZoneKind::Sell), 0);
        assert_eq!(annotations.last_rsi, 0.0);
        assert!(viewport.indicator.is_none());
    }
}
