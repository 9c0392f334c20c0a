use crate::analysis::rsi::{RsiSeries, compute_rsi};
use crate::config::{ANALYSIS, RsiThresholds};
#[cfg(debug_assertions)]
use crate::config::debug::PRINT_ZONE_EMITS;
use crate::domain::PriceSeries;
use crate::models::{AnnotationSet, RsiAnnotations, Zone, ZoneKind};

/// Where a single reading falls relative to the neutral band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Oversold,
    Overbought,
    Neutral,
}

impl Band {
    // Missing and NaN readings fail both comparisons and land in Neutral
    fn classify(value: Option<f64>, thresholds: &RsiThresholds) -> Self {
        match value {
            Some(v) if v < thresholds.buy_below => Band::Oversold,
            Some(v) if v > thresholds.sell_above => Band::Overbought,
            _ => Band::Neutral,
        }
    }
}

/// Start and current end of an in-progress zone
#[derive(Debug, Clone, Copy)]
struct Slider {
    kind: ZoneKind,
    initial: Option<usize>,
    prev: Option<usize>,
}

impl Slider {
    fn new(kind: ZoneKind) -> Self {
        Self {
            kind,
            initial: None,
            prev: None,
        }
    }

    /// Slide the end forward if `index` directly follows it, or open a run at `index`
    fn advance(&mut self, index: usize) {
        if index.checked_sub(1).is_some_and(|before| self.prev == Some(before)) {
            self.prev = Some(index);
        }
        if self.initial.is_none() {
            self.initial = Some(index);
            self.prev = Some(index);
        }
    }

    /// Close the run (if any) and reset
    fn take(&mut self) -> Option<Zone> {
        let start_index = self.initial.take()?;
        let end_index = self.prev.take().unwrap_or(start_index);
        Some(Zone {
            start_index,
            end_index,
            kind: self.kind,
        })
    }
}

/// Single pass over the RSI positions of a `len`-point series, merging
/// contiguous readings in the same band into zones. Zones come out in the
/// order they are closed.
pub fn find_zones(rsi: &RsiSeries, len: usize, thresholds: &RsiThresholds) -> Vec<Zone> {
    let mut zones = Vec::new();
    if len < rsi.period {
        return zones;
    }

    let mut buy = Slider::new(ZoneKind::Buy);
    let mut sell = Slider::new(ZoneKind::Sell);

    // The final position has no reading and therefore closes whatever is open
    for i in 0..=(len - rsi.period) {
        match Band::classify(rsi.get(i), thresholds) {
            Band::Oversold => {
                zones.extend(sell.take());
                buy.advance(i);
            }
            Band::Overbought => {
                zones.extend(buy.take());
                sell.advance(i);
            }
            Band::Neutral => {
                zones.extend(buy.take());
                zones.extend(sell.take());
            }
        }
    }

    zones.extend(buy.take());
    zones.extend(sell.take());
    zones
}

/// Buy/sell zone annotations for `series` using the configured thresholds.
///
/// Returns `None` when no zone was found (including every series shorter than
/// `period + 1`); otherwise the annotations and the RSI at the most recent day.
pub fn annotate(series: &PriceSeries, period: usize) -> Option<RsiAnnotations> {
    annotate_with(series, period, &ANALYSIS.rsi.thresholds)
}

pub fn annotate_with(
    series: &PriceSeries,
    period: usize,
    thresholds: &RsiThresholds,
) -> Option<RsiAnnotations> {
    let newest_first = series.newest_first();
    let rsi = compute_rsi(&newest_first, period);
    let zones = find_zones(&rsi, newest_first.len(), thresholds);

    let xaxis: Vec<_> = zones
        .iter()
        .filter_map(|zone| {
            #[cfg(debug_assertions)]
            if PRINT_ZONE_EMITS {
                log::info!(
                    "{} zone over positions {}..={}",
                    zone.kind,
                    zone.start_index,
                    zone.end_index
                );
            }
            zone.to_annotation(newest_first.points())
        })
        .collect();

    if xaxis.is_empty() {
        return None;
    }

    Some(RsiAnnotations {
        annotations: AnnotationSet { xaxis },
        last_rsi: rsi.latest()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeriesOrder, SeriesPoint};

    const DAY_MS: f64 = 86_400_000.0;
    const JAN_1_2023: f64 = 1_672_531_200_000.0;

    fn oldest_first(prices: &[f64]) -> PriceSeries {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &p)| SeriesPoint::new(JAN_1_2023 + i as f64 * DAY_MS, p))
            .collect();
        PriceSeries::new(points, SeriesOrder::OldestFirst)
    }

    fn rsi_of(values: &[f64], period: usize) -> RsiSeries {
        RsiSeries {
            period,
            values: values.to_vec(),
        }
    }

    fn zone(start_index: usize, end_index: usize, kind: ZoneKind) -> Zone {
        Zone {
            start_index,
            end_index,
            kind,
        }
    }

    #[test]
    fn test_rising_series_gives_one_sell_zone() {
        let series = oldest_first(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
        let result = annotate(&series.newest_first(), 3).expect("annotations expected");

        assert_eq!(result.annotations.len(), 1);
        let sell = &result.annotations.xaxis[0];
        assert_eq!(sell.kind, ZoneKind::Sell);
        // Newest-first positions 0..=2 are Jan 6 back to Jan 4
        assert_eq!(sell.x, JAN_1_2023 + 5.0 * DAY_MS);
        assert_eq!(sell.x2, Some(JAN_1_2023 + 3.0 * DAY_MS));
        assert!((result.last_rsi - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_declared_order_does_not_change_result() {
        let series = oldest_first(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
        assert_eq!(annotate(&series, 3), annotate(&series.newest_first(), 3));
    }

    #[test]
    fn test_flat_series_gives_none() {
        for len in 4..12 {
            let series = oldest_first(&vec![100.0; len]);
            assert_eq!(annotate(&series, 3), None, "flat series of {} points", len);
        }
    }

    #[test]
    fn test_short_series_gives_none() {
        assert_eq!(annotate(&oldest_first(&[]), 3), None);
        assert_eq!(annotate(&oldest_first(&[100.0]), 3), None);
        assert_eq!(annotate(&oldest_first(&[100.0, 101.0]), 3), None);
        assert_eq!(annotate(&oldest_first(&[100.0, 101.0, 102.0]), 3), None);
    }

    #[test]
    fn test_falling_series_gives_buy_zone() {
        let series = oldest_first(&[110.0, 108.0, 107.0, 105.0, 101.0, 100.0, 99.0]);
        let result = annotate(&series, 3).expect("annotations expected");
        assert_eq!(result.annotations.count_of(ZoneKind::Buy), 1);
        assert_eq!(result.annotations.count_of(ZoneKind::Sell), 0);
        assert!(result.last_rsi < 1.0);
    }

    #[test]
    fn test_neutral_reading_closes_both_runs() {
        let zones = find_zones(&rsi_of(&[20.0, 25.0, 50.0, 80.0], 2), 6, &ANALYSIS.rsi.thresholds);
        assert_eq!(
            zones,
            vec![zone(0, 1, ZoneKind::Buy), zone(3, 3, ZoneKind::Sell)]
        );
    }

    #[test]
    fn test_direct_flip_closes_opposite_run_first() {
        let zones = find_zones(
            &rsi_of(&[80.0, 90.0, 10.0, 15.0, 75.0], 1),
            6,
            &ANALYSIS.rsi.thresholds,
        );
        assert_eq!(
            zones,
            vec![
                zone(0, 1, ZoneKind::Sell),
                zone(2, 3, ZoneKind::Buy),
                zone(4, 4, ZoneKind::Sell),
            ]
        );
    }

    #[test]
    fn test_nan_reading_is_neutral() {
        let zones = find_zones(
            &rsi_of(&[10.0, f64::NAN, 10.0], 1),
            4,
            &ANALYSIS.rsi.thresholds,
        );
        assert_eq!(
            zones,
            vec![zone(0, 0, ZoneKind::Buy), zone(2, 2, ZoneKind::Buy)]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let zones = find_zones(&rsi_of(&[30.0, 70.0], 1), 3, &ANALYSIS.rsi.thresholds);
        assert!(zones.is_empty());
    }

    #[test]
    fn test_zones_never_overlap() {
        let readings = [5.0, 5.0, 95.0, 50.0, 95.0, 95.0, 5.0, 50.0, 5.0];
        let zones = find_zones(&rsi_of(&readings, 1), readings.len() + 1, &ANALYSIS.rsi.thresholds);
        let mut covered = vec![false; readings.len()];
        for z in &zones {
            assert!(z.start_index <= z.end_index);
            for slot in &mut covered[z.start_index..=z.end_index] {
                assert!(!*slot, "positions covered twice");
                *slot = true;
            }
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let series = oldest_first(&[10.0, 11.0, 10.0, 11.0, 10.5, 11.0, 11.5]);
        let wide = RsiThresholds {
            buy_below: 0.0,
            sell_above: 100.0,
        };
        assert_eq!(annotate_with(&series, 2, &wide), None);
        let narrow = RsiThresholds {
            buy_below: 50.0,
            sell_above: 50.0,
        };
        assert!(annotate_with(&series, 2, &narrow).is_some());
    }

    #[test]
    fn test_idempotent() {
        let series = oldest_first(&[10.0, 12.0, 9.0, 14.0, 15.0, 16.0, 11.0, 8.0, 7.0]);
        assert_eq!(annotate(&series, 3), annotate(&series, 3));
    }
}
