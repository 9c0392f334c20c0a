use serde::{Deserialize, Serialize};

use crate::domain::price_row::PriceRow;
use crate::utils::maths_utils::{parse_price, round_to_cents};
use crate::utils::time_utils::date_to_timestamp_ms;

// ============================================================================
// SeriesPoint / SeriesOrder
// ============================================================================

/// A single `[timestamp, price]` pair.
///
/// Both fields are `f64` so a malformed date or price travels through the
/// pipeline as `NaN` instead of dropping the row.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp_ms: f64,
    pub price: f64,
}

impl SeriesPoint {
    pub fn new(timestamp_ms: f64, price: f64) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }
}

/// Chronological direction of a series.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum SeriesOrder {
    /// Index 0 is the latest day. This is what the RSI engine walks.
    #[default]
    NewestFirst,
    /// Index 0 is the earliest day. This is what a chart draws.
    OldestFirst,
}

// ============================================================================
// PriceSeries: ordered points tagged with their direction
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    points: Vec<SeriesPoint>,
    order: SeriesOrder,
}

impl PriceSeries {
    /// Wrap points whose direction the caller vouches for. The order is not checked.
    pub fn new(points: Vec<SeriesPoint>, order: SeriesOrder) -> Self {
        Self { points, order }
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn order(&self) -> SeriesOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    /// The same points in the requested direction (reversed if needed)
    pub fn in_order(&self, order: SeriesOrder) -> PriceSeries {
        if self.order == order {
            return self.clone();
        }
        let mut points = self.points.clone();
        points.reverse();
        PriceSeries::new(points, order)
    }

    pub fn newest_first(&self) -> PriceSeries {
        self.in_order(SeriesOrder::NewestFirst)
    }

    /// Latest point by position (respecting the order tag), not by timestamp value.
    pub fn latest(&self) -> Option<&SeriesPoint> {
        match self.order {
            SeriesOrder::NewestFirst => self.points.first(),
            SeriesOrder::OldestFirst => self.points.last(),
        }
    }
}

/// Convert raw daily rows into a `[timestamp, price]` series.
///
/// Length and order are preserved one-to-one; `order` states which direction
/// the rows arrived in. Prices are rounded to cents.
pub fn transform(rows: &[PriceRow], order: SeriesOrder) -> PriceSeries {
    let points = rows
        .iter()
        .map(|row| {
            SeriesPoint::new(
                date_to_timestamp_ms(&row.date),
                round_to_cents(parse_price(&row.adjusted_close)),
            )
        })
        .collect();

    PriceSeries::new(points, order)
}
