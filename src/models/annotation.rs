use serde::{Deserialize, Serialize};

use crate::config::plot::{ANNOTATION_STYLE, ZoneColors};
use crate::config::RsiThresholds;
use crate::domain::SeriesPoint;

/// Which side of the neutral band a zone sits on
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum ZoneKind {
    /// RSI below the lower threshold (oversold)
    Buy,
    /// RSI above the upper threshold (overbought)
    Sell,
}

impl ZoneKind {
    pub fn colors(&self) -> &'static ZoneColors {
        match self {
            ZoneKind::Buy => &ANNOTATION_STYLE.buy,
            ZoneKind::Sell => &ANNOTATION_STYLE.sell,
        }
    }
}

/// A contiguous run of RSI positions on one side of the neutral band.
/// Indices point into the newest-first series and are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub start_index: usize,
    pub end_index: usize,
    pub kind: ZoneKind,
}

impl Zone {
    pub fn is_single_point(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Number of RSI positions covered
    pub fn span(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Materialize into a drawable annotation using timestamps from `points`.
    /// Returns `None` if an index falls outside `points`.
    pub fn to_annotation(&self, points: &[SeriesPoint]) -> Option<Annotation> {
        let x = points.get(self.start_index)?.timestamp_ms;
        let x2 = if self.is_single_point() {
            None
        } else {
            Some(points.get(self.end_index)?.timestamp_ms)
        };
        Some(Annotation::new(x, x2, self.kind))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    pub color: String,
    pub background: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationLabel {
    pub border_color: String,
    pub style: LabelStyle,
    pub offset_y: i32,
    pub text: String,
}

/// A highlighted x-axis region, shaped the way the chart consumes it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub x: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<f64>,
    pub kind: ZoneKind,
    pub fill_color: String,
    pub opacity: f64,
    pub label: AnnotationLabel,
}

impl Annotation {
    pub fn new(x: f64, x2: Option<f64>, kind: ZoneKind) -> Self {
        let colors = kind.colors();
        Self {
            x,
            x2,
            kind,
            fill_color: colors.border_color.to_string(),
            opacity: ANNOTATION_STYLE.fill_opacity,
            label: AnnotationLabel {
                border_color: colors.border_color.to_string(),
                style: LabelStyle {
                    color: ANNOTATION_STYLE.label_text_color.to_string(),
                    background: colors.label_background.to_string(),
                },
                offset_y: ANNOTATION_STYLE.label_offset_y,
                text: colors.label.to_string(),
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.label.text
    }
}

/// Annotations grouped by chart axis (only the x-axis is used)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AnnotationSet {
    pub xaxis: Vec<Annotation>,
}

impl AnnotationSet {
    pub fn len(&self) -> usize {
        self.xaxis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xaxis.is_empty()
    }

    pub fn count_of(&self, kind: ZoneKind) -> usize {
        self.xaxis.iter().filter(|a| a.kind == kind).count()
    }
}

/// Zone annotations plus the RSI at the most recent position
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RsiAnnotations {
    pub annotations: AnnotationSet,
    pub last_rsi: f64,
}

/// Headline reading for a single RSI value
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, strum_macros::Display,
)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    pub fn from_rsi(rsi: f64, thresholds: &RsiThresholds) -> Self {
        if rsi > thresholds.sell_above {
            Signal::Sell
        } else if rsi < thresholds.buy_below {
            Signal::Buy
        } else {
            Signal::Hold
        }
    }
}

impl From<ZoneKind> for Signal {
    fn from(kind: ZoneKind) -> Self {
        match kind {
            ZoneKind::Buy => Signal::Buy,
            ZoneKind::Sell => Signal::Sell,
        }
    }
}
