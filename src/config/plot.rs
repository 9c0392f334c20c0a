//! Annotation styling handed to the charting component

/// Colors and label text for one zone kind
pub struct ZoneColors {
    pub label: &'static str,
    /// Used both as the region fill and the label border
    pub border_color: &'static str,
    pub label_background: &'static str,
}

pub struct AnnotationStyleConfig {
    pub buy: ZoneColors,
    pub sell: ZoneColors,
    /// Region fill opacity (0.0 = invisible, 1.0 = fully opaque)
    pub fill_opacity: f64,
    pub label_text_color: &'static str,
    /// Vertical label offset in pixels (negative = above the axis)
    pub label_offset_y: i32,
}

pub const ANNOTATION_STYLE: AnnotationStyleConfig = AnnotationStyleConfig {
    buy: ZoneColors {
        label: "Buy",
        border_color: "#B3F7CA",     // Pale green
        label_background: "#00E396", // Green
    },
    sell: ZoneColors {
        label: "Sell",
        border_color: "#FF3D3D",     // Light red
        label_background: "#D50000", // Red
    },
    fill_opacity: 0.4,
    label_text_color: "#fff",
    label_offset_y: -10,
};
