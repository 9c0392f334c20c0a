use serde::{Deserialize, Serialize};

/// One day of raw price data as delivered by the data-fetch layer.
///
/// Every numeric field is still text; only `date` and `adjusted_close` are
/// read by the series transform.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PriceRow {
    pub date: String,
    pub adjusted_close: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

impl PriceRow {
    // A constructor for the two fields the engine actually needs
    pub fn new(date: impl Into<String>, adjusted_close: impl Into<String>) -> Self {
        PriceRow {
            date: date.into(),
            adjusted_close: adjusted_close.into(),
            ..Default::default()
        }
    }
}
