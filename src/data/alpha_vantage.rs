use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Deserialize, Serialize};

#[cfg(debug_assertions)]
use crate::config::debug::PRINT_SERDE;
use crate::domain::{PriceRow, PriceSeries, SeriesOrder, transform};

/// Marker the provider puts in `"1. Information"` for daily documents
const DAILY_INFORMATION: &str = "Daily Prices";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MetaData {
    #[serde(rename = "1. Information", default)]
    pub information: String,
    #[serde(rename = "2. Symbol", default)]
    pub symbol: String,
    #[serde(rename = "3. Last Refreshed", default)]
    pub last_refreshed: String,
    #[serde(rename = "4. Output Size", default)]
    pub output_size: String,
    #[serde(rename = "5. Time Zone", default)]
    pub time_zone: String,
}

/// One day's bar, values kept as the provider's strings
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DailyBar {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    // Only present on the adjusted endpoint, which shifts volume to "6."
    #[serde(rename = "5. adjusted close", default)]
    pub adjusted_close: Option<String>,
    #[serde(rename = "5. volume", alias = "6. volume", default)]
    pub volume: Option<String>,
}

/// Raw document shape. Error responses carry one of the message keys instead of the series.
#[derive(Deserialize, Debug)]
struct RawDailyDocument {
    #[serde(rename = "Meta Data")]
    meta_data: Option<MetaData>,
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<BTreeMap<String, DailyBar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// A decoded daily price document. Bars are keyed by `YYYY-MM-DD`, so the
/// map iterates oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    pub meta_data: MetaData,
    pub bars: BTreeMap<String, DailyBar>,
}

impl DailySeries {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDailyDocument =
            serde_json::from_str(json).context("Failed to decode daily price document")?;
        Self::from_raw(raw)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open price file: {:?}", path))?;
        let raw: RawDailyDocument = serde_json::from_reader(BufReader::new(file))
            .context(format!("Failed to decode daily price document: {:?}", path))?;
        Self::from_raw(raw).context(format!("Rejected price file: {:?}", path))
    }

    fn from_raw(raw: RawDailyDocument) -> Result<Self> {
        if let Some(message) = raw.error_message.or(raw.note).or(raw.information) {
            bail!("Provider returned no data: {}", message);
        }
        let bars = raw
            .time_series
            .ok_or_else(|| anyhow!("Unexpected data structure returned"))?;
        let meta_data = raw.meta_data.unwrap_or_default();

        if !meta_data.information.is_empty() && !meta_data.information.contains(DAILY_INFORMATION) {
            log::warn!(
                "Document for {:?} does not look like a daily series: {:?}",
                meta_data.symbol,
                meta_data.information
            );
        }

        #[cfg(debug_assertions)]
        if PRINT_SERDE {
            log::info!(
                "Decoded {} daily bars for {:?} (last refreshed {:?})",
                bars.len(),
                meta_data.symbol,
                meta_data.last_refreshed
            );
        }

        Ok(Self { meta_data, bars })
    }

    pub fn symbol(&self) -> &str {
        &self.meta_data.symbol
    }

    pub fn is_adjusted(&self) -> bool {
        self.bars.values().any(|bar| bar.adjusted_close.is_some())
    }

    /// Rows oldest first. Unadjusted documents fall back to the close price.
    pub fn rows(&self) -> Vec<PriceRow> {
        self.bars
            .iter()
            .map(|(date, bar)| PriceRow {
                date: date.clone(),
                adjusted_close: bar.adjusted_close.clone().unwrap_or_else(|| bar.close.clone()),
                open: Some(bar.open.clone()),
                high: Some(bar.high.clone()),
                low: Some(bar.low.clone()),
                close: Some(bar.close.clone()),
                volume: bar.volume.clone(),
            })
            .collect()
    }

    /// The document as an oldest-first `[timestamp, price]` series
    pub fn to_series(&self) -> PriceSeries {
        transform(&self.rows(), SeriesOrder::OldestFirst)
    }
}
