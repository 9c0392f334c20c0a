use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = Self::MS_IN_S * 60;
    pub const MS_IN_H: i64 = Self::MS_IN_MIN * 60;
    pub const MS_IN_D: i64 = Self::MS_IN_H * 24;
    // Julian year, so leap days average out over a multi-year window
    pub const MS_IN_JULIAN_YEAR: f64 = 365.25 * Self::MS_IN_D as f64;
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Parse a price-row date into epoch milliseconds.
///
/// Bare dates (`2023-01-01`) are read as UTC midnight. RFC 3339 strings keep
/// their offset and `YYYY-MM-DD HH:MM:SS` is read as UTC.
/// Anything else yields `NaN` so the point still occupies its slot in the series.
pub fn date_to_timestamp_ms(date: &str) -> f64 {
    let date = date.trim();

    if let Ok(day) = NaiveDate::parse_from_str(date, TimeUtils::STANDARD_TIME_FORMAT) {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return midnight.and_utc().timestamp_millis() as f64;
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(date) {
        return dt.timestamp_millis() as f64;
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(date, TimeUtils::DATE_TIME_FORMAT) {
        return naive.and_utc().timestamp_millis() as f64;
    }

    log::warn!("Unparseable price date {:?}", date);
    f64::NAN
}

/// Format epoch milliseconds as `YYYY-MM-DD` (UTC). Used for display and CLI output.
pub fn epoch_ms_to_utc(epoch_ms: f64) -> String {
    if !epoch_ms.is_finite() {
        return String::new();
    }
    match DateTime::from_timestamp_millis(epoch_ms as i64) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}
