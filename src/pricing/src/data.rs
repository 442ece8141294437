use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::PrimitiveDateTime;

/// Reserved value for an average or price that could not be computed.
pub const PRICE_SENTINEL: f32 = -1.0;

// Feed timestamps share a fixed `YYYY-MM-DDTHH:MM:SS` prefix; fractional
// seconds and timezone suffixes vary between feed revisions and are ignored.
const TIMESTAMP_PREFIX_LEN: usize = 19;
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const HHMM_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// One quoted price for one 15-minute delivery period.
///
/// Entries arrive in caller order; nothing here re-sorts them or checks the
/// grid spacing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PriceEntry {
    #[serde(rename = "DateTime", deserialize_with = "timestamp_from_feed")]
    pub timestamp: PrimitiveDateTime,
    // Price can be negative .. that happens, sometimes
    #[serde(rename = "PriceWithTax", default)]
    pub price: f32,
}

impl PriceEntry {
    pub fn new(timestamp: PrimitiveDateTime, price: f32) -> Self {
        Self { timestamp, price }
    }
}

/// Result of one analysis pass over a price series.
///
/// Averages hold [`PRICE_SENTINEL`] and labels are empty while undefined;
/// `valid` is set only once every field carries a usable value.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceAnalysis {
    pub next_window_avg: f32,
    pub cheapest_window_avg: f32,
    pub cheapest_window_start: String,
    pub current_period_start: String,
    pub cheapest_is_later: bool,
    pub valid: bool,
}

impl Default for PriceAnalysis {
    fn default() -> Self {
        PriceAnalysis {
            next_window_avg: PRICE_SENTINEL,
            cheapest_window_avg: PRICE_SENTINEL,
            cheapest_window_start: String::new(),
            current_period_start: String::new(),
            cheapest_is_later: false,
            valid: false,
        }
    }
}

/// Best admissible 90-minute window found in a series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheapestWindow {
    pub average: f32,
    pub start_index: usize,
}

/// Parse the date/time prefix of a feed timestamp.
pub fn parse_timestamp(raw: &str) -> Result<PrimitiveDateTime> {
    let prefix = raw.get(..TIMESTAMP_PREFIX_LEN).unwrap_or(raw);
    PrimitiveDateTime::parse(prefix, TIMESTAMP_FORMAT)
        .with_context(|| format!("unparseable feed timestamp {raw:?}"))
}

/// `HH:MM` rendering used for period labels on the display.
pub fn hhmm_label(timestamp: PrimitiveDateTime) -> String {
    timestamp.format(HHMM_FORMAT).unwrap_or_default()
}

fn timestamp_from_feed<'de, D>(deserializer: D) -> Result<PrimitiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_parse_plain_timestamp() {
        let parsed = parse_timestamp("2025-11-15T14:30:00").unwrap();
        assert_eq!(parsed, datetime!(2025-11-15 14:30));
    }

    #[test]
    fn test_parse_timestamp_with_fraction_and_offset() {
        let parsed = parse_timestamp("2025-11-15T14:30:00.000+02:00").unwrap();
        assert_eq!(parsed, datetime!(2025-11-15 14:30));
    }

    #[test]
    fn test_parse_timestamp_with_zulu_suffix() {
        let parsed = parse_timestamp("2025-11-15T22:00:00Z").unwrap();
        assert_eq!(parsed, datetime!(2025-11-15 22:00));
    }

    #[test]
    fn test_parse_garbage_timestamp_fails() {
        assert!(parse_timestamp("not a timestamp").is_err());
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2025-13-40T99:99:99").is_err());
    }

    #[test]
    fn test_hhmm_label() {
        assert_eq!(hhmm_label(datetime!(2025-11-15 09:05)), "09:05");
        assert_eq!(hhmm_label(datetime!(2025-11-15 21:30:59)), "21:30");
    }

    #[test]
    fn test_entry_from_feed_object() {
        let entry: PriceEntry =
            serde_json::from_str(r#"{"DateTime":"2025-11-15T10:15:00","PriceWithTax":0.1234}"#)
                .unwrap();
        assert_eq!(entry.timestamp, datetime!(2025-11-15 10:15));
        assert!((entry.price - 0.1234).abs() < 1e-6);
    }

    #[test]
    fn test_entry_missing_price_defaults_to_zero() {
        let entry: PriceEntry =
            serde_json::from_str(r#"{"DateTime":"2025-11-15T10:15:00"}"#).unwrap();
        assert_eq!(entry.price, 0.0);
    }

    #[test]
    fn test_entry_extra_feed_fields_are_ignored() {
        let entry: PriceEntry = serde_json::from_str(
            r#"{"Rank":7,"DateTime":"2025-11-15T10:15:00","PriceWithTax":-0.002}"#,
        )
        .unwrap();
        assert!(entry.price < 0.0);
    }

    #[test]
    fn test_entry_bad_timestamp_is_a_decode_error() {
        let result: Result<PriceEntry, _> =
            serde_json::from_str(r#"{"DateTime":"yesterday","PriceWithTax":0.1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_analysis_is_all_sentinels() {
        let analysis = PriceAnalysis::default();
        assert!(!analysis.valid);
        assert_eq!(analysis.next_window_avg, PRICE_SENTINEL);
        assert_eq!(analysis.cheapest_window_avg, PRICE_SENTINEL);
        assert!(analysis.cheapest_window_start.is_empty());
        assert!(analysis.current_period_start.is_empty());
        assert!(!analysis.cheapest_is_later);
    }
}
