use anyhow::{Context, Result};

use pricing::PriceEntry;

/// Decode a day-ahead feed payload into price entries.
///
/// The feed is a JSON array of objects carrying `DateTime` and
/// `PriceWithTax`; anything else is a decode error for the caller to
/// report. An empty array decodes fine and is handled downstream by the
/// analysis returning an unusable result.
pub fn parse_entries(payload: &str) -> Result<Vec<PriceEntry>> {
    serde_json::from_str(payload).context("price feed payload did not decode")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_decodes_a_feed_array() {
        let payload = r#"[
            {"Rank":2,"DateTime":"2025-11-15T10:00:00","PriceWithTax":0.1021},
            {"Rank":1,"DateTime":"2025-11-15T10:15:00","PriceWithTax":0.0988}
        ]"#;

        let entries = parse_entries(payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, datetime!(2025-11-15 10:00));
        assert!((entries[1].price - 0.0988).abs() < 1e-6);
    }

    #[test]
    fn test_preserves_feed_order() {
        let payload = r#"[
            {"DateTime":"2025-11-15T10:30:00","PriceWithTax":0.12},
            {"DateTime":"2025-11-15T10:00:00","PriceWithTax":0.10}
        ]"#;

        let entries = parse_entries(payload).unwrap();
        assert_eq!(entries[0].timestamp, datetime!(2025-11-15 10:30));
        assert_eq!(entries[1].timestamp, datetime!(2025-11-15 10:00));
    }

    #[test]
    fn test_empty_array_is_not_an_error() {
        assert!(parse_entries("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_array_payload_is_an_error() {
        assert!(parse_entries(r#"{"error":"maintenance"}"#).is_err());
        assert!(parse_entries("<html>502</html>").is_err());
        assert!(parse_entries("").is_err());
    }
}
