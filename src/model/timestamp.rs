//! Serde adapters for Shortcut's wire timestamps.
//!
//! The API emits RFC 3339 instants, usually with a trailing `Z` and
//! occasionally with an explicit numeric offset. Both forms decode to
//! a `DateTime<Utc>`, so every hydrated timestamp carries explicit UTC
//! offset information. A missing or `null` field decodes to `None`,
//! never to a sentinel instant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Marker embedded in parse failures so the codec can classify them.
pub(crate) const INVALID_TIMESTAMP: &str = "invalid timestamp";

pub fn parse(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("{INVALID_TIMESTAMP} {s:?}: {e}"))
}

/// For required timestamp fields (e.g. `Label.created_at`).
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).map_err(serde::de::Error::custom)
}

/// For optional timestamp fields; `null` and absent both become `None`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse(&s).map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn zulu_suffix_parses_as_utc() {
        let dt = parse("2023-06-15T10:30:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 6, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn zulu_and_explicit_offset_are_the_same_instant() {
        let zulu = parse("2023-06-15T10:30:00Z").unwrap();
        let offset = parse("2023-06-15T10:30:00+00:00").unwrap();
        assert_eq!(zulu, offset);
    }

    #[test]
    fn non_utc_offset_normalizes_to_utc() {
        let dt = parse("2023-06-15T12:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2023, 6, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn garbage_is_rejected_with_marker() {
        let err = parse("yesterday").unwrap_err();
        assert!(err.contains(INVALID_TIMESTAMP));
    }

    #[test]
    fn bare_date_is_rejected() {
        // Iteration inputs carry bare dates as plain strings; the
        // timestamp type itself only accepts full instants.
        assert!(parse("2023-06-15").is_err());
    }
}
