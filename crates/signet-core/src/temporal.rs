//! # Temporal Types
//!
//! Defines `Timestamp`, the license wall-clock timestamp. It renders and
//! parses exactly one shape, `DD/MM/YYYY HH:MM:SS`, at second precision.
//!
//! ## Invariant
//!
//! The format carries no timezone. Issuing and validating hosts are assumed
//! to share a single local time reference; a license issued in one zone and
//! validated in another will have its expiry shifted by the zone offset.
//! This is a limitation of the document format itself, so it is enforced and
//! documented here rather than papered over with a conversion that the wire
//! form could not represent.
//!
//! Sub-second components are truncated at every construction site, keeping
//! equality and ordering aligned with what the serialized form can express.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimestampError;

/// The one and only textual timestamp shape, e.g. `17/08/2026 14:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// A local wall-clock timestamp, truncated to whole seconds.
///
/// # Construction
///
/// - [`Timestamp::now()`] reads the local system clock.
/// - [`Timestamp::from_naive()`] wraps a `chrono::NaiveDateTime`, truncating.
/// - [`Timestamp::parse()`] accepts the fixed format only.
///
/// Ordering and equality operate at second granularity, matching the
/// serialized form exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current local time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Local::now().naive_local()))
    }

    /// Wrap a `NaiveDateTime`, truncating sub-second components.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from the fixed `DD/MM/YYYY HH:MM:SS` format.
    ///
    /// # Errors
    ///
    /// Returns `TimestampError::InvalidFormat` for any other shape,
    /// including trailing characters and missing time-of-day components.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| TimestampError::InvalidFormat {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Access the inner `NaiveDateTime`.
    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }

    /// Render in the fixed `DD/MM/YYYY HH:MM:SS` format.
    pub fn format(&self) -> String {
        self.0.format(TIMESTAMP_FORMAT).to_string()
    }

    /// This timestamp shifted forward by whole days.
    ///
    /// Expiry arithmetic helper; negative values shift backward.
    pub fn plus_days(&self, days: i64) -> Self {
        Self(self.0 + chrono::Duration::days(days))
    }

    /// This timestamp shifted backward by whole days.
    pub fn minus_days(&self, days: i64) -> Self {
        self.plus_days(-days)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format())
    }
}

// Serialize as the fixed-format string so the wire form and the canonical
// form are byte-identical for the same instant.
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Truncate a `NaiveDateTime` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_naive().nanosecond(), 0);
    }

    #[test]
    fn from_naive_truncates() {
        let dt = naive(2026, 1, 15, 12, 30, 45).with_nanosecond(123_456_789).unwrap();
        let ts = Timestamp::from_naive(dt);
        assert_eq!(ts.as_naive().nanosecond(), 0);
        assert_eq!(ts.format(), "15/01/2026 12:30:45");
    }

    #[test]
    fn format_zero_pads() {
        let ts = Timestamp::from_naive(naive(2026, 3, 7, 9, 5, 2));
        assert_eq!(ts.format(), "07/03/2026 09:05:02");
    }

    #[test]
    fn display_matches_format() {
        let ts = Timestamp::from_naive(naive(2026, 6, 30, 23, 59, 59));
        assert_eq!(format!("{ts}"), ts.format());
    }

    // ---- parse() ----

    #[test]
    fn parse_fixed_format() {
        let ts = Timestamp::parse("15/01/2026 12:00:00").unwrap();
        assert_eq!(ts.format(), "15/01/2026 12:00:00");
    }

    #[test]
    fn parse_format_roundtrip() {
        let ts = Timestamp::from_naive(naive(2031, 12, 1, 0, 0, 1));
        let back = Timestamp::parse(&ts.format()).unwrap();
        assert_eq!(ts, back);
    }

    #[test]
    fn parse_rejects_iso8601() {
        assert!(Timestamp::parse("2026-01-15T12:00:00Z").is_err());
        assert!(Timestamp::parse("2026-01-15 12:00:00").is_err());
    }

    #[test]
    fn parse_rejects_date_only() {
        assert!(Timestamp::parse("15/01/2026").is_err());
    }

    #[test]
    fn parse_rejects_trailing_garbage() {
        assert!(Timestamp::parse("15/01/2026 12:00:00Z").is_err());
        assert!(Timestamp::parse("15/01/2026 12:00:00 ").is_err());
    }

    #[test]
    fn parse_rejects_empty_and_noise() {
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("not-a-date").is_err());
    }

    #[test]
    fn parse_rejects_out_of_range_fields() {
        assert!(Timestamp::parse("32/01/2026 12:00:00").is_err());
        assert!(Timestamp::parse("15/13/2026 12:00:00").is_err());
        assert!(Timestamp::parse("15/01/2026 25:00:00").is_err());
    }

    #[test]
    fn parse_error_carries_input() {
        let err = Timestamp::parse("nope").unwrap_err();
        assert!(format!("{err}").contains("nope"));
    }

    // ---- ordering ----

    #[test]
    fn ordering_at_second_granularity() {
        let earlier = Timestamp::parse("15/01/2026 12:00:00").unwrap();
        let later = Timestamp::parse("15/01/2026 12:00:01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn day_boundary_ordering() {
        let eve = Timestamp::parse("31/12/2026 23:59:59").unwrap();
        let newyear = Timestamp::parse("01/01/2027 00:00:00").unwrap();
        assert!(eve < newyear);
    }

    // ---- arithmetic ----

    #[test]
    fn plus_days_crosses_month() {
        let ts = Timestamp::from_naive(naive(2026, 1, 25, 8, 0, 0));
        assert_eq!(ts.plus_days(10).format(), "04/02/2026 08:00:00");
    }

    #[test]
    fn minus_days_is_inverse() {
        let ts = Timestamp::from_naive(naive(2026, 5, 15, 10, 30, 0));
        assert_eq!(ts.plus_days(10).minus_days(10), ts);
    }

    // ---- serde ----

    #[test]
    fn serde_roundtrip() {
        let ts = Timestamp::parse("15/01/2026 12:00:00").unwrap();
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, r#""15/01/2026 12:00:00""#);
        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(ts, parsed);
    }

    #[test]
    fn serde_rejects_wrong_shape() {
        assert!(serde_json::from_str::<Timestamp>(r#""2026-01-15T12:00:00Z""#).is_err());
        assert!(serde_json::from_str::<Timestamp>("12345").is_err());
    }
}
