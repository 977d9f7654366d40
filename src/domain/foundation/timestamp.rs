//! Timestamp value object for immutable points in time.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Creates a timestamp from Unix seconds, if representable.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the timestamp as Unix seconds.
    pub fn as_unix_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Formats the calendar date as `M/D/YYYY` (e.g. `7/19/2024`).
    pub fn to_short_date(&self) -> String {
        self.0.format("%-m/%-d/%Y").to_string()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn from_unix_secs_roundtrips() {
        let ts = Timestamp::from_unix_secs(1721338875).unwrap();
        assert_eq!(ts.as_unix_secs(), 1721338875);
    }

    #[test]
    fn short_date_has_no_zero_padding() {
        // 2024-07-09T12:00:00Z
        let ts = Timestamp::from_unix_secs(1720526400).unwrap();
        assert_eq!(ts.to_short_date(), "7/9/2024");
    }

    #[test]
    fn short_date_two_digit_month_and_day() {
        // 2024-12-25T08:30:00Z
        let ts = Timestamp::from_unix_secs(1735115400).unwrap();
        assert_eq!(ts.to_short_date(), "12/25/2024");
    }
}
