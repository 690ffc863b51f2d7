//! Time conversion utilities.
//!
//! Request parameters carry timestamps as milliseconds since the Unix epoch while the
//! database stores naive UTC timestamps; these helpers convert between the two.

use chrono::{DateTime, NaiveDateTime};

/// Converts epoch milliseconds into a naive UTC timestamp.
///
/// # Returns
/// - `Some(NaiveDateTime)` - The corresponding UTC timestamp
/// - `None` - The value is outside the range chrono can represent
pub fn from_epoch_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Converts a naive UTC timestamp into epoch milliseconds.
pub fn to_epoch_millis(timestamp: NaiveDateTime) -> i64 {
    timestamp.and_utc().timestamp_millis()
}
