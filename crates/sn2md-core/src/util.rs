//! Shared utility functions used across multiple modules.

use std::time::SystemTime;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::{Error, Result};

/// Timestamp layout used by Standard Notes exports.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Parse an export timestamp such as `2021-03-04T05:06:07.123456Z` as UTC.
///
/// The fractional seconds are required and may have 1 to 9 digits.
pub fn parse_export_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let invalid = |reason: String| Error::InvalidTimestamp {
        value: value.to_string(),
        reason,
    };

    // `%.f` alone would also accept a value with no fraction at all.
    if !has_fractional_seconds(value) {
        return Err(invalid("missing fractional seconds".to_string()));
    }

    NaiveDateTime::parse_from_str(value, EXPORT_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| invalid(source.to_string()))
}

fn has_fractional_seconds(value: &str) -> bool {
    value
        .strip_suffix('Z')
        .and_then(|rest| rest.rsplit_once('.'))
        .is_some_and(|(_, digits)| {
            (1..=9).contains(&digits.len()) && digits.bytes().all(|byte| byte.is_ascii_digit())
        })
}

/// Parse an export timestamp into a [`SystemTime`] for file metadata.
pub fn export_timestamp_to_system_time(value: &str) -> Result<SystemTime> {
    parse_export_timestamp(value).map(SystemTime::from)
}

/// Truncate text to at most 180 characters for log messages.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(180).collect()
}
