//! Decoding for the two timestamp encodings Active Directory hands back.
//!
//! `lastLogonTimestamp` is a Windows FILETIME: 100-nanosecond ticks since
//! 1601-01-01 UTC, serialized as a decimal string. `whenCreated` is an LDAP
//! GeneralizedTime in Zulu form, e.g. `20240115120000.0Z`.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Seconds between the FILETIME epoch (1601-01-01) and the Unix epoch.
const FILETIME_UNIX_EPOCH_DIFF_SECS: i64 = 11_644_473_600;

/// FILETIME ticks per second (100ns resolution).
const FILETIME_TICKS_PER_SEC: i64 = 10_000_000;

/// Decodes a FILETIME attribute value.
///
/// Returns `None` for zero (never set), unparseable input, and values
/// outside the representable range (the directory uses i64::MAX as a
/// "never expires" sentinel).
pub fn parse_filetime(raw: &str) -> Option<DateTime<Utc>> {
    let ticks: i64 = raw.trim().parse().ok()?;
    if ticks <= 0 {
        return None;
    }

    let secs = ticks / FILETIME_TICKS_PER_SEC - FILETIME_UNIX_EPOCH_DIFF_SECS;
    let nanos = ((ticks % FILETIME_TICKS_PER_SEC) * 100) as u32;
    Utc.timestamp_opt(secs, nanos).single()
}

/// Decodes a GeneralizedTime attribute value.
///
/// Only the leading `YYYYMMDDHHMMSS` digits are significant; the directory
/// always emits Zulu time, so the fraction/zone suffix is ignored.
pub fn parse_generalized_time(raw: &str) -> Option<DateTime<Utc>> {
    let digits = raw.get(..14)?;
    let naive = NaiveDateTime::parse_from_str(digits, "%Y%m%d%H%M%S").ok()?;
    Some(naive.and_utc())
}
