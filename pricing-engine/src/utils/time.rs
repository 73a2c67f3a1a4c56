//! 时间工具函数: campaign date parsing in the business timezone
//!
//! Catalog dates arrive in several shapes; everything is normalized to
//! `DateTime<Utc>` here so comparisons elsewhere are plain instant math.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use shared::models::MILLIS_PER_DAY;

/// Naive datetime layouts accepted for campaign bounds
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a catalog date into an instant
///
/// Accepted: RFC 3339, naive datetimes (interpreted in `tz`), date-only
/// `YYYY-MM-DD` or `YYYYMMDD` (midnight in `tz`), epoch millis. Anything else
/// is `None`.
pub fn parse_instant(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        // Eight digits is a compact date, not a 1970 timestamp
        if raw.len() == 8 {
            return NaiveDate::parse_from_str(raw, "%Y%m%d")
                .ok()
                .map(|date| local_to_utc(date.and_time(chrono::NaiveTime::MIN), tz));
        }
        return raw
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(local_to_utc(naive, tz));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(local_to_utc(date.and_time(chrono::NaiveTime::MIN), tz));
    }

    tracing::debug!("Unrecognized campaign date '{}'", raw);
    None
}

/// Last instant (23:59:59.999) of the calendar day containing `instant` in `tz`
pub fn end_of_day(instant: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let date = instant.with_timezone(&tz).date_naive();
    match date.and_hms_milli_opt(23, 59, 59, 999) {
        Some(naive) => local_to_utc(naive, tz),
        None => instant,
    }
}

/// Days between two instants, rounded up
pub fn ceil_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;
    if millis % MILLIS_PER_DAY > 0 { days + 1 } else { days }
}

/// Local wall-clock time → UTC
///
/// DST gap fallback: if the local time does not exist, treat it as UTC.
fn local_to_utc(naive: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}
