//! Date/time parsing and formatting for the wire's ISO-8601 strings.
//!
//! DESIGN
//! ======
//! Every function takes its clock or timezone as an argument; callers in the
//! browser pass `Utc::now()` and `Local`, tests pass fixed values.
//!
//! Parsing is lenient: full RFC 3339 instants, offset-bearing instants with
//! the seconds omitted or a colon-less offset, naive date-times (read as
//! UTC), and bare `YYYY-MM-DD` dates (midnight UTC) are all accepted.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";
const DATE_INPUT: &str = "%Y-%m-%d";
const DUE_DATE_DISPLAY: &str = "%b %d, %Y";

/// ISO-8601 shapes with an offset that RFC 3339 parsing rejects. `%#z`
/// accepts `Z`, `+HH`, `+HHMM` and `+HH:MM`.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

/// Parse a wire date string into an instant.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", DATETIME_LOCAL, "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, DATE_INPUT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Milliseconds since the epoch, `0` when unparsable.
pub fn timestamp_millis_or_epoch(raw: &str) -> i64 {
    parse_instant(raw).map_or(0, |dt| dt.timestamp_millis())
}

/// Serialize an instant the way browsers do (`2024-01-15T10:00:00.000Z`).
pub fn to_iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render a due date as `Mon DD, YYYY` in `tz`; unparsable input is returned verbatim.
pub fn format_due_date<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_instant(raw) {
        Some(instant) => instant.with_timezone(tz).format(DUE_DATE_DISPLAY).to_string(),
        None => raw.to_owned(),
    }
}

/// Render a meeting date with its local time of day.
pub fn format_meeting_date<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match parse_instant(raw) {
        Some(instant) => instant.with_timezone(tz).format("%b %d, %Y %H:%M").to_string(),
        None => raw.to_owned(),
    }
}

/// ISO instant -> `<input type="datetime-local">` value in `tz`. Empty when unparsable.
pub fn iso_to_datetime_local<Tz>(iso: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    parse_instant(iso)
        .map(|instant| instant.with_timezone(tz).format(DATETIME_LOCAL).to_string())
        .unwrap_or_default()
}

/// `datetime-local` value interpreted in `tz` -> ISO instant.
///
/// Returns `None` for empty or malformed input. During a DST fold the earlier
/// of the two candidate instants is used; inside a DST gap there is none.
pub fn datetime_local_to_iso<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<String> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, DATETIME_LOCAL)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    let local = tz.from_local_datetime(&naive).earliest()?;
    Some(to_iso(local.with_timezone(&Utc)))
}

/// ISO instant -> `<input type="date">` value (UTC calendar day). Empty when unparsable.
pub fn iso_to_date_input(iso: &str) -> String {
    parse_instant(iso).map(|instant| instant.format(DATE_INPUT).to_string()).unwrap_or_default()
}

/// `YYYY-MM-DD` -> midnight-UTC ISO instant. `None` for empty or malformed input.
pub fn date_input_to_iso(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value.trim(), DATE_INPUT).ok()?;
    date.and_hms_opt(0, 0, 0).map(|naive| to_iso(naive.and_utc()))
}
