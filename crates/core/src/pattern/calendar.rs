//! Patterns for the calendar and clock types backed by chrono.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset as _, Utc,
};
use chrono_tz::Tz;

use crate::error::{ParseFailure, ParseOutcome};
use crate::zone::ZoneProvider;

const LOCAL_DATE_FMT: &str = "%Y-%m-%d";
const LOCAL_TIME_FMT: &str = "%H:%M:%S%.f";
const LOCAL_DATE_TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const INSTANT_FMT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

// ============================================================================
// Local date / time / date-time
// ============================================================================

/// Format a local date as `YYYY-MM-DD`.
pub fn format_local_date(value: &NaiveDate) -> String {
    value.format(LOCAL_DATE_FMT).to_string()
}

/// Parse a local date from `YYYY-MM-DD`.
pub fn parse_local_date(text: &str) -> ParseOutcome<NaiveDate> {
    NaiveDate::parse_from_str(text, LOCAL_DATE_FMT).map_err(|err| {
        ParseFailure::new("invalid-local-date", text, "expected a calendar date in `YYYY-MM-DD` form")
            .with_cause(err)
    })
}

/// Format a local time as `HH:MM:SS` with an optional fraction.
pub fn format_local_time(value: &NaiveTime) -> String {
    value.format(LOCAL_TIME_FMT).to_string()
}

/// Parse a local time from `HH:MM:SS(.f)`.
pub fn parse_local_time(text: &str) -> ParseOutcome<NaiveTime> {
    NaiveTime::parse_from_str(text, LOCAL_TIME_FMT).map_err(|err| {
        ParseFailure::new("invalid-local-time", text, "expected a time of day in `HH:MM:SS(.f)` form")
            .with_cause(err)
    })
}

/// Format a local date-time as `YYYY-MM-DDTHH:MM:SS` with an optional fraction.
pub fn format_local_date_time(value: &NaiveDateTime) -> String {
    value.format(LOCAL_DATE_TIME_FMT).to_string()
}

/// Parse a local date-time from `YYYY-MM-DDTHH:MM:SS(.f)`.
pub fn parse_local_date_time(text: &str) -> ParseOutcome<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, LOCAL_DATE_TIME_FMT).map_err(|err| {
        ParseFailure::new(
            "invalid-local-date-time",
            text,
            "expected a date-time in `YYYY-MM-DDTHH:MM:SS(.f)` form",
        )
        .with_cause(err)
    })
}

// ============================================================================
// Instant
// ============================================================================

/// Format an instant as a UTC date-time with a trailing `Z`.
pub fn format_instant(value: &DateTime<Utc>) -> String {
    value.format(INSTANT_FMT).to_string()
}

/// Parse an instant from `YYYY-MM-DDTHH:MM:SS(.f)Z`.
pub fn parse_instant(text: &str) -> ParseOutcome<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(text, INSTANT_FMT)
        .map(|naive| naive.and_utc())
        .map_err(|err| {
            ParseFailure::new(
                "invalid-instant",
                text,
                "expected a UTC instant in `YYYY-MM-DDTHH:MM:SS(.f)Z` form",
            )
            .with_cause(err)
        })
}

// ============================================================================
// Offset
// ============================================================================

/// Format a UTC offset as `Z` or `±HH:MM(:SS)`.
pub fn format_offset(value: &FixedOffset) -> String {
    let total = value.local_minus_utc();
    if total == 0 {
        return "Z".to_string();
    }
    let sign = if total < 0 { '-' } else { '+' };
    let total = total.unsigned_abs();
    let (hours, minutes, seconds) = (total / 3600, total % 3600 / 60, total % 60);
    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Parse a UTC offset from `Z` or `±HH:MM(:SS)`.
pub fn parse_offset(text: &str) -> ParseOutcome<FixedOffset> {
    let err = || {
        ParseFailure::new("invalid-offset", text, "expected `Z` or a UTC offset in `±HH:MM(:SS)` form")
    };

    if text == "Z" {
        return Ok(Utc.fix());
    }
    let (sign, body) = match text.split_at_checked(1) {
        Some(("+", body)) => (1_i32, body),
        Some(("-", body)) => (-1_i32, body),
        _ => return Err(err()),
    };
    let mut parts = body.splitn(3, ':');
    let hours = parts.next().and_then(two_digits).filter(|&h| h < 24).ok_or_else(err)?;
    let minutes = parts.next().and_then(two_digits).filter(|&m| m < 60).ok_or_else(err)?;
    let seconds = match parts.next() {
        Some(part) => two_digits(part).filter(|&s| s < 60).ok_or_else(err)?,
        None => 0,
    };
    let total = sign * (hours * 3600 + minutes * 60 + seconds) as i32;
    FixedOffset::east_opt(total).ok_or_else(err)
}

/// Exactly two ASCII digits.
fn two_digits(part: &str) -> Option<u32> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

// ============================================================================
// Offset date-time
// ============================================================================

/// Format an offset date-time as local date-time text plus the offset.
pub fn format_offset_date_time(value: &DateTime<FixedOffset>) -> String {
    format!(
        "{}{}",
        value.naive_local().format(LOCAL_DATE_TIME_FMT),
        format_offset(value.offset())
    )
}

/// Parse an offset date-time from `YYYY-MM-DDTHH:MM:SS(.f)` + `Z`/`±HH:MM(:SS)`.
pub fn parse_offset_date_time(text: &str) -> ParseOutcome<DateTime<FixedOffset>> {
    let err = |detail: &str| ParseFailure::new("invalid-offset-date-time", text, detail);

    let (local_part, offset_part) = split_offset(text)
        .ok_or_else(|| err("expected a local date-time followed by `Z` or `±HH:MM(:SS)`"))?;
    let local = NaiveDateTime::parse_from_str(local_part, LOCAL_DATE_TIME_FMT).map_err(|cause| {
        err("expected a date-time in `YYYY-MM-DDTHH:MM:SS(.f)` form before the offset").with_cause(cause)
    })?;
    let offset = parse_offset(offset_part)?;
    local
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| err("date-time is outside the representable range"))
}

/// Split trailing offset text from the local date-time part. The first `T`
/// anchors the search so date hyphens (and a leading year sign) are skipped.
fn split_offset(text: &str) -> Option<(&str, &str)> {
    let t = text.find('T')?;
    if let Some(local) = text.strip_suffix('Z') {
        return Some((local, "Z"));
    }
    let idx = text[t..].find(['+', '-']).map(|i| t + i)?;
    Some((&text[..idx], &text[idx..]))
}

// ============================================================================
// Zoned date-time
// ============================================================================

/// Format a zoned date-time as offset date-time text plus `[Zone/Id]`.
pub fn format_zoned_date_time(value: &DateTime<Tz>) -> String {
    format!(
        "{}{}[{}]",
        value.naive_local().format(LOCAL_DATE_TIME_FMT),
        format_offset(&value.offset().fix()),
        value.timezone().name()
    )
}

/// Parse a zoned date-time from offset date-time text plus `[Zone/Id]`.
///
/// The zone identifier is resolved through the supplied provider, and the
/// written offset must be the zone's actual offset at that instant.
pub fn parse_zoned_date_time(text: &str, provider: &dyn ZoneProvider) -> ParseOutcome<DateTime<Tz>> {
    let (head, zone_id) = split_zone(text).ok_or_else(|| {
        ParseFailure::new(
            "invalid-zoned-date-time",
            text,
            "expected an offset date-time followed by a `[Zone/Id]` suffix",
        )
    })?;
    let zone = provider.zone(zone_id).ok_or_else(|| {
        ParseFailure::new(
            "unknown-time-zone",
            text,
            format!("time zone `{zone_id}` is not known to the configured zone provider"),
        )
    })?;
    let fixed = parse_offset_date_time(head)?;
    let zoned = fixed.with_timezone(&zone);
    if zoned.naive_local() != fixed.naive_local() {
        return Err(ParseFailure::new(
            "inconsistent-offset",
            text,
            format!(
                "offset `{}` does not match zone `{}` at that instant",
                format_offset(fixed.offset()),
                zone.name()
            ),
        ));
    }
    Ok(zoned)
}

fn split_zone(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_suffix(']')?;
    let open = inner.find('[')?;
    let id = &inner[open + 1..];
    if id.is_empty() {
        return None;
    }
    Some((&inner[..open], id))
}

// ============================================================================
// Time zone
// ============================================================================

/// Format a time zone as its canonical tzdb identifier.
pub fn format_time_zone(value: &Tz) -> String {
    value.name().to_string()
}

/// Resolve a canonical tzdb identifier through the zone provider.
pub fn parse_time_zone(text: &str, provider: &dyn ZoneProvider) -> ParseOutcome<Tz> {
    provider.zone(text).ok_or_else(|| {
        ParseFailure::new(
            "unknown-time-zone",
            text,
            format!("time zone `{text}` is not known to the configured zone provider"),
        )
    })
}
