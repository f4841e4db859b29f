//! Canonical text patterns.
//!
//! One `format_*` / `parse_*` pair per supported type. Every pattern is a
//! pure, locale-invariant function over its input (plus the zone provider
//! for zone-aware types): formatting a value always yields text the matching
//! parser reconstructs to an equal value, and parsing rejects malformed or
//! out-of-range text with a [`ParseFailure`](crate::error::ParseFailure)
//! instead of producing a partial value.

mod calendar;
mod interval;
mod span;

pub use calendar::{
    format_instant, format_local_date, format_local_date_time, format_local_time, format_offset,
    format_offset_date_time, format_time_zone, format_zoned_date_time, parse_instant,
    parse_local_date, parse_local_date_time, parse_local_time, parse_offset,
    parse_offset_date_time, parse_time_zone, parse_zoned_date_time,
};
pub use interval::{
    format_date_interval, format_date_time_interval, format_instant_interval,
    format_time_interval, parse_date_interval, parse_date_time_interval, parse_instant_interval,
    parse_time_interval,
};
pub use span::{format_duration, format_period, parse_duration, parse_period};

/// Append `.` plus a nanosecond fraction with trailing zeros trimmed.
/// Appends nothing for a zero fraction.
pub(crate) fn push_fraction(out: &mut String, nanos: u32) {
    if nanos == 0 {
        return;
    }
    let mut frac = format!("{nanos:09}");
    while frac.ends_with('0') {
        frac.pop();
    }
    out.push('.');
    out.push_str(&frac);
}

/// Parse 1-9 fraction digits into nanoseconds.
pub(crate) fn fraction_nanos(digits: &str) -> Option<u32> {
    if digits.is_empty() || digits.len() > 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("{digits:0<9}").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fraction_is_trimmed_and_restored() {
        let mut out = String::new();
        push_fraction(&mut out, 500_000_000);
        assert_eq!(out, ".5");
        assert_eq!(fraction_nanos("5"), Some(500_000_000));

        let mut out = String::new();
        push_fraction(&mut out, 123);
        assert_eq!(out, ".000000123");
        assert_eq!(fraction_nanos("000000123"), Some(123));
    }

    #[test]
    fn zero_fraction_is_omitted() {
        let mut out = String::new();
        push_fraction(&mut out, 0);
        assert_eq!(out, "");
    }

    #[test]
    fn malformed_fractions_are_rejected() {
        assert_eq!(fraction_nanos(""), None);
        assert_eq!(fraction_nanos("1234567890"), None);
        assert_eq!(fraction_nanos("12a"), None);
    }
}
