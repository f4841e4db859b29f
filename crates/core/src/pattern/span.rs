//! Patterns for elapsed-time spans: durations and calendar periods.

use chrono::TimeDelta;

use crate::error::{ParseFailure, ParseOutcome};
use crate::pattern::{fraction_nanos, push_fraction};
use crate::period::Period;

// ============================================================================
// Duration
// ============================================================================

/// Format a duration as `H:MM:SS` with an optional sign and fraction.
/// Hours are the unbounded total, not a time-of-day component.
pub fn format_duration(value: &TimeDelta) -> String {
    let seconds = value.num_seconds();
    let nanos = value.subsec_nanos();
    let mut out = String::new();
    if seconds < 0 || nanos < 0 {
        out.push('-');
    }
    let seconds = seconds.unsigned_abs();
    out.push_str(&format!("{}:{:02}:{:02}", seconds / 3600, seconds % 3600 / 60, seconds % 60));
    push_fraction(&mut out, nanos.unsigned_abs());
    out
}

/// Parse a duration from `(-)H:MM:SS(.f)`.
pub fn parse_duration(text: &str) -> ParseOutcome<TimeDelta> {
    let err = || {
        ParseFailure::new(
            "invalid-duration",
            text,
            "expected a duration in `H:MM:SS` form with an optional sign and fractional seconds",
        )
    };
    let range_err = || {
        ParseFailure::new("duration-out-of-range", text, "duration exceeds the representable range")
    };

    let (negative, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text),
    };
    let mut parts = body.splitn(3, ':');
    let (Some(hour_part), Some(minute_part), Some(second_part)) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(err());
    };
    if hour_part.is_empty() || !hour_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    let hours: i64 = hour_part.parse().map_err(|_| range_err())?;
    let minutes = two_digits(minute_part).filter(|&m| m < 60).ok_or_else(err)?;
    let (second_part, fraction) = match second_part.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (second_part, None),
    };
    let seconds = two_digits(second_part).filter(|&s| s < 60).ok_or_else(err)?;
    let nanos = match fraction {
        Some(frac) => fraction_nanos(frac).ok_or_else(err)?,
        None => 0,
    };

    let total_seconds = hours
        .checked_mul(3600)
        .and_then(|t| t.checked_add(i64::from(minutes * 60 + seconds)))
        .ok_or_else(range_err)?;
    // Build the signed value directly: `TimeDelta` stores whole seconds plus
    // a non-negative nanosecond offset, so a negative fraction borrows one
    // second instead of negating a (possibly unrepresentable) magnitude.
    let (seconds, nanos) = if negative {
        let mut seconds = -total_seconds;
        let mut nanos = nanos;
        if nanos > 0 {
            seconds = seconds.checked_sub(1).ok_or_else(range_err)?;
            nanos = 1_000_000_000 - nanos;
        }
        (seconds, nanos)
    } else {
        (total_seconds, nanos)
    };
    TimeDelta::new(seconds, nanos).ok_or_else(range_err)
}

fn two_digits(part: &str) -> Option<u32> {
    if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

// ============================================================================
// Period
// ============================================================================

/// Format a period in ISO-8601 form, e.g. `P3DT2H` or `PT1.5S`.
/// The zero period formats as `P0D`; zero components are omitted; each
/// component carries its own sign.
pub fn format_period(value: &Period) -> String {
    if value.is_zero() {
        return "P0D".to_string();
    }
    let mut out = String::from("P");
    for (amount, unit) in [
        (value.years(), 'Y'),
        (value.months(), 'M'),
        (value.weeks(), 'W'),
        (value.days(), 'D'),
    ] {
        if amount != 0 {
            out.push_str(&amount.to_string());
            out.push(unit);
        }
    }
    let has_seconds = value.seconds() != 0 || value.nanoseconds() != 0;
    if value.hours() != 0 || value.minutes() != 0 || has_seconds {
        out.push('T');
        for (amount, unit) in [(value.hours(), 'H'), (value.minutes(), 'M')] {
            if amount != 0 {
                out.push_str(&amount.to_string());
                out.push(unit);
            }
        }
        if has_seconds {
            if value.seconds() < 0 || value.nanoseconds() < 0 {
                out.push('-');
            }
            out.push_str(&value.seconds().unsigned_abs().to_string());
            push_fraction(&mut out, value.nanoseconds().unsigned_abs() as u32);
            out.push('S');
        }
    }
    out
}

/// Parse a period from ISO-8601 form: `(-)P(nY)(nM)(nW)(nD)(T(nH)(nM)(n.fS))`.
///
/// Components must appear in canonical order, each at most once, each with an
/// optional sign; a fraction is only allowed on the seconds component; a
/// leading `-` negates every component. At least one component is required.
pub fn parse_period(text: &str) -> ParseOutcome<Period> {
    let err = |detail: &str| ParseFailure::new("invalid-period", text, detail.to_string());

    let (negate, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text),
    };
    let body = body.strip_prefix('P').ok_or_else(|| err("expected a leading `P` designator"))?;
    let (date_part, time_part) = match body.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };
    if time_part == Some("") {
        return Err(err("`T` must be followed by at least one time component"));
    }
    if date_part.is_empty() && time_part.is_none() {
        return Err(err("expected at least one period component"));
    }

    let mut period = Period::ZERO;
    for (unit, amount, nanos) in scan_components(date_part, "YMWD", None).ok_or_else(|| {
        err("expected date components in `nY nM nW nD` order, each at most once")
    })? {
        match unit {
            'Y' => period.years = amount,
            'M' => period.months = amount,
            'W' => period.weeks = amount,
            _ => period.days = amount,
        }
        debug_assert_eq!(nanos, 0);
    }
    if let Some(time_part) = time_part {
        for (unit, amount, nanos) in scan_components(time_part, "HMS", Some('S')).ok_or_else(
            || err("expected time components in `nH nM n(.f)S` order, each at most once"),
        )? {
            match unit {
                'H' => period.hours = amount,
                'M' => period.minutes = amount,
                _ => {
                    period.seconds = amount;
                    period.nanoseconds = nanos;
                }
            }
        }
    }
    if negate {
        period = Period {
            years: -period.years,
            months: -period.months,
            weeks: -period.weeks,
            days: -period.days,
            hours: -period.hours,
            minutes: -period.minutes,
            seconds: -period.seconds,
            nanoseconds: -period.nanoseconds,
        };
    }
    Ok(period.normalized())
}

/// Scan `(-)digits(.digits)unit` components. `units` is the canonical order;
/// consuming a unit forbids it and everything before it from re-appearing.
/// Returns `None` on any grammar violation.
fn scan_components(
    part: &str,
    units: &str,
    fraction_unit: Option<char>,
) -> Option<Vec<(char, i64, i64)>> {
    let mut out = Vec::new();
    let mut allowed = units;
    let mut rest = part;
    while !rest.is_empty() {
        let (negative, body) = match rest.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, rest),
        };
        let digit_len = body.bytes().take_while(u8::is_ascii_digit).count();
        if digit_len == 0 {
            return None;
        }
        let mut amount: i64 = body[..digit_len].parse().ok()?;
        let mut after = &body[digit_len..];

        let mut nanos: i64 = 0;
        let mut has_fraction = false;
        if let Some(frac_body) = after.strip_prefix('.') {
            let frac_len = frac_body.bytes().take_while(u8::is_ascii_digit).count();
            nanos = i64::from(fraction_nanos(&frac_body[..frac_len])?);
            after = &frac_body[frac_len..];
            has_fraction = true;
        }

        let unit = after.chars().next()?;
        let pos = allowed.find(unit)?;
        allowed = &allowed[pos + 1..];
        if has_fraction && Some(unit) != fraction_unit {
            return None;
        }
        if negative {
            amount = -amount;
            nanos = -nanos;
        }
        out.push((unit, amount, nanos));
        rest = &after[unit.len_utf8()..];
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn duration_round_trip() {
        let value = TimeDelta::hours(2) + TimeDelta::minutes(3) + TimeDelta::seconds(45);
        assert_eq!(format_duration(&value), "2:03:45");
        assert_eq!(parse_duration("2:03:45").unwrap(), value);
    }

    #[test]
    fn duration_hours_exceed_a_day() {
        let value = TimeDelta::hours(30) + TimeDelta::minutes(5);
        assert_eq!(format_duration(&value), "30:05:00");
        assert_eq!(parse_duration("30:05:00").unwrap(), value);
    }

    #[test]
    fn duration_negative_with_fraction() {
        let value = TimeDelta::new(-1, 0).unwrap() - TimeDelta::nanoseconds(500_000_000);
        assert_eq!(format_duration(&value), "-0:00:01.5");
        assert_eq!(parse_duration("-0:00:01.5").unwrap(), value);
    }

    #[test]
    fn duration_zero() {
        assert_eq!(format_duration(&TimeDelta::zero()), "0:00:00");
        assert_eq!(parse_duration("0:00:00").unwrap(), TimeDelta::zero());
    }

    #[test]
    fn duration_extremes_round_trip() {
        for value in [TimeDelta::MIN, TimeDelta::MAX] {
            assert_eq!(parse_duration(&format_duration(&value)).unwrap(), value);
        }
    }

    #[rstest]
    #[case("")]
    #[case("2:03")]
    #[case("2:3:45")]
    #[case("2:60:00")]
    #[case("2:00:61")]
    #[case("02-03-45")]
    #[case("2:03:45.")]
    #[case("+2:03:45")]
    fn duration_rejections(#[case] text: &str) {
        assert_eq!(parse_duration(text).unwrap_err().code(), "invalid-duration");
    }

    #[test]
    fn duration_out_of_range() {
        let failure = parse_duration("9999999999999999:00:00").unwrap_err();
        assert_eq!(failure.code(), "duration-out-of-range");
    }

    #[test]
    fn period_scenario() {
        // Scenario: `P3DT2H` is three days plus two hours; `P3D2H` lacks the
        // time separator and must be rejected.
        let period = parse_period("P3DT2H").unwrap();
        assert_eq!(period, Period::from_days(3) + Period::from_hours(2));
        assert_eq!(format_period(&period), "P3DT2H");
        assert_eq!(parse_period("P3D2H").unwrap_err().code(), "invalid-period");
    }

    #[test]
    fn period_zero_is_p0d() {
        assert_eq!(format_period(&Period::ZERO), "P0D");
        assert_eq!(parse_period("P0D").unwrap(), Period::ZERO);
    }

    #[test]
    fn period_fractional_seconds() {
        let period = parse_period("PT1.5S").unwrap();
        assert_eq!(period.seconds(), 1);
        assert_eq!(period.nanoseconds(), 500_000_000);
        assert_eq!(format_period(&period), "PT1.5S");
    }

    #[test]
    fn period_component_signs() {
        let period = parse_period("P-3DT2H").unwrap();
        assert_eq!(period.days(), -3);
        assert_eq!(period.hours(), 2);
        assert_eq!(format_period(&period), "P-3DT2H");
    }

    #[test]
    fn period_leading_sign_negates_everything() {
        let period = parse_period("-P1DT2H").unwrap();
        assert_eq!(period.days(), -1);
        assert_eq!(period.hours(), -2);
        // Canonical form re-emits per-component signs.
        assert_eq!(format_period(&period), "P-1DT-2H");
    }

    #[rstest]
    #[case("")]
    #[case("P")]
    #[case("PT")]
    #[case("3D")]
    #[case("P3D2H")]
    #[case("PT2H3D")]
    #[case("P1D1D")]
    #[case("PT1.5H")]
    #[case("PT1.S")]
    #[case("P1.5Y")]
    #[case("P3X")]
    fn period_rejections(#[case] text: &str) {
        assert_eq!(parse_period(text).unwrap_err().code(), "invalid-period");
    }

    #[test]
    fn period_full_component_set_round_trips() {
        let text = "P1Y2M3W4DT5H6M7.000000008S";
        let period = parse_period(text).unwrap();
        assert_eq!(period.nanoseconds(), 8);
        assert_eq!(format_period(&period), text);
    }
}
