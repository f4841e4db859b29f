//! Patterns for the interval family: two boundary values joined by `/`.

use core::fmt;

use crate::error::{ParseFailure, ParseOutcome};
use crate::interval::{DateInterval, DateTimeInterval, InstantInterval, Interval, TimeInterval};
use crate::pattern::calendar::{
    format_instant, format_local_date, format_local_date_time, format_local_time, parse_instant,
    parse_local_date, parse_local_date_time, parse_local_time,
};

fn format_pair<T>(value: &Interval<T>, boundary: fn(&T) -> String) -> String {
    format!("{}/{}", boundary(value.start()), boundary(value.end()))
}

fn parse_pair<T>(
    text: &str,
    code: &'static str,
    boundary: fn(&str) -> ParseOutcome<T>,
) -> ParseOutcome<Interval<T>>
where
    T: PartialOrd + fmt::Display,
{
    let (start_text, end_text) = text
        .split_once('/')
        .ok_or_else(|| ParseFailure::new(code, text, "expected two boundary values joined by `/`"))?;
    let start = boundary(start_text)?;
    let end = boundary(end_text)?;
    Interval::new(start, end).map_err(|cause| {
        ParseFailure::new(code, text, "interval end must not precede its start").with_cause(cause)
    })
}

/// Format an instant interval as `start/end`.
pub fn format_instant_interval(value: &InstantInterval) -> String {
    format_pair(value, format_instant)
}

/// Parse an instant interval from `start/end`.
pub fn parse_instant_interval(text: &str) -> ParseOutcome<InstantInterval> {
    parse_pair(text, "invalid-interval", parse_instant)
}

/// Format a date interval as `start/end`.
pub fn format_date_interval(value: &DateInterval) -> String {
    format_pair(value, format_local_date)
}

/// Parse a date interval from `start/end`.
pub fn parse_date_interval(text: &str) -> ParseOutcome<DateInterval> {
    parse_pair(text, "invalid-date-interval", parse_local_date)
}

/// Format a time interval as `start/end`.
pub fn format_time_interval(value: &TimeInterval) -> String {
    format_pair(value, format_local_time)
}

/// Parse a time interval from `start/end`.
pub fn parse_time_interval(text: &str) -> ParseOutcome<TimeInterval> {
    parse_pair(text, "invalid-time-interval", parse_local_time)
}

/// Format a date-time interval as `start/end`.
pub fn format_date_time_interval(value: &DateTimeInterval) -> String {
    format_pair(value, format_local_date_time)
}

/// Parse a date-time interval from `start/end`.
pub fn parse_date_time_interval(text: &str) -> ParseOutcome<DateTimeInterval> {
    parse_pair(text, "invalid-date-time-interval", parse_local_date_time)
}
