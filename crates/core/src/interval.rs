//! Interval family.
//!
//! An [`Interval`] is an ordered pair of boundary values of the same
//! temporal type, written as `start/end` in canonical text. Four concrete
//! boundary types are supported: instants, local dates, local times and
//! local date-times.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

use crate::error::ParseFailure;
use crate::pattern;

/// The end boundary preceded the start boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("interval end `{end}` precedes start `{start}`")]
pub struct InvalidInterval {
    start: String,
    end: String,
}

/// An inclusive-start, exclusive-end pair of temporal boundaries.
///
/// The only invariant is ordering: `start <= end`. A degenerate zero-length
/// interval (`start == end`) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    start: T,
    end: T,
}

impl<T: PartialOrd + fmt::Display> Interval<T> {
    /// Build an interval, rejecting boundaries in the wrong order.
    pub fn new(start: T, end: T) -> Result<Self, InvalidInterval> {
        if end < start {
            return Err(InvalidInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }
}

impl<T> Interval<T> {
    /// Start boundary.
    #[inline]
    pub fn start(&self) -> &T {
        &self.start
    }

    /// End boundary.
    #[inline]
    pub fn end(&self) -> &T {
        &self.end
    }
}

impl<T: PartialEq> Interval<T> {
    /// Whether the interval is zero-length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Interval between two instants.
pub type InstantInterval = Interval<DateTime<Utc>>;
/// Interval between two local dates.
pub type DateInterval = Interval<NaiveDate>;
/// Interval between two local times within one day.
pub type TimeInterval = Interval<NaiveTime>;
/// Interval between two local date-times.
pub type DateTimeInterval = Interval<NaiveDateTime>;

macro_rules! interval_text {
    ($boundary:ty, $format:path, $parse:path) => {
        impl fmt::Display for Interval<$boundary> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&$format(self))
            }
        }

        impl FromStr for Interval<$boundary> {
            type Err = ParseFailure;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $parse(s)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for Interval<$boundary> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$format(self))
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for Interval<$boundary> {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                $parse(&text).map_err(serde::de::Error::custom)
            }
        }
    };
}

interval_text!(DateTime<Utc>, pattern::format_instant_interval, pattern::parse_instant_interval);
interval_text!(NaiveDate, pattern::format_date_interval, pattern::parse_date_interval);
interval_text!(NaiveTime, pattern::format_time_interval, pattern::parse_time_interval);
interval_text!(NaiveDateTime, pattern::format_date_time_interval, pattern::parse_date_time_interval);
