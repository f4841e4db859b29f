//! Calendar period type.
//!
//! A [`Period`] is a bag of calendar and clock components (years down to
//! nanoseconds). It is a data holder with a canonical ISO-8601 text form,
//! not an arithmetic type: applying a period to a date is the business of
//! the underlying calendar library.

use core::fmt;
use core::ops::Add;
use core::str::FromStr;

use crate::error::ParseFailure;
use crate::pattern::{format_period, parse_period};

/// A calendar period such as `P3DT2H`: component amounts, each independently
/// signed, with sub-second precision carried as nanoseconds.
///
/// Equality is structural: `P1DT24H` and `P2D` are different periods even
/// though they cover the same span of civil time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub(crate) years: i64,
    pub(crate) months: i64,
    pub(crate) weeks: i64,
    pub(crate) days: i64,
    pub(crate) hours: i64,
    pub(crate) minutes: i64,
    pub(crate) seconds: i64,
    pub(crate) nanoseconds: i64,
}

impl Period {
    /// The empty period, `P0D` in canonical text.
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        weeks: 0,
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        nanoseconds: 0,
    };

    // ==================== Constructors ====================

    /// A period of whole years.
    pub fn from_years(years: i64) -> Self {
        Self { years, ..Self::ZERO }
    }

    /// A period of whole months.
    pub fn from_months(months: i64) -> Self {
        Self { months, ..Self::ZERO }
    }

    /// A period of whole weeks.
    pub fn from_weeks(weeks: i64) -> Self {
        Self { weeks, ..Self::ZERO }
    }

    /// A period of whole days.
    pub fn from_days(days: i64) -> Self {
        Self { days, ..Self::ZERO }
    }

    /// A period of whole hours.
    pub fn from_hours(hours: i64) -> Self {
        Self { hours, ..Self::ZERO }
    }

    /// A period of whole minutes.
    pub fn from_minutes(minutes: i64) -> Self {
        Self { minutes, ..Self::ZERO }
    }

    /// A period of whole seconds.
    pub fn from_seconds(seconds: i64) -> Self {
        Self { seconds, ..Self::ZERO }
    }

    /// A period of milliseconds, normalized into seconds + nanoseconds.
    pub fn from_milliseconds(milliseconds: i64) -> Self {
        Self {
            seconds: milliseconds / 1_000,
            nanoseconds: (milliseconds % 1_000) * 1_000_000,
            ..Self::ZERO
        }
    }

    /// A period of nanoseconds, normalized into seconds + nanoseconds.
    pub fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self {
            seconds: nanoseconds / 1_000_000_000,
            nanoseconds: nanoseconds % 1_000_000_000,
            ..Self::ZERO
        }
    }

    // ==================== Accessors ====================

    /// Years component.
    #[inline]
    pub fn years(&self) -> i64 {
        self.years
    }

    /// Months component.
    #[inline]
    pub fn months(&self) -> i64 {
        self.months
    }

    /// Weeks component.
    #[inline]
    pub fn weeks(&self) -> i64 {
        self.weeks
    }

    /// Days component.
    #[inline]
    pub fn days(&self) -> i64 {
        self.days
    }

    /// Hours component.
    #[inline]
    pub fn hours(&self) -> i64 {
        self.hours
    }

    /// Minutes component.
    #[inline]
    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    /// Seconds component.
    #[inline]
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second component in nanoseconds. Always below one second in
    /// magnitude and sign-consistent with [`Self::seconds`].
    #[inline]
    pub fn nanoseconds(&self) -> i64 {
        self.nanoseconds
    }

    /// Whether every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Carry whole seconds out of the nanosecond field and make the two
    /// fields agree in sign, so that the seconds component has a single
    /// canonical text form.
    pub(crate) fn normalized(mut self) -> Self {
        let carry = self.nanoseconds / 1_000_000_000;
        self.nanoseconds -= carry * 1_000_000_000;
        self.seconds = self.seconds.saturating_add(carry);
        if self.seconds > 0 && self.nanoseconds < 0 {
            self.seconds -= 1;
            self.nanoseconds += 1_000_000_000;
        } else if self.seconds < 0 && self.nanoseconds > 0 {
            self.seconds += 1;
            self.nanoseconds -= 1_000_000_000;
        }
        self
    }
}

/// Component-wise combination; no unit is converted into another.
impl Add for Period {
    type Output = Period;

    fn add(self, rhs: Period) -> Period {
        Period {
            years: self.years.saturating_add(rhs.years),
            months: self.months.saturating_add(rhs.months),
            weeks: self.weeks.saturating_add(rhs.weeks),
            days: self.days.saturating_add(rhs.days),
            hours: self.hours.saturating_add(rhs.hours),
            minutes: self.minutes.saturating_add(rhs.minutes),
            seconds: self.seconds.saturating_add(rhs.seconds),
            nanoseconds: self.nanoseconds.saturating_add(rhs.nanoseconds),
        }
        .normalized()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_period(self))
    }
}

impl FromStr for Period {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_period(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Period {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_period(self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Period {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        parse_period(&text).map_err(serde::de::Error::custom)
    }
}
