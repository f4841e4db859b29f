//! The conversion contract.
//!
//! [`TextCodec`] is the uniform two-way operation every consumer surface
//! works through: parse canonical text into a value, or format a value back
//! into canonical text. Each supported type has exactly one codec, and the
//! codec delegates to that type's pattern, so binding, serialization and
//! schema generation can never disagree about the encoding.

use std::sync::Arc;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::error::ParseOutcome;
use crate::pattern;
use crate::zone::ZoneProvider;

/// Two-way text conversion for a single value type.
///
/// Implementations are pure: no I/O, no mutation, deterministic output. The
/// only external collaborator is the zone provider held by the zone-aware
/// codecs, itself a synchronous in-memory lookup.
pub trait TextCodec<T>: Send + Sync {
    /// Human-readable converter name, e.g. `LocalDate`. Used in setup and
    /// resolution error messages.
    fn type_name(&self) -> &'static str;

    /// Format a value into its canonical text.
    fn format(&self, value: &T) -> String;

    /// Parse canonical text, reporting failure as data rather than panicking.
    fn parse(&self, text: &str) -> ParseOutcome<T>;
}

/// Codec table entry for a stateless pattern: a pair of function pointers.
///
/// The supported types form a closed set, so a table of function pairs is
/// all the dispatch the registry needs; there is no per-type subclassing.
pub struct PatternCodec<T> {
    type_name: &'static str,
    format: fn(&T) -> String,
    parse: fn(&str) -> ParseOutcome<T>,
}

impl<T> PatternCodec<T> {
    /// Bind a name to a format/parse function pair.
    pub const fn new(
        type_name: &'static str,
        format: fn(&T) -> String,
        parse: fn(&str) -> ParseOutcome<T>,
    ) -> Self {
        Self { type_name, format, parse }
    }
}

impl<T> TextCodec<T> for PatternCodec<T> {
    fn type_name(&self) -> &'static str {
        self.type_name
    }

    fn format(&self, value: &T) -> String {
        (self.format)(value)
    }

    fn parse(&self, text: &str) -> ParseOutcome<T> {
        (self.parse)(text)
    }
}

/// Codec for time zones, resolving identifiers through the shared provider.
pub struct TimeZoneCodec {
    provider: Arc<dyn ZoneProvider>,
}

impl TimeZoneCodec {
    /// Build a codec over the given provider.
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self { provider }
    }
}

impl TextCodec<Tz> for TimeZoneCodec {
    fn type_name(&self) -> &'static str {
        "TimeZone"
    }

    fn format(&self, value: &Tz) -> String {
        pattern::format_time_zone(value)
    }

    fn parse(&self, text: &str) -> ParseOutcome<Tz> {
        pattern::parse_time_zone(text, self.provider.as_ref())
    }
}

/// Codec for zone-qualified date-times; zone names resolve through the
/// shared provider.
pub struct ZonedDateTimeCodec {
    provider: Arc<dyn ZoneProvider>,
}

impl ZonedDateTimeCodec {
    /// Build a codec over the given provider.
    pub fn new(provider: Arc<dyn ZoneProvider>) -> Self {
        Self { provider }
    }
}

impl TextCodec<DateTime<Tz>> for ZonedDateTimeCodec {
    fn type_name(&self) -> &'static str {
        "ZonedDateTime"
    }

    fn format(&self, value: &DateTime<Tz>) -> String {
        pattern::format_zoned_date_time(value)
    }

    fn parse(&self, text: &str) -> ParseOutcome<DateTime<Tz>> {
        pattern::parse_zoned_date_time(text, self.provider.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::BundledTzdb;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn pattern_codec_delegates_both_ways() {
        let codec = PatternCodec::new(
            "LocalDate",
            pattern::format_local_date,
            pattern::parse_local_date,
        );
        assert_eq!(codec.type_name(), "LocalDate");
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(codec.format(&date), "2024-03-10");
        assert_eq!(codec.parse("2024-03-10").unwrap(), date);
        assert_eq!(codec.parse("not-a-date").unwrap_err().code(), "invalid-local-date");
    }

    #[test]
    fn time_zone_codec_uses_its_provider() {
        let codec = TimeZoneCodec::new(Arc::new(BundledTzdb));
        assert_eq!(codec.parse("America/New_York").unwrap(), Tz::America__New_York);
        assert_eq!(codec.parse("Not/AZone").unwrap_err().code(), "unknown-time-zone");
    }
}
