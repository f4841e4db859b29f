//! # tempora-core
//!
//! Canonical text conversion for temporal values: one pattern per type, one
//! uniform parse/format contract, one registry consulted by every consumer
//! surface (model binding, serialization, schema generation). Text written
//! by any surface can be read back by any other.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tempora_core::ConverterRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Built once at startup, read-only afterwards.
//! let registry = ConverterRegistry::with_tzdb()?;
//!
//! let date: NaiveDate = registry.parse_as("2024-03-10")?;
//! assert_eq!(registry.format_value(&date)?, "2024-03-10");
//!
//! // Malformed text is reported as data, never panics.
//! assert!(registry.parse_as::<NaiveDate>("not-a-date").is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported types
//!
//! Instants, local dates/times/date-times, UTC offsets, offset and zoned
//! date-times, durations, calendar periods, the four interval flavors, and
//! time zones: fourteen converters in total, each with exactly one
//! locale-invariant, ISO-8601-derived grammar. Zone names resolve through a
//! [`ZoneProvider`] supplied by the host; nothing in this crate invents zone
//! data or falls back to a default zone.

pub mod codec;
pub mod error;
pub mod interval;
pub mod pattern;
pub mod period;
pub mod registry;
pub mod zone;

pub use codec::{PatternCodec, TextCodec, TimeZoneCodec, ZonedDateTimeCodec};
pub use error::{ConvertError, ParseFailure, ParseOutcome, RegistryError, SetupError};
pub use interval::{
    DateInterval, DateTimeInterval, InstantInterval, Interval, InvalidInterval, TimeInterval,
};
pub use period::Period;
pub use registry::{ConverterRegistry, RegistryBuilder};
pub use zone::{BundledTzdb, ZoneProvider};

/// Convenient prelude for consumer adapters.
pub mod prelude {
    pub use crate::codec::TextCodec;
    pub use crate::error::{ConvertError, ParseFailure, ParseOutcome, RegistryError, SetupError};
    pub use crate::interval::{
        DateInterval, DateTimeInterval, InstantInterval, Interval, TimeInterval,
    };
    pub use crate::period::Period;
    pub use crate::registry::ConverterRegistry;
    pub use crate::zone::{BundledTzdb, ZoneProvider};
}
