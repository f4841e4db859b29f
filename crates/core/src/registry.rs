//! Type-indexed converter registry.
//!
//! The registry is the single place a value type is associated with its
//! canonical text codec. It is built once during setup and read-only
//! afterwards: the builder is the unconfigured state, the built registry is
//! the configured one, and there is no teardown transition. Lookups take no
//! locks, so any number of request handlers can resolve codecs concurrently.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use tracing::debug;

use crate::codec::{PatternCodec, TextCodec, TimeZoneCodec, ZonedDateTimeCodec};
use crate::error::{ConvertError, RegistryError, SetupError};
use crate::interval::{DateInterval, DateTimeInterval, InstantInterval, TimeInterval};
use crate::pattern;
use crate::period::Period;
use crate::zone::{BundledTzdb, ZoneProvider};

struct Entry {
    type_name: &'static str,
    // Holds an `Arc<dyn TextCodec<T>>` for the `TypeId` it is keyed under;
    // only the typed `register` path can insert, so the downcast in
    // `resolve` cannot legitimately fail.
    codec: Box<dyn Any + Send + Sync>,
}

/// Setup-time accumulator for converter registrations.
///
/// Registering the same value type twice in one builder is a configuration
/// bug and fails with [`SetupError::DuplicateRegistration`].
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<TypeId, Entry>,
}

impl RegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a codec for `T`.
    pub fn register<T: 'static>(
        mut self,
        codec: impl TextCodec<T> + 'static,
    ) -> Result<Self, SetupError> {
        let type_name = codec.type_name();
        match self.entries.entry(TypeId::of::<T>()) {
            MapEntry::Occupied(existing) => Err(SetupError::DuplicateRegistration {
                type_name: existing.get().type_name,
            }),
            MapEntry::Vacant(slot) => {
                let shared: Arc<dyn TextCodec<T>> = Arc::new(codec);
                slot.insert(Entry { type_name, codec: Box::new(shared) });
                Ok(self)
            }
        }
    }

    /// Freeze the builder into an immutable registry.
    pub fn build(self) -> ConverterRegistry {
        debug!(converters = self.entries.len(), "temporal converter registry built");
        ConverterRegistry { entries: self.entries }
    }
}

/// Immutable mapping from value type to its text codec.
///
/// Construct one per configuration scope via [`ConverterRegistry::with_tzdb`]
/// or [`ConverterRegistry::with_zone_provider`]; each call builds a fresh,
/// independent registry, so repeated setup (e.g. in test harnesses) is safe
/// by construction.
pub struct ConverterRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl ConverterRegistry {
    /// Start an empty builder for a custom converter set.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Register the full built-in set against the bundled tz database.
    pub fn with_tzdb() -> Result<Self, SetupError> {
        Self::with_zone_provider(Arc::new(BundledTzdb))
    }

    /// Register the full built-in set in one step, resolving zone names
    /// through the given provider. This is the only setup entry point the
    /// consumer surfaces need.
    pub fn with_zone_provider(provider: Arc<dyn ZoneProvider>) -> Result<Self, SetupError> {
        Ok(Self::builder()
            .register(PatternCodec::<DateTime<Utc>>::new(
                "Instant",
                pattern::format_instant,
                pattern::parse_instant,
            ))?
            .register(PatternCodec::<NaiveDate>::new(
                "LocalDate",
                pattern::format_local_date,
                pattern::parse_local_date,
            ))?
            .register(PatternCodec::<NaiveTime>::new(
                "LocalTime",
                pattern::format_local_time,
                pattern::parse_local_time,
            ))?
            .register(PatternCodec::<NaiveDateTime>::new(
                "LocalDateTime",
                pattern::format_local_date_time,
                pattern::parse_local_date_time,
            ))?
            .register(PatternCodec::<FixedOffset>::new(
                "Offset",
                pattern::format_offset,
                pattern::parse_offset,
            ))?
            .register(PatternCodec::<DateTime<FixedOffset>>::new(
                "OffsetDateTime",
                pattern::format_offset_date_time,
                pattern::parse_offset_date_time,
            ))?
            .register(PatternCodec::<TimeDelta>::new(
                "Duration",
                pattern::format_duration,
                pattern::parse_duration,
            ))?
            .register(PatternCodec::<Period>::new(
                "Period",
                pattern::format_period,
                pattern::parse_period,
            ))?
            .register(PatternCodec::<InstantInterval>::new(
                "Interval",
                pattern::format_instant_interval,
                pattern::parse_instant_interval,
            ))?
            .register(PatternCodec::<DateInterval>::new(
                "DateInterval",
                pattern::format_date_interval,
                pattern::parse_date_interval,
            ))?
            .register(PatternCodec::<TimeInterval>::new(
                "TimeInterval",
                pattern::format_time_interval,
                pattern::parse_time_interval,
            ))?
            .register(PatternCodec::<DateTimeInterval>::new(
                "DateTimeInterval",
                pattern::format_date_time_interval,
                pattern::parse_date_time_interval,
            ))?
            .register(TimeZoneCodec::new(Arc::clone(&provider)))?
            .register(ZonedDateTimeCodec::new(provider))?
            .build())
    }

    /// Resolve the codec registered for `T`. O(1) and lock-free; concurrent
    /// readers never contend.
    pub fn resolve<T: 'static>(&self) -> Result<Arc<dyn TextCodec<T>>, RegistryError> {
        let entry = self
            .entries
            .get(&TypeId::of::<T>())
            .ok_or(RegistryError::UnsupportedType { type_name: std::any::type_name::<T>() })?;
        entry
            .codec
            .downcast_ref::<Arc<dyn TextCodec<T>>>()
            .cloned()
            .ok_or(RegistryError::CodecMismatch { type_name: entry.type_name })
    }

    /// Whether a codec is registered for `T`.
    pub fn supports<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of registered converters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no converters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered converter names, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.type_name)
    }

    /// Resolve-then-parse convenience.
    pub fn parse_as<T: 'static>(&self, text: &str) -> Result<T, ConvertError> {
        Ok(self.resolve::<T>()?.parse(text)?)
    }

    /// Resolve-then-format convenience.
    pub fn format_value<T: 'static>(&self, value: &T) -> Result<String, RegistryError> {
        Ok(self.resolve::<T>()?.format(value))
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.type_names().collect();
        names.sort_unstable();
        f.debug_struct("ConverterRegistry").field("converters", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Tz;
    use pretty_assertions::assert_eq;

    #[test]
    fn setup_registers_the_full_builtin_set() {
        let registry = ConverterRegistry::with_tzdb().unwrap();
        assert_eq!(registry.len(), 14);
        assert!(registry.supports::<NaiveDate>());
        assert!(registry.supports::<DateTime<Tz>>());
        assert!(!registry.supports::<String>());
    }

    #[test]
    fn resolve_fails_for_unregistered_types() {
        let registry = ConverterRegistry::with_tzdb().unwrap();
        // The resolved codec handle is not Debug, so drop the Ok side first.
        let err = registry.resolve::<u64>().map(|_| ()).unwrap_err();
        assert_eq!(err.code(), "unsupported-type");
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = ConverterRegistry::builder().build();
        assert!(registry.is_empty());
        assert!(registry.resolve::<NaiveDate>().is_err());
    }

    #[test]
    fn duplicate_registration_is_a_setup_error() {
        let result = ConverterRegistry::builder()
            .register(PatternCodec::<NaiveDate>::new(
                "LocalDate",
                pattern::format_local_date,
                pattern::parse_local_date,
            ))
            .and_then(|builder| {
                builder.register(PatternCodec::<NaiveDate>::new(
                    "LocalDate",
                    pattern::format_local_date,
                    pattern::parse_local_date,
                ))
            });
        assert!(matches!(
            result.err(),
            Some(SetupError::DuplicateRegistration { type_name: "LocalDate" })
        ));
    }

    #[test]
    fn repeated_setup_builds_independent_registries() {
        let first = ConverterRegistry::with_tzdb().unwrap();
        let second = ConverterRegistry::with_tzdb().unwrap();
        assert_eq!(first.len(), second.len());
    }

    #[test]
    fn convenience_parse_and_format_round_trip() {
        let registry = ConverterRegistry::with_tzdb().unwrap();
        let date: NaiveDate = registry.parse_as("2024-03-10").unwrap();
        assert_eq!(registry.format_value(&date).unwrap(), "2024-03-10");
    }
}
