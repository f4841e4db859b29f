//! # tempora-schema
//!
//! Schema-generation adapter: one fixed, deterministic example value per
//! supported temporal type, formatted through the shared converter registry
//! and exposed as a string example plus format hint for documentation
//! tooling. Because the examples are rendered by the same codecs that serve
//! binding and serialization, documented text is always accepted back by
//! the other surfaces.
//!
//! ```rust
//! use tempora_core::ConverterRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = ConverterRegistry::with_tzdb()?;
//! let examples = tempora_schema::examples(&registry)?;
//! let duration = examples
//!     .iter()
//!     .find(|example| example.type_name == "Duration" && !example.nullable)
//!     .unwrap();
//! assert_eq!(duration.example, "2:03:45");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone as _, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tempora_core::{
    ConverterRegistry, DateInterval, DateTimeInterval, InstantInterval, Period, RegistryError,
    TimeInterval,
};

/// A documented example for one temporal type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaExample {
    /// Converter name as registered, e.g. `LocalDate`.
    pub type_name: &'static str,
    /// Format hint for the string-typed schema property.
    pub format: &'static str,
    /// Canonical example text, rendered through the registry.
    pub example: String,
    /// Whether this entry describes the nullable counterpart of the type.
    pub nullable: bool,
}

/// Produce the example table for every built-in type, covering both the
/// plain and the nullable counterpart of each. Output is deterministic:
/// the same registry always yields byte-identical examples.
pub fn examples(registry: &ConverterRegistry) -> Result<Vec<SchemaExample>, RegistryError> {
    let mut out = Vec::with_capacity(28);
    push(&mut out, registry, "Instant", "date-time", &fixtures::instant())?;
    push(&mut out, registry, "LocalDate", "date", &fixtures::local_date())?;
    push(&mut out, registry, "LocalTime", "time", &fixtures::local_time())?;
    push(&mut out, registry, "LocalDateTime", "local-date-time", &fixtures::local_date_time())?;
    push(&mut out, registry, "Offset", "utc-offset", &fixtures::offset())?;
    push(&mut out, registry, "OffsetDateTime", "date-time", &fixtures::offset_date_time())?;
    push(&mut out, registry, "ZonedDateTime", "zoned-date-time", &fixtures::zoned_date_time())?;
    push(&mut out, registry, "Duration", "duration", &fixtures::duration())?;
    push(&mut out, registry, "Period", "period", &fixtures::period())?;
    push(&mut out, registry, "Interval", "interval", &fixtures::instant_interval())?;
    push(&mut out, registry, "DateInterval", "date-interval", &fixtures::date_interval())?;
    push(&mut out, registry, "TimeInterval", "time-interval", &fixtures::time_interval())?;
    push(
        &mut out,
        registry,
        "DateTimeInterval",
        "date-time-interval",
        &fixtures::date_time_interval(),
    )?;
    push(&mut out, registry, "TimeZone", "time-zone", &fixtures::time_zone())?;
    Ok(out)
}

fn push<T: 'static>(
    out: &mut Vec<SchemaExample>,
    registry: &ConverterRegistry,
    type_name: &'static str,
    format: &'static str,
    value: &T,
) -> Result<(), RegistryError> {
    let example = registry.format_value(value)?;
    out.push(SchemaExample { type_name, format, example: example.clone(), nullable: false });
    out.push(SchemaExample { type_name, format, example, nullable: true });
    Ok(())
}

/// Fixed example values. These are constants of the documentation surface,
/// not random fixtures: regenerating a schema must never produce a diff.
mod fixtures {
    use super::*;

    pub fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 2, 30, 0).single().expect("valid instant")
    }

    pub fn local_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date")
    }

    pub fn local_time() -> NaiveTime {
        NaiveTime::from_hms_opt(2, 30, 0).expect("valid time")
    }

    pub fn local_date_time() -> NaiveDateTime {
        local_date().and_time(local_time())
    }

    pub fn offset() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).expect("valid offset")
    }

    pub fn offset_date_time() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(-5 * 3600)
            .expect("valid offset")
            .with_ymd_and_hms(2024, 3, 10, 2, 30, 0)
            .single()
            .expect("valid date-time")
    }

    pub fn zoned_date_time() -> DateTime<Tz> {
        // June noon in New York is well clear of either DST transition.
        Tz::America__New_York
            .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    pub fn duration() -> TimeDelta {
        TimeDelta::hours(2) + TimeDelta::minutes(3) + TimeDelta::seconds(45)
    }

    pub fn period() -> Period {
        Period::from_days(3) + Period::from_hours(2)
    }

    pub fn instant_interval() -> InstantInterval {
        InstantInterval::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("valid instant"),
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().expect("valid instant"),
        )
        .expect("ordered bounds")
    }

    pub fn date_interval() -> DateInterval {
        DateInterval::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid date"),
        )
        .expect("ordered bounds")
    }

    pub fn time_interval() -> TimeInterval {
        TimeInterval::new(
            NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
            NaiveTime::from_hms_opt(17, 30, 0).expect("valid time"),
        )
        .expect("ordered bounds")
    }

    pub fn date_time_interval() -> DateTimeInterval {
        DateTimeInterval::new(
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .expect("valid date")
                .and_hms_opt(8, 0, 0)
                .expect("valid time"),
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .expect("valid date")
                .and_hms_opt(17, 30, 0)
                .expect("valid time"),
        )
        .expect("ordered bounds")
    }

    pub fn time_zone() -> Tz {
        Tz::America__New_York
    }
}

/// Render an example as a string-typed JSON schema object with the example
/// attached; nullable entries allow `null` alongside the string form.
#[cfg(feature = "schemars")]
pub fn json_schema(example: &SchemaExample) -> schemars::Schema {
    let type_field = if example.nullable {
        serde_json::json!(["string", "null"])
    } else {
        serde_json::json!("string")
    };
    let value = serde_json::json!({
        "type": type_field,
        "format": example.format,
        "examples": [example.example],
    });
    schemars::Schema::try_from(value).expect("schema literal is a valid object")
}
