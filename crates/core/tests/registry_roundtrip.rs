//! Cross-cutting registry behavior: round trips through the shared codecs,
//! rejection of malformed text, completeness of the built-in set, and
//! concurrent read access.

use std::sync::Arc;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone as _, Utc,
};
use chrono_tz::Tz;
use pretty_assertions::assert_eq;
use tempora_core::{
    ConverterRegistry, DateInterval, DateTimeInterval, InstantInterval, Period, TimeInterval,
    ZoneProvider,
};

fn registry() -> ConverterRegistry {
    ConverterRegistry::with_tzdb().expect("built-in setup must succeed")
}

fn round_trip<T>(registry: &ConverterRegistry, value: &T)
where
    T: PartialEq + std::fmt::Debug + 'static,
{
    let text = registry.format_value(value).unwrap();
    let back: T = registry.parse_as(&text).unwrap();
    assert_eq!(&back, value, "round trip failed via `{text}`");
}

#[test]
fn every_builtin_type_round_trips_representative_values() {
    let registry = registry();

    round_trip(&registry, &Utc.with_ymd_and_hms(2024, 3, 10, 2, 30, 0).unwrap());
    round_trip(&registry, &NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    round_trip(&registry, &NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap());
    round_trip(
        &registry,
        &NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(2, 30, 0).unwrap(),
    );
    round_trip(&registry, &FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap());
    round_trip(
        &registry,
        &FixedOffset::east_opt(-8 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 10, 2, 30, 0)
            .unwrap(),
    );
    round_trip(&registry, &Tz::America__New_York.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
    round_trip(&registry, &(TimeDelta::hours(2) + TimeDelta::minutes(3) + TimeDelta::seconds(45)));
    round_trip(&registry, &(Period::from_days(3) + Period::from_hours(2)));
    round_trip(
        &registry,
        &InstantInterval::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
        )
        .unwrap(),
    );
    round_trip(
        &registry,
        &DateInterval::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
        .unwrap(),
    );
    round_trip(
        &registry,
        &TimeInterval::new(
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
        )
        .unwrap(),
    );
    round_trip(
        &registry,
        &DateTimeInterval::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(8, 0, 0).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(17, 30, 0).unwrap(),
        )
        .unwrap(),
    );
    round_trip(&registry, &Tz::Europe__London);
}

#[test]
fn boundary_values_round_trip() {
    let registry = registry();

    round_trip(&registry, &DateTime::<Utc>::MIN_UTC);
    round_trip(&registry, &DateTime::<Utc>::MAX_UTC);
    round_trip(&registry, &TimeDelta::zero());
    round_trip(&registry, &TimeDelta::MIN);
    round_trip(&registry, &TimeDelta::MAX);
    round_trip(&registry, &Period::ZERO);

    // Degenerate zero-length interval.
    let instant = Utc.with_ymd_and_hms(2024, 3, 10, 2, 30, 0).unwrap();
    round_trip(&registry, &InstantInterval::new(instant, instant).unwrap());
}

#[test]
fn malformed_text_is_rejected_for_every_type() {
    let registry = registry();

    assert!(registry.parse_as::<DateTime<Utc>>("").is_err());
    assert!(registry.parse_as::<DateTime<Utc>>("2024-03-10T02:30:00").is_err());
    assert!(registry.parse_as::<NaiveDate>("2024-13-01").is_err());
    assert!(registry.parse_as::<NaiveTime>("25:00:00").is_err());
    assert!(registry.parse_as::<NaiveDateTime>("2024-03-10 02:30:00").is_err());
    assert!(registry.parse_as::<FixedOffset>("+24:00").is_err());
    assert!(registry.parse_as::<DateTime<FixedOffset>>("2024-03-10T02:30:00").is_err());
    assert!(registry.parse_as::<DateTime<Tz>>("2024-06-15T12:00:00-04:00[Not/AZone]").is_err());
    assert!(registry.parse_as::<TimeDelta>("2:3:45").is_err());
    assert!(registry.parse_as::<Period>("P3D2H").is_err());
    assert!(registry.parse_as::<InstantInterval>("2024-01-01T00:00:00Z").is_err());
    assert!(registry.parse_as::<DateInterval>("2024-01-31/2024-01-01").is_err());
    assert!(registry.parse_as::<TimeInterval>("08:00/17:30").is_err());
    assert!(registry.parse_as::<DateTimeInterval>("x/y").is_err());
    assert!(registry.parse_as::<Tz>("Not/AZone").is_err());
}

#[test]
fn formatting_is_deterministic_across_calls_and_threads() {
    let registry = Arc::new(registry());
    let value = Tz::America__New_York.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    let expected = registry.format_value(&value).unwrap();

    for _ in 0..100 {
        assert_eq!(registry.format_value(&value).unwrap(), expected);
    }

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..100 {
                    let codec = registry.resolve::<DateTime<Tz>>().unwrap();
                    assert_eq!(codec.format(&value), expected);
                    assert_eq!(codec.parse(&expected).unwrap(), value);
                }
            });
        }
    });
}

#[test]
fn zone_lookup_honors_the_configured_provider() {
    /// Provider that only knows a single zone.
    struct OnlyNewYork;

    impl ZoneProvider for OnlyNewYork {
        fn zone(&self, id: &str) -> Option<Tz> {
            (id == "America/New_York").then_some(Tz::America__New_York)
        }
    }

    let registry = ConverterRegistry::with_zone_provider(Arc::new(OnlyNewYork)).unwrap();
    assert_eq!(registry.parse_as::<Tz>("America/New_York").unwrap(), Tz::America__New_York);
    // Known to the bundled tzdb, but not to this provider.
    assert!(registry.parse_as::<Tz>("Europe/London").is_err());
}

#[test]
fn cross_surface_consistency_between_codec_and_type_impls() {
    // The inherent Display/FromStr impls and the registry codecs must agree,
    // since both delegate to the same patterns.
    let registry = registry();
    let period = Period::from_days(3) + Period::from_hours(2);
    assert_eq!(registry.format_value(&period).unwrap(), period.to_string());

    let text = "2024-01-01/2024-01-31";
    let via_registry: DateInterval = registry.parse_as(text).unwrap();
    let via_from_str: DateInterval = text.parse().unwrap();
    assert_eq!(via_registry, via_from_str);
}
