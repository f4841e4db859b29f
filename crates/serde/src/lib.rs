//! # tempora-serde
//!
//! `#[serde(with = …)]` field adapters that encode and decode temporal
//! values through the canonical text patterns of `tempora-core`.
//!
//! chrono's own `serde` feature is deliberately **not** enabled anywhere in
//! this workspace: without these explicit adapters a temporal field simply
//! does not serialize, so no implicit chrono representation can bypass the
//! canonical patterns.
//!
//! `Period` and the interval types carry their own `Serialize`/`Deserialize`
//! impls in `tempora-core` (feature `serde`), wired to the same patterns;
//! this crate covers the foreign chrono types.
//!
//! ## Zone resolution
//!
//! The [`zoned_date_time`] and [`time_zone`] adapters resolve zone names
//! against the tz database bundled with `chrono-tz`: serde impls are
//! stateless, so they cannot consult a host-configured
//! [`ZoneProvider`](tempora_core::ZoneProvider). A host that restricts the
//! zone set in its registry should decode zone-bearing fields as strings and
//! parse them through the registry, not through these adapters.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{DateTime, NaiveDate, Utc};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Booking {
//!     #[serde(with = "tempora_serde::local_date")]
//!     day: NaiveDate,
//!     #[serde(with = "tempora_serde::instant::option")]
//!     confirmed_at: Option<DateTime<Utc>>,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let booking: Booking =
//!     serde_json::from_str(r#"{"day":"2024-03-10","confirmed_at":null}"#)?;
//! assert_eq!(serde_json::to_string(&booking)?, r#"{"day":"2024-03-10","confirmed_at":null}"#);
//! # Ok(())
//! # }
//! ```

use chrono::DateTime;
use chrono_tz::Tz;
use tempora_core::pattern;
use tempora_core::{BundledTzdb, ParseOutcome};

/// Defines a `with`-module (plus its `option` submodule) over one canonical
/// format/parse pair.
macro_rules! text_adapter {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $format:path, $parse:path) => {
        $(#[$doc])*
        pub mod $name {
            use serde::de::Error as _;
            use serde::{Deserialize, Deserializer, Serialize, Serializer};

            /// Encode the value as its canonical text.
            pub fn serialize<S: Serializer>(value: &$ty, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$format(value))
            }

            /// Decode the value from its canonical text.
            pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<$ty, D::Error> {
                let text = String::deserialize(deserializer)?;
                $parse(&text).map_err(D::Error::custom)
            }

            struct AsText<'a>(&'a $ty);

            impl Serialize for AsText<'_> {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    super::$name::serialize(self.0, serializer)
                }
            }

            /// Adapter for the nullable counterpart, `Option<T>`.
            pub mod option {
                use super::AsText;
                use serde::de::Error as _;
                use serde::{Deserialize, Deserializer, Serializer};

                /// Encode `Some` as canonical text and `None` as null.
                pub fn serialize<S: Serializer>(
                    value: &Option<$ty>,
                    serializer: S,
                ) -> Result<S::Ok, S::Error> {
                    match value {
                        Some(value) => serializer.serialize_some(&AsText(value)),
                        None => serializer.serialize_none(),
                    }
                }

                /// Decode null as `None`, anything else as canonical text.
                pub fn deserialize<'de, D: Deserializer<'de>>(
                    deserializer: D,
                ) -> Result<Option<$ty>, D::Error> {
                    Option::<String>::deserialize(deserializer)?
                        .map(|text| $parse(&text).map_err(D::Error::custom))
                        .transpose()
                }
            }
        }
    };
}

text_adapter!(
    /// UTC instants as `YYYY-MM-DDTHH:MM:SS(.f)Z`.
    instant,
    chrono::DateTime<chrono::Utc>,
    tempora_core::pattern::format_instant,
    tempora_core::pattern::parse_instant
);

text_adapter!(
    /// Local dates as `YYYY-MM-DD`.
    local_date,
    chrono::NaiveDate,
    tempora_core::pattern::format_local_date,
    tempora_core::pattern::parse_local_date
);

text_adapter!(
    /// Local times as `HH:MM:SS(.f)`.
    local_time,
    chrono::NaiveTime,
    tempora_core::pattern::format_local_time,
    tempora_core::pattern::parse_local_time
);

text_adapter!(
    /// Local date-times as `YYYY-MM-DDTHH:MM:SS(.f)`.
    local_date_time,
    chrono::NaiveDateTime,
    tempora_core::pattern::format_local_date_time,
    tempora_core::pattern::parse_local_date_time
);

text_adapter!(
    /// UTC offsets as `Z` or `±HH:MM(:SS)`.
    offset,
    chrono::FixedOffset,
    tempora_core::pattern::format_offset,
    tempora_core::pattern::parse_offset
);

text_adapter!(
    /// Offset date-times as local text plus offset.
    offset_date_time,
    chrono::DateTime<chrono::FixedOffset>,
    tempora_core::pattern::format_offset_date_time,
    tempora_core::pattern::parse_offset_date_time
);

text_adapter!(
    /// Durations as `(-)H:MM:SS(.f)`.
    duration,
    chrono::TimeDelta,
    tempora_core::pattern::format_duration,
    tempora_core::pattern::parse_duration
);

text_adapter!(
    /// Zoned date-times as offset date-time text plus `[Zone/Id]`, resolved
    /// against the bundled tz database.
    zoned_date_time,
    chrono::DateTime<chrono_tz::Tz>,
    tempora_core::pattern::format_zoned_date_time,
    crate::parse_zoned_bundled
);

text_adapter!(
    /// Time zones as canonical tzdb identifiers, resolved against the
    /// bundled tz database.
    time_zone,
    chrono_tz::Tz,
    tempora_core::pattern::format_time_zone,
    crate::parse_time_zone_bundled
);

// Serde has no way to thread a runtime handle into `Deserialize`, so the
// zone-aware adapters resolve against the bundled database. Hosts with a
// restricted provider decode zone-bearing text through the registry instead.
fn parse_zoned_bundled(text: &str) -> ParseOutcome<DateTime<Tz>> {
    pattern::parse_zoned_date_time(text, &BundledTzdb)
}

fn parse_time_zone_bundled(text: &str) -> ParseOutcome<Tz> {
    pattern::parse_time_zone(text, &BundledTzdb)
}
