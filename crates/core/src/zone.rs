//! Zone lookup boundary.
//!
//! The core never constructs zone data itself: time-zone identifiers are
//! resolved through a [`ZoneProvider`] supplied by the host at setup time.
//! An unknown identifier is reported as a lookup miss, never substituted
//! with a default zone.

use chrono_tz::Tz;

/// Resolves canonical tzdb identifiers to time zones.
///
/// Implementations are expected to be cheap, synchronous, in-memory lookups
/// against a preloaded zone database. The provider is shared read-only across
/// concurrent parsers.
pub trait ZoneProvider: Send + Sync {
    /// Look up a zone by its canonical identifier, e.g. `America/New_York`.
    /// Returns `None` when the identifier is unknown.
    fn zone(&self, id: &str) -> Option<Tz>;
}

/// Provider backed by the tz database bundled with `chrono-tz`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledTzdb;

impl ZoneProvider for BundledTzdb {
    fn zone(&self, id: &str) -> Option<Tz> {
        id.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_tzdb_resolves_known_identifiers() {
        assert_eq!(BundledTzdb.zone("America/New_York"), Some(Tz::America__New_York));
        assert_eq!(BundledTzdb.zone("UTC"), Some(Tz::UTC));
    }

    #[test]
    fn bundled_tzdb_rejects_unknown_identifiers() {
        assert_eq!(BundledTzdb.zone("Not/AZone"), None);
        assert_eq!(BundledTzdb.zone(""), None);
        // Lookup is case-sensitive on canonical identifiers.
        assert_eq!(BundledTzdb.zone("america/new_york"), None);
    }
}
