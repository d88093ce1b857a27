//! External cache collaborator interface.
//!
//! The core never caches internally — every operation is a pure function
//! of its inputs. Callers that want memoization bring a key-value store
//! implementing [`KeyValueCache`] and key entries with [`cache_key`].
//! Writes are idempotent because results are deterministic.

use jyotish_time::Moment;
use jyotish_vedic::Ayanamsha;

/// Minimal key-value cache contract (a Redis-like store fits directly).
pub trait KeyValueCache {
    /// Fetch a cached value, if present and unexpired.
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    /// Store a value with a time-to-live in seconds.
    fn set(&mut self, key: &str, value: &[u8], ttl_seconds: u64);
}

/// Build a cache key for a location-and-date bound result.
///
/// Coordinates are rounded to 4 decimal places (~11 m) so that nearby
/// lookups share entries; the date's time component is excluded because
/// daily results depend only on the civil date.
pub fn cache_key(
    kind: &str,
    latitude_deg: f64,
    longitude_deg: f64,
    date: &Moment,
    system: Ayanamsha,
) -> String {
    format!(
        "{kind}:{:.4}:{:.4}:{:04}-{:02}-{:02}:{}",
        latitude_deg,
        longitude_deg,
        date.year,
        date.month,
        date.day,
        system.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapCache(HashMap<String, Vec<u8>>);

    impl KeyValueCache for MapCache {
        fn get(&self, key: &str) -> Option<Vec<u8>> {
            self.0.get(key).cloned()
        }
        fn set(&mut self, key: &str, value: &[u8], _ttl_seconds: u64) {
            self.0.insert(key.to_string(), value.to_vec());
        }
    }

    #[test]
    fn key_shape() {
        let date = Moment::new(2024, 3, 5, 14, 30, 0.0);
        let key = cache_key("panchang", 28.6139, 77.209, &date, Ayanamsha::Lahiri);
        assert_eq!(key, "panchang:28.6139:77.2090:2024-03-05:lahiri");
    }

    #[test]
    fn time_of_day_excluded() {
        let morning = Moment::new(2024, 3, 5, 1, 0, 0.0);
        let night = Moment::new(2024, 3, 5, 23, 0, 0.0);
        assert_eq!(
            cache_key("panchang", 10.0, 20.0, &morning, Ayanamsha::Lahiri),
            cache_key("panchang", 10.0, 20.0, &night, Ayanamsha::Lahiri),
        );
    }

    #[test]
    fn nearby_coordinates_share_keys() {
        let date = Moment::new(2024, 3, 5, 0, 0, 0.0);
        let a = cache_key("panchang", 28.61391, 77.20901, &date, Ayanamsha::Lahiri);
        let b = cache_key("panchang", 28.61393, 77.20899, &date, Ayanamsha::Lahiri);
        assert_eq!(a, b);
    }

    #[test]
    fn different_systems_differ() {
        let date = Moment::new(2024, 3, 5, 0, 0, 0.0);
        let a = cache_key("panchang", 10.0, 20.0, &date, Ayanamsha::Lahiri);
        let b = cache_key("panchang", 10.0, 20.0, &date, Ayanamsha::Raman);
        assert_ne!(a, b);
    }

    #[test]
    fn roundtrip_through_cache() {
        let mut cache = MapCache(HashMap::new());
        let date = Moment::new(2024, 3, 5, 0, 0, 0.0);
        let key = cache_key("chart", 10.0, 20.0, &date, Ayanamsha::Lahiri);
        assert!(cache.get(&key).is_none());
        cache.set(&key, b"payload", 3600);
        assert_eq!(cache.get(&key).as_deref(), Some(&b"payload"[..]));
    }
}
