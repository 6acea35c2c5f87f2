//! Fixed directory of supported cities.
//!
//! The set of keys is decided at build time; the table is built once and
//! never mutated, so lookups need no synchronization.

use std::collections::HashMap;
use std::sync::LazyLock;

/// A supported city and its coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Stable lookup key, lowercase ASCII
    pub key: &'static str,
    /// Name shown to the user
    pub display_name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

static CITIES: LazyLock<HashMap<&'static str, City>> = LazyLock::new(|| {
    [
        City {
            key: "warszawa",
            display_name: "Warszawa",
            latitude: 52.2297,
            longitude: 21.0122,
        },
        City {
            key: "krakow",
            display_name: "Kraków",
            latitude: 50.0647,
            longitude: 19.9450,
        },
        City {
            key: "londyn",
            display_name: "Londyn",
            latitude: 51.5074,
            longitude: -0.1278,
        },
        City {
            key: "paryz",
            display_name: "Paryż",
            latitude: 48.8566,
            longitude: 2.3522,
        },
        City {
            key: "berlin",
            display_name: "Berlin",
            latitude: 52.5200,
            longitude: 13.4050,
        },
    ]
    .into_iter()
    .map(|city| (city.key, city))
    .collect()
});

/// Look up a city by its directory key.
pub fn lookup(key: &str) -> Option<&'static City> {
    CITIES.get(key)
}

/// All cities in stable key order, for rendering the picker.
pub fn all() -> Vec<&'static City> {
    let mut cities: Vec<_> = CITIES.values().collect();
    cities.sort_by_key(|city| city.key);
    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("warszawa", "Warszawa", 52.2297, 21.0122)]
    #[case("krakow", "Kraków", 50.0647, 19.9450)]
    #[case("londyn", "Londyn", 51.5074, -0.1278)]
    #[case("paryz", "Paryż", 48.8566, 2.3522)]
    #[case("berlin", "Berlin", 52.5200, 13.4050)]
    fn test_lookup_round_trips(
        #[case] key: &str,
        #[case] display_name: &str,
        #[case] latitude: f64,
        #[case] longitude: f64,
    ) {
        let city = lookup(key).expect("directory key must resolve");
        assert_eq!(city.key, key);
        assert_eq!(city.display_name, display_name);
        assert_eq!(city.latitude, latitude);
        assert_eq!(city.longitude, longitude);
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert!(lookup("nonexistent").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("WARSZAWA").is_none());
    }

    #[test]
    fn test_all_is_complete_and_ordered() {
        let cities = all();
        assert_eq!(cities.len(), 5);
        let keys: Vec<_> = cities.iter().map(|city| city.key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }
}
