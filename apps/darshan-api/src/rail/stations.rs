//! City to principal-station-code resolution.
//!
//! Covers the metros and pilgrimage towns the app ships with. Cities missing
//! from this table go through the model-suggested nearby-station fallback.

/// (lowercased city name, principal station code)
const STATION_CODES: &[(&str, &str)] = &[
    ("agra", "AGC"),
    ("amritsar", "ASR"),
    ("ayodhya", "AY"),
    ("bengaluru", "SBC"),
    ("bhubaneswar", "BBS"),
    ("chennai", "MAS"),
    ("delhi", "NDLS"),
    ("dwarka", "DWK"),
    ("gaya", "GAYA"),
    ("guwahati", "GHY"),
    ("haridwar", "HW"),
    ("hyderabad", "HYB"),
    ("jaipur", "JP"),
    ("kanyakumari", "CAPE"),
    ("katra", "SVDK"),
    ("kolkata", "HWH"),
    ("lucknow", "LKO"),
    ("madurai", "MDU"),
    ("mathura", "MTJ"),
    ("mumbai", "CSMT"),
    ("new delhi", "NDLS"),
    ("puri", "PURI"),
    ("rameswaram", "RMM"),
    ("rishikesh", "RKSH"),
    ("shirdi", "SNSI"),
    ("tirupati", "TPTY"),
    ("ujjain", "UJN"),
    ("varanasi", "BSB"),
];

/// Resolves a city name to its principal station code, if the city is known.
/// Matching is case-insensitive on the trimmed name.
pub fn station_code(city: &str) -> Option<&'static str> {
    let needle = city.trim().to_lowercase();
    STATION_CODES
        .iter()
        .find(|(name, _)| *name == needle)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_code_known_cities() {
        assert_eq!(station_code("Varanasi"), Some("BSB"));
        assert_eq!(station_code("new delhi"), Some("NDLS"));
        assert_eq!(station_code("  TIRUPATI "), Some("TPTY"));
    }

    #[test]
    fn test_station_code_unknown_city() {
        assert_eq!(station_code("Alakhpuri"), None);
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        for pair in STATION_CODES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} >= {}", pair[0].0, pair[1].0);
        }
    }
}
