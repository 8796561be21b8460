//! Request field validation and normalization.

use chrono::NaiveDate;

use crate::errors::AppError;

pub const MIN_PLACE_LEN: usize = 2;
pub const MAX_PLACE_LEN: usize = 100;
pub const MAX_DAYS: i64 = 14;

/// Mode of travel between origin and destination. Anything unrecognized
/// quietly falls back to `Train`, matching the app's default selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TravelMode {
    #[default]
    Train,
    Bus,
    Flight,
}

impl TravelMode {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_lowercase()).as_deref() {
            Some("bus") => TravelMode::Bus,
            Some("flight") => TravelMode::Flight,
            _ => TravelMode::Train,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TravelMode::Train => "train",
            TravelMode::Bus => "bus",
            TravelMode::Flight => "flight",
        }
    }
}

/// Trims and title-cases a place name, enforcing length bounds.
/// Bounds count characters, not bytes. `field` names the offending field in
/// the validation message.
pub fn normalize_place(raw: &str, field: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length < MIN_PLACE_LEN || length > MAX_PLACE_LEN {
        return Err(AppError::Validation(format!(
            "{field} must be between {MIN_PLACE_LEN} and {MAX_PLACE_LEN} characters"
        )));
    }
    Ok(title_case(trimmed))
}

/// Inclusive trip length in days, capped at two weeks for prompt purposes.
/// Rejects ranges where the return date precedes the start.
pub fn journey_days(start: NaiveDate, end: NaiveDate) -> Result<u8, AppError> {
    if end < start {
        return Err(AppError::Validation(
            "end_date must not be before start_date".to_string(),
        ));
    }
    let span = (end - start).num_days() + 1;
    Ok(span.min(MAX_DAYS) as u8)
}

/// Capitalizes the first letter of each whitespace-separated word and
/// lowercases the rest, collapsing internal whitespace runs.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalize_place_trims_and_cases() {
        assert_eq!(normalize_place(" ujjain ", "origin").unwrap(), "Ujjain");
    }

    #[test]
    fn test_normalize_place_names_field_in_error() {
        let err = normalize_place("x", "destination").unwrap_err();
        assert!(err.to_string().contains("destination"));
    }

    #[test]
    fn test_normalize_place_counts_chars_not_bytes() {
        // 7 characters, 21 bytes
        assert_eq!(
            normalize_place("वाराणसी", "destination").unwrap(),
            "वाराणसी"
        );
        assert!(normalize_place("च", "origin").is_err());
    }

    #[test]
    fn test_travel_mode_parse_coerces_unknown_to_train() {
        assert_eq!(TravelMode::parse(Some("BUS")), TravelMode::Bus);
        assert_eq!(TravelMode::parse(Some("flight")), TravelMode::Flight);
        assert_eq!(TravelMode::parse(Some(" bus ")), TravelMode::Train);
        assert_eq!(TravelMode::parse(Some("bullock cart")), TravelMode::Train);
        assert_eq!(TravelMode::parse(None), TravelMode::Train);
    }

    #[test]
    fn test_journey_days_inclusive_span() {
        assert_eq!(
            journey_days(date("2025-11-02"), date("2025-11-04")).unwrap(),
            3
        );
        assert_eq!(
            journey_days(date("2025-11-02"), date("2025-11-02")).unwrap(),
            1
        );
    }

    #[test]
    fn test_journey_days_caps_long_trips() {
        assert_eq!(
            journey_days(date("2025-11-01"), date("2025-12-25")).unwrap(),
            14
        );
    }

    #[test]
    fn test_journey_days_rejects_reversed_range() {
        assert!(journey_days(date("2025-11-04"), date("2025-11-02")).is_err());
    }
}
