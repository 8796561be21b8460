//! Request field validation and normalization.
//!
//! Destinations are trimmed and title-cased before they reach a prompt, day
//! counts are bounded, and unrecognized budget tiers quietly fall back to
//! `medium` instead of erroring.

use crate::errors::AppError;

pub const MIN_LOCATION_LEN: usize = 2;
pub const MAX_LOCATION_LEN: usize = 100;
pub const DEFAULT_DAYS: u8 = 3;
pub const MAX_DAYS: u8 = 14;

/// Budget tier attached to most prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

impl Budget {
    /// Parses a tier, coercing anything unrecognized to `Medium`.
    /// Only lowercasing is applied; padded input does not match a tier.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_lowercase()).as_deref() {
            Some("low") => Budget::Low,
            Some("high") => Budget::High,
            _ => Budget::Medium,
        }
    }

    /// Phrasing injected into prompt templates for this tier.
    pub fn context(self) -> &'static str {
        match self {
            Budget::Low => "budget-friendly, affordable",
            Budget::Medium => "mid-range, good value",
            Budget::High => "luxury, premium",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Budget::Low => "low",
            Budget::Medium => "medium",
            Budget::High => "high",
        }
    }
}

/// Trims and title-cases a place name, enforcing length bounds.
/// Bounds count characters, not bytes.
pub fn normalize_location(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    let length = trimmed.chars().count();
    if length < MIN_LOCATION_LEN || length > MAX_LOCATION_LEN {
        return Err(AppError::Validation(format!(
            "location must be between {MIN_LOCATION_LEN} and {MAX_LOCATION_LEN} characters"
        )));
    }
    Ok(title_case(trimmed))
}

/// Validates a day count, defaulting to 3.
pub fn validate_days(days: Option<i64>) -> Result<u8, AppError> {
    let days = days.unwrap_or(DEFAULT_DAYS as i64);
    if days < 1 || days > MAX_DAYS as i64 {
        return Err(AppError::Validation(format!(
            "days must be between 1 and {MAX_DAYS}"
        )));
    }
    Ok(days as u8)
}

/// Validates a traveler count, defaulting to 1.
pub fn validate_travelers(travelers: Option<i64>) -> Result<u8, AppError> {
    let travelers = travelers.unwrap_or(1);
    if travelers < 1 || travelers > 100 {
        return Err(AppError::Validation(
            "travelers must be between 1 and 100".to_string(),
        ));
    }
    Ok(travelers as u8)
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
