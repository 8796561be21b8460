//! Direct-train search with the nearby-station fallback.
//!
//! The chain: map both cities to station codes via the static table, look up
//! direct trains, and if either city is unmapped or the route comes back
//! empty, ask the model for nearby major station codes (strict JSON) and
//! retry the lookup exactly once. An empty result after the retry is a valid
//! outcome, not an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use chrono::NaiveDate;

use crate::rail::stations;
use crate::rail::{RailClient, RailError, TrainService};
use gemini_client::{GeminiClient, GeminiError};

use crate::trip::prompts;

/// At most this many trains are rendered into the summary prompt.
const MAX_SCHEDULE_LINES: usize = 5;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("train lookup failed: {0}")]
    Rail(#[from] RailError),

    #[error("station suggestion failed: {0}")]
    Suggestion(#[from] GeminiError),

    #[error("model returned unusable station codes")]
    BadSuggestion,
}

/// Station codes suggested by the model when the direct lookup comes up empty.
#[derive(Debug, Deserialize)]
pub struct StationSuggestion {
    pub origin_code: String,
    pub destination_code: String,
}

/// Outcome of a direct-train search, recording which stations were finally
/// queried and whether the nearby-station fallback was used.
#[derive(Debug, Serialize)]
pub struct TrainSearch {
    pub origin_station: String,
    pub destination_station: String,
    pub used_nearby_stations: bool,
    pub trains: Vec<TrainService>,
}

impl TrainSearch {
    /// Renders the schedule block injected into the trip summary prompt.
    pub fn schedule_context(&self) -> String {
        if self.trains.is_empty() {
            return format!(
                "No direct trains were found between {} and {}; suggest the best alternative rail or road connections.",
                self.origin_station, self.destination_station
            );
        }

        let mut lines = vec![format!(
            "Direct trains from {} to {}:",
            self.origin_station, self.destination_station
        )];
        for train in self.trains.iter().take(MAX_SCHEDULE_LINES) {
            lines.push(format!(
                "- {} {} (departs {}, arrives {}, duration {})",
                train.train_number, train.train_name, train.from_std, train.to_sta, train.duration
            ));
        }
        lines.join("\n")
    }
}

/// Searches for direct trains between two cities, falling back to
/// model-suggested nearby stations when the table has no entry for a city or
/// the mapped route has no direct service.
pub async fn find_direct_trains(
    gemini: &GeminiClient,
    rail: &RailClient,
    origin: &str,
    destination: &str,
    date: NaiveDate,
) -> Result<TrainSearch, LookupError> {
    let mapped = (
        stations::station_code(origin),
        stations::station_code(destination),
    );

    if let (Some(from), Some(to)) = mapped {
        let trains = rail.trains_between(from, to, date).await?;
        if !trains.is_empty() {
            return Ok(TrainSearch {
                origin_station: from.to_string(),
                destination_station: to.to_string(),
                used_nearby_stations: false,
                trains,
            });
        }
        info!("No direct trains {from} to {to}; asking for nearby stations");
    } else {
        info!("No station mapping for '{origin}' or '{destination}'; asking for nearby stations");
    }

    let suggestion: StationSuggestion = gemini
        .generate_json(&prompts::station_suggestion_prompt(origin, destination))
        .await?;

    let from = suggestion.origin_code.trim().to_uppercase();
    let to = suggestion.destination_code.trim().to_uppercase();
    if from.is_empty() || to.is_empty() {
        return Err(LookupError::BadSuggestion);
    }
    info!("Model suggested stations {from} and {to}; retrying lookup");

    let trains = rail.trains_between(&from, &to, date).await?;
    Ok(TrainSearch {
        origin_station: from,
        destination_station: to,
        used_nearby_stations: true,
        trains,
    })
}
