//! Train schedule lookup against the hosted IRCTC RapidAPI service.
//!
//! The client covers exactly one upstream operation, `trainBetweenStations`,
//! which lists direct trains between two station codes on a date. Resolving
//! city names to station codes lives in [`stations`]; the nearby-station
//! fallback that kicks in when a route has no direct trains is orchestrated
//! in `trip::summary`.

pub mod stations;

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Hosted upstream endpoint. Tests point the client at a local mock instead.
pub const RAIL_API_BASE: &str = "https://irctc1.p.rapidapi.com";
const RAIL_API_HOST: &str = "irctc1.p.rapidapi.com";

#[derive(Debug, Error)]
pub enum RailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Lookup rejected: {0}")]
    Rejected(String),
}

/// One direct train service between two stations. Field names follow the
/// upstream JSON keys so no serde renames are needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainService {
    pub train_number: String,
    pub train_name: String,
    /// Scheduled departure from the origin station, e.g. "06:00".
    #[serde(default)]
    pub from_std: String,
    /// Scheduled arrival at the destination station.
    #[serde(default)]
    pub to_sta: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub run_days: Vec<String>,
    #[serde(default)]
    pub class_type: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TrainBetweenStationsResponse {
    status: Option<bool>,
    message: Option<String>,
    #[serde(default)]
    data: Vec<TrainService>,
}

/// Thin client for the train schedule API.
#[derive(Clone)]
pub struct RailClient {
    client: Client,
    api_base: String,
    api_key: String,
}

impl RailClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(RAIL_API_BASE.to_string(), api_key)
    }

    /// Builds a client against a non-default API base. Used by tests to
    /// substitute a local mock server.
    pub fn with_base_url(api_base: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_base,
            api_key,
        }
    }

    /// Lists direct trains between two station codes on the given date.
    /// An empty list is a valid answer and means no direct service exists.
    pub async fn trains_between(
        &self,
        from: &str,
        to: &str,
        date: NaiveDate,
    ) -> Result<Vec<TrainService>, RailError> {
        let url = format!("{}/api/v3/trainBetweenStations", self.api_base);
        let date = date.format("%Y-%m-%d").to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("fromStationCode", from),
                ("toStationCode", to),
                ("dateOfJourney", date.as_str()),
            ])
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAIL_API_HOST)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RailError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: TrainBetweenStationsResponse = response.json().await?;
        if body.status == Some(false) {
            return Err(RailError::Rejected(
                body.message
                    .unwrap_or_else(|| "train lookup rejected".to_string()),
            ));
        }

        debug!("Found {} direct trains {from} to {to}", body.data.len());
        Ok(body.data)
    }
}
