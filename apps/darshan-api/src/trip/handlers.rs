//! Axum route handlers for the pilgrimage API.

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::errors::AppError;
use crate::rail::TrainService;
use crate::state::AppState;
use crate::trip::prompts;
use crate::trip::query::{self, TravelMode};
use crate::trip::summary::{find_direct_trains, TrainSearch};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Envelope returned by every single-prompt endpoint. The generated text is
/// passed through verbatim; an upstream failure flips `success` and carries
/// the error message instead.
#[derive(Debug, Serialize, Deserialize)]
pub struct SimpleResponse {
    pub success: bool,
    pub response: String,
    pub error: Option<String>,
}

impl SimpleResponse {
    pub fn ok(response: String) -> Self {
        Self {
            success: true,
            response,
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            response: String::new(),
            error: Some(error),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DestinationQuery {
    pub destination: String,
}

/// Body for `/trip-summary`.
#[derive(Debug, Deserialize)]
pub struct TripSummaryRequest {
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub mode: Option<String>,
}

/// `/trip-summary` envelope: the woven plan plus whatever direct trains the
/// schedule lookup produced (empty when travelling by road or air, or when
/// the lookup degraded).
#[derive(Debug, Serialize)]
pub struct TripSummaryResponse {
    pub success: bool,
    pub response: String,
    pub trains: Vec<TrainService>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrainsQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
}

/// `/trains` envelope around the search outcome.
#[derive(Debug, Serialize)]
pub struct TrainsResponse {
    pub success: bool,
    pub origin_station: Option<String>,
    pub destination_station: Option<String>,
    pub used_nearby_stations: bool,
    pub trains: Vec<TrainService>,
    pub error: Option<String>,
}

impl TrainsResponse {
    fn ok(search: TrainSearch) -> Self {
        Self {
            success: true,
            origin_station: Some(search.origin_station),
            destination_station: Some(search.destination_station),
            used_nearby_stations: search.used_nearby_stations,
            trains: search.trains,
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            success: false,
            origin_station: None,
            destination_station: None,
            used_nearby_stations: false,
            trains: Vec::new(),
            error: Some(error),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// Runs one prompt through Gemini, folding upstream failure into the
/// `success=false` envelope instead of an HTTP error.
async fn generate_simple(state: &AppState, prompt: String) -> Json<SimpleResponse> {
    match state.gemini.generate(&prompt).await {
        Ok(text) => Json(SimpleResponse::ok(text)),
        Err(e) => {
            error!("Generation failed: {e}");
            Json(SimpleResponse::failed(e.to_string()))
        }
    }
}

/// GET /itinerary?destination=...
pub async fn handle_itinerary(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let destination = query::normalize_place(&params.destination, "destination")?;
    Ok(generate_simple(&state, prompts::itinerary_prompt(&destination)).await)
}

/// GET /food-restaurants?destination=...
pub async fn handle_food(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let destination = query::normalize_place(&params.destination, "destination")?;
    Ok(generate_simple(&state, prompts::food_prompt(&destination)).await)
}

/// GET /stay-options?destination=...
pub async fn handle_stay_options(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let destination = query::normalize_place(&params.destination, "destination")?;
    Ok(generate_simple(&state, prompts::stay_prompt(&destination)).await)
}

/// GET /local-conveyance?destination=...
pub async fn handle_local_conveyance(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let destination = query::normalize_place(&params.destination, "destination")?;
    Ok(generate_simple(&state, prompts::transport_prompt(&destination)).await)
}

/// GET /markets?destination=...
pub async fn handle_markets(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let destination = query::normalize_place(&params.destination, "destination")?;
    Ok(generate_simple(&state, prompts::markets_prompt(&destination)).await)
}

/// GET /things-to-do?destination=...
pub async fn handle_things_to_do(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let destination = query::normalize_place(&params.destination, "destination")?;
    Ok(generate_simple(&state, prompts::things_to_do_prompt(&destination)).await)
}

/// GET /nearby-attractions?destination=...
pub async fn handle_attractions(
    State(state): State<AppState>,
    Query(params): Query<DestinationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let destination = query::normalize_place(&params.destination, "destination")?;
    Ok(generate_simple(&state, prompts::attractions_prompt(&destination)).await)
}

/// POST /trip-summary
///
/// The one composite endpoint: for train journeys the direct-train search
/// runs first and its outcome is woven into the summary prompt. A failed or
/// empty lookup degrades to a note in the prompt; the summary is still
/// generated.
pub async fn handle_trip_summary(
    State(state): State<AppState>,
    Json(request): Json<TripSummaryRequest>,
) -> Result<Json<TripSummaryResponse>, AppError> {
    let origin = query::normalize_place(&request.origin, "origin")?;
    let destination = query::normalize_place(&request.destination, "destination")?;
    let days = query::journey_days(request.start_date, request.end_date)?;
    let mode = TravelMode::parse(request.mode.as_deref());

    let search = if mode == TravelMode::Train {
        match find_direct_trains(
            &state.gemini,
            &state.rail,
            &origin,
            &destination,
            request.start_date,
        )
        .await
        {
            Ok(search) => Some(search),
            Err(e) => {
                warn!("Train search failed, summarizing without schedules: {e}");
                None
            }
        }
    } else {
        None
    };

    let schedule = match (&search, mode) {
        (Some(search), _) => search.schedule_context(),
        (None, TravelMode::Train) => {
            "Live train schedules are unavailable right now; suggest typical trains for this route."
                .to_string()
        }
        (None, _) => String::new(),
    };

    let prompt = prompts::trip_summary_prompt(
        &origin,
        &destination,
        request.start_date,
        request.end_date,
        days,
        mode,
        &schedule,
    );

    match state.gemini.generate(&prompt).await {
        Ok(text) => Ok(Json(TripSummaryResponse {
            success: true,
            response: text,
            trains: search.map(|s| s.trains).unwrap_or_default(),
            error: None,
        })),
        Err(e) => {
            error!("Trip summary generation failed: {e}");
            Ok(Json(TripSummaryResponse {
                success: false,
                response: String::new(),
                trains: Vec::new(),
                error: Some(e.to_string()),
            }))
        }
    }
}

/// GET /trains?origin=...&destination=...&date=YYYY-MM-DD
///
/// Exposes the direct-train search on its own. Zero trains after the
/// nearby-station retry is a successful answer; only upstream or suggestion
/// failures flip `success`.
pub async fn handle_trains(
    State(state): State<AppState>,
    Query(params): Query<TrainsQuery>,
) -> Result<Json<TrainsResponse>, AppError> {
    let origin = query::normalize_place(&params.origin, "origin")?;
    let destination = query::normalize_place(&params.destination, "destination")?;

    match find_direct_trains(&state.gemini, &state.rail, &origin, &destination, params.date).await {
        Ok(search) => Ok(Json(TrainsResponse::ok(search))),
        Err(e) => {
            error!("Train search failed: {e}");
            Ok(Json(TrainsResponse::failed(e.to_string())))
        }
    }
}
