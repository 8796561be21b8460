//! Axum route handlers for the travel recommendation API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::AppError;
use crate::state::AppState;
use crate::travel::guide::{build_guide, TravelGuideResponse};
use crate::travel::prompts::{self, Category};
use crate::travel::query::{self, Budget};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body for `/plan-trip` and `/travel-guide`.
#[derive(Debug, Deserialize)]
pub struct TravelRequest {
    pub location: String,
    pub days: Option<i64>,
    pub budget: Option<String>,
    pub interests: Option<String>,
}

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
pub struct LocationQuery {
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct ItineraryQuery {
    pub location: String,
    pub days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct QuickInfoQuery {
    pub location: String,
    pub days: Option<i64>,
    pub budget: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BudgetEstimateQuery {
    pub days: Option<i64>,
    pub travelers: Option<i64>,
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

/// POST /plan-trip
///
/// One-shot trip plan from location, days and budget tier.
pub async fn handle_plan_trip(
    State(state): State<AppState>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&request.location)?;
    let days = query::validate_days(request.days)?;
    let budget = Budget::parse(request.budget.as_deref());

    let prompt = prompts::plan_trip_prompt(&location, days, budget);
    Ok(generate_simple(&state, prompt).await)
}

/// GET /itinerary?location=...&days=...
pub async fn handle_itinerary(
    State(state): State<AppState>,
    Query(params): Query<ItineraryQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&params.location)?;
    let days = query::validate_days(params.days)?;

    let prompt = prompts::category_prompt(Category::Itinerary, &location, days, Budget::default());
    Ok(generate_simple(&state, prompt).await)
}

/// GET /stay-options?location=...
pub async fn handle_stay_options(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&params.location)?;

    let prompt = prompts::category_prompt(
        Category::Accommodation,
        &location,
        query::DEFAULT_DAYS,
        Budget::default(),
    );
    Ok(generate_simple(&state, prompt).await)
}

/// GET /local-conveyance?location=...
pub async fn handle_local_conveyance(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&params.location)?;

    let prompt = prompts::category_prompt(
        Category::Transport,
        &location,
        query::DEFAULT_DAYS,
        Budget::default(),
    );
    Ok(generate_simple(&state, prompt).await)
}

/// GET /nearby-attractions?location=...
pub async fn handle_nearby_attractions(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&params.location)?;

    let prompt = prompts::category_prompt(
        Category::Attractions,
        &location,
        query::DEFAULT_DAYS,
        Budget::default(),
    );
    Ok(generate_simple(&state, prompt).await)
}

/// GET /markets?location=...
pub async fn handle_markets(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&params.location)?;

    let prompt = prompts::category_prompt(
        Category::Shopping,
        &location,
        query::DEFAULT_DAYS,
        Budget::default(),
    );
    Ok(generate_simple(&state, prompt).await)
}

/// GET /food-restaurants?location=...
pub async fn handle_food_restaurants(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&params.location)?;

    let prompt = prompts::category_prompt(
        Category::Food,
        &location,
        query::DEFAULT_DAYS,
        Budget::default(),
    );
    Ok(generate_simple(&state, prompt).await)
}

/// GET /things-to-do?location=...
pub async fn handle_things_to_do(
    State(state): State<AppState>,
    Query(params): Query<LocationQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&params.location)?;

    let prompt = prompts::things_to_do_prompt(&location);
    Ok(generate_simple(&state, prompt).await)
}

/// POST /travel-guide
///
/// Complete guide: all seven categories generated concurrently plus metadata.
pub async fn handle_travel_guide(
    State(state): State<AppState>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<TravelGuideResponse>, AppError> {
    let location = query::normalize_location(&request.location)?;
    let days = query::validate_days(request.days)?;
    let budget = Budget::parse(request.budget.as_deref());

    let guide = build_guide(
        &state.gemini,
        &location,
        days,
        budget,
        request.interests.as_deref(),
    )
    .await;

    Ok(Json(guide))
}

/// GET /quick-info/:category?location=...&days=...&budget=...
pub async fn handle_quick_info(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<QuickInfoQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let category = Category::parse(&category).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid category. Use: {}",
            Category::ALL.map(Category::as_str).join(", ")
        ))
    })?;
    let location = query::normalize_location(&params.location)?;
    let days = query::validate_days(params.days)?;
    let budget = Budget::parse(params.budget.as_deref());

    let prompt = prompts::category_prompt(category, &location, days, budget);
    Ok(generate_simple(&state, prompt).await)
}

/// GET /destinations/popular
pub async fn handle_popular_destinations(
    State(state): State<AppState>,
) -> Json<SimpleResponse> {
    generate_simple(&state, prompts::POPULAR_DESTINATIONS_PROMPT.to_string()).await
}

/// GET /weather/:location
pub async fn handle_weather(
    State(state): State<AppState>,
    Path(location): Path<String>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&location)?;

    let prompt = prompts::weather_prompt(&location);
    Ok(generate_simple(&state, prompt).await)
}

/// GET /budget-estimate/:location?days=...&travelers=...
pub async fn handle_budget_estimate(
    State(state): State<AppState>,
    Path(location): Path<String>,
    Query(params): Query<BudgetEstimateQuery>,
) -> Result<Json<SimpleResponse>, AppError> {
    let location = query::normalize_location(&location)?;
    let days = query::validate_days(params.days)?;
    let travelers = query::validate_travelers(params.travelers)?;

    let prompt = prompts::budget_estimate_prompt(&location, days, travelers);
    Ok(generate_simple(&state, prompt).await)
}
