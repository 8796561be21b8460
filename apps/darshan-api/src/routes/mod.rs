pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::trip::handlers;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/itinerary", get(handlers::handle_itinerary))
        .route("/food-restaurants", get(handlers::handle_food))
        .route("/stay-options", get(handlers::handle_stay_options))
        .route("/local-conveyance", get(handlers::handle_local_conveyance))
        .route("/markets", get(handlers::handle_markets))
        .route("/things-to-do", get(handlers::handle_things_to_do))
        .route("/nearby-attractions", get(handlers::handle_attractions))
        .route("/trip-summary", post(handlers::handle_trip_summary))
        .route("/trains", get(handlers::handle_trains))
        .fallback(not_found)
        .with_state(state)
}
