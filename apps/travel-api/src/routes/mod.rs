pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::travel::handlers;

async fn not_found() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/plan-trip", post(handlers::handle_plan_trip))
        .route("/itinerary", get(handlers::handle_itinerary))
        .route("/stay-options", get(handlers::handle_stay_options))
        .route("/local-conveyance", get(handlers::handle_local_conveyance))
        .route(
            "/nearby-attractions",
            get(handlers::handle_nearby_attractions),
        )
        .route("/markets", get(handlers::handle_markets))
        .route("/food-restaurants", get(handlers::handle_food_restaurants))
        .route("/things-to-do", get(handlers::handle_things_to_do))
        .route("/travel-guide", post(handlers::handle_travel_guide))
        .route("/quick-info/:category", get(handlers::handle_quick_info))
        .route(
            "/destinations/popular",
            get(handlers::handle_popular_destinations),
        )
        .route("/weather/:location", get(handlers::handle_weather))
        .route(
            "/budget-estimate/:location",
            get(handlers::handle_budget_estimate),
        )
        .fallback(not_found)
        .with_state(state)
}
