use gemini_client::GeminiClient;

use crate::rail::RailClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub gemini: GeminiClient,
    pub rail: RailClient,
}
