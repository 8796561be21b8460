//! Shared test harness: spawns the app on a random port with the Gemini
//! client pointed at a local mock server instead of the hosted API.

use serde_json::{json, Value};

use gemini_client::GeminiClient;
use travel_api::routes::build_router;
use travel_api::state::AppState;

pub const TEST_MODEL: &str = "gemini-1.5-flash";

/// Binds the router to a random local port and returns its base URL.
pub async fn spawn_app(gemini_base_url: String) -> String {
    let gemini = GeminiClient::with_base_url(
        gemini_base_url,
        "test-key".to_string(),
        TEST_MODEL.to_string(),
    );
    let state = AppState { gemini };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{addr}")
}

/// Path of the generateContent call the app makes against the mock.
pub fn generate_path() -> String {
    format!("/models/{TEST_MODEL}:generateContent")
}

/// A well-formed Gemini success body carrying `text`.
pub fn gemini_text_body(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 10, "candidatesTokenCount": 42 }
    })
}
