//! Shared test harness: spawns the app on a random port with both upstreams
//! (Gemini and the train schedule API) pointed at local mock servers.

use serde_json::{json, Value};

use darshan_api::rail::RailClient;
use darshan_api::routes::build_router;
use darshan_api::state::AppState;
use gemini_client::GeminiClient;

pub const TEST_MODEL: &str = "gemini-1.5-flash";

/// Binds the router to a random local port and returns its base URL.
pub async fn spawn_app(gemini_base_url: String, rail_base_url: String) -> String {
    let gemini = GeminiClient::with_base_url(
        gemini_base_url,
        "test-key".to_string(),
        TEST_MODEL.to_string(),
    );
    let rail = RailClient::with_base_url(rail_base_url, "test-rail-key".to_string());
    let state = AppState { gemini, rail };
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

/// Path of the generateContent call the app makes against the Gemini mock.
pub fn generate_path() -> String {
    format!("/models/{TEST_MODEL}:generateContent")
}

/// Path of the schedule lookup the app makes against the rail mock.
pub const TRAINS_PATH: &str = "/api/v3/trainBetweenStations";

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

/// One train entry shaped like the upstream schedule API's `data` items.
pub fn train_entry(number: &str, name: &str) -> Value {
    json!({
        "train_number": number,
        "train_name": name,
        "from_std": "20:40",
        "to_sta": "09:30",
        "duration": "12:50",
        "run_days": ["MON", "WED", "SAT"],
        "class_type": ["SL", "3A", "2A"]
    })
}

/// A successful schedule lookup body wrapping the given train entries.
pub fn rail_body(trains: Vec<Value>) -> Value {
    json!({
        "status": true,
        "message": "Success",
        "timestamp": 1762000000,
        "data": trains
    })
}
