//! Complete travel guide assembly.
//!
//! Fans out one Gemini call per content category, awaits them concurrently,
//! and collects the results into a single keyed response. A failed category
//! degrades to a placeholder string rather than failing the whole guide.

use chrono::Utc;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use crate::travel::prompts::{self, Category};
use crate::travel::query::Budget;
use gemini_client::GeminiClient;

/// Placeholder inserted when one category's generation fails.
fn unavailable(category: Category) -> String {
    format!("Content unavailable for {}", category.as_str())
}

#[derive(Debug, Serialize)]
pub struct TravelGuideResponse {
    pub success: bool,
    pub location: String,
    pub days: u8,
    /// One entry per category keyed by its name, plus a `metadata` object.
    pub data: Value,
    pub error: Option<String>,
}

/// Generates all seven categories concurrently and assembles the guide.
pub async fn build_guide(
    gemini: &GeminiClient,
    location: &str,
    days: u8,
    budget: Budget,
    interests: Option<&str>,
) -> TravelGuideResponse {
    info!(
        "Building travel guide for {location} ({days} days, {} budget)",
        budget.as_str()
    );

    let calls = Category::ALL.map(|category| {
        let prompt = prompts::category_prompt(category, location, days, budget);
        async move { (category, gemini.generate(&prompt).await) }
    });

    let mut data = Map::new();
    for (category, result) in join_all(calls).await {
        let text = match result {
            Ok(text) => text,
            Err(e) => {
                warn!("Guide category '{}' failed: {e}", category.as_str());
                unavailable(category)
            }
        };
        data.insert(category.as_str().to_string(), Value::String(text));
    }

    data.insert(
        "metadata".to_string(),
        json!({
            "location": location,
            "days": days,
            "budget": budget.as_str(),
            "generated_at": Utc::now().to_rfc3339(),
            "interests": interests,
        }),
    );

    TravelGuideResponse {
        success: true,
        location: location.to_string(),
        days,
        data: Value::Object(data),
        error: None,
    }
}
