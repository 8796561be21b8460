//! Tests for `/trains` and the nearby-station fallback chain.

mod common;

use common::{gemini_text_body, generate_path, rail_body, spawn_app, train_entry, TRAINS_PATH};
use httpmock::prelude::*;
use serde_json::{json, Value};

#[tokio::test]
async fn test_trains_between_mapped_cities() {
    let gemini = MockServer::start_async().await;
    let rail = MockServer::start_async().await;

    let gemini_mock = gemini
        .mock_async(|when, then| {
            when.method(POST).path(generate_path());
            then.status(200).json_body(gemini_text_body("unused"));
        })
        .await;

    let rail_mock = rail
        .mock_async(|when, then| {
            when.method(GET)
                .path(TRAINS_PATH)
                .query_param("fromStationCode", "NDLS")
                .query_param("toStationCode", "BSB")
                .query_param("dateOfJourney", "2025-11-02")
                .header("X-RapidAPI-Key", "test-rail-key");
            then.status(200).json_body(rail_body(vec![train_entry(
                "12562",
                "SWATANTRTA S EXP",
            )]));
        })
        .await;

    let address = spawn_app(gemini.base_url(), rail.base_url()).await;

    let response = reqwest::get(format!(
        "{address}/trains?origin=delhi&destination=varanasi&date=2025-11-02"
    ))
    .await
    .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["origin_station"], "NDLS");
    assert_eq!(body["destination_station"], "BSB");
    assert_eq!(body["used_nearby_stations"], false);
    assert_eq!(body["trains"][0]["train_number"], "12562");
    assert_eq!(body["trains"][0]["train_name"], "SWATANTRTA S EXP");

    rail_mock.assert_async().await;
    assert_eq!(gemini_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_empty_route_falls_back_to_suggested_stations() {
    let gemini = MockServer::start_async().await;
    let rail = MockServer::start_async().await;

    let direct_mock = rail
        .mock_async(|when, then| {
            when.method(GET)
                .path(TRAINS_PATH)
                .query_param("fromStationCode", "NDLS");
            then.status(200).json_body(rail_body(vec![]));
        })
        .await;

    // The model wraps its JSON in markdown fences; the client must strip them.
    let suggestion_mock = gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path(generate_path())
                .body_contains("No direct trains were found between Delhi and Varanasi");
            then.status(200).json_body(gemini_text_body(
                "```json\n{\"origin_code\": \"ANVT\", \"destination_code\": \"MUV\"}\n```",
            ));
        })
        .await;

    let retry_mock = rail
        .mock_async(|when, then| {
            when.method(GET)
                .path(TRAINS_PATH)
                .query_param("fromStationCode", "ANVT")
                .query_param("toStationCode", "MUV");
            then.status(200)
                .json_body(rail_body(vec![train_entry("14258", "KASHI V EXP")]));
        })
        .await;

    let address = spawn_app(gemini.base_url(), rail.base_url()).await;

    let response = reqwest::get(format!(
        "{address}/trains?origin=delhi&destination=varanasi&date=2025-11-02"
    ))
    .await
    .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["origin_station"], "ANVT");
    assert_eq!(body["destination_station"], "MUV");
    assert_eq!(body["used_nearby_stations"], true);
    assert_eq!(body["trains"][0]["train_number"], "14258");

    direct_mock.assert_async().await;
    suggestion_mock.assert_async().await;
    retry_mock.assert_async().await;
}

#[tokio::test]
async fn test_unmapped_city_skips_direct_lookup() {
    let gemini = MockServer::start_async().await;
    let rail = MockServer::start_async().await;

    let suggestion_mock = gemini
        .mock_async(|when, then| {
            when.method(POST)
                .path(generate_path())
                .body_contains("between Alakhpuri and Varanasi");
            then.status(200).json_body(gemini_text_body(
                r#"{"origin_code": "HW", "destination_code": "BSB"}"#,
            ));
        })
        .await;

    let rail_mock = rail
        .mock_async(|when, then| {
            when.method(GET)
                .path(TRAINS_PATH)
                .query_param("fromStationCode", "HW")
                .query_param("toStationCode", "BSB");
            then.status(200)
                .json_body(rail_body(vec![train_entry("12370", "KUMBHA EXP")]));
        })
        .await;

    let address = spawn_app(gemini.base_url(), rail.base_url()).await;

    let response = reqwest::get(format!(
        "{address}/trains?origin=alakhpuri&destination=varanasi&date=2025-11-02"
    ))
    .await
    .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["used_nearby_stations"], true);
    assert_eq!(body["origin_station"], "HW");

    // exactly one rail call, made with the suggested codes
    assert_eq!(rail_mock.hits_async().await, 1);
    suggestion_mock.assert_async().await;
}

#[tokio::test]
async fn test_unusable_suggestion_reports_failure() {
    let gemini = MockServer::start_async().await;
    let rail = MockServer::start_async().await;

    let gemini_mock = gemini
        .mock_async(|when, then| {
            when.method(POST).path(generate_path());
            then.status(200)
                .json_body(gemini_text_body("Sorry, I cannot help with that."));
        })
        .await;

    let rail_mock = rail
        .mock_async(|when, then| {
            when.method(GET).path(TRAINS_PATH);
            then.status(200).json_body(rail_body(vec![]));
        })
        .await;

    let address = spawn_app(gemini.base_url(), rail.base_url()).await;

    let response = reqwest::get(format!(
        "{address}/trains?origin=alakhpuri&destination=rudraprayag&date=2025-11-02"
    ))
    .await
    .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap_or_default();
    assert!(error.contains("station suggestion failed"));
    assert!(body["origin_station"].is_null());
    assert_eq!(body["trains"].as_array().map(Vec::len), Some(0));

    // neither city maps, so the rail upstream is never reached
    assert_eq!(rail_mock.hits_async().await, 0);
    gemini_mock.assert_async().await;
}

#[tokio::test]
async fn test_rejected_station_code_reports_failure() {
    let gemini = MockServer::start_async().await;
    let rail = MockServer::start_async().await;

    let suggestion_mock = gemini
        .mock_async(|when, then| {
            when.method(POST).path(generate_path());
            then.status(200).json_body(gemini_text_body(
                r#"{"origin_code": "ALKP", "destination_code": "BSB"}"#,
            ));
        })
        .await;

    // The upstream answers 200 but flags the suggested code as invalid.
    let rail_mock = rail
        .mock_async(|when, then| {
            when.method(GET)
                .path(TRAINS_PATH)
                .query_param("fromStationCode", "ALKP");
            then.status(200).json_body(json!({
                "status": false,
                "message": "Invalid station code"
            }));
        })
        .await;

    let address = spawn_app(gemini.base_url(), rail.base_url()).await;

    let response = reqwest::get(format!(
        "{address}/trains?origin=alakhpuri&destination=varanasi&date=2025-11-02"
    ))
    .await
    .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap_or_default();
    assert!(error.contains("Invalid station code"), "unexpected error: {error}");
    assert_eq!(body["trains"].as_array().map(Vec::len), Some(0));

    suggestion_mock.assert_async().await;
    rail_mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_route_after_retry_is_success() {
    let gemini = MockServer::start_async().await;
    let rail = MockServer::start_async().await;

    let rail_mock = rail
        .mock_async(|when, then| {
            when.method(GET).path(TRAINS_PATH);
            then.status(200).json_body(rail_body(vec![]));
        })
        .await;

    let gemini_mock = gemini
        .mock_async(|when, then| {
            when.method(POST).path(generate_path());
            then.status(200).json_body(gemini_text_body(
                r#"{"origin_code": "ANVT", "destination_code": "MUV"}"#,
            ));
        })
        .await;

    let address = spawn_app(gemini.base_url(), rail.base_url()).await;

    let response = reqwest::get(format!(
        "{address}/trains?origin=delhi&destination=varanasi&date=2025-11-02"
    ))
    .await
    .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["success"], true);
    assert_eq!(body["used_nearby_stations"], true);
    assert_eq!(body["trains"].as_array().map(Vec::len), Some(0));
    assert!(body["error"].is_null());

    // one direct attempt plus one retry with the suggested codes
    assert_eq!(rail_mock.hits_async().await, 2);
    gemini_mock.assert_async().await;
}

#[tokio::test]
async fn test_trains_requires_date_param() {
    let gemini = MockServer::start_async().await;
    let rail = MockServer::start_async().await;
    let address = spawn_app(gemini.base_url(), rail.base_url()).await;

    let response = reqwest::get(format!(
        "{address}/trains?origin=delhi&destination=varanasi"
    ))
    .await
    .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
}
