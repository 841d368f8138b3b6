//! Handler-level tests over the built-in catalogs.
//!
//! These exercise the routes exactly as axum would, without binding a
//! socket: extractors are constructed directly and error responses are
//! decoded back to their JSON bodies.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use krishimitra_api::app_state::AppState;
use krishimitra_api::catalog::Catalog;
use krishimitra_api::models::chat::{ChatMessage, ChatRequest};
use krishimitra_api::models::error::ApiError;
use krishimitra_api::models::recommendation::{RecommendationRequest, RecommendationResponse};
use krishimitra_api::models::yield_prediction::YieldPredictionRequest;
use krishimitra_api::routes;
use krishimitra_api::services::assistant::{AssistantClient, FALLBACK_REPLY};
use krishimitra_api::services::classifier::MockClassifier;

fn test_state() -> AppState {
    // Port 9 is the discard service; the assistant is unconfigured anyway.
    let assistant = AssistantClient::new(
        "http://127.0.0.1:9".to_string(),
        None,
        "gemini-2.5-flash".to_string(),
    );
    AppState::new(Catalog::builtin(), assistant, MockClassifier::new())
}

fn recommendation_request() -> RecommendationRequest {
    serde_json::from_value(serde_json::json!({
        "state": "Punjab",
        "season": "Kharif",
    }))
    .unwrap()
}

fn yield_request() -> YieldPredictionRequest {
    serde_json::from_value(serde_json::json!({
        "crop": "rice",
        "state": "Punjab",
        "season": "Kharif",
        "area": 1000.0,
        "rainfall": 1200.0,
        "fertilizer": 150000.0,
        "pesticide": 2000.0,
    }))
    .unwrap()
}

async fn error_body(err: ApiError) -> (u16, Value) {
    let response = err.into_response();
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn recommendation_without_season_is_bad_request() {
    let mut request = recommendation_request();
    request.season = None;

    let err = routes::recommend::crop_recommendation(State(test_state()), Json(request))
        .await
        .unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing required field: season");
}

#[tokio::test]
async fn recommendation_rejects_out_of_band_rainfall() {
    let mut request = recommendation_request();
    request.rainfall = Some(4000.0);

    let err = routes::recommend::crop_recommendation(State(test_state()), Json(request))
        .await
        .unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Validation errors");
    let details = body["details"].as_array().unwrap();
    assert!(details
        .iter()
        .any(|d| d.as_str().unwrap().contains("Rainfall should be between 0-3000mm")));
}

#[tokio::test]
async fn cultivation_inputs_recommend_rice_for_punjab_kharif() {
    let mut request = recommendation_request();
    request.rainfall = Some(1100.0);
    request.fertilizer = Some(150_000.0);
    request.pesticide = Some(2000.0);

    let Json(response) =
        routes::recommend::crop_recommendation(State(test_state()), Json(request))
            .await
            .unwrap();

    match response {
        RecommendationResponse::Cultivation(rec) => {
            assert_eq!(rec.crop, "rice");
            assert_eq!(rec.confidence, 99);
            assert!(!rec.reasons.is_empty());
            assert!(!rec.alternative_crops.is_empty());
            assert!(rec.alternative_crops.iter().all(|a| a.confidence <= rec.confidence));
        }
        RecommendationResponse::Soil(_) => panic!("expected the cultivation variant"),
    }
}

#[tokio::test]
async fn full_soil_set_switches_to_soil_variant() {
    let request: RecommendationRequest = serde_json::from_value(serde_json::json!({
        "state": "Punjab",
        "season": "Kharif",
        "nitrogen": 80.0,
        "phosphorus": 48.0,
        "potassium": 20.0,
        "temperature": 25.0,
        "humidity": 84.0,
        "ph": 6.2,
        "rainfall": 236.0,
    }))
    .unwrap();

    let Json(response) =
        routes::recommend::crop_recommendation(State(test_state()), Json(request))
            .await
            .unwrap();

    match response {
        RecommendationResponse::Soil(rec) => {
            assert_eq!(rec.crop, "rice");
            assert_eq!(rec.confidence, 100);
            assert_eq!(rec.scientific_name, "Oryza sativa");
        }
        RecommendationResponse::Cultivation(_) => panic!("expected the soil variant"),
    }
}

#[tokio::test]
async fn yield_prediction_happy_path() {
    let Json(response) =
        routes::yield_prediction::predict_yield(State(test_state()), Json(yield_request()))
            .await
            .unwrap();

    // 3.9 base lifted by three optimal inputs: 3.9 * 1.15 * 1.10 * 1.05.
    assert_eq!(response.predicted_yield, 5.18);
    assert_eq!(response.confidence, 93);
    assert_eq!(response.historical_data.average_yield, 3.9);
}

#[tokio::test]
async fn yield_prediction_without_crop_is_bad_request() {
    let mut request = yield_request();
    request.crop = None;

    let err = routes::yield_prediction::predict_yield(State(test_state()), Json(request))
        .await
        .unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Missing required field: crop");
}

#[tokio::test]
async fn yield_prediction_enforces_wide_rainfall_bound() {
    let mut request = yield_request();
    request.rainfall = Some(6000.0);

    let err = routes::yield_prediction::predict_yield(State(test_state()), Json(request))
        .await
        .unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, 400);
    let details = body["details"].as_array().unwrap();
    assert!(details
        .iter()
        .any(|d| d.as_str().unwrap().contains("Rainfall should be between 0-5000mm")));
}

#[tokio::test]
async fn unknown_crop_state_combination_uses_default_history() {
    let mut request = yield_request();
    request.crop = Some("quinoa".to_string());

    let Json(response) =
        routes::yield_prediction::predict_yield(State(test_state()), Json(request))
            .await
            .unwrap();

    assert_eq!(response.historical_data.average_yield, 2.0);
    assert!(response.predicted_yield >= 0.1);
}

#[tokio::test]
async fn chat_with_no_messages_is_bad_request() {
    let err = routes::chat::chat(
        State(test_state()),
        Json(ChatRequest {
            messages: vec![],
            language: None,
        }),
    )
    .await
    .unwrap_err();
    let (status, body) = error_body(err).await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "No messages provided");
}

#[tokio::test]
async fn chat_without_provider_serves_fallback() {
    let request = ChatRequest {
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: "When should I sow wheat in Punjab?".to_string(),
        }],
        language: None,
    };

    let Json(response) = routes::chat::chat(State(test_state()), Json(request))
        .await
        .unwrap();

    assert!(response.fallback);
    assert_eq!(response.reply, FALLBACK_REPLY);
}

#[tokio::test]
async fn health_reports_catalog_sizes() {
    let Json(health) = routes::health::health_check(State(test_state())).await;

    assert_eq!(health.status, "ok");
    assert_eq!(health.checks.catalog.crop_profiles, 8);
    assert_eq!(health.checks.catalog.yield_profiles, 5);
    assert!(!health.checks.assistant.configured);
}
