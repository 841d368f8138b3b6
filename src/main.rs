mod app_state;
mod catalog;
mod config;
mod models;
mod routes;
mod services;

use axum::{routing::get, routing::post, Router};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use app_state::AppState;
use catalog::Catalog;
use config::AppConfig;
use services::assistant::AssistantClient;
use services::classifier::MockClassifier;

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing krishimitra-api server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!(
        "crop_recommendations_total",
        "Total crop recommendation requests served"
    );
    metrics::describe_counter!(
        "yield_predictions_total",
        "Total yield prediction requests served"
    );
    metrics::describe_counter!(
        "disease_detections_total",
        "Total leaf-photo classifications served"
    );
    metrics::describe_counter!(
        "assistant_requests_total",
        "Total chat assistant requests received"
    );
    metrics::describe_counter!(
        "assistant_fallbacks_total",
        "Chat requests answered with the canned fallback reply"
    );

    // Load the built-in agronomic catalogs
    let catalog = Catalog::builtin();
    tracing::info!(
        crop_profiles = catalog.crops().len(),
        yield_profiles = catalog.yield_profiles().len(),
        "Loaded reference catalogs"
    );

    // Initialize the chat assistant client
    let assistant = AssistantClient::new(
        config.google_ai_api_base.clone(),
        config.google_ai_api_key.clone(),
        config.assistant_model.clone(),
    );
    if !assistant.is_configured() {
        tracing::warn!("GOOGLE_AI_API_KEY not set, chat will serve fallback replies");
    }

    // Create shared application state
    let state = AppState::new(catalog, assistant, MockClassifier::new());

    // Build API routes
    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/v1/crop-recommendation",
            post(routes::recommend::crop_recommendation),
        )
        .route(
            "/api/v1/yield-prediction",
            post(routes::yield_prediction::predict_yield),
        )
        .route(
            "/api/v1/disease-detection",
            post(routes::disease::detect_disease),
        )
        .route("/api/v1/chat", post(routes::chat::chat))
        .with_state(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(10 * 1024 * 1024)); // 10 MB limit

    tracing::info!("Starting krishimitra-api on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
