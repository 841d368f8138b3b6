use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub catalog: CatalogHealth,
    pub assistant: AssistantHealth,
}

#[derive(Serialize)]
pub struct CatalogHealth {
    pub status: String,
    pub crop_profiles: usize,
    pub yield_profiles: usize,
}

#[derive(Serialize)]
pub struct AssistantHealth {
    pub status: String,
    pub configured: bool,
}

/// GET /health — liveness plus a summary of the loaded reference data.
///
/// The catalogs are compiled in, so the only degradable component is the
/// assistant; an unconfigured assistant still reports 200 because chat
/// falls back to the canned reply.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let configured = state.assistant.is_configured();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: CatalogHealth {
                status: "ok".to_string(),
                crop_profiles: state.catalog.crops().len(),
                yield_profiles: state.catalog.yield_profiles().len(),
            },
            assistant: AssistantHealth {
                status: if configured { "ok" } else { "fallback" }.to_string(),
                configured,
            },
        },
    })
}
