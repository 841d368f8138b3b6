use axum::extract::State;
use axum::Json;
use garde::Validate;

use crate::app_state::AppState;
use crate::models::error::{validation_details, ApiError};
use crate::models::yield_prediction::{YieldPredictionRequest, YieldPredictionResponse};
use crate::services::yield_estimator;

/// POST /api/v1/yield-prediction — estimate per-hectare yield for a chosen
/// crop/state/season with the supplied cultivation inputs.
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(request): Json<YieldPredictionRequest>,
) -> Result<Json<YieldPredictionResponse>, ApiError> {
    let input = request.required()?;

    if let Err(report) = request.validate() {
        return Err(ApiError::Validation(validation_details(&report)));
    }

    metrics::counter!("yield_predictions_total").increment(1);

    let response = yield_estimator::estimate(&state.catalog, &input);

    tracing::info!(
        crop = input.crop,
        state_name = input.state,
        predicted_yield = response.predicted_yield,
        confidence = response.confidence,
        "yield prediction served"
    );

    Ok(Json(response))
}
