use axum::extract::{Multipart, State};
use axum::Json;

use crate::app_state::AppState;
use crate::models::diagnosis::Diagnosis;
use crate::models::error::ApiError;
use crate::services::classifier::ClassificationError;

/// POST /api/v1/disease-detection — classify an uploaded leaf photo.
///
/// Expects a multipart form with the photo under the `image` field. Any
/// other fields are ignored.
pub async fn detect_disease(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Diagnosis>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::MissingImage)?
    {
        if field.name() == Some("image") {
            let data = field.bytes().await.map_err(|_| ApiError::MissingImage)?;
            image_data = Some(data.to_vec());
        }
    }

    let image_data = image_data.ok_or(ApiError::MissingImage)?;

    metrics::counter!("disease_detections_total").increment(1);

    let diagnosis = state.classifier.predict(&image_data).map_err(|err| match err {
        ClassificationError::UnsupportedFormat => ApiError::InvalidImage,
        ClassificationError::EmptyDiagnosisSet => ApiError::Internal("disease detection"),
    })?;

    tracing::info!(
        disease = %diagnosis.disease,
        confidence = diagnosis.confidence,
        "disease detection served"
    );

    Ok(Json(diagnosis))
}
