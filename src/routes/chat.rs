use axum::extract::State;
use axum::Json;

use crate::app_state::AppState;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::models::error::ApiError;
use crate::services::assistant::FALLBACK_REPLY;

/// POST /api/v1/chat — farming-assistant conversation turn.
///
/// Provider failures never surface to the farmer: the canned fallback is
/// returned with `fallback: true` so clients can show it differently.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if request.messages.is_empty() {
        return Err(ApiError::EmptyChat);
    }

    metrics::counter!("assistant_requests_total").increment(1);

    match state.assistant.complete(&request.messages).await {
        Ok(reply) => Ok(Json(ChatResponse {
            reply,
            fallback: false,
        })),
        Err(err) => {
            tracing::warn!(error = %err, "assistant unavailable, serving fallback reply");
            metrics::counter!("assistant_fallbacks_total").increment(1);
            Ok(Json(ChatResponse {
                reply: FALLBACK_REPLY.to_string(),
                fallback: true,
            }))
        }
    }
}
