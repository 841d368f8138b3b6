use axum::extract::State;
use axum::Json;
use garde::Validate;

use crate::app_state::AppState;
use crate::models::error::{validation_details, ApiError};
use crate::models::recommendation::{
    AlternativeCrop, CultivationRecommendation, RecommendationRequest, RecommendationResponse,
    SoilRecommendation,
};
use crate::services::{advisor, scorer};

/// Alternatives returned alongside the best match.
const MAX_ALTERNATIVES: usize = 3;

/// POST /api/v1/crop-recommendation — rank the catalog for a farmer's
/// observed conditions.
///
/// Runs the soil-chemistry variant when the full soil set is present,
/// otherwise the cultivation-input variant. Validation happens entirely
/// here; the scorers assume well-formed numbers.
pub async fn crop_recommendation(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    let (region, season) = request.required_context()?;

    if let Err(report) = request.validate() {
        return Err(ApiError::Validation(validation_details(&report)));
    }

    metrics::counter!("crop_recommendations_total").increment(1);

    let response = match request.soil_observation() {
        Some(observed) => {
            let ranked = scorer::rank_soil(state.catalog.crops(), region, season, &observed);
            let best = ranked
                .first()
                .ok_or(ApiError::Internal("crop recommendation"))?;

            tracing::info!(
                crop = best.profile.name,
                confidence = best.score,
                variant = "soil",
                "crop recommendation served"
            );

            RecommendationResponse::Soil(SoilRecommendation {
                crop: best.profile.name.to_string(),
                confidence: best.score,
                reasons: best.reasons.clone(),
                expected_yield: best.profile.expected_yield.to_string(),
                growth_period: best.profile.growth_period.to_string(),
                tips: advisor::crop_tips(best.profile.name),
                scientific_name: best.profile.scientific_name.to_string(),
                season: best.profile.seasons[0],
                water_requirement: best.profile.water_requirement,
                alternative_crops: ranked
                    .iter()
                    .skip(1)
                    .take(MAX_ALTERNATIVES)
                    .map(|r| AlternativeCrop {
                        name: r.profile.name.to_string(),
                        confidence: r.score,
                        expected_yield: None,
                    })
                    .collect(),
            })
        }
        None => {
            let observed = request.cultivation_observation();
            let ranked =
                scorer::rank_cultivation(state.catalog.yield_profiles(), region, season, &observed);
            let best = ranked
                .first()
                .ok_or(ApiError::Internal("crop recommendation"))?;

            tracing::info!(
                crop = best.profile.name,
                confidence = best.score,
                variant = "cultivation",
                "crop recommendation served"
            );

            RecommendationResponse::Cultivation(CultivationRecommendation {
                crop: best.profile.name.to_string(),
                confidence: best.score,
                reasons: best.reasons.clone(),
                expected_yield: best.profile.expected_yield(),
                average_yield: best.profile.yield_stats.mean,
                seasons: best.profile.seasons.to_vec(),
                top_states: best
                    .profile
                    .top_producing_states
                    .iter()
                    .take(3)
                    .map(|(name, _)| name.to_string())
                    .collect(),
                tips: advisor::farming_tips(best.profile.name, region),
                alternative_crops: ranked
                    .iter()
                    .skip(1)
                    .take(MAX_ALTERNATIVES)
                    .map(|r| AlternativeCrop {
                        name: r.profile.name.to_string(),
                        confidence: r.score,
                        expected_yield: Some(r.profile.expected_yield()),
                    })
                    .collect(),
                market_insights: advisor::market_insights(best.profile.name),
            })
        }
    };

    Ok(Json(response))
}
