use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Season, WaterRequirement};
use crate::models::error::ApiError;
use crate::services::scorer::{CultivationObservation, SoilObservation};

/// Crop-recommendation request.
///
/// `state` and `season` are always required. The soil-chemistry variant
/// runs when every soil field is present; otherwise the cultivation-input
/// variant runs with whichever of rainfall/fertilizer/pesticide were sent.
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[garde(skip)]
    pub state: Option<String>,

    #[garde(skip)]
    pub season: Option<String>,

    // Soil chemistry set (kg/ha for N/P/K).
    #[garde(skip)]
    pub nitrogen: Option<f64>,

    #[garde(skip)]
    pub phosphorus: Option<f64>,

    #[garde(skip)]
    pub potassium: Option<f64>,

    #[garde(skip)]
    pub temperature: Option<f64>,

    #[garde(custom(humidity_bounds))]
    pub humidity: Option<f64>,

    #[garde(custom(ph_bounds))]
    pub ph: Option<f64>,

    // Cultivation input set.
    #[garde(custom(rainfall_bounds))]
    pub rainfall: Option<f64>,

    #[garde(custom(fertilizer_non_negative))]
    pub fertilizer: Option<f64>,

    #[garde(custom(pesticide_non_negative))]
    pub pesticide: Option<f64>,
}

fn rainfall_bounds(value: &Option<f64>, _: &()) -> garde::Result {
    match value {
        Some(v) if !(0.0..=3000.0).contains(v) => {
            Err(garde::Error::new("Rainfall should be between 0-3000mm"))
        }
        _ => Ok(()),
    }
}

fn humidity_bounds(value: &Option<f64>, _: &()) -> garde::Result {
    match value {
        Some(v) if !(0.0..=100.0).contains(v) => {
            Err(garde::Error::new("Humidity should be between 0-100%"))
        }
        _ => Ok(()),
    }
}

fn ph_bounds(value: &Option<f64>, _: &()) -> garde::Result {
    match value {
        Some(v) if !(0.0..=14.0).contains(v) => {
            Err(garde::Error::new("Soil pH should be between 0-14"))
        }
        _ => Ok(()),
    }
}

pub(crate) fn fertilizer_non_negative(value: &Option<f64>, _: &()) -> garde::Result {
    match value {
        Some(v) if *v < 0.0 => Err(garde::Error::new("Fertilizer usage cannot be negative")),
        _ => Ok(()),
    }
}

pub(crate) fn pesticide_non_negative(value: &Option<f64>, _: &()) -> garde::Result {
    match value {
        Some(v) if *v < 0.0 => Err(garde::Error::new("Pesticide usage cannot be negative")),
        _ => Ok(()),
    }
}

impl RecommendationRequest {
    /// Presence check for the always-required fields, returning them by
    /// reference so handlers never re-unwrap.
    pub fn required_context(&self) -> Result<(&str, &str), ApiError> {
        let state = match self.state.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(ApiError::MissingField("state")),
        };
        let season = match self.season.as_deref() {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Err(ApiError::MissingField("season")),
        };
        Ok((state, season))
    }

    /// The soil variant only runs on a complete soil-chemistry set.
    pub fn soil_observation(&self) -> Option<SoilObservation> {
        Some(SoilObservation {
            nitrogen: self.nitrogen?,
            phosphorus: self.phosphorus?,
            potassium: self.potassium?,
            temperature: self.temperature?,
            humidity: self.humidity?,
            ph: self.ph?,
            rainfall: self.rainfall,
        })
    }

    pub fn cultivation_observation(&self) -> CultivationObservation {
        CultivationObservation {
            rainfall: self.rainfall,
            fertilizer: self.fertilizer,
            pesticide: self.pesticide,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeCrop {
    pub name: String,
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_yield: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub current_price: String,
    pub trend: String,
    pub demand: String,
    pub export_potential: String,
}

/// Response of the soil-chemistry variant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoilRecommendation {
    pub crop: String,
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub expected_yield: String,
    pub growth_period: String,
    pub tips: Vec<String>,
    pub scientific_name: String,
    pub season: Season,
    pub water_requirement: WaterRequirement,
    pub alternative_crops: Vec<AlternativeCrop>,
}

/// Response of the cultivation-input variant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CultivationRecommendation {
    pub crop: String,
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub expected_yield: String,
    pub average_yield: f64,
    pub seasons: Vec<Season>,
    pub top_states: Vec<String>,
    pub tips: Vec<String>,
    pub alternative_crops: Vec<AlternativeCrop>,
    pub market_insights: MarketInsights,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendationResponse {
    Soil(SoilRecommendation),
    Cultivation(CultivationRecommendation),
}
