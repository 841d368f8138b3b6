use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::catalog::Trend;
use crate::models::error::ApiError;
use crate::models::recommendation::{fertilizer_non_negative, pesticide_non_negative};

/// Yield-prediction request. Every field is required; the yield variant
/// accepts a wider rainfall band than crop recommendation.
#[derive(Debug, Deserialize, Validate)]
pub struct YieldPredictionRequest {
    #[garde(skip)]
    pub crop: Option<String>,

    #[garde(skip)]
    pub state: Option<String>,

    #[garde(skip)]
    pub season: Option<String>,

    /// Cultivated area in hectares.
    #[garde(custom(area_positive))]
    pub area: Option<f64>,

    #[garde(custom(rainfall_bounds_wide))]
    pub rainfall: Option<f64>,

    #[garde(custom(fertilizer_non_negative))]
    pub fertilizer: Option<f64>,

    #[garde(custom(pesticide_non_negative))]
    pub pesticide: Option<f64>,
}

fn area_positive(value: &Option<f64>, _: &()) -> garde::Result {
    match value {
        Some(v) if *v <= 0.0 => Err(garde::Error::new("Area must be greater than 0")),
        _ => Ok(()),
    }
}

fn rainfall_bounds_wide(value: &Option<f64>, _: &()) -> garde::Result {
    match value {
        Some(v) if !(0.0..=5000.0).contains(v) => {
            Err(garde::Error::new("Rainfall should be between 0-5000mm"))
        }
        _ => Ok(()),
    }
}

impl YieldPredictionRequest {
    /// Presence check over all required fields, in declaration order.
    pub fn required(&self) -> Result<ValidatedYieldInput<'_>, ApiError> {
        let crop = self
            .crop
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ApiError::MissingField("crop"))?;
        let state = self
            .state
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ApiError::MissingField("state"))?;
        let season = self
            .season
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or(ApiError::MissingField("season"))?;
        let area = self.area.ok_or(ApiError::MissingField("area"))?;
        let rainfall = self.rainfall.ok_or(ApiError::MissingField("rainfall"))?;
        let fertilizer = self.fertilizer.ok_or(ApiError::MissingField("fertilizer"))?;
        let pesticide = self.pesticide.ok_or(ApiError::MissingField("pesticide"))?;

        Ok(ValidatedYieldInput {
            crop,
            state,
            season,
            area,
            rainfall,
            fertilizer,
            pesticide,
        })
    }
}

/// A yield request with presence established. Range validation happens
/// separately through garde so all violations are reported together.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedYieldInput<'a> {
    pub crop: &'a str,
    pub state: &'a str,
    pub season: &'a str,
    pub area: f64,
    pub rainfall: f64,
    pub fertilizer: f64,
    pub pesticide: f64,
}

/// Direction of a factor's influence on predicted yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Factor {
    pub impact: Impact,
    pub score: u8,
}

#[derive(Debug, Serialize)]
pub struct FactorBreakdown {
    pub rainfall: Factor,
    pub fertilizer: Factor,
    pub pesticide: Factor,
    pub historical: Factor,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestYear {
    pub year: u16,
    #[serde(rename = "yield")]
    pub best_yield: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalContext {
    pub average_yield: f64,
    pub best_year: BestYear,
    pub trend: Trend,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldPredictionResponse {
    pub predicted_yield: f64,
    pub confidence: u8,
    pub factors: FactorBreakdown,
    pub recommendations: Vec<String>,
    pub historical_data: HistoricalContext,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> YieldPredictionRequest {
        YieldPredictionRequest {
            crop: Some("rice".to_string()),
            state: Some("Punjab".to_string()),
            season: Some("Kharif".to_string()),
            area: Some(1000.0),
            rainfall: Some(1100.0),
            fertilizer: Some(150_000.0),
            pesticide: Some(2000.0),
        }
    }

    #[test]
    fn complete_request_passes_presence() {
        let req = full_request();
        let input = req.required().unwrap();
        assert_eq!(input.crop, "rice");
        assert_eq!(input.area, 1000.0);
    }

    #[test]
    fn missing_area_is_named() {
        let mut req = full_request();
        req.area = None;
        let err = req.required().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: area");
    }

    #[test]
    fn zero_area_reports_constraint() {
        let mut req = full_request();
        req.area = Some(0.0);
        let report = req.validate().unwrap_err();
        let details = crate::models::error::validation_details(&report);
        assert!(details.iter().any(|d| d.contains("Area must be greater than 0")));
    }

    #[test]
    fn wide_rainfall_bound_applies() {
        let mut req = full_request();
        req.rainfall = Some(4000.0);
        assert!(req.validate().is_ok());

        req.rainfall = Some(5001.0);
        let report = req.validate().unwrap_err();
        let details = crate::models::error::validation_details(&report);
        assert!(details
            .iter()
            .any(|d| d.contains("Rainfall should be between 0-5000mm")));
    }
}
