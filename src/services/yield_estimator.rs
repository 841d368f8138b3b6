//! Yield-value estimation.
//!
//! Starts from the historical average for the crop/state/season
//! combination and applies three compounding input adjustments, an
//! area-scale penalty, and a final clamp against the best recorded yield.
//! Distinct from suitability ranking: this prices a single chosen crop
//! rather than comparing the catalog.

use std::str::FromStr;

use crate::catalog::{Catalog, ParameterStats, Season, Trend, DEFAULT_HISTORY};
use crate::models::yield_prediction::{
    BestYear, Factor, FactorBreakdown, HistoricalContext, Impact, ValidatedYieldInput,
    YieldPredictionResponse,
};
use crate::services::advisor;
use crate::services::scorer::parameter_score;

/// Sensitivity for the yield variant: one standard deviation costs 30
/// points (the ranking variants use 20).
pub const YIELD_SENSITIVITY: f64 = 30.0;

// Sequential multiplicative adjustments; order matters because each one
// compounds on the already-adjusted yield.
const RAINFALL_IMPACT_WEIGHT: f64 = 0.3;
const FERTILIZER_IMPACT_WEIGHT: f64 = 0.2;
const PESTICIDE_IMPACT_WEIGHT: f64 = 0.1;

const LARGE_AREA: f64 = 100_000.0;
const LARGE_AREA_PENALTY: f64 = 0.05;
const MEDIUM_AREA: f64 = 50_000.0;
const MEDIUM_AREA_PENALTY: f64 = 0.02;

const MIN_YIELD: f64 = 0.1;
const BEST_YIELD_HEADROOM: f64 = 1.2;

const BASE_CONFIDENCE: f64 = 70.0;
const MIN_CONFIDENCE: u8 = 60;
const MAX_CONFIDENCE: u8 = 95;

const POSITIVE_THRESHOLD: f64 = 70.0;
const NEGATIVE_THRESHOLD: f64 = 30.0;

/// Sub-scores under this emit a corrective recommendation.
const RECOMMEND_THRESHOLD: f64 = 70.0;
const LOW_RAINFALL_PIVOT: f64 = 500.0;
const LOW_FERTILIZER_PIVOT: f64 = 50_000.0;
const LOW_PESTICIDE_PIVOT: f64 = 1000.0;

const MAX_RECOMMENDATIONS: usize = 4;

/// The dataset's best-year column is not bundled; the most recent
/// complete survey year stands in for every record.
const BEST_RECORDED_YEAR: u16 = 2020;

// Stats substituted for crops absent from the yield catalog.
const DEFAULT_RAINFALL_STATS: ParameterStats = ParameterStats {
    mean: 900.0,
    std: 300.0,
};
const DEFAULT_FERTILIZER_STATS: ParameterStats = ParameterStats {
    mean: 100_000.0,
    std: 50_000.0,
};
const DEFAULT_PESTICIDE_STATS: ParameterStats = ParameterStats {
    mean: 2000.0,
    std: 1000.0,
};

fn classify(sub_score: f64) -> Impact {
    if sub_score > POSITIVE_THRESHOLD {
        Impact::Positive
    } else if sub_score < NEGATIVE_THRESHOLD {
        Impact::Negative
    } else {
        Impact::Neutral
    }
}

fn factor(sub_score: f64) -> Factor {
    Factor {
        impact: classify(sub_score),
        score: sub_score.round().clamp(0.0, 100.0) as u8,
    }
}

/// Signed influence in [-0.5, +0.5]: a 50-point sub-score is neutral.
fn impact_of(sub_score: f64) -> f64 {
    (sub_score - 50.0) / 100.0
}

/// Estimate per-hectare yield for a validated request. Never fails: an
/// unknown crop/state/season combination falls back to the documented
/// default history instead of erroring.
pub fn estimate(catalog: &Catalog, input: &ValidatedYieldInput<'_>) -> YieldPredictionResponse {
    let history = Season::from_str(input.season.trim())
        .ok()
        .and_then(|season| catalog.history(input.crop, input.state, season))
        .copied()
        .unwrap_or(DEFAULT_HISTORY);

    let (rainfall_stats, fertilizer_stats, pesticide_stats) =
        match catalog.yield_profile(input.crop) {
            Some(profile) => (profile.rainfall, profile.fertilizer, profile.pesticide),
            None => (
                DEFAULT_RAINFALL_STATS,
                DEFAULT_FERTILIZER_STATS,
                DEFAULT_PESTICIDE_STATS,
            ),
        };

    let rainfall_sub = parameter_score(input.rainfall, &rainfall_stats, YIELD_SENSITIVITY);
    let fertilizer_sub = parameter_score(input.fertilizer, &fertilizer_stats, YIELD_SENSITIVITY);
    let pesticide_sub = parameter_score(input.pesticide, &pesticide_stats, YIELD_SENSITIVITY);

    let mut predicted = history.avg_yield;
    predicted += predicted * impact_of(rainfall_sub) * RAINFALL_IMPACT_WEIGHT;
    predicted += predicted * impact_of(fertilizer_sub) * FERTILIZER_IMPACT_WEIGHT;
    predicted += predicted * impact_of(pesticide_sub) * PESTICIDE_IMPACT_WEIGHT;

    let area_penalty = if input.area > LARGE_AREA {
        LARGE_AREA_PENALTY
    } else if input.area > MEDIUM_AREA {
        MEDIUM_AREA_PENALTY
    } else {
        0.0
    };
    predicted -= predicted * area_penalty;

    predicted = predicted.clamp(MIN_YIELD, history.best_yield * BEST_YIELD_HEADROOM);
    predicted = (predicted * 100.0).round() / 100.0;

    let confidence = ((rainfall_sub + fertilizer_sub + pesticide_sub + BASE_CONFIDENCE) / 4.0)
        .round()
        .clamp(0.0, 100.0) as u8;
    let confidence = confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

    let historical_factor = if history.trend == Trend::Increasing {
        Factor {
            impact: Impact::Positive,
            score: 80,
        }
    } else {
        Factor {
            impact: Impact::Neutral,
            score: 60,
        }
    };

    YieldPredictionResponse {
        predicted_yield: predicted,
        confidence,
        factors: FactorBreakdown {
            rainfall: factor(rainfall_sub),
            fertilizer: factor(fertilizer_sub),
            pesticide: factor(pesticide_sub),
            historical: historical_factor,
        },
        recommendations: recommendations(input, rainfall_sub, fertilizer_sub, pesticide_sub),
        historical_data: HistoricalContext {
            average_yield: history.avg_yield,
            best_year: BestYear {
                year: BEST_RECORDED_YEAR,
                best_yield: history.best_yield,
            },
            trend: history.trend,
        },
    }
}

/// One direction-specific sentence per weak sub-score, then a crop tip and
/// a region boilerplate tip, capped at four.
fn recommendations(
    input: &ValidatedYieldInput<'_>,
    rainfall_sub: f64,
    fertilizer_sub: f64,
    pesticide_sub: f64,
) -> Vec<String> {
    let mut recs = Vec::new();

    if rainfall_sub < RECOMMEND_THRESHOLD {
        recs.push(if input.rainfall < LOW_RAINFALL_PIVOT {
            "Consider supplemental irrigation due to low rainfall".to_string()
        } else {
            "Implement proper drainage to manage excess rainfall".to_string()
        });
    }

    if fertilizer_sub < RECOMMEND_THRESHOLD {
        recs.push(if input.fertilizer < LOW_FERTILIZER_PIVOT {
            "Increase fertilizer application based on soil test results".to_string()
        } else {
            "Optimize fertilizer timing and split applications".to_string()
        });
    }

    if pesticide_sub < RECOMMEND_THRESHOLD {
        recs.push(if input.pesticide < LOW_PESTICIDE_PIVOT {
            "Implement integrated pest management practices".to_string()
        } else {
            "Review pesticide usage to avoid overuse and resistance".to_string()
        });
    }

    if let Some(tip) = advisor::yield_crop_tip(input.crop) {
        recs.push(tip.to_string());
    }
    recs.push(format!(
        "Follow {} agricultural department guidelines",
        input.state
    ));

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
