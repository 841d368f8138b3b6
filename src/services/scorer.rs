//! Crop suitability scoring.
//!
//! Converts a farmer's observed conditions into a ranked list of crop
//! matches against one of the static catalogs. Weights sum to 100:
//! region 40, season 25, and 35 spread across the environmental or input
//! parameters of the active variant. Scoring is pure and stateless; all
//! input validation happens at the request boundary before it runs.

use std::str::FromStr;

use crate::catalog::{CropProfile, CropYieldProfile, ParameterStats, Season};

pub const REGION_MATCH_POINTS: f64 = 40.0;
pub const REGION_PARTIAL_POINTS: f64 = 10.0;
pub const SEASON_MATCH_POINTS: f64 = 25.0;
pub const SEASON_PARTIAL_POINTS: f64 = 5.0;

const RAINFALL_WEIGHT: f64 = 20.0;
const FERTILIZER_WEIGHT: f64 = 10.0;
const PESTICIDE_WEIGHT: f64 = 5.0;

/// Each of the seven soil/climate parameters carries 5 of the 35 points.
const SOIL_PARAMETER_WEIGHT: f64 = 5.0;

/// Sensitivity constant for both ranking variants: one standard deviation
/// from the catalog mean costs 20 points of a parameter's sub-score.
pub const RANKING_SENSITIVITY: f64 = 20.0;

/// Sub-scores above this emit a justification sentence.
const GOOD_THRESHOLD: f64 = 70.0;

/// Sub-score substituted for an absent optional input. Identical for every
/// profile, so it never changes the ordering.
const NEUTRAL_SUB_SCORE: f64 = 50.0;

const MAX_SOIL_REASONS: usize = 4;
const MAX_CULTIVATION_REASONS: usize = 3;

/// 0-100 closeness of an observed value to a catalog mean. The deviation
/// floor of 1 keeps near-constant parameters from collapsing the score.
pub fn parameter_score(value: f64, stats: &ParameterStats, sensitivity: f64) -> f64 {
    let normalized = (value - stats.mean).abs() / stats.std.max(1.0);
    (100.0 - normalized * sensitivity).clamp(0.0, 100.0)
}

pub fn region_matches(observed: &str, states: &[&str]) -> bool {
    states.iter().any(|s| s.eq_ignore_ascii_case(observed.trim()))
}

pub fn season_matches(observed: &str, seasons: &[Season]) -> bool {
    Season::from_str(observed.trim())
        .map(|parsed| seasons.contains(&parsed))
        .unwrap_or(false)
}

/// Complete soil-chemistry reading; rainfall stays optional.
#[derive(Debug, Clone, Copy)]
pub struct SoilObservation {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: Option<f64>,
}

/// Cultivation inputs; every field optional.
#[derive(Debug, Clone, Copy, Default)]
pub struct CultivationObservation {
    pub rainfall: Option<f64>,
    pub fertilizer: Option<f64>,
    pub pesticide: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SuitabilityScore {
    /// Weighted confidence, rounded and clamped to 0-100.
    pub score: u8,
    /// Ordered natural-language justifications.
    pub reasons: Vec<String>,
}

#[derive(Debug)]
pub struct RankedCrop<'a, P> {
    pub profile: &'a P,
    pub score: u8,
    pub reasons: Vec<String>,
}

fn finalize(total: f64) -> u8 {
    total.round().clamp(0.0, 100.0) as u8
}

fn optional_sub_score(value: Option<f64>, stats: &ParameterStats) -> f64 {
    match value {
        Some(v) => parameter_score(v, stats, RANKING_SENSITIVITY),
        None => NEUTRAL_SUB_SCORE,
    }
}

/// Score one agronomic-range profile against a soil-chemistry reading.
pub fn score_crop_soil(
    state: &str,
    season: &str,
    observed: &SoilObservation,
    profile: &CropProfile,
) -> SuitabilityScore {
    let mut total = if region_matches(state, profile.states_grown) {
        REGION_MATCH_POINTS
    } else {
        REGION_PARTIAL_POINTS
    };
    total += if season_matches(season, profile.seasons) {
        SEASON_MATCH_POINTS
    } else {
        SEASON_PARTIAL_POINTS
    };

    let ranges = &profile.ranges;
    let readings = [
        (
            observed.nitrogen,
            ranges.nitrogen.stats(),
            format!(
                "Nitrogen levels ({} kg/ha) are suitable for {} crops",
                observed.nitrogen, profile.kind
            ),
        ),
        (
            observed.phosphorus,
            ranges.phosphorus.stats(),
            format!(
                "Phosphorus content ({} kg/ha) supports good root development",
                observed.phosphorus
            ),
        ),
        (
            observed.potassium,
            ranges.potassium.stats(),
            format!(
                "Potassium levels ({} kg/ha) are adequate for plant health",
                observed.potassium
            ),
        ),
        (
            observed.temperature,
            ranges.temperature.stats(),
            format!(
                "Temperature ({}°C) is within optimal range for growth",
                observed.temperature
            ),
        ),
        (
            observed.humidity,
            ranges.humidity.stats(),
            format!(
                "Humidity levels ({}%) are favorable for this crop",
                observed.humidity
            ),
        ),
        (
            observed.ph,
            ranges.ph.stats(),
            format!("Soil pH ({}) is suitable for nutrient uptake", observed.ph),
        ),
    ];

    let mut reasons = Vec::new();
    for (value, stats, reason) in readings {
        let sub = parameter_score(value, &stats, RANKING_SENSITIVITY);
        total += sub / 100.0 * SOIL_PARAMETER_WEIGHT;
        if sub > GOOD_THRESHOLD {
            reasons.push(reason);
        }
    }

    match observed.rainfall {
        Some(rain) => {
            let sub = parameter_score(rain, &ranges.rainfall.stats(), RANKING_SENSITIVITY);
            total += sub / 100.0 * SOIL_PARAMETER_WEIGHT;
            if sub > GOOD_THRESHOLD {
                reasons.push(format!("Rainfall ({rain}mm) meets the water requirements"));
            }
        }
        None => total += NEUTRAL_SUB_SCORE / 100.0 * SOIL_PARAMETER_WEIGHT,
    }

    if let Some(primary) = profile.seasons.first() {
        reasons.push(format!(
            "Suitable for {} season cultivation",
            primary.to_string().to_lowercase()
        ));
    }
    reasons.truncate(MAX_SOIL_REASONS);

    SuitabilityScore {
        score: finalize(total),
        reasons,
    }
}

/// Score one historical-statistics profile against cultivation inputs.
pub fn score_crop_cultivation(
    state: &str,
    season: &str,
    observed: &CultivationObservation,
    profile: &CropYieldProfile,
) -> SuitabilityScore {
    let mut total = 0.0;
    let mut reasons = Vec::new();

    if region_matches(state, profile.states_grown) {
        total += REGION_MATCH_POINTS;
        reasons.push(format!("{} is commonly grown in {}", profile.name, state));
    } else {
        total += REGION_PARTIAL_POINTS;
        reasons.push(format!(
            "{} can be grown in {} with proper management",
            profile.name, state
        ));
    }

    if season_matches(season, profile.seasons) {
        total += SEASON_MATCH_POINTS;
        reasons.push(format!(
            "{} season is optimal for {} cultivation",
            season, profile.name
        ));
    } else {
        total += SEASON_PARTIAL_POINTS;
        reasons.push(format!(
            "{} may require special care in {} season",
            profile.name, season
        ));
    }

    let rainfall_sub = optional_sub_score(observed.rainfall, &profile.rainfall);
    total += rainfall_sub / 100.0 * RAINFALL_WEIGHT;
    if rainfall_sub > GOOD_THRESHOLD {
        if let Some(rain) = observed.rainfall {
            reasons.push(format!(
                "Rainfall ({rain}mm) is suitable for {}",
                profile.name
            ));
        }
    }

    let fertilizer_sub = optional_sub_score(observed.fertilizer, &profile.fertilizer);
    total += fertilizer_sub / 100.0 * FERTILIZER_WEIGHT;

    let pesticide_sub = optional_sub_score(observed.pesticide, &profile.pesticide);
    total += pesticide_sub / 100.0 * PESTICIDE_WEIGHT;

    reasons.truncate(MAX_CULTIVATION_REASONS);

    SuitabilityScore {
        score: finalize(total),
        reasons,
    }
}

/// Rank the agronomic catalog. The sort is stable, so exact ties keep
/// catalog declaration order.
pub fn rank_soil<'a>(
    crops: &'a [CropProfile],
    state: &str,
    season: &str,
    observed: &SoilObservation,
) -> Vec<RankedCrop<'a, CropProfile>> {
    let mut ranked: Vec<_> = crops
        .iter()
        .map(|profile| {
            let result = score_crop_soil(state, season, observed, profile);
            RankedCrop {
                profile,
                score: result.score,
                reasons: result.reasons,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

/// Rank the historical-statistics catalog; same ordering guarantees as
/// [`rank_soil`].
pub fn rank_cultivation<'a>(
    profiles: &'a [CropYieldProfile],
    state: &str,
    season: &str,
    observed: &CultivationObservation,
) -> Vec<RankedCrop<'a, CropYieldProfile>> {
    let mut ranked: Vec<_> = profiles
        .iter()
        .map(|profile| {
            let result = score_crop_cultivation(state, season, observed, profile);
            RankedCrop {
                profile,
                score: result.score,
                reasons: result.reasons,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use approx::assert_relative_eq;

    fn full_observation() -> CultivationObservation {
        CultivationObservation {
            rainfall: Some(1100.0),
            fertilizer: Some(150_000.0),
            pesticide: Some(2000.0),
        }
    }

    #[test]
    fn parameter_score_at_mean_is_perfect() {
        let stats = ParameterStats {
            mean: 1200.0,
            std: 300.0,
        };
        assert_relative_eq!(parameter_score(1200.0, &stats, 20.0), 100.0);
    }

    #[test]
    fn parameter_score_clamps_at_zero() {
        let stats = ParameterStats {
            mean: 100.0,
            std: 10.0,
        };
        assert_relative_eq!(parameter_score(10_000.0, &stats, 20.0), 0.0);
    }

    #[test]
    fn deviation_floor_guards_tiny_spreads() {
        let stats = ParameterStats {
            mean: 5.0,
            std: 0.0,
        };
        // Without the floor this would divide by zero.
        assert_relative_eq!(parameter_score(6.0, &stats, 20.0), 80.0);
    }

    #[test]
    fn matching_region_and_season_contribute_sixty_five() {
        let catalog = Catalog::builtin();
        let rice = catalog.yield_profile("rice").unwrap();
        // Inputs exactly at the catalog means: parameter block contributes
        // its full 35 points, so the total isolates the 65 match points.
        let observed = CultivationObservation {
            rainfall: Some(rice.rainfall.mean),
            fertilizer: Some(rice.fertilizer.mean),
            pesticide: Some(rice.pesticide.mean),
        };
        let matched = score_crop_cultivation("Punjab", "Kharif", &observed, rice);
        assert_eq!(matched.score, 100);

        let unmatched = score_crop_cultivation("Kerala", "Zaid", &observed, rice);
        assert_eq!(unmatched.score, 50); // 10 + 5 + 35
        assert_eq!(matched.score - unmatched.score, 50); // 65 - 15
    }

    #[test]
    fn scores_stay_in_range_over_extreme_inputs() {
        let catalog = Catalog::builtin();
        let values = [-1e9, -1.0, 0.0, 1.0, 550.0, 3000.0, 1e9];
        for profile in catalog.yield_profiles() {
            for &r in &values {
                for &f in &values {
                    for &p in &values {
                        let observed = CultivationObservation {
                            rainfall: Some(r),
                            fertilizer: Some(f),
                            pesticide: Some(p),
                        };
                        let s = score_crop_cultivation("Punjab", "Kharif", &observed, profile);
                        assert!(s.score <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn punjab_kharif_scenario_picks_rice() {
        let catalog = Catalog::builtin();
        let ranked = rank_cultivation(
            catalog.yield_profiles(),
            "Punjab",
            "Kharif",
            &full_observation(),
        );
        assert_eq!(ranked[0].profile.name, "rice");

        // Rainfall sub-score near 100: 1100mm against mean 1200, std 300.
        let rice = catalog.yield_profile("rice").unwrap();
        let sub = parameter_score(1100.0, &rice.rainfall, RANKING_SENSITIVITY);
        assert!(sub > 90.0);
        assert_eq!(ranked[0].score, 99);
    }

    #[test]
    fn ranking_is_deterministic() {
        let catalog = Catalog::builtin();
        let first = rank_cultivation(
            catalog.yield_profiles(),
            "Punjab",
            "Kharif",
            &full_observation(),
        );
        let second = rank_cultivation(
            catalog.yield_profiles(),
            "Punjab",
            "Kharif",
            &full_observation(),
        );
        let names: Vec<_> = first.iter().map(|r| (r.profile.name, r.score)).collect();
        let names_again: Vec<_> = second.iter().map(|r| (r.profile.name, r.score)).collect();
        assert_eq!(names, names_again);
    }

    #[test]
    fn ties_preserve_catalog_order() {
        let catalog = Catalog::builtin();
        // No inputs at all: every profile scores from region/season alone,
        // so crops sharing both outcomes tie exactly.
        let ranked = rank_cultivation(
            catalog.yield_profiles(),
            "Nagaland",
            "Zaid",
            &CultivationObservation::default(),
        );
        let tied: Vec<_> = ranked
            .iter()
            .filter(|r| r.score == ranked[0].score)
            .map(|r| r.profile.name)
            .collect();
        // Catalog order among the tied entries: rice before wheat etc.
        let catalog_order: Vec<_> = catalog
            .yield_profiles()
            .iter()
            .map(|p| p.name)
            .filter(|n| tied.contains(n))
            .collect();
        assert_eq!(tied, catalog_order);
    }

    #[test]
    fn absent_inputs_score_neutral() {
        let catalog = Catalog::builtin();
        let rice = catalog.yield_profile("rice").unwrap();
        let s = score_crop_cultivation(
            "Punjab",
            "Kharif",
            &CultivationObservation::default(),
            rice,
        );
        // 40 + 25 + 50% of the 35 parameter points.
        assert_eq!(s.score, 83);
        // No rainfall reason without a rainfall value.
        assert!(s.reasons.iter().all(|r| !r.contains("Rainfall")));
    }

    #[test]
    fn cultivation_reasons_capped_at_three() {
        let catalog = Catalog::builtin();
        let rice = catalog.yield_profile("rice").unwrap();
        let s = score_crop_cultivation("Punjab", "Kharif", &full_observation(), rice);
        assert_eq!(s.reasons.len(), 3);
        assert!(s.reasons[0].contains("commonly grown in Punjab"));
        assert!(s.reasons[1].contains("optimal for rice cultivation"));
    }

    #[test]
    fn soil_variant_rewards_optimal_chemistry() {
        let catalog = Catalog::builtin();
        let observed = SoilObservation {
            nitrogen: 80.0,
            phosphorus: 48.0,
            potassium: 20.0,
            temperature: 25.0,
            humidity: 84.0,
            ph: 6.2,
            rainfall: Some(236.0),
        };
        let ranked = rank_soil(catalog.crops(), "Punjab", "Kharif", &observed);
        assert_eq!(ranked[0].profile.name, "rice");
        assert_eq!(ranked[0].score, 100);
        assert!(ranked[0].reasons.len() <= 4);
        // Padding sentence appears after the parameter reasons.
        assert!(ranked[0]
            .reasons
            .iter()
            .any(|r| r.contains("season cultivation") || r.contains("suitable")));
    }

    #[test]
    fn soil_variant_without_rainfall_is_neutral() {
        let catalog = Catalog::builtin();
        let observed = SoilObservation {
            nitrogen: 80.0,
            phosphorus: 48.0,
            potassium: 20.0,
            temperature: 25.0,
            humidity: 84.0,
            ph: 6.2,
            rainfall: None,
        };
        let rice = &catalog.crops()[0];
        let s = score_crop_soil("Punjab", "Kharif", &observed, rice);
        // 65 + 6 params at 100% (30 pts) + neutral rainfall (2.5 pts).
        assert_eq!(s.score, 98);
    }
}
