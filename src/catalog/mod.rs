//! Static agronomic reference catalogs.
//!
//! Two read-only tables back the advisory endpoints: an optimal-range
//! catalog for soil-chemistry matching and a historical-statistics catalog
//! for cultivation-input matching and yield estimation. Both are built once
//! at startup and injected into scorers through `AppState`, so tests can
//! substitute fixture catalogs without touching the scoring code.

use serde::Serialize;
use strum::{Display, EnumString};

mod crops;
mod yields;

/// Indian cropping seasons plus the catch-all cycles used by the yield
/// dataset. Parsing is case-insensitive so request payloads may carry
/// "kharif" or "Kharif" interchangeably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Season {
    Kharif,
    Rabi,
    Zaid,
    Summer,
    Winter,
    Autumn,
    Annual,
    Perennial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CropKind {
    Cereal,
    Pulse,
    Fiber,
    Sugar,
    Fruit,
    Plantation,
}

/// Observed yield trend for a crop/state/season combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Trend {
    Increasing,
    Stable,
    Declining,
}

/// Mean and spread of a recorded input parameter (rainfall in mm,
/// fertilizer and pesticide in the dataset's usage units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterStats {
    pub mean: f64,
    pub std: f64,
}

/// Optimal range for a soil or climate parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

impl ValueRange {
    /// Derived stats for range-based entries: the catalog records no
    /// standard deviation, so a quarter of the span stands in for it.
    pub fn stats(&self) -> ParameterStats {
        ParameterStats {
            mean: self.avg,
            std: (self.max - self.min) / 4.0,
        }
    }
}

/// Optimal soil chemistry and climate ranges for one crop.
#[derive(Debug, Clone, Copy)]
pub struct OptimalRanges {
    pub nitrogen: ValueRange,
    pub phosphorus: ValueRange,
    pub potassium: ValueRange,
    pub temperature: ValueRange,
    pub humidity: ValueRange,
    pub ph: ValueRange,
    pub rainfall: ValueRange,
}

/// One entry of the agronomic-range catalog.
#[derive(Debug, Clone)]
pub struct CropProfile {
    pub name: &'static str,
    pub scientific_name: &'static str,
    pub kind: CropKind,
    pub seasons: &'static [Season],
    pub growth_period: &'static str,
    pub expected_yield: &'static str,
    pub water_requirement: WaterRequirement,
    pub states_grown: &'static [&'static str],
    pub ranges: OptimalRanges,
}

/// Yield distribution in tonnes per hectare.
#[derive(Debug, Clone, Copy)]
pub struct YieldStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// One entry of the historical-statistics catalog.
#[derive(Debug, Clone)]
pub struct CropYieldProfile {
    pub name: &'static str,
    pub yield_stats: YieldStats,
    pub states_grown: &'static [&'static str],
    pub seasons: &'static [Season],
    pub rainfall: ParameterStats,
    pub fertilizer: ParameterStats,
    pub pesticide: ParameterStats,
    /// (state, annual production in tonnes), descending.
    pub top_producing_states: &'static [(&'static str, f64)],
}

impl CropYieldProfile {
    /// Human-readable yield band, e.g. "2.5 - 6.2 tons/hectare".
    pub fn expected_yield(&self) -> String {
        format!(
            "{:.1} - {:.1} tons/hectare",
            self.yield_stats.mean, self.yield_stats.max
        )
    }
}

/// Historical yield figures for one crop/state/season combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldHistory {
    pub avg_yield: f64,
    pub best_yield: f64,
    pub trend: Trend,
}

/// Substituted whenever no historical record exists for a requested
/// combination. Completeness over precision: an unknown combination is
/// served with conservative defaults, never an error.
pub const DEFAULT_HISTORY: YieldHistory = YieldHistory {
    avg_yield: 2.0,
    best_yield: 3.5,
    trend: Trend::Stable,
};

#[derive(Debug, Clone)]
pub struct HistoricalYieldRecord {
    pub crop: &'static str,
    pub state: &'static str,
    pub season: Season,
    pub history: YieldHistory,
}

/// The full set of reference tables the advisory endpoints read from.
#[derive(Debug, Clone)]
pub struct Catalog {
    crops: Vec<CropProfile>,
    yields: Vec<CropYieldProfile>,
    history: Vec<HistoricalYieldRecord>,
}

impl Catalog {
    pub fn new(
        crops: Vec<CropProfile>,
        yields: Vec<CropYieldProfile>,
        history: Vec<HistoricalYieldRecord>,
    ) -> Self {
        Self {
            crops,
            yields,
            history,
        }
    }

    /// The bundled reference data derived from the Kaggle crop datasets.
    pub fn builtin() -> Self {
        Self::new(
            crops::builtin_crops(),
            yields::builtin_yield_profiles(),
            yields::builtin_history(),
        )
    }

    pub fn crops(&self) -> &[CropProfile] {
        &self.crops
    }

    pub fn yield_profiles(&self) -> &[CropYieldProfile] {
        &self.yields
    }

    pub fn yield_profile(&self, name: &str) -> Option<&CropYieldProfile> {
        self.yields.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Exact-match historical lookup. Callers fall back to
    /// [`DEFAULT_HISTORY`] on a miss.
    pub fn history(&self, crop: &str, state: &str, season: Season) -> Option<&YieldHistory> {
        self.history
            .iter()
            .find(|r| {
                r.crop.eq_ignore_ascii_case(crop)
                    && r.state.eq_ignore_ascii_case(state)
                    && r.season == season
            })
            .map(|r| &r.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn builtin_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.crops().len(), 8);
        assert_eq!(catalog.yield_profiles().len(), 5);
    }

    #[test]
    fn season_parsing_is_case_insensitive() {
        assert_eq!(Season::from_str("kharif").unwrap(), Season::Kharif);
        assert_eq!(Season::from_str("RABI").unwrap(), Season::Rabi);
        assert!(Season::from_str("monsoon").is_err());
    }

    #[test]
    fn history_lookup_ignores_case() {
        let catalog = Catalog::builtin();
        let hit = catalog.history("Rice", "punjab", Season::Kharif).unwrap();
        assert_eq!(hit.avg_yield, 3.9);
        assert_eq!(hit.trend, Trend::Stable);
    }

    #[test]
    fn history_miss_returns_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.history("rice", "Kerala", Season::Rabi).is_none());
        assert!(catalog.history("quinoa", "Punjab", Season::Kharif).is_none());
    }

    #[test]
    fn range_stats_floor_protected_by_scorer() {
        let range = ValueRange {
            min: 15.0,
            max: 45.0,
            avg: 20.0,
        };
        let stats = range.stats();
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.std, 7.5);
    }
}
