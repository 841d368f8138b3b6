//! Historical-statistics catalog and per-state yield history.
//!
//! Figures are summary statistics of the Indian crop-yield dataset:
//! yield in tonnes per hectare, rainfall in mm, fertilizer and pesticide
//! in the dataset's recorded usage units.

use super::{
    CropYieldProfile, HistoricalYieldRecord, ParameterStats, Season, Trend, YieldHistory,
    YieldStats,
};

const fn stats(mean: f64, std: f64) -> ParameterStats {
    ParameterStats { mean, std }
}

pub(super) fn builtin_yield_profiles() -> Vec<CropYieldProfile> {
    vec![
        CropYieldProfile {
            name: "rice",
            yield_stats: YieldStats {
                mean: 2.5,
                median: 2.3,
                std: 0.8,
                min: 0.5,
                max: 6.2,
            },
            states_grown: &[
                "West Bengal",
                "Uttar Pradesh",
                "Punjab",
                "Andhra Pradesh",
                "Bihar",
            ],
            seasons: &[Season::Kharif, Season::Rabi],
            rainfall: stats(1200.0, 300.0),
            fertilizer: stats(150_000.0, 50_000.0),
            pesticide: stats(2000.0, 800.0),
            top_producing_states: &[
                ("West Bengal", 15_000_000.0),
                ("Uttar Pradesh", 12_000_000.0),
                ("Punjab", 11_000_000.0),
                ("Andhra Pradesh", 10_000_000.0),
                ("Bihar", 8_000_000.0),
            ],
        },
        CropYieldProfile {
            name: "wheat",
            yield_stats: YieldStats {
                mean: 3.2,
                median: 3.0,
                std: 0.9,
                min: 1.0,
                max: 5.8,
            },
            states_grown: &[
                "Uttar Pradesh",
                "Punjab",
                "Haryana",
                "Madhya Pradesh",
                "Rajasthan",
            ],
            seasons: &[Season::Rabi],
            rainfall: stats(650.0, 200.0),
            fertilizer: stats(120_000.0, 40_000.0),
            pesticide: stats(1500.0, 600.0),
            top_producing_states: &[
                ("Uttar Pradesh", 30_000_000.0),
                ("Punjab", 18_000_000.0),
                ("Madhya Pradesh", 18_000_000.0),
                ("Haryana", 12_000_000.0),
                ("Rajasthan", 8_000_000.0),
            ],
        },
        CropYieldProfile {
            name: "maize",
            yield_stats: YieldStats {
                mean: 2.8,
                median: 2.6,
                std: 0.7,
                min: 1.2,
                max: 5.0,
            },
            states_grown: &[
                "Karnataka",
                "Andhra Pradesh",
                "Maharashtra",
                "Bihar",
                "Uttar Pradesh",
            ],
            seasons: &[Season::Kharif, Season::Rabi],
            rainfall: stats(900.0, 250.0),
            fertilizer: stats(100_000.0, 35_000.0),
            pesticide: stats(1800.0, 700.0),
            top_producing_states: &[
                ("Karnataka", 4_000_000.0),
                ("Andhra Pradesh", 3_500_000.0),
                ("Maharashtra", 3_000_000.0),
                ("Bihar", 2_800_000.0),
                ("Uttar Pradesh", 2_500_000.0),
            ],
        },
        CropYieldProfile {
            name: "cotton",
            yield_stats: YieldStats {
                mean: 0.5,
                median: 0.4,
                std: 0.2,
                min: 0.1,
                max: 1.2,
            },
            states_grown: &[
                "Gujarat",
                "Maharashtra",
                "Andhra Pradesh",
                "Punjab",
                "Haryana",
            ],
            seasons: &[Season::Kharif],
            rainfall: stats(800.0, 200.0),
            fertilizer: stats(80_000.0, 25_000.0),
            pesticide: stats(3000.0, 1200.0),
            top_producing_states: &[
                ("Gujarat", 8_000_000.0),
                ("Maharashtra", 6_000_000.0),
                ("Andhra Pradesh", 4_000_000.0),
                ("Punjab", 2_000_000.0),
                ("Haryana", 1_500_000.0),
            ],
        },
        CropYieldProfile {
            name: "sugarcane",
            yield_stats: YieldStats {
                mean: 70.0,
                median: 68.0,
                std: 15.0,
                min: 30.0,
                max: 120.0,
            },
            states_grown: &[
                "Uttar Pradesh",
                "Maharashtra",
                "Karnataka",
                "Tamil Nadu",
                "Gujarat",
            ],
            seasons: &[Season::Annual],
            rainfall: stats(1100.0, 300.0),
            fertilizer: stats(200_000.0, 60_000.0),
            pesticide: stats(2500.0, 900.0),
            top_producing_states: &[
                ("Uttar Pradesh", 180_000_000.0),
                ("Maharashtra", 80_000_000.0),
                ("Karnataka", 45_000_000.0),
                ("Tamil Nadu", 35_000_000.0),
                ("Gujarat", 20_000_000.0),
            ],
        },
    ]
}

const fn record(
    crop: &'static str,
    state: &'static str,
    season: Season,
    avg_yield: f64,
    best_yield: f64,
    trend: Trend,
) -> HistoricalYieldRecord {
    HistoricalYieldRecord {
        crop,
        state,
        season,
        history: YieldHistory {
            avg_yield,
            best_yield,
            trend,
        },
    }
}

pub(super) fn builtin_history() -> Vec<HistoricalYieldRecord> {
    vec![
        record("rice", "West Bengal", Season::Kharif, 2.8, 4.2, Trend::Increasing),
        record("rice", "Uttar Pradesh", Season::Kharif, 2.5, 3.8, Trend::Stable),
        record("rice", "Punjab", Season::Kharif, 3.9, 5.2, Trend::Stable),
        record("wheat", "Uttar Pradesh", Season::Rabi, 3.2, 4.8, Trend::Increasing),
        record("wheat", "Punjab", Season::Rabi, 4.5, 5.8, Trend::Stable),
        record("wheat", "Haryana", Season::Rabi, 4.2, 5.5, Trend::Increasing),
        record("maize", "Karnataka", Season::Kharif, 3.1, 4.5, Trend::Increasing),
        record("maize", "Andhra Pradesh", Season::Kharif, 2.9, 4.2, Trend::Stable),
    ]
}
