//! Agronomic-range catalog: optimal growing conditions per crop.
//!
//! Ranges come from the Kaggle crop-recommendation dataset; the grown-state
//! sets list the top producing states for each crop so the region weighting
//! applies uniformly across both catalogs.

use super::{
    CropKind, CropProfile, OptimalRanges, Season, ValueRange, WaterRequirement,
};

const fn range(min: f64, max: f64, avg: f64) -> ValueRange {
    ValueRange { min, max, avg }
}

pub(super) fn builtin_crops() -> Vec<CropProfile> {
    vec![
        CropProfile {
            name: "rice",
            scientific_name: "Oryza sativa",
            kind: CropKind::Cereal,
            seasons: &[Season::Kharif],
            growth_period: "120-150 days",
            expected_yield: "4-6 tons per hectare",
            water_requirement: WaterRequirement::High,
            states_grown: &[
                "West Bengal",
                "Uttar Pradesh",
                "Punjab",
                "Andhra Pradesh",
                "Bihar",
            ],
            ranges: OptimalRanges {
                nitrogen: range(5.0, 140.0, 80.0),
                phosphorus: range(15.0, 145.0, 48.0),
                potassium: range(15.0, 45.0, 20.0),
                temperature: range(20.0, 35.0, 25.0),
                humidity: range(80.0, 95.0, 84.0),
                ph: range(5.0, 7.0, 6.2),
                rainfall: range(150.0, 300.0, 236.0),
            },
        },
        CropProfile {
            name: "wheat",
            scientific_name: "Triticum aestivum",
            kind: CropKind::Cereal,
            seasons: &[Season::Rabi],
            growth_period: "120-140 days",
            expected_yield: "3-5 tons per hectare",
            water_requirement: WaterRequirement::Medium,
            states_grown: &[
                "Uttar Pradesh",
                "Punjab",
                "Haryana",
                "Madhya Pradesh",
                "Rajasthan",
            ],
            ranges: OptimalRanges {
                nitrogen: range(10.0, 50.0, 22.0),
                phosphorus: range(15.0, 145.0, 53.0),
                potassium: range(15.0, 45.0, 20.0),
                temperature: range(15.0, 25.0, 17.0),
                humidity: range(55.0, 75.0, 64.0),
                ph: range(6.0, 7.5, 6.4),
                rainfall: range(50.0, 120.0, 65.0),
            },
        },
        CropProfile {
            name: "maize",
            scientific_name: "Zea mays",
            kind: CropKind::Cereal,
            seasons: &[Season::Kharif],
            growth_period: "90-120 days",
            expected_yield: "5-8 tons per hectare",
            water_requirement: WaterRequirement::Medium,
            states_grown: &[
                "Karnataka",
                "Andhra Pradesh",
                "Maharashtra",
                "Bihar",
                "Uttar Pradesh",
            ],
            ranges: OptimalRanges {
                nitrogen: range(15.0, 120.0, 78.0),
                phosphorus: range(15.0, 145.0, 48.0),
                potassium: range(15.0, 45.0, 20.0),
                temperature: range(18.0, 32.0, 22.0),
                humidity: range(55.0, 75.0, 65.0),
                ph: range(5.8, 7.8, 6.2),
                rainfall: range(60.0, 120.0, 76.0),
            },
        },
        CropProfile {
            name: "cotton",
            scientific_name: "Gossypium hirsutum",
            kind: CropKind::Fiber,
            seasons: &[Season::Kharif],
            growth_period: "180-200 days",
            expected_yield: "15-20 quintals per hectare",
            water_requirement: WaterRequirement::Medium,
            states_grown: &[
                "Gujarat",
                "Maharashtra",
                "Andhra Pradesh",
                "Punjab",
                "Haryana",
            ],
            ranges: OptimalRanges {
                nitrogen: range(5.0, 140.0, 120.0),
                phosphorus: range(15.0, 145.0, 46.0),
                potassium: range(15.0, 45.0, 20.0),
                temperature: range(21.0, 35.0, 24.0),
                humidity: range(75.0, 85.0, 80.0),
                ph: range(5.8, 8.0, 7.2),
                rainfall: range(50.0, 100.0, 54.0),
            },
        },
        CropProfile {
            name: "chickpea",
            scientific_name: "Cicer arietinum",
            kind: CropKind::Pulse,
            seasons: &[Season::Rabi],
            growth_period: "120 days",
            expected_yield: "1.5-2.5 tons per hectare",
            water_requirement: WaterRequirement::Low,
            states_grown: &[
                "Madhya Pradesh",
                "Rajasthan",
                "Maharashtra",
                "Uttar Pradesh",
                "Karnataka",
            ],
            ranges: OptimalRanges {
                nitrogen: range(10.0, 50.0, 41.0),
                phosphorus: range(15.0, 145.0, 58.0),
                potassium: range(15.0, 45.0, 20.0),
                temperature: range(15.0, 25.0, 18.0),
                humidity: range(15.0, 25.0, 17.0),
                ph: range(6.2, 7.8, 7.4),
                rainfall: range(30.0, 60.0, 65.0),
            },
        },
        CropProfile {
            name: "sugarcane",
            scientific_name: "Saccharum officinarum",
            kind: CropKind::Sugar,
            seasons: &[Season::Perennial],
            growth_period: "12-18 months",
            expected_yield: "80-100 tons per hectare",
            water_requirement: WaterRequirement::High,
            states_grown: &[
                "Uttar Pradesh",
                "Maharashtra",
                "Karnataka",
                "Tamil Nadu",
                "Gujarat",
            ],
            ranges: OptimalRanges {
                nitrogen: range(15.0, 120.0, 134.0),
                phosphorus: range(15.0, 145.0, 38.0),
                potassium: range(15.0, 45.0, 18.0),
                temperature: range(20.0, 35.0, 26.0),
                humidity: range(85.0, 95.0, 87.0),
                ph: range(6.0, 7.5, 6.8),
                rainfall: range(75.0, 150.0, 111.0),
            },
        },
        CropProfile {
            name: "banana",
            scientific_name: "Musa acuminata",
            kind: CropKind::Fruit,
            seasons: &[Season::Perennial],
            growth_period: "12-15 months",
            expected_yield: "40-60 tons per hectare",
            water_requirement: WaterRequirement::High,
            states_grown: &[
                "Tamil Nadu",
                "Maharashtra",
                "Gujarat",
                "Andhra Pradesh",
                "Karnataka",
            ],
            ranges: OptimalRanges {
                nitrogen: range(15.0, 120.0, 100.0),
                phosphorus: range(15.0, 145.0, 82.0),
                potassium: range(15.0, 45.0, 43.0),
                temperature: range(25.0, 35.0, 27.0),
                humidity: range(75.0, 85.0, 80.0),
                ph: range(5.5, 7.0, 5.9),
                rainfall: range(100.0, 180.0, 114.0),
            },
        },
        CropProfile {
            name: "coconut",
            scientific_name: "Cocos nucifera",
            kind: CropKind::Plantation,
            seasons: &[Season::Perennial],
            growth_period: "6-10 years to bearing",
            expected_yield: "80-150 nuts per tree per year",
            water_requirement: WaterRequirement::High,
            states_grown: &[
                "Kerala",
                "Tamil Nadu",
                "Karnataka",
                "Andhra Pradesh",
                "West Bengal",
            ],
            ranges: OptimalRanges {
                nitrogen: range(5.0, 25.0, 22.0),
                phosphorus: range(15.0, 145.0, 142.0),
                potassium: range(15.0, 45.0, 20.0),
                temperature: range(25.0, 35.0, 27.0),
                humidity: range(90.0, 95.0, 94.0),
                ph: range(5.2, 8.0, 6.0),
                rainfall: range(100.0, 180.0, 176.0),
            },
        },
    ]
}
