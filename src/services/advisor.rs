//! Templated agronomic guidance attached to scoring responses.
//!
//! All text is static reference material keyed by crop name; unknown crops
//! get generic fallback advice rather than an error.

use crate::models::recommendation::MarketInsights;

/// Cultivation tips for the agronomic-range catalog (soil variant).
pub fn crop_tips(crop: &str) -> Vec<String> {
    let tips: &[&str] = match crop.to_ascii_lowercase().as_str() {
        "rice" => &[
            "Maintain water levels at 2-5 cm during vegetative stage",
            "Apply nitrogen in split doses for better utilization",
            "Monitor for blast disease during flowering stage",
            "Harvest when 80% of grains turn golden yellow",
        ],
        "wheat" => &[
            "Sow during optimal temperature window (15-25°C)",
            "Apply phosphorus fertilizer at the time of sowing",
            "Monitor for rust diseases, especially during humid conditions",
            "Harvest when grain moisture content is 12-14%",
        ],
        "maize" => &[
            "Apply nitrogen as top dressing during knee-high stage",
            "Ensure proper drainage to prevent waterlogging",
            "Monitor for stem borer and fall armyworm attacks",
            "Harvest when kernels reach physiological maturity",
        ],
        "cotton" => &[
            "Maintain adequate soil moisture during flowering",
            "Apply potassium fertilizer during boll development",
            "Regular monitoring for bollworm infestation",
            "Practice crop rotation to maintain soil health",
        ],
        "chickpea" => &[
            "Sow after soil temperature drops below 25°C",
            "Avoid waterlogging as chickpea is sensitive to excess moisture",
            "Apply rhizobium culture for better nitrogen fixation",
            "Harvest when pods turn brown and rattle when shaken",
        ],
        "sugarcane" => &[
            "Plant healthy seed cane from disease-free fields",
            "Apply organic manure before planting",
            "Perform regular earthing up operations",
            "Harvest at proper maturity for maximum sugar content",
        ],
        "banana" => &[
            "Provide adequate drainage and organic matter",
            "Apply balanced fertilizers regularly",
            "Protect from strong winds using windbreaks",
            "Harvest when fruits are 75% mature",
        ],
        "coconut" => &[
            "Ensure good drainage and deep soil",
            "Apply organic manure and balanced fertilizers",
            "Provide adequate spacing between plants",
            "Regular irrigation during dry periods",
        ],
        _ => &[
            "Follow recommended agricultural practices",
            "Consult local agricultural extension officers",
            "Use quality seeds or planting material",
            "Monitor for pests and diseases regularly",
        ],
    };
    tips.iter().map(|t| t.to_string()).collect()
}

/// Practice tips for the cultivation variant, closed with a
/// region-specific line.
pub fn farming_tips(crop: &str, state: &str) -> Vec<String> {
    let base: &[&str] = match crop.to_ascii_lowercase().as_str() {
        "rice" => &[
            "Maintain proper water levels throughout the growing season",
            "Use certified seeds for better yield and disease resistance",
            "Apply fertilizers in split doses for optimal nutrient uptake",
            "Monitor for pests like stem borer and leaf folder",
        ],
        "wheat" => &[
            "Sow at the right time when temperature is between 15-25°C",
            "Ensure proper seed rate and spacing for optimal growth",
            "Apply nitrogen fertilizer in 2-3 split doses",
            "Monitor for diseases like rust and aphid attacks",
        ],
        "maize" => &[
            "Plant during optimal temperature and moisture conditions",
            "Maintain proper plant population for maximum yield",
            "Apply balanced fertilizers based on soil test results",
            "Control weeds during early growth stages",
        ],
        "cotton" => &[
            "Use high-quality seeds and treat them before sowing",
            "Maintain optimal plant spacing for better boll development",
            "Monitor for bollworm and other pest attacks regularly",
            "Ensure adequate moisture during flowering and boll formation",
        ],
        "sugarcane" => &[
            "Use healthy seed cane from disease-free mother plants",
            "Maintain proper row spacing and planting depth",
            "Apply organic manure along with chemical fertilizers",
            "Ensure regular irrigation and proper drainage",
        ],
        _ => &[
            "Follow recommended agricultural practices for your region",
            "Use quality inputs and maintain proper crop management",
            "Monitor weather conditions and adjust practices accordingly",
            "Consult local agricultural extension officers for guidance",
        ],
    };
    let mut tips: Vec<String> = base.iter().map(|t| t.to_string()).collect();
    tips.push(format!(
        "For {state}, consider local varieties and practices"
    ));
    tips
}

/// The one crop-specific line appended to yield recommendations.
pub fn yield_crop_tip(crop: &str) -> Option<&'static str> {
    match crop.to_ascii_lowercase().as_str() {
        "rice" => Some("Maintain proper water levels throughout the growing season"),
        "wheat" => Some("Ensure timely sowing for optimal temperature conditions"),
        _ => None,
    }
}

/// Indicative market figures. Static boilerplate; a live market feed is an
/// external collaborator this service does not integrate.
pub fn market_insights(crop: &str) -> MarketInsights {
    let (current_price, trend, demand, export_potential) =
        match crop.to_ascii_lowercase().as_str() {
            "rice" => ("₹2,000-2,500 per quintal", "stable", "high", "good"),
            "wheat" => (
                "₹2,100-2,400 per quintal",
                "increasing",
                "very high",
                "excellent",
            ),
            "maize" => ("₹1,800-2,200 per quintal", "stable", "high", "moderate"),
            "cotton" => (
                "₹5,500-6,200 per quintal",
                "fluctuating",
                "high",
                "excellent",
            ),
            "sugarcane" => ("₹280-320 per quintal", "stable", "consistent", "low"),
            _ => (
                "Contact local markets",
                "variable",
                "moderate",
                "check current policies",
            ),
        };
    MarketInsights {
        current_price: current_price.to_string(),
        trend: trend.to_string(),
        demand: demand.to_string(),
        export_potential: export_potential.to_string(),
    }
}
