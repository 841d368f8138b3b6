use serde::Serialize;
use strum::Display;

/// Reported severity of a diagnosed condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Outcome of classifying a leaf photo.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnosis {
    pub disease: String,
    pub confidence: u8,
    pub severity: Severity,
    pub description: String,
    pub symptoms: Vec<String>,
    pub treatment: Vec<String>,
    pub prevention: Vec<String>,
}
