//! Leaf-photo disease classification.
//!
//! The `Classifier` trait is the single seam a trained model would plug
//! into; the shipped implementation is a random-choice stand-in over a
//! fixed diagnosis list, good enough to exercise the full upload path.

use rand::Rng;

use crate::models::diagnosis::{Diagnosis, Severity};

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("uploaded bytes are not a recognized image format")]
    UnsupportedFormat,

    #[error("classifier has no known diagnoses")]
    EmptyDiagnosisSet,
}

pub trait Classifier: Send + Sync {
    fn predict(&self, image: &[u8]) -> Result<Diagnosis, ClassificationError>;
}

/// Random-choice stand-in for a trained leaf-disease model.
pub struct MockClassifier {
    diagnoses: Vec<Diagnosis>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            diagnoses: known_diagnoses(),
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MockClassifier {
    fn predict(&self, image: &[u8]) -> Result<Diagnosis, ClassificationError> {
        image::guess_format(image).map_err(|_| ClassificationError::UnsupportedFormat)?;

        if self.diagnoses.is_empty() {
            return Err(ClassificationError::EmptyDiagnosisSet);
        }
        let idx = rand::thread_rng().gen_range(0..self.diagnoses.len());
        Ok(self.diagnoses[idx].clone())
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn known_diagnoses() -> Vec<Diagnosis> {
    vec![
        Diagnosis {
            disease: "Leaf Blight".to_string(),
            confidence: 94,
            severity: Severity::High,
            description: "A fungal disease that causes brown spots and lesions on leaves, \
                          leading to reduced photosynthesis and yield loss."
                .to_string(),
            symptoms: strings(&[
                "Brown or tan spots on leaves",
                "Lesions with dark borders",
                "Yellowing of affected leaves",
                "Premature leaf drop",
            ]),
            treatment: strings(&[
                "Apply copper-based fungicide spray",
                "Remove and destroy infected plant debris",
                "Improve air circulation around plants",
                "Apply preventive fungicide during humid conditions",
            ]),
            prevention: strings(&[
                "Use disease-resistant varieties",
                "Avoid overhead watering",
                "Maintain proper plant spacing",
                "Rotate crops annually",
            ]),
        },
        Diagnosis {
            disease: "Powdery Mildew".to_string(),
            confidence: 89,
            severity: Severity::Medium,
            description: "A fungal disease characterized by white, powdery growth on leaf \
                          surfaces, stems, and flowers."
                .to_string(),
            symptoms: strings(&[
                "White powdery coating on leaves",
                "Yellowing and curling of leaves",
                "Stunted plant growth",
                "Reduced fruit/grain quality",
            ]),
            treatment: strings(&[
                "Apply sulfur-based fungicide",
                "Use baking soda spray (1 tsp per quart water)",
                "Improve air circulation",
                "Remove severely affected plant parts",
            ]),
            prevention: strings(&[
                "Plant in sunny, well-ventilated areas",
                "Avoid overcrowding plants",
                "Water at soil level, not on leaves",
                "Apply preventive fungicide sprays",
            ]),
        },
        Diagnosis {
            disease: "Healthy Plant".to_string(),
            confidence: 96,
            severity: Severity::Low,
            description: "The plant appears healthy with no visible signs of disease or \
                          pest damage."
                .to_string(),
            symptoms: strings(&[
                "Green, vibrant foliage",
                "No visible spots or lesions",
                "Normal growth pattern",
                "Good overall plant vigor",
            ]),
            treatment: strings(&[
                "Continue current care routine",
                "Monitor regularly for any changes",
                "Maintain proper nutrition",
                "Ensure adequate water and sunlight",
            ]),
            prevention: strings(&[
                "Regular monitoring and inspection",
                "Maintain proper plant nutrition",
                "Ensure good air circulation",
                "Practice crop rotation",
            ]),
        },
        Diagnosis {
            disease: "Bacterial Spot".to_string(),
            confidence: 87,
            severity: Severity::Medium,
            description: "A bacterial infection causing dark spots on leaves and fruits, \
                          potentially leading to significant crop loss."
                .to_string(),
            symptoms: strings(&[
                "Small, dark spots on leaves",
                "Spots with yellow halos",
                "Fruit lesions and cracking",
                "Defoliation in severe cases",
            ]),
            treatment: strings(&[
                "Apply copper-based bactericide",
                "Remove infected plant material",
                "Avoid working with wet plants",
                "Use drip irrigation instead of sprinklers",
            ]),
            prevention: strings(&[
                "Use certified disease-free seeds",
                "Avoid overhead irrigation",
                "Practice crop rotation",
                "Maintain proper plant spacing",
            ]),
        },
    ]
}
