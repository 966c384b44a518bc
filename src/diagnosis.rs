//! Diagnosis records returned by the simulated analyzer.
//!
//! The catalog is fixed: three hand-written records, each pairing a disease
//! finding with information about the plant it was observed on.

use std::fmt;

/// How serious a detected condition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// Botanical information about the analyzed plant.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantInfo {
    pub scientific_name: &'static str,
    pub common_name: &'static str,
    pub family: &'static str,
    /// Ordered as they should be displayed.
    pub medicinal_uses: &'static [&'static str],
}

/// A canned diagnosis.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosisRecord {
    pub disease: &'static str,
    /// Percentage in [0, 100].
    pub confidence: f32,
    pub severity: Severity,
    pub treatment: &'static str,
    pub description: &'static str,
    pub plant_info: PlantInfo,
}

/// Every record the analyzer can return.
pub static CATALOG: [DiagnosisRecord; 3] = [
    DiagnosisRecord {
        disease: "Powdery Mildew",
        confidence: 94.2,
        severity: Severity::Medium,
        treatment: "Apply neem oil solution twice weekly. Improve air circulation around plants.",
        description: "A fungal disease that appears as white powdery spots on leaves, potentially reducing photosynthesis and plant vigor.",
        plant_info: PlantInfo {
            scientific_name: "Ocimum sanctum",
            common_name: "Holy Basil (Tulsi)",
            family: "Lamiaceae",
            medicinal_uses: &[
                "Respiratory disorders",
                "Stress relief",
                "Immune system support",
                "Anti-inflammatory",
            ],
        },
    },
    DiagnosisRecord {
        disease: "Leaf Spot Disease",
        confidence: 87.6,
        severity: Severity::Low,
        treatment: "Remove affected leaves and apply copper-based fungicide. Avoid overhead watering.",
        description: "Circular or irregular brown spots on leaves caused by bacterial or fungal infection.",
        plant_info: PlantInfo {
            scientific_name: "Aloe vera",
            common_name: "Aloe Vera",
            family: "Asphodelaceae",
            medicinal_uses: &[
                "Wound healing",
                "Skin care",
                "Digestive health",
                "Burns treatment",
            ],
        },
    },
    DiagnosisRecord {
        disease: "Healthy Plant",
        confidence: 96.8,
        severity: Severity::Low,
        treatment: "Continue current care routine. Monitor regularly for any changes.",
        description: "Plant shows no signs of disease. Leaves are healthy with good coloration.",
        plant_info: PlantInfo {
            scientific_name: "Echinacea purpurea",
            common_name: "Purple Coneflower",
            family: "Asteraceae",
            medicinal_uses: &[
                "Immune support",
                "Cold and flu prevention",
                "Anti-inflammatory",
                "Wound healing",
            ],
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn find_by_disease(disease: &str) -> Option<&'static DiagnosisRecord> {
        CATALOG.iter().find(|r| r.disease == disease)
    }

    #[test]
    fn test_catalog_has_three_distinct_diseases() {
        let names: Vec<_> = CATALOG.iter().map(|r| r.disease).collect();
        assert_eq!(names, vec!["Powdery Mildew", "Leaf Spot Disease", "Healthy Plant"]);
    }

    #[test]
    fn test_confidence_within_percentage_range() {
        for record in CATALOG.iter() {
            assert!(
                (0.0..=100.0).contains(&record.confidence),
                "{} has confidence {}",
                record.disease,
                record.confidence
            );
        }
    }

    #[test]
    fn test_plant_pairing() {
        let mildew = find_by_disease("Powdery Mildew").unwrap();
        assert_eq!(mildew.plant_info.common_name, "Holy Basil (Tulsi)");
        assert_eq!(mildew.severity, Severity::Medium);

        let healthy = find_by_disease("Healthy Plant").unwrap();
        assert_eq!(healthy.plant_info.scientific_name, "Echinacea purpurea");
        assert_eq!(healthy.plant_info.medicinal_uses[0], "Immune support");
        assert_eq!(healthy.plant_info.medicinal_uses.len(), 4);
    }

    #[test]
    fn test_find_unknown_disease() {
        assert!(find_by_disease("Root Rot").is_none());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Low.to_string(), "Low");
        assert_eq!(Severity::High.to_string(), "High");
    }
}
