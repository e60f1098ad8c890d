use serde::{Deserialize, Serialize};

use crate::metabolism::Targets;
use crate::models::Goal;

/// A recommended food as shown to the user.
///
/// Numeric fields are already rounded. The internal score is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "Food")]
    pub food: String,

    #[serde(rename = "Caloric Value")]
    pub calories: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Dietary Fiber")]
    pub fiber: f64,

    #[serde(rename = "Sugars")]
    pub sugar: f64,

    #[serde(rename = "Sodium")]
    pub sodium: f64,

    #[serde(rename = "Food Group", default, skip_serializing_if = "Option::is_none")]
    pub food_group: Option<String>,
}

/// Everything a front end needs to render one request.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub goal: Goal,
    pub targets: Targets,
    pub results: Vec<Recommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_display_labels() {
        let rec = Recommendation {
            food: "Lentils".to_string(),
            calories: 116.0,
            protein: 9.02,
            fiber: 7.9,
            sugar: 1.8,
            sodium: 0.002,
            food_group: None,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["Food"], "Lentils");
        assert_eq!(json["Dietary Fiber"], 7.9);
        assert!(json.get("Food Group").is_none());
        assert!(json.get("score").is_none());
    }
}
