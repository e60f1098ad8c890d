use std::fmt;

use serde::{Deserialize, Serialize};

use crate::recommender::normalize::NormalizedMetrics;

/// Optional single-nutrient bias layered on top of the goal weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutrientFocus {
    #[default]
    None,
    HighProtein,
    HighFiber,
    LowSugar,
    HighCalcium,
    HighIron,
    HighVitaminC,
}

impl NutrientFocus {
    pub const ALL: [NutrientFocus; 7] = [
        NutrientFocus::None,
        NutrientFocus::HighProtein,
        NutrientFocus::HighFiber,
        NutrientFocus::LowSugar,
        NutrientFocus::HighCalcium,
        NutrientFocus::HighIron,
        NutrientFocus::HighVitaminC,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NutrientFocus::None => "None",
            NutrientFocus::HighProtein => "High Protein",
            NutrientFocus::HighFiber => "High Fiber",
            NutrientFocus::LowSugar => "Low Sugar",
            NutrientFocus::HighCalcium => "High Calcium",
            NutrientFocus::HighIron => "High Iron",
            NutrientFocus::HighVitaminC => "High Vitamin C",
        }
    }

    /// Parse a focus label such as "High Protein", "high-protein" or "LOW_SUGAR".
    ///
    /// Unknown labels mean no focus.
    pub fn parse(label: &str) -> Self {
        let key: String = label
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        Self::ALL
            .into_iter()
            .find(|focus| {
                let candidate: String = focus
                    .label()
                    .to_lowercase()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .collect();
                candidate == key
            })
            .unwrap_or_default()
    }

    pub fn is_none(self) -> bool {
        self == NutrientFocus::None
    }

    /// The normalized signal this focus boosts, if any.
    pub fn signal(self, metrics: &NormalizedMetrics) -> Option<f64> {
        match self {
            NutrientFocus::None => None,
            NutrientFocus::HighProtein => Some(metrics.protein),
            NutrientFocus::HighFiber => Some(metrics.fiber),
            NutrientFocus::LowSugar => Some(metrics.low_sugar),
            NutrientFocus::HighCalcium => Some(metrics.calcium),
            NutrientFocus::HighIron => Some(metrics.iron),
            NutrientFocus::HighVitaminC => Some(metrics.vitamin_c),
        }
    }
}

impl fmt::Display for NutrientFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(NutrientFocus::parse("High Protein"), NutrientFocus::HighProtein);
        assert_eq!(NutrientFocus::parse("high-vitamin-c"), NutrientFocus::HighVitaminC);
        assert_eq!(NutrientFocus::parse("LOW_SUGAR"), NutrientFocus::LowSugar);
        assert_eq!(NutrientFocus::parse("None"), NutrientFocus::None);
        assert_eq!(NutrientFocus::parse("High Zinc"), NutrientFocus::None);
    }

    #[test]
    fn test_signal() {
        let metrics = NormalizedMetrics {
            low_sugar: 0.75,
            calcium: 0.25,
            ..Default::default()
        };
        assert_eq!(NutrientFocus::LowSugar.signal(&metrics), Some(0.75));
        assert_eq!(NutrientFocus::HighCalcium.signal(&metrics), Some(0.25));
        assert_eq!(NutrientFocus::None.signal(&metrics), None);
    }
}
