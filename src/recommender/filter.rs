use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{FoodRow, Recommendation};
use crate::recommender::constants::{NON_VEG_TERMS, ROUND_DECIMALS};
use crate::recommender::scoring::ScoredRow;

/// Dietary preference applied after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    Veg,
    NonVeg,
}

impl DietPreference {
    /// Parse "veg" / "non-veg" (case-insensitive). Anything else means no filter.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Some(DietPreference::Veg),
            "non-veg" | "nonveg" | "non_veg" | "non-vegetarian" => Some(DietPreference::NonVeg),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DietPreference::Veg => "veg",
            DietPreference::NonVeg => "non-veg",
        }
    }

    /// Whether a food passes this preference.
    pub fn keeps(self, food: &FoodRow) -> bool {
        let non_veg = is_non_veg(food.category.as_deref());
        match self {
            DietPreference::Veg => !non_veg,
            DietPreference::NonVeg => non_veg,
        }
    }
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match of the non-veg terms. No category never matches.
pub fn is_non_veg(category: Option<&str>) -> bool {
    match category {
        Some(category) => {
            let category = category.to_lowercase();
            NON_VEG_TERMS.iter().any(|term| category.contains(term))
        }
        None => false,
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Project a food onto the user-facing record.
pub fn project(food: &FoodRow) -> Recommendation {
    let n = &food.nutrients;
    Recommendation {
        food: food.name.clone(),
        calories: round_to(n.calories, ROUND_DECIMALS),
        protein: round_to(n.protein, ROUND_DECIMALS),
        fiber: round_to(n.fiber, ROUND_DECIMALS),
        sugar: round_to(n.sugar, ROUND_DECIMALS),
        sodium: round_to(n.sodium, ROUND_DECIMALS),
        food_group: food.category.clone(),
    }
}

/// Filter the ranked rows, keep the first `top_k`, and project them.
///
/// Never pads: fewer matching rows simply means a shorter list.
pub fn select_top(
    scored: &[ScoredRow<'_>],
    preference: Option<DietPreference>,
    top_k: usize,
) -> Vec<Recommendation> {
    scored
        .iter()
        .filter(|row| preference.is_none_or(|pref| pref.keeps(row.food)))
        .take(top_k)
        .map(|row| project(row.food))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientValues;

    fn row(category: Option<&str>) -> FoodRow {
        let row = FoodRow::new("x", NutrientValues::default());
        match category {
            Some(c) => row.with_category(c),
            None => row,
        }
    }

    #[test]
    fn test_meat_filtered_by_preference() {
        let meat = row(Some("Meat"));
        assert!(!DietPreference::Veg.keeps(&meat));
        assert!(DietPreference::NonVeg.keeps(&meat));
    }

    #[test]
    fn test_blank_or_missing_category_is_veg() {
        for food in [row(Some("")), row(None)] {
            assert!(DietPreference::Veg.keeps(&food));
            assert!(!DietPreference::NonVeg.keeps(&food));
        }
    }

    #[test]
    fn test_substring_match() {
        assert!(is_non_veg(Some("Seafood & FISH products")));
        assert!(is_non_veg(Some("Eggs")));
        assert!(is_non_veg(Some("Processed meats")));
        assert!(!is_non_veg(Some("Vegetables")));
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!(DietPreference::parse("VEG"), Some(DietPreference::Veg));
        assert_eq!(DietPreference::parse("Non-Veg"), Some(DietPreference::NonVeg));
        assert_eq!(DietPreference::parse("any"), None);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(2.0, 3), 2.0);
    }

    #[test]
    fn test_project_rounds() {
        let food = FoodRow::new(
            "Almonds",
            NutrientValues {
                calories: 579.0,
                protein: 21.154_9,
                fiber: 12.5,
                sugar: 4.354_4,
                sodium: 0.000_9,
                ..Default::default()
            },
        )
        .with_category("Nuts");
        let rec = project(&food);
        assert_eq!(rec.protein, 21.155);
        assert_eq!(rec.sugar, 4.354);
        assert_eq!(rec.sodium, 0.001);
        assert_eq!(rec.food_group.as_deref(), Some("Nuts"));
    }
}
