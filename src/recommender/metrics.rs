use crate::models::{FoodRow, Nutrient};

/// Division that never fails: a zero divisor or a non-finite result gives 0.0.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() { value } else { 0.0 }
}

/// Calories used as the per-kcal denominator; zero calories count as 1.
#[inline]
pub fn kcal_denominator(calories: f64) -> f64 {
    if calories == 0.0 { 1.0 } else { calories }
}

/// `raw / calories`, with the zero-calorie substitution applied.
#[inline]
pub fn per_kcal(raw: f64, calories: f64) -> f64 {
    safe_div(raw, kcal_denominator(calories))
}

/// Per-food values fed to the normalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivedMetrics {
    pub protein_per_kcal: f64,
    pub fiber_per_kcal: f64,
    pub sugar_per_kcal: f64,
    pub sodium_per_kcal: f64,
    pub saturated_fat_per_kcal: f64,
    pub calcium_per_kcal: f64,
    pub iron_per_kcal: f64,
    pub vitamin_c_per_kcal: f64,
    pub polyphenols_per_kcal: f64,
    /// Raw values used as-is.
    pub nutrition_density: f64,
    pub calories: f64,
    pub cholesterol: f64,
}

impl DerivedMetrics {
    pub fn from_row(row: &FoodRow) -> Self {
        let calories = row.get(Nutrient::Calories);
        let ratio = |nutrient: Nutrient| per_kcal(row.get(nutrient), calories);

        Self {
            protein_per_kcal: ratio(Nutrient::Protein),
            fiber_per_kcal: ratio(Nutrient::Fiber),
            sugar_per_kcal: ratio(Nutrient::Sugar),
            sodium_per_kcal: ratio(Nutrient::Sodium),
            saturated_fat_per_kcal: ratio(Nutrient::SaturatedFat),
            calcium_per_kcal: ratio(Nutrient::Calcium),
            iron_per_kcal: ratio(Nutrient::Iron),
            vitamin_c_per_kcal: ratio(Nutrient::VitaminC),
            polyphenols_per_kcal: ratio(Nutrient::Polyphenols),
            nutrition_density: row.get(Nutrient::NutritionDensity),
            calories,
            cholesterol: row.get(Nutrient::Cholesterol),
        }
    }
}

/// Derive metrics for every row, in row order.
pub fn derive_all(rows: &[FoodRow]) -> Vec<DerivedMetrics> {
    rows.iter().map(DerivedMetrics::from_row).collect()
}
