use crate::recommender::constants::NEUTRAL_NORMALIZED;
use crate::recommender::metrics::DerivedMetrics;

/// Min-max rescale a column into `[0, 1]`.
///
/// A column with no spread (all values equal) gets `NEUTRAL_NORMALIZED`
/// everywhere, so it contributes a constant rather than a division by zero.
pub fn min_max(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if !min.is_finite() || !max.is_finite() || span == 0.0 || !span.is_finite() {
        return vec![NEUTRAL_NORMALIZED; values.len()];
    }

    values.iter().map(|v| (v - min) / span).collect()
}

/// `1 - min_max(values)`: for metrics where lower raw values are better.
pub fn inverted(values: &[f64]) -> Vec<f64> {
    min_max(values).into_iter().map(|v| 1.0 - v).collect()
}

/// Normalized signals for one food. Higher is better for every field except
/// `cholesterol`, which feeds a penalty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedMetrics {
    pub protein: f64,
    pub fiber: f64,
    pub low_sugar: f64,
    pub low_sodium: f64,
    pub low_saturated_fat: f64,
    pub nutrition_density: f64,
    pub low_calorie: f64,
    pub high_calorie: f64,
    pub calcium: f64,
    pub iron: f64,
    pub vitamin_c: f64,
    pub polyphenols: f64,
    pub cholesterol: f64,
}

fn column(derived: &[DerivedMetrics], pick: impl Fn(&DerivedMetrics) -> f64) -> Vec<f64> {
    derived.iter().map(pick).collect()
}

/// Normalize every metric across the whole working set.
pub fn normalize_all(derived: &[DerivedMetrics]) -> Vec<NormalizedMetrics> {
    let protein = min_max(&column(derived, |d| d.protein_per_kcal));
    let fiber = min_max(&column(derived, |d| d.fiber_per_kcal));
    let low_sugar = inverted(&column(derived, |d| d.sugar_per_kcal));
    let low_sodium = inverted(&column(derived, |d| d.sodium_per_kcal));
    let low_saturated_fat = inverted(&column(derived, |d| d.saturated_fat_per_kcal));
    let nutrition_density = min_max(&column(derived, |d| d.nutrition_density));
    let high_calorie = min_max(&column(derived, |d| d.calories));
    let calcium = min_max(&column(derived, |d| d.calcium_per_kcal));
    let iron = min_max(&column(derived, |d| d.iron_per_kcal));
    let vitamin_c = min_max(&column(derived, |d| d.vitamin_c_per_kcal));
    let polyphenols = min_max(&column(derived, |d| d.polyphenols_per_kcal));
    let cholesterol = min_max(&column(derived, |d| d.cholesterol));

    (0..derived.len())
        .map(|i| NormalizedMetrics {
            protein: protein[i],
            fiber: fiber[i],
            low_sugar: low_sugar[i],
            low_sodium: low_sodium[i],
            low_saturated_fat: low_saturated_fat[i],
            nutrition_density: nutrition_density[i],
            low_calorie: 1.0 - high_calorie[i],
            high_calorie: high_calorie[i],
            calcium: calcium[i],
            iron: iron[i],
            vitamin_c: vitamin_c[i],
            polyphenols: polyphenols[i],
            cholesterol: cholesterol[i],
        })
        .collect()
}
