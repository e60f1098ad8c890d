use tracing::debug;

use crate::models::{FoodRow, Goal, Nutrient};
use crate::recommender::constants::{CHOLESTEROL_PENALTY, FOCUS_BOOST_WEIGHT};
use crate::recommender::focus::NutrientFocus;
use crate::recommender::goals::{weights_for, GoalWeights};
use crate::recommender::metrics::{derive_all, DerivedMetrics};
use crate::recommender::normalize::{normalize_all, NormalizedMetrics};
use crate::table::NutrientTable;

/// A food with everything computed for one scoring pass.
///
/// Borrows the baseline row; all per-request data lives here.
#[derive(Debug, Clone)]
pub struct ScoredRow<'a> {
    pub food: &'a FoodRow,
    /// Position of the row in the baseline table.
    pub index: usize,
    pub derived: DerivedMetrics,
    pub normalized: NormalizedMetrics,
    pub score: f64,
}

/// Weighted sum of the normalized signals for one food.
///
/// Formula: Σ(weight · signal) + focus boost − cholesterol penalty
pub fn score_metrics(
    metrics: &NormalizedMetrics,
    weights: &GoalWeights,
    focus: NutrientFocus,
    penalize_cholesterol: bool,
) -> f64 {
    let mut score = weights.protein * metrics.protein
        + weights.fiber * metrics.fiber
        + weights.low_sugar * metrics.low_sugar
        + weights.low_sodium * metrics.low_sodium
        + weights.low_saturated_fat * metrics.low_saturated_fat
        + weights.nutrition_density * metrics.nutrition_density
        + weights.low_calorie * metrics.low_calorie
        + weights.high_calorie * metrics.high_calorie
        + weights.vitamin_c * metrics.vitamin_c
        + weights.iron * metrics.iron
        + weights.polyphenols * metrics.polyphenols;

    if let Some(signal) = focus.signal(metrics) {
        score += FOCUS_BOOST_WEIGHT * signal;
    }

    if penalize_cholesterol {
        score -= CHOLESTEROL_PENALTY * metrics.cholesterol;
    }

    score
}

/// Score every food in the table and order them best first.
///
/// Normalization runs over the whole table. Ties keep table order. Never
/// fails: absent columns read as zero and flat columns normalize to 0.5.
pub fn score_foods(table: &NutrientTable, goal: Goal, focus: NutrientFocus) -> Vec<ScoredRow<'_>> {
    let rows = table.rows();
    let derived = derive_all(rows);
    let normalized = normalize_all(&derived);

    let weights = weights_for(goal);
    let penalize_cholesterol = table.has_column(Nutrient::Cholesterol);

    debug!(
        "Scoring {} foods for goal={} focus={} cholesterol_penalty={}",
        rows.len(),
        goal,
        focus,
        penalize_cholesterol
    );

    let mut scored: Vec<ScoredRow> = rows
        .iter()
        .zip(derived)
        .zip(normalized)
        .enumerate()
        .map(|(index, ((food, derived), normalized))| {
            let score = score_metrics(&normalized, weights, focus, penalize_cholesterol);
            ScoredRow {
                food,
                index,
                derived,
                normalized,
                score,
            }
        })
        .collect();

    // Stable: equal scores keep their table order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    scored
}
