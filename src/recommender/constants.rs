use crate::models::Goal;
use crate::recommender::goals::GoalWeights;

/// Value every row receives when a column cannot discriminate (empty or constant).
pub const NEUTRAL_NORMALIZED: f64 = 0.5;

/// Weight of the optional nutrient-focus boost.
pub const FOCUS_BOOST_WEIGHT: f64 = 1.0;

/// Penalty applied to normalized cholesterol when the dataset has that column.
pub const CHOLESTEROL_PENALTY: f64 = 0.2;

/// Category substrings that mark a food as non-vegetarian.
pub const NON_VEG_TERMS: [&str; 3] = ["meat", "fish", "egg"];

/// Decimal places kept on numeric output fields.
pub const ROUND_DECIMALS: i32 = 3;

/// Number of recommendations returned when the caller does not say.
pub const DEFAULT_TOP_K: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Hand-tuned goal weights
// ─────────────────────────────────────────────────────────────────────────────

pub const MAINTENANCE_WEIGHTS: GoalWeights = GoalWeights {
    protein: 1.5,
    fiber: 1.0,
    low_sugar: 0.8,
    low_sodium: 0.6,
    low_saturated_fat: 0.8,
    nutrition_density: 1.0,
    low_calorie: 0.6,
    high_calorie: 0.6,
    vitamin_c: 0.4,
    iron: 0.4,
    polyphenols: 0.3,
};

pub const LOSS_WEIGHTS: GoalWeights = GoalWeights {
    protein: 1.8,
    fiber: 2.0,
    low_sugar: 1.0,
    low_sodium: 0.8,
    low_saturated_fat: 0.8,
    nutrition_density: 1.0,
    low_calorie: 1.5,
    high_calorie: 0.0,
    vitamin_c: 0.4,
    iron: 0.3,
    polyphenols: 0.4,
};

pub const GAIN_WEIGHTS: GoalWeights = GoalWeights {
    protein: 1.2,
    fiber: 0.6,
    low_sugar: 0.3,
    low_sodium: 0.5,
    low_saturated_fat: 0.4,
    nutrition_density: 0.8,
    low_calorie: 0.0,
    high_calorie: 1.5,
    vitamin_c: 0.2,
    iron: 0.3,
    polyphenols: 0.2,
};

pub const MUSCLE_WEIGHTS: GoalWeights = GoalWeights {
    protein: 3.0,
    fiber: 0.8,
    low_sugar: 0.6,
    low_sodium: 0.6,
    low_saturated_fat: 0.6,
    nutrition_density: 1.0,
    low_calorie: 0.0,
    high_calorie: 0.2,
    vitamin_c: 0.3,
    iron: 0.5,
    polyphenols: 0.2,
};

/// Goal lookup table. The first entry is the fallback.
pub static GOAL_WEIGHTS: [(Goal, GoalWeights); 4] = [
    (Goal::Maintenance, MAINTENANCE_WEIGHTS),
    (Goal::Loss, LOSS_WEIGHTS),
    (Goal::Gain, GAIN_WEIGHTS),
    (Goal::Muscle, MUSCLE_WEIGHTS),
];
