pub mod constants;
pub mod engine;
pub mod filter;
pub mod focus;
pub mod goals;
pub mod metrics;
pub mod normalize;
pub mod scoring;

pub use constants::*;
pub use engine::{RecommendRequest, Recommender};
pub use filter::{is_non_veg, project, round_to, select_top, DietPreference};
pub use focus::NutrientFocus;
pub use goals::{select_weights, weights_for, GoalWeights};
pub use metrics::{derive_all, per_kcal, safe_div, DerivedMetrics};
pub use normalize::{inverted, min_max, normalize_all, NormalizedMetrics};
pub use scoring::{score_foods, score_metrics, ScoredRow};
