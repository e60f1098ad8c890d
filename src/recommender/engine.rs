use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::metabolism::Targets;
use crate::models::{Goal, Recommendation, RecommendationReport};
use crate::recommender::constants::DEFAULT_TOP_K;
use crate::recommender::filter::{select_top, DietPreference};
use crate::recommender::focus::NutrientFocus;
use crate::recommender::scoring::{score_foods, ScoredRow};
use crate::table::{load_table, NutrientTable};

/// Parameters of one recommendation request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendRequest {
    pub goal: Goal,
    /// Maximum number of results; expected to be at least 1.
    pub top_k: usize,
    pub food_pref: Option<DietPreference>,
    pub nutrient_focus: NutrientFocus,
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self::new(Goal::Maintenance, DEFAULT_TOP_K)
    }
}

impl RecommendRequest {
    pub fn new(goal: Goal, top_k: usize) -> Self {
        Self {
            goal,
            top_k,
            food_pref: None,
            nutrient_focus: NutrientFocus::None,
        }
    }

    /// Build a request from raw labels, applying every fallback
    /// (maintenance goal, no filter, no focus).
    pub fn from_labels(
        goal: Option<&str>,
        top_k: usize,
        food_pref: Option<&str>,
        nutrient_focus: Option<&str>,
    ) -> Self {
        Self {
            goal: Goal::from(goal),
            top_k,
            food_pref: food_pref.and_then(DietPreference::parse),
            nutrient_focus: nutrient_focus.map(NutrientFocus::parse).unwrap_or_default(),
        }
    }

    pub fn with_food_pref(mut self, pref: DietPreference) -> Self {
        self.food_pref = Some(pref);
        self
    }

    pub fn with_focus(mut self, focus: NutrientFocus) -> Self {
        self.nutrient_focus = focus;
        self
    }
}

/// Ranks foods from a shared, read-only nutrient table.
///
/// Cheap to clone and safe to share across threads; every call recomputes
/// from the baseline and keeps nothing between requests.
#[derive(Debug, Clone)]
pub struct Recommender {
    table: NutrientTable,
}

impl Recommender {
    pub fn new(table: NutrientTable) -> Self {
        Self { table }
    }

    /// Load the dataset once. Fails only on unreadable files or a header
    /// without any usable food-name column.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(load_table(path)?))
    }

    pub fn table(&self) -> &NutrientTable {
        &self.table
    }

    /// Full ranking, best first. Exposed for inspection and testing; scores
    /// never leave the crate through `recommend`.
    pub fn score_foods(&self, goal: Goal, focus: NutrientFocus) -> Vec<ScoredRow<'_>> {
        score_foods(&self.table, goal, focus)
    }

    /// Top foods for a request, best first, at most `top_k` long.
    ///
    /// `targets` is accepted for the caller's display needs only.
    // TODO: bias scoring toward the remaining macro budget in `targets`
    // (e.g. penalize foods far from the protein/calorie split).
    pub fn recommend(&self, _targets: &Targets, request: &RecommendRequest) -> Vec<Recommendation> {
        debug!(
            "Recommend: goal={} top_k={} pref={:?} focus={}",
            request.goal, request.top_k, request.food_pref, request.nutrient_focus
        );

        let scored = self.score_foods(request.goal, request.nutrient_focus);
        let results = select_top(&scored, request.food_pref, request.top_k);

        info!(
            "Returning {} of {} foods for goal '{}'",
            results.len(),
            scored.len(),
            request.goal
        );
        results
    }

    /// Recommendations bundled with the goal and targets for rendering.
    pub fn report(&self, targets: Targets, request: &RecommendRequest) -> RecommendationReport {
        RecommendationReport {
            goal: request.goal,
            targets,
            results: self.recommend(&targets, request),
        }
    }
}
