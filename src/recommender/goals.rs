use serde::Serialize;

use crate::models::Goal;
use crate::recommender::constants::GOAL_WEIGHTS;

/// Weight per scoring term. Every weight is non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalWeights {
    pub protein: f64,
    pub fiber: f64,
    pub low_sugar: f64,
    pub low_sodium: f64,
    pub low_saturated_fat: f64,
    pub nutrition_density: f64,
    pub low_calorie: f64,
    pub high_calorie: f64,
    pub vitamin_c: f64,
    pub iron: f64,
    pub polyphenols: f64,
}

impl GoalWeights {
    /// (term name, weight) pairs, in scoring order.
    pub fn terms(&self) -> [(&'static str, f64); 11] {
        [
            ("protein", self.protein),
            ("fiber", self.fiber),
            ("low_sugar", self.low_sugar),
            ("low_sodium", self.low_sodium),
            ("low_saturated_fat", self.low_saturated_fat),
            ("nutrition_density", self.nutrition_density),
            ("low_calorie", self.low_calorie),
            ("high_calorie", self.high_calorie),
            ("vitamin_c", self.vitamin_c),
            ("iron", self.iron),
            ("polyphenols", self.polyphenols),
        ]
    }
}

/// Weights for a goal.
pub fn weights_for(goal: Goal) -> &'static GoalWeights {
    GOAL_WEIGHTS
        .iter()
        .find(|(g, _)| *g == goal)
        .map(|(_, w)| w)
        .unwrap_or(&GOAL_WEIGHTS[0].1)
}

/// Weights for a goal label; unknown or empty labels resolve to maintenance.
pub fn select_weights(label: Option<&str>) -> &'static GoalWeights {
    weights_for(Goal::from(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_goal_has_weights() {
        for goal in Goal::ALL {
            let weights = weights_for(goal);
            assert!(weights.terms().iter().all(|(_, w)| *w >= 0.0));
        }
    }

    #[test]
    fn test_unknown_goal_uses_maintenance() {
        assert_eq!(select_weights(Some("keto")), weights_for(Goal::Maintenance));
        assert_eq!(select_weights(None), weights_for(Goal::Maintenance));
        assert_eq!(select_weights(Some("MUSCLE")), weights_for(Goal::Muscle));
    }

    #[test]
    fn test_muscle_weights_protein_highest() {
        let muscle = weights_for(Goal::Muscle).protein;
        for goal in [Goal::Loss, Goal::Gain, Goal::Maintenance] {
            assert!(muscle > weights_for(goal).protein);
        }
    }

    #[test]
    fn test_calorie_direction_by_goal() {
        assert_eq!(weights_for(Goal::Loss).high_calorie, 0.0);
        assert!(weights_for(Goal::Loss).low_calorie > 0.0);
        assert_eq!(weights_for(Goal::Gain).low_calorie, 0.0);
        assert!(weights_for(Goal::Gain).high_calorie > 0.0);
    }
}
