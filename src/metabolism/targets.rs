use serde::{Deserialize, Serialize};

use crate::metabolism::constants::*;
use crate::models::Goal;
use crate::recommender::round_to;

/// Biological sex used by the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// "m" / "male" (any case) is male; everything else uses the female constant.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "m" | "male" => Gender::Male,
            _ => Gender::Female,
        }
    }
}

/// Daily activity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Unknown labels fall back to moderate.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Moderate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Multiplier applied to BMR to get TDEE.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Already-validated body metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity: ActivityLevel,
}

/// Daily calorie and macro targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Targets {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

/// Basal metabolic rate via Mifflin-St Jeor.
pub fn calc_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + BMR_MALE_OFFSET,
        Gender::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Total daily energy expenditure.
pub fn calc_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.multiplier()
}

/// Macro targets for a goal.
///
/// Calories are rounded to whole kcal, grams to one decimal.
pub fn nutrient_targets(tdee: f64, goal: Goal, weight_kg: f64) -> Targets {
    let calories = match goal {
        Goal::Loss => (tdee - LOSS_DEFICIT_KCAL).max(LOSS_MIN_KCAL),
        Goal::Gain => tdee + GAIN_SURPLUS_KCAL,
        Goal::Maintenance | Goal::Muscle => tdee,
    };

    let protein_per_kg = match goal {
        Goal::Muscle => PROTEIN_G_PER_KG_MUSCLE,
        Goal::Gain => PROTEIN_G_PER_KG_GAIN,
        Goal::Maintenance | Goal::Loss => PROTEIN_G_PER_KG_DEFAULT,
    };
    let protein_g = weight_kg * protein_per_kg;

    let fat_g = (FAT_CALORIE_SHARE * calories) / KCAL_PER_G_FAT;
    let carbs_kcal = calories - (protein_g * KCAL_PER_G_PROTEIN + fat_g * KCAL_PER_G_FAT);
    let carbs_g = (carbs_kcal / KCAL_PER_G_CARBS).max(0.0);

    Targets {
        calories: calories.round(),
        protein_g: round_to(protein_g, 1),
        fat_g: round_to(fat_g, 1),
        carbs_g: round_to(carbs_g, 1),
    }
}

impl BodyMetrics {
    pub fn bmr(&self) -> f64 {
        calc_bmr(self.weight_kg, self.height_cm, self.age, self.gender)
    }

    pub fn tdee(&self) -> f64 {
        calc_tdee(self.bmr(), self.activity)
    }

    pub fn targets(&self, goal: Goal) -> Targets {
        nutrient_targets(self.tdee(), goal, self.weight_kg)
    }
}
