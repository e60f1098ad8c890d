use food_recommender_rs::metabolism::{
    calc_bmr, calc_tdee, nutrient_targets, ActivityLevel, BodyMetrics, Gender,
};
use food_recommender_rs::models::Goal;

fn reference_body() -> BodyMetrics {
    BodyMetrics {
        weight_kg: 70.0,
        height_cm: 175.0,
        age: 30,
        gender: Gender::Male,
        activity: ActivityLevel::Moderate,
    }
}

#[test]
fn test_bmr_and_tdee() {
    let body = reference_body();
    assert_eq!(body.bmr(), 1648.75);
    assert_eq!(body.tdee(), 1648.75 * 1.55);

    // Same body, female constant.
    assert_eq!(calc_bmr(70.0, 175.0, 30, Gender::Female), 1482.75);
    assert_eq!(calc_tdee(1000.0, ActivityLevel::Sedentary), 1200.0);
}

#[test]
fn test_targets_per_goal() {
    let body = reference_body();

    let maintenance = body.targets(Goal::Maintenance);
    assert_eq!(maintenance.calories, 2556.0);
    assert_eq!(maintenance.protein_g, 84.0);
    assert_eq!(maintenance.fat_g, 71.0);
    assert_eq!(maintenance.carbs_g, 395.2);

    assert_eq!(body.targets(Goal::Loss).calories, 2056.0);

    let gain = body.targets(Goal::Gain);
    assert_eq!(gain.calories, 2856.0);
    assert_eq!(gain.protein_g, 112.0);

    let muscle = body.targets(Goal::Muscle);
    assert_eq!(muscle.calories, maintenance.calories);
    assert_eq!(muscle.protein_g, 126.0);
}

#[test]
fn test_loss_never_drops_below_floor() {
    let body = BodyMetrics {
        weight_kg: 45.0,
        height_cm: 150.0,
        age: 60,
        gender: Gender::Female,
        activity: ActivityLevel::Sedentary,
    };
    assert!(body.tdee() - 500.0 < 1200.0);
    assert_eq!(body.targets(Goal::Loss).calories, 1200.0);
}

#[test]
fn test_carbs_never_negative() {
    // Protein alone exceeds the calorie budget.
    let targets = nutrient_targets(1000.0, Goal::Loss, 300.0);
    assert_eq!(targets.calories, 1200.0);
    assert_eq!(targets.protein_g, 360.0);
    assert_eq!(targets.fat_g, 33.3);
    assert_eq!(targets.carbs_g, 0.0);
}

#[test]
fn test_unknown_labels_fall_back() {
    assert_eq!(ActivityLevel::parse("couch"), ActivityLevel::Moderate);
    assert_eq!(ActivityLevel::parse(" VERY_ACTIVE "), ActivityLevel::VeryActive);
    assert_eq!(Gender::parse("M"), Gender::Male);
    assert_eq!(Gender::parse("other"), Gender::Female);
    assert_eq!(Goal::parse("bulk"), Goal::Maintenance);
}
