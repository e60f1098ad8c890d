#[macro_use]
extern crate assert_float_eq;

use std::io::Write;

use food_recommender_rs::metabolism::Targets;
use food_recommender_rs::models::Goal;
use food_recommender_rs::recommender::{
    DietPreference, NutrientFocus, RecommendRequest, Recommender,
};
use food_recommender_rs::table::read_table;
use tempfile::NamedTempFile;

const SCENARIO_CSV: &str = "\
Food,Caloric Value,Protein,Dietary Fiber,Sugars
A,100,20,5,1
B,200,10,2,10
C,150,15,8,0
";

const VARIANT_CSV: &str = "\
Food Name,Calories,Protein,Fiber,Sugar,Iron,Vitamin C,Food Group
Spinach,23,2.9,2.2,0.4,2.7,28.1,Vegetables
Lentils,116,9.0,7.9,1.8,3.3,1.5,Legumes
Chicken Breast,165,31.0,0,0,1.0,0,Meat
White Rice,130,2.7,0.4,0.1,0.2,0,Grains
Boiled Egg,155,12.6,0,1.1,1.2,0,Eggs
Mystery Bar,210,4.123456,1.0,18.0,0.5,0,
";

fn recommender_from(csv: &str) -> Recommender {
    Recommender::new(read_table(csv.as_bytes()).unwrap())
}

fn names(recs: &[food_recommender_rs::Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.food.as_str()).collect()
}

#[test]
fn test_loss_scenario_prefers_a_and_c_over_b() {
    let recommender = recommender_from(SCENARIO_CSV);
    let request = RecommendRequest::from_labels(Some("loss"), 2, None, None);
    let results = recommender.recommend(&Targets::default(), &request);

    assert_eq!(results.len(), 2);
    let picked = names(&results);
    assert!(picked.contains(&"A"));
    assert!(picked.contains(&"C"));
    assert!(!picked.contains(&"B"));
}

#[test]
fn test_results_follow_internal_score_order_for_every_goal() {
    let recommender = recommender_from(VARIANT_CSV);

    for label in ["loss", "gain", "muscle", "maintenance", "something-else"] {
        let request = RecommendRequest::from_labels(Some(label), 4, None, None);
        let results = recommender.recommend(&Targets::default(), &request);
        assert!(results.len() <= 4);

        let scored = recommender.score_foods(request.goal, request.nutrient_focus);
        for pair in scored.windows(2) {
            assert!(pair[0].score >= pair[1].score, "{label}: scores not descending");
        }
        let expected: Vec<&str> = scored
            .iter()
            .take(4)
            .map(|s| s.food.name.as_str())
            .collect();
        assert_eq!(names(&results), expected, "{label}: order mismatch");
    }
}

#[test]
fn test_muscle_top_pick_is_at_least_as_protein_dense_as_loss() {
    let csv = "\
Food,Caloric Value,Protein,Dietary Fiber,Sugars,Sodium
Light,100,10,0,0,0
Heavy,300,60,0,0,0
Tiny,50,2,0,0,0
";
    let recommender = recommender_from(csv);
    let top = |goal: Goal| {
        recommender
            .score_foods(goal, NutrientFocus::None)
            .first()
            .map(|s| s.derived.protein_per_kcal)
            .unwrap()
    };

    assert!(top(Goal::Muscle) >= top(Goal::Loss));
}

#[test]
fn test_recommend_is_idempotent() {
    let recommender = recommender_from(VARIANT_CSV);
    let request = RecommendRequest::new(Goal::Gain, 5).with_focus(NutrientFocus::HighVitaminC);

    let first = recommender.recommend(&Targets::default(), &request);
    let second = recommender.recommend(&Targets::default(), &request);
    assert_eq!(first, second);
}

#[test]
fn test_focus_changes_the_winner() {
    let csv = "\
Food,Caloric Value,Protein,Iron
Steak,200,50,2
Spinach,25,5,3
Bread,250,8,1
";
    let recommender = recommender_from(csv);

    let plain = RecommendRequest::new(Goal::Muscle, 1);
    let focused = plain.clone().with_focus(NutrientFocus::parse("High Iron"));

    let without = recommender.recommend(&Targets::default(), &plain);
    let with = recommender.recommend(&Targets::default(), &focused);

    assert_eq!(names(&without), vec!["Steak"]);
    assert_eq!(names(&with), vec!["Spinach"]);
}

#[test]
fn test_dietary_filter_end_to_end() {
    let recommender = recommender_from(VARIANT_CSV);

    let veg = RecommendRequest::new(Goal::Maintenance, 10).with_food_pref(DietPreference::Veg);
    let veg_names = recommender.recommend(&Targets::default(), &veg);
    let veg_names = names(&veg_names);
    assert_eq!(veg_names.len(), 4);
    assert!(!veg_names.contains(&"Chicken Breast"));
    assert!(!veg_names.contains(&"Boiled Egg"));
    // No food group counts as vegetarian.
    assert!(veg_names.contains(&"Mystery Bar"));

    let non_veg =
        RecommendRequest::from_labels(Some("maintenance"), 10, Some("NON-VEG"), Some("None"));
    let non_veg = recommender.recommend(&Targets::default(), &non_veg);
    let mut non_veg_names = names(&non_veg);
    non_veg_names.sort();
    assert_eq!(non_veg_names, vec!["Boiled Egg", "Chicken Breast"]);
}

#[test]
fn test_numeric_fields_are_rounded() {
    let recommender = recommender_from(VARIANT_CSV);
    let request = RecommendRequest::new(Goal::Gain, 10);
    let results = recommender.recommend(&Targets::default(), &request);

    let bar = results.iter().find(|r| r.food == "Mystery Bar").unwrap();
    assert_float_absolute_eq!(bar.protein, 4.123, 1e-12);
    assert_eq!(bar.food_group, None);

    let json = serde_json::to_value(&results).unwrap();
    for record in json.as_array().unwrap() {
        assert!(record.get("score").is_none());
        assert!(record.get("Caloric Value").is_some());
    }
}

#[test]
fn test_shared_table_across_threads() {
    let recommender = recommender_from(VARIANT_CSV);
    let request = RecommendRequest::new(Goal::Loss, 3).with_food_pref(DietPreference::Veg);
    let expected = recommender.recommend(&Targets::default(), &request);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let recommender = recommender.clone();
                let request = request.clone();
                scope.spawn(move || recommender.recommend(&Targets::default(), &request))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });

    let copy = recommender.clone();
    assert!(recommender.table().shares_rows_with(copy.table()));
}

#[test]
fn test_load_from_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SCENARIO_CSV.as_bytes()).unwrap();

    let recommender = Recommender::from_path(file.path()).unwrap();
    assert_eq!(recommender.table().len(), 3);

    let results = recommender.recommend(&Targets::default(), &RecommendRequest::default());
    assert_eq!(results.len(), 3);
}

#[test]
fn test_sparse_dataset_still_ranks() {
    // Only names and calories: every other signal is flat.
    let csv = "Food,Calories\nSoup,80\nStew,240\nBread,\n";
    let recommender = recommender_from(csv);

    let loss = recommender.recommend(&Targets::default(), &RecommendRequest::new(Goal::Loss, 3));
    assert_eq!(names(&loss)[0], "Bread");

    let gain = recommender.recommend(&Targets::default(), &RecommendRequest::new(Goal::Gain, 3));
    assert_eq!(names(&gain)[0], "Stew");
}
