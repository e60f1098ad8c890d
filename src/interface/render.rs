use serde::Serialize;

use crate::error::Result;
use crate::metabolism::{BodyMetrics, Targets};
use crate::models::{Goal, Nutrient, RecommendationReport};
use crate::table::NutrientTable;

/// Capitalize the first letter of a label ("loss" -> "Loss").
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display BMR, TDEE and the daily targets.
pub fn display_targets(metrics: &BodyMetrics, goal: Goal, targets: &Targets) {
    println!();
    println!("=== Daily Targets ({}) ===", capitalize(goal.as_str()));
    println!();
    println!("BMR:      {:>7.0} kcal", metrics.bmr());
    println!("TDEE:     {:>7.0} kcal", metrics.tdee());
    println!("Calories: {:>7.0} kcal", targets.calories);
    println!("Protein:  {:>7.1} g", targets.protein_g);
    println!("Fat:      {:>7.1} g", targets.fat_g);
    println!("Carbs:    {:>7.1} g", targets.carbs_g);
    println!();
}

/// Display recommendations in a formatted table.
pub fn display_recommendations(report: &RecommendationReport) {
    if report.results.is_empty() {
        println!("No foods matched (empty dataset or nothing passes the dietary filter).");
        return;
    }

    println!(
        "=== Top {} foods for goal: {} ===",
        report.results.len(),
        capitalize(report.goal.as_str())
    );
    println!();

    // Find max food name length for alignment
    let max_name_len = report
        .results
        .iter()
        .map(|r| r.food.len())
        .max()
        .unwrap_or(10)
        .max(4);

    println!(
        "{:>3}  {:<width$}  {:>8}  {:>8}  {:>8}  {:>8}  {:>9}",
        "#",
        "Food",
        "kcal",
        "Protein",
        "Fiber",
        "Sugars",
        "Sodium",
        width = max_name_len
    );

    for (i, rec) in report.results.iter().enumerate() {
        let group = rec
            .food_group
            .as_deref()
            .map(|g| format!("  [{}]", g))
            .unwrap_or_default();

        println!(
            "{:>3}. {:<width$}  {:>8.2}  {:>8.3}  {:>8.3}  {:>8.3}  {:>9.3}{}",
            i + 1,
            rec.food,
            rec.calories,
            rec.protein,
            rec.fiber,
            rec.sugar,
            rec.sodium,
            group,
            width = max_name_len
        );
    }

    println!();
}

/// Display a summary of the loaded dataset.
pub fn display_table_summary(table: &NutrientTable) {
    println!();
    println!("=== Dataset ({} foods) ===", table.len());
    println!();
    println!("Food column:     {}", table.food_column());
    println!(
        "Category column: {}",
        table.category_column().unwrap_or("(none)")
    );

    let present: Vec<&str> = table.columns().iter().map(Nutrient::label).collect();
    let missing: Vec<&str> = table.columns().missing().map(Nutrient::label).collect();

    println!("Nutrients:       {}", present.join(", "));
    if !missing.is_empty() {
        println!("Absent (zero):   {}", missing.join(", "));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("muscle"), "Muscle");
        assert_eq!(capitalize(""), "");
    }
}
