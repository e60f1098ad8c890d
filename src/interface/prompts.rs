use dialoguer::{Input, Select};

use crate::error::Result;
use crate::metabolism::{ActivityLevel, Gender};
use crate::models::Goal;

/// Prompt for a free-form value; validation happens in the caller.
pub fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(input)
}

/// Prompt for age, defaulting to 30.
pub fn prompt_age() -> Result<String> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let options = ["male", "female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options[..])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        Gender::Male
    } else {
        Gender::Female
    })
}

/// Prompt for activity level.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|a| format!("{} (x{})", a.as_str(), a.multiplier()))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2) // moderate
        .interact()?;

    Ok(ActivityLevel::ALL
        .get(selection)
        .copied()
        .unwrap_or_default())
}

/// Prompt for goal.
pub fn prompt_goal() -> Result<Goal> {
    let options: Vec<&str> = Goal::ALL.iter().map(|g| g.as_str()).collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Goal::ALL.get(selection).copied().unwrap_or_default())
}
