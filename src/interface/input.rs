use crate::cli::BodyArgs;
use crate::error::{RecError, Result};
use crate::interface::prompts::{
    prompt_activity, prompt_age, prompt_gender, prompt_goal, prompt_text,
};
use crate::metabolism::{ActivityLevel, BodyMetrics, Gender, DEFAULT_AGE, MAX_AGE};
use crate::models::Goal;

/// Parse a strictly positive number (weight, height).
pub fn require_positive(field: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(RecError::InvalidInput(format!(
            "{} must be a positive number, got '{}'",
            field,
            raw.trim()
        ))),
    }
}

/// Lenient age: blank, unparsable or outside 1..=120 falls back to 30.
pub fn resolve_age(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|age| (1..=MAX_AGE as i64).contains(age))
        .map(|age| age as u32)
        .unwrap_or(DEFAULT_AGE)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn missing(field: &str) -> RecError {
    RecError::InvalidInput(format!(
        "Please fill in all required fields ({} is missing)",
        field
    ))
}

/// Turn raw body arguments into validated metrics and a goal.
///
/// Missing required values are prompted for when `interactive`, otherwise they
/// are an error. Age is never required.
pub fn collect_body_metrics(args: &BodyArgs, interactive: bool) -> Result<(BodyMetrics, Goal)> {
    let weight_raw = match non_blank(&args.weight) {
        Some(w) => w.to_string(),
        None if interactive => prompt_text("Weight (kg)")?,
        None => return Err(missing("weight")),
    };
    let height_raw = match non_blank(&args.height) {
        Some(h) => h.to_string(),
        None if interactive => prompt_text("Height (cm)")?,
        None => return Err(missing("height")),
    };

    let weight_kg = require_positive("Weight", &weight_raw)?;
    let height_cm = require_positive("Height", &height_raw)?;

    let age = match non_blank(&args.age) {
        Some(a) => resolve_age(Some(a)),
        None if interactive => resolve_age(Some(&prompt_age()?)),
        None => DEFAULT_AGE,
    };

    let gender = match non_blank(&args.gender) {
        Some(g) => Gender::parse(g),
        None if interactive => prompt_gender()?,
        None => return Err(missing("gender")),
    };
    let activity = match non_blank(&args.activity) {
        Some(a) => ActivityLevel::parse(a),
        None if interactive => prompt_activity()?,
        None => return Err(missing("activity")),
    };
    let goal = match non_blank(&args.goal) {
        Some(g) => Goal::parse(g),
        None if interactive => prompt_goal()?,
        None => return Err(missing("goal")),
    };

    Ok((
        BodyMetrics {
            weight_kg,
            height_cm,
            age,
            gender,
            activity,
        },
        goal,
    ))
}
