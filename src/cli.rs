use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_DATA_PATH;
use crate::recommender::DEFAULT_TOP_K;

/// FoodRecommender: ranks foods by how well they fit a goal derived from your body metrics.
#[derive(Parser, Debug)]
#[command(name = "food-recommender")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the nutrient dataset (CSV).
    #[arg(short, long, env = "FOOD_DATA_PATH", default_value = DEFAULT_DATA_PATH, global = true)]
    pub data: PathBuf,

    /// Never prompt; fail when a required value is missing.
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend foods for a goal.
    Recommend(RecommendArgs),

    /// Show BMR, TDEE and daily macro targets.
    Targets {
        #[command(flatten)]
        body: BodyArgs,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Summarize the loaded dataset.
    Inspect,
}

impl Default for Command {
    fn default() -> Self {
        Command::Recommend(RecommendArgs::default())
    }
}

/// Body metrics and goal, as typed by the user. Missing values may be prompted for.
#[derive(Args, Debug, Clone, Default)]
pub struct BodyArgs {
    /// Body weight in kg.
    #[arg(long)]
    pub weight: Option<String>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<String>,

    /// Age in years (defaults to 30 when empty or implausible).
    #[arg(long)]
    pub age: Option<String>,

    /// male / female.
    #[arg(long)]
    pub gender: Option<String>,

    /// sedentary, light, moderate, active or very_active.
    #[arg(long)]
    pub activity: Option<String>,

    /// loss, gain, muscle or maintenance.
    #[arg(long)]
    pub goal: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    #[command(flatten)]
    pub body: BodyArgs,

    /// Dietary preference: veg or non-veg.
    #[arg(long)]
    pub pref: Option<String>,

    /// Nutrient focus, e.g. "High Protein", "Low Sugar", "High Iron".
    #[arg(long)]
    pub focus: Option<String>,

    /// Number of foods to return.
    #[arg(short = 'k', long, env = "FOOD_TOP_K", default_value_t = DEFAULT_TOP_K, value_parser = parse_top_k)]
    pub top_k: usize,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl Default for RecommendArgs {
    fn default() -> Self {
        Self {
            body: BodyArgs::default(),
            pref: None,
            focus: None,
            top_k: DEFAULT_TOP_K,
            json: false,
        }
    }
}

/// Result count must be a positive integer.
pub fn parse_top_k(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(k) => Ok(k),
        Err(_) => Err(format!("'{}' is not a positive integer", raw)),
    }
}
