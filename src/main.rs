use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use food_recommender_rs::cli::{BodyArgs, Cli, Command, RecommendArgs};
use food_recommender_rs::config::{Config, DEFAULT_LOG_FILTER};
use food_recommender_rs::error::Result;
use food_recommender_rs::interface::{
    collect_body_metrics, display_recommendations, display_table_summary, display_targets,
    print_json,
};
use food_recommender_rs::recommender::{DietPreference, NutrientFocus, RecommendRequest, Recommender};
use food_recommender_rs::table::load_table;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output stays machine-readable.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    debug!("Resolved config: {:?}", config);

    match cli.command.unwrap_or_default() {
        Command::Recommend(args) => cmd_recommend(&config, &args),
        Command::Targets { body, json } => cmd_targets(&config, &body, json),
        Command::Inspect => cmd_inspect(&config),
    }
}

/// Rank foods for the user's goal and show the best ones.
fn cmd_recommend(config: &Config, args: &RecommendArgs) -> Result<()> {
    let recommender = Recommender::from_path(&config.data_path)?;

    let (metrics, goal) = collect_body_metrics(&args.body, config.interactive)?;
    let targets = metrics.targets(goal);

    let mut request = RecommendRequest::new(goal, args.top_k);
    if let Some(pref) = args.pref.as_deref().and_then(DietPreference::parse) {
        request = request.with_food_pref(pref);
    }
    if let Some(focus) = args.focus.as_deref() {
        request = request.with_focus(NutrientFocus::parse(focus));
    }

    let report = recommender.report(targets, &request);

    if args.json {
        return print_json(&report);
    }

    display_targets(&metrics, goal, &report.targets);
    display_recommendations(&report);
    Ok(())
}

/// Show BMR, TDEE and macro targets only.
fn cmd_targets(config: &Config, body: &BodyArgs, json: bool) -> Result<()> {
    let (metrics, goal) = collect_body_metrics(body, config.interactive)?;
    let targets = metrics.targets(goal);

    if json {
        return print_json(&serde_json::json!({
            "goal": goal,
            "bmr": metrics.bmr().round(),
            "tdee": metrics.tdee().round(),
            "targets": targets,
        }));
    }

    display_targets(&metrics, goal, &targets);
    Ok(())
}

/// Summarize the dataset columns the loader recognised.
fn cmd_inspect(config: &Config) -> Result<()> {
    let table = load_table(&config.data_path)?;
    display_table_summary(&table);
    Ok(())
}
