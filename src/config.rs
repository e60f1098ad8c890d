use std::io::IsTerminal;
use std::path::PathBuf;

use crate::cli::Cli;

/// Dataset read when neither `--data` nor `FOOD_DATA_PATH` is given.
pub const DEFAULT_DATA_PATH: &str = "data/food_nutrition.csv";

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "food_recommender_rs=warn";

/// Runtime settings resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_path: PathBuf,
    /// Whether missing inputs may be prompted for.
    pub interactive: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_path: cli.data.clone(),
            interactive: !cli.no_input && std::io::stdin().is_terminal(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            interactive: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_input_disables_prompts() {
        let cli = Cli::try_parse_from(["food-recommender", "--no-input", "-d", "x.csv", "inspect"])
            .unwrap();
        let config = Config::from_cli(&cli);
        assert!(!config.interactive);
        assert_eq!(config.data_path, PathBuf::from("x.csv"));
    }
}
