use std::fmt;

use serde::{Deserialize, Serialize};

/// Nutritional goal driving both macro targets and food weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintenance,
    Loss,
    Gain,
    Muscle,
}

impl Goal {
    pub const ALL: [Goal; 4] = [Goal::Maintenance, Goal::Loss, Goal::Gain, Goal::Muscle];

    /// Parse a goal label (case-insensitive).
    ///
    /// Anything unrecognised, including an empty string, falls back to maintenance.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "loss" => Goal::Loss,
            "gain" => Goal::Gain,
            "muscle" => Goal::Muscle,
            _ => Goal::Maintenance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::Maintenance => "maintenance",
            Goal::Loss => "loss",
            Goal::Gain => "gain",
            Goal::Muscle => "muscle",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Option<&str>> for Goal {
    fn from(label: Option<&str>) -> Self {
        label.map(Goal::parse).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Goal::parse("LOSS"), Goal::Loss);
        assert_eq!(Goal::parse(" Muscle "), Goal::Muscle);
        assert_eq!(Goal::parse("gain"), Goal::Gain);
    }

    #[test]
    fn test_unknown_defaults_to_maintenance() {
        assert_eq!(Goal::parse("bulk"), Goal::Maintenance);
        assert_eq!(Goal::parse(""), Goal::Maintenance);
        assert_eq!(Goal::from(None), Goal::Maintenance);
    }
}
