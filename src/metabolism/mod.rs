pub mod constants;
pub mod targets;

pub use constants::{DEFAULT_AGE, MAX_AGE};
pub use targets::{
    calc_bmr, calc_tdee, nutrient_targets, ActivityLevel, BodyMetrics, Gender, Targets,
};
