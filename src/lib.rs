pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod metabolism;
pub mod models;
pub mod recommender;
pub mod table;

pub use error::{RecError, Result};
pub use metabolism::Targets;
pub use models::{FoodRow, Goal, Recommendation};
pub use recommender::{RecommendRequest, Recommender};
