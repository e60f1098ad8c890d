pub mod food;
pub mod goal;
pub mod recommendation;

pub use food::{FoodRow, Nutrient, NutrientValues};
pub use goal::Goal;
pub use recommendation::{Recommendation, RecommendationReport};
