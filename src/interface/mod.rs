pub mod input;
pub mod prompts;
pub mod render;

pub use input::{collect_body_metrics, require_positive, resolve_age};
pub use prompts::{prompt_activity, prompt_age, prompt_gender, prompt_goal, prompt_text};
pub use render::{display_recommendations, display_table_summary, display_targets, print_json};
