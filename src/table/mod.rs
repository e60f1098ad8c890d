mod loader;
mod nutrient_table;
pub mod schema;

pub use loader::{load_table, parse_cell, read_table};
pub use nutrient_table::NutrientTable;
pub use schema::{ColumnSet, SchemaMap};
