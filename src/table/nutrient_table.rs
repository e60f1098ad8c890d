use std::sync::Arc;

use crate::models::{FoodRow, Nutrient};
use crate::table::schema::ColumnSet;

/// The baseline nutrient table.
///
/// Loaded once and never mutated afterwards. Clones share the same rows, so a
/// table can be handed to any number of concurrent requests; each request
/// builds its own derived data on top of borrowed rows.
#[derive(Debug, Clone)]
pub struct NutrientTable {
    rows: Arc<[FoodRow]>,
    columns: ColumnSet,
    food_column: String,
    category_column: Option<String>,
}

impl NutrientTable {
    /// Build a table whose source provided every nutrient column.
    pub fn from_rows(rows: Vec<FoodRow>) -> Self {
        Self::new(rows, ColumnSet::all())
    }

    pub fn new(rows: Vec<FoodRow>, columns: ColumnSet) -> Self {
        Self {
            rows: rows.into(),
            columns,
            food_column: "Food".to_string(),
            category_column: None,
        }
    }

    pub(crate) fn with_source_columns(
        mut self,
        food_column: String,
        category_column: Option<String>,
    ) -> Self {
        self.food_column = food_column;
        self.category_column = category_column;
        self
    }

    pub fn rows(&self) -> &[FoodRow] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&FoodRow> {
        self.rows.get(index)
    }

    /// Whether the source dataset actually had this column.
    pub fn has_column(&self, nutrient: Nutrient) -> bool {
        self.columns.contains(nutrient)
    }

    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    /// Header of the column the food names were read from.
    pub fn food_column(&self) -> &str {
        &self.food_column
    }

    pub fn category_column(&self) -> Option<&str> {
        self.category_column.as_deref()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if both handles point at the same baseline rows.
    pub fn shares_rows_with(&self, other: &NutrientTable) -> bool {
        Arc::ptr_eq(&self.rows, &other.rows)
    }
}
