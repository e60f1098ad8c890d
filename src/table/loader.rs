use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::{FoodRow, NutrientValues};
use crate::table::nutrient_table::NutrientTable;
use crate::table::schema::SchemaMap;

/// Parse a numeric cell. Blank, non-numeric and non-finite cells yield `None`.
pub fn parse_cell(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Load the nutrient table from a CSV file.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<NutrientTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = read_table(file)?;
    info!(
        "Loaded {} foods from {} (food column: '{}')",
        table.len(),
        path.display(),
        table.food_column()
    );
    Ok(table)
}

/// Read a nutrient table from any CSV source.
///
/// Headers are trimmed and matched against the known schema. Cells that are
/// missing or not numbers become zero; rows are never dropped.
pub fn read_table<R: Read>(reader: R) -> Result<NutrientTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let schema = SchemaMap::detect(&headers)?;

    if schema.food_promoted {
        warn!(
            "No food-name column found; using first column '{}' as food names",
            schema.food_column
        );
    }
    debug!(
        "Detected nutrient columns: {:?}",
        schema.columns.iter().collect::<Vec<_>>()
    );
    let missing: Vec<_> = schema.columns.missing().collect();
    if !missing.is_empty() {
        debug!("Columns absent from dataset (read as zero): {:?}", missing);
    }

    let mut rows = Vec::new();
    let mut coerced = 0usize;

    for record in rdr.records() {
        let record = record?;

        let name = record.get(schema.food_index).unwrap_or_default().to_string();

        let mut nutrients = NutrientValues::default();
        for &(idx, nutrient) in &schema.nutrients {
            match record.get(idx).and_then(parse_cell) {
                Some(value) => nutrients.set(nutrient, value),
                None => coerced += 1,
            }
        }

        let mut row = FoodRow::new(name, nutrients);
        row.category = schema
            .category_index
            .and_then(|idx| record.get(idx))
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        rows.push(row);
    }

    if coerced > 0 {
        debug!("Coerced {} blank or non-numeric cells to zero", coerced);
    }

    Ok(NutrientTable::new(rows, schema.columns)
        .with_source_columns(schema.food_column, schema.category_column))
}
