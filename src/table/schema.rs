use crate::error::{RecError, Result};
use crate::models::Nutrient;

/// Header names (lowercased) that identify the food-name column.
pub const FOOD_COLUMN_ALIASES: &[&str] = &["food", "food name", "food_name", "name"];

/// Header names (lowercased) that identify the food-group column.
pub const CATEGORY_COLUMN_ALIASES: &[&str] =
    &["food group", "food_group", "foodgroup", "category", "group", "type"];

/// Lowercased header aliases for each nutrient.
fn nutrient_aliases(nutrient: Nutrient) -> &'static [&'static str] {
    match nutrient {
        Nutrient::Calories => &[
            "caloric value",
            "calories",
            "calorie",
            "energy",
            "energy (kcal)",
            "kcal",
        ],
        Nutrient::Protein => &["protein", "proteins", "protein (g)"],
        Nutrient::Fiber => &["dietary fiber", "fiber", "fibre", "dietary fibre", "fiber (g)"],
        Nutrient::Sugar => &["sugars", "sugar", "total sugars", "sugar (g)"],
        Nutrient::SaturatedFat => &[
            "saturated fats",
            "saturated fat",
            "saturated_fat",
            "sat fat",
        ],
        Nutrient::Sodium => &["sodium", "sodium (mg)"],
        Nutrient::Cholesterol => &["cholesterol", "cholesterol (mg)"],
        Nutrient::NutritionDensity => &["nutrition density", "nutrition_density", "density"],
        Nutrient::Calcium => &["calcium", "calcium (mg)"],
        Nutrient::Iron => &["iron", "iron (mg)"],
        Nutrient::VitaminC => &["vitamin c", "vitamin_c", "vitaminc", "vitamin c (mg)"],
        Nutrient::Polyphenols => &["polyphenols", "polyphenol", "polyphenols (mg)"],
    }
}

fn canonical(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Map a raw header onto a known nutrient.
pub fn match_nutrient(header: &str) -> Option<Nutrient> {
    let key = canonical(header);
    Nutrient::ALL
        .into_iter()
        .find(|n| nutrient_aliases(*n).contains(&key.as_str()))
}

/// Which nutrient columns a dataset actually provided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSet {
    present: [bool; Nutrient::COUNT],
}

impl ColumnSet {
    pub fn all() -> Self {
        Self {
            present: [true; Nutrient::COUNT],
        }
    }

    pub fn insert(&mut self, nutrient: Nutrient) {
        self.present[nutrient as usize] = true;
    }

    pub fn contains(&self, nutrient: Nutrient) -> bool {
        self.present[nutrient as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = Nutrient> + '_ {
        Nutrient::ALL.into_iter().filter(|n| self.contains(*n))
    }

    pub fn missing(&self) -> impl Iterator<Item = Nutrient> + '_ {
        Nutrient::ALL.into_iter().filter(|n| !self.contains(*n))
    }
}

impl FromIterator<Nutrient> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = Nutrient>>(iter: I) -> Self {
        let mut set = ColumnSet::default();
        for nutrient in iter {
            set.insert(nutrient);
        }
        set
    }
}

/// Column layout resolved from a header row.
#[derive(Debug, Clone)]
pub struct SchemaMap {
    pub food_index: usize,
    pub food_column: String,
    /// True when no food-name header was found and the first column was used.
    pub food_promoted: bool,
    pub category_index: Option<usize>,
    pub category_column: Option<String>,
    /// (column index, nutrient); the first header matching a nutrient wins.
    pub nutrients: Vec<(usize, Nutrient)>,
    pub columns: ColumnSet,
}

impl SchemaMap {
    /// Resolve a header row against the fixed schema.
    ///
    /// Fails only when there is no column at all to hold food names.
    pub fn detect(headers: &[String]) -> Result<Self> {
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(RecError::MissingFoodColumn);
        }

        let named = headers
            .iter()
            .position(|h| FOOD_COLUMN_ALIASES.contains(&canonical(h).as_str()));
        let (food_index, food_promoted) = match named {
            Some(idx) => (idx, false),
            None => (0, true),
        };

        let category_index = headers.iter().enumerate().position(|(idx, h)| {
            idx != food_index && CATEGORY_COLUMN_ALIASES.contains(&canonical(h).as_str())
        });

        let mut columns = ColumnSet::default();
        let mut nutrients = Vec::new();
        for (idx, header) in headers.iter().enumerate() {
            if idx == food_index || Some(idx) == category_index {
                continue;
            }
            if let Some(nutrient) = match_nutrient(header) {
                if !columns.contains(nutrient) {
                    columns.insert(nutrient);
                    nutrients.push((idx, nutrient));
                }
            }
        }

        Ok(Self {
            food_index,
            food_column: headers[food_index].trim().to_string(),
            food_promoted,
            category_index,
            category_column: category_index.map(|idx| headers[idx].trim().to_string()),
            nutrients,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detects_named_food_column() {
        let map = SchemaMap::detect(&headers(&["id", "Food", "Caloric Value", "Protein"])).unwrap();
        assert_eq!(map.food_index, 1);
        assert!(!map.food_promoted);
        assert!(map.columns.contains(Nutrient::Calories));
        assert!(map.columns.contains(Nutrient::Protein));
        assert!(!map.columns.contains(Nutrient::Cholesterol));
    }

    #[test]
    fn test_promotes_first_column() {
        let map = SchemaMap::detect(&headers(&["dish", "calories", "Food Group"])).unwrap();
        assert_eq!(map.food_index, 0);
        assert!(map.food_promoted);
        assert_eq!(map.food_column, "dish");
        assert_eq!(map.category_index, Some(2));
    }

    #[test]
    fn test_empty_header_is_fatal() {
        assert!(matches!(
            SchemaMap::detect(&[]),
            Err(RecError::MissingFoodColumn)
        ));
        assert!(SchemaMap::detect(&headers(&["", "  "])).is_err());
    }

    #[test]
    fn test_aliases_are_trimmed_and_case_insensitive() {
        assert_eq!(match_nutrient("  VITAMIN C "), Some(Nutrient::VitaminC));
        assert_eq!(match_nutrient("Dietary Fibre"), Some(Nutrient::Fiber));
        assert_eq!(match_nutrient("Water"), None);
    }

    #[test]
    fn test_duplicate_nutrient_header_first_wins() {
        let map = SchemaMap::detect(&headers(&["Food", "Sugar", "Sugars"])).unwrap();
        assert_eq!(map.nutrients, vec![(1, Nutrient::Sugar)]);
    }
}
