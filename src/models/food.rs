use serde::{Deserialize, Serialize};

/// Numeric columns the recommender understands.
///
/// Datasets come in several flavours; any column a file lacks is read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Calories,
    Protein,
    Fiber,
    Sugar,
    SaturatedFat,
    Sodium,
    Cholesterol,
    NutritionDensity,
    Calcium,
    Iron,
    VitaminC,
    Polyphenols,
}

impl Nutrient {
    pub const COUNT: usize = 12;

    pub const ALL: [Nutrient; Nutrient::COUNT] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Fiber,
        Nutrient::Sugar,
        Nutrient::SaturatedFat,
        Nutrient::Sodium,
        Nutrient::Cholesterol,
        Nutrient::NutritionDensity,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::VitaminC,
        Nutrient::Polyphenols,
    ];

    /// Canonical column label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Calories => "Caloric Value",
            Nutrient::Protein => "Protein",
            Nutrient::Fiber => "Dietary Fiber",
            Nutrient::Sugar => "Sugars",
            Nutrient::SaturatedFat => "Saturated Fats",
            Nutrient::Sodium => "Sodium",
            Nutrient::Cholesterol => "Cholesterol",
            Nutrient::NutritionDensity => "Nutrition Density",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::VitaminC => "Vitamin C",
            Nutrient::Polyphenols => "Polyphenols",
        }
    }
}

/// One finite value per [`Nutrient`]. Absent columns stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientValues {
    pub calories: f64,
    pub protein: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub saturated_fat: f64,
    pub sodium: f64,
    pub cholesterol: f64,
    pub nutrition_density: f64,
    pub calcium: f64,
    pub iron: f64,
    pub vitamin_c: f64,
    pub polyphenols: f64,
}

impl NutrientValues {
    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
            Nutrient::SaturatedFat => self.saturated_fat,
            Nutrient::Sodium => self.sodium,
            Nutrient::Cholesterol => self.cholesterol,
            Nutrient::NutritionDensity => self.nutrition_density,
            Nutrient::Calcium => self.calcium,
            Nutrient::Iron => self.iron,
            Nutrient::VitaminC => self.vitamin_c,
            Nutrient::Polyphenols => self.polyphenols,
        }
    }

    /// Store a value, replacing anything non-finite with zero.
    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        let slot = match nutrient {
            Nutrient::Calories => &mut self.calories,
            Nutrient::Protein => &mut self.protein,
            Nutrient::Fiber => &mut self.fiber,
            Nutrient::Sugar => &mut self.sugar,
            Nutrient::SaturatedFat => &mut self.saturated_fat,
            Nutrient::Sodium => &mut self.sodium,
            Nutrient::Cholesterol => &mut self.cholesterol,
            Nutrient::NutritionDensity => &mut self.nutrition_density,
            Nutrient::Calcium => &mut self.calcium,
            Nutrient::Iron => &mut self.iron,
            Nutrient::VitaminC => &mut self.vitamin_c,
            Nutrient::Polyphenols => &mut self.polyphenols,
        };
        *slot = value;
    }
}

/// A single row of the nutrient table.
///
/// Names are not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRow {
    pub name: String,
    pub nutrients: NutrientValues,
    /// Food group, when the dataset carries one.
    pub category: Option<String>,
}

impl FoodRow {
    pub fn new(name: impl Into<String>, nutrients: NutrientValues) -> Self {
        Self {
            name: name.into(),
            nutrients,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        self.nutrients.get(nutrient)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, P:{} Fi:{} Su:{} Na:{}, group:{}",
            self.name,
            self.nutrients.calories,
            self.nutrients.protein,
            self.nutrients.fiber,
            self.nutrients.sugar,
            self.nutrients.sodium,
            self.category.as_deref().unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_cover_every_nutrient() {
        let mut values = NutrientValues::default();
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            values.set(*nutrient, i as f64 + 1.0);
        }
        for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
            assert_eq!(values.get(*nutrient), i as f64 + 1.0);
        }
    }

    #[test]
    fn test_set_rejects_non_finite() {
        let mut values = NutrientValues::default();
        values.set(Nutrient::Protein, f64::NAN);
        values.set(Nutrient::Sugar, f64::INFINITY);
        assert_eq!(values.protein, 0.0);
        assert_eq!(values.sugar, 0.0);
    }

    #[test]
    fn test_with_category() {
        let row = FoodRow::new("Salmon", NutrientValues::default()).with_category("Fish");
        assert_eq!(row.category.as_deref(), Some("Fish"));
        assert!(row.debug_string().contains("group:Fish"));
    }
}
