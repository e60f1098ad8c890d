/// Mifflin-St Jeor sex-specific offsets (kcal).
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// Daily deficit applied for weight loss.
pub const LOSS_DEFICIT_KCAL: f64 = 500.0;

/// Never plan a loss diet below this intake.
pub const LOSS_MIN_KCAL: f64 = 1200.0;

/// Daily surplus applied for weight gain.
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

/// Protein grams per kg of body weight.
pub const PROTEIN_G_PER_KG_MUSCLE: f64 = 1.8;
pub const PROTEIN_G_PER_KG_GAIN: f64 = 1.6;
pub const PROTEIN_G_PER_KG_DEFAULT: f64 = 1.2;

/// Share of calories allotted to fat.
pub const FAT_CALORIE_SHARE: f64 = 0.25;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Age used when none (or an implausible one) is supplied.
pub const DEFAULT_AGE: u32 = 30;
pub const MAX_AGE: u32 = 120;
