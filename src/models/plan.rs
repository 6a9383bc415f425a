use serde::Serialize;

use crate::models::food::FoodCategory;

/// Grams and calories for one macronutrient.
///
/// Both fields are whole numbers, rounded independently of each other.
/// They stay `f64` so NaN from malformed input survives rounding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacroAmount {
    pub grams: f64,
    pub calories: f64,
}

/// Daily macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacroBreakdown {
    pub protein: MacroAmount,
    pub carbs: MacroAmount,
    pub fats: MacroAmount,
}

impl MacroBreakdown {
    /// Sum of the rounded per-macro calories.
    pub fn total_calories(&self) -> f64 {
        self.protein.calories + self.carbs.calories + self.fats.calories
    }
}

/// The four daily meal slots, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealKind {
    pub const ALL: [MealKind; 4] = [
        MealKind::Breakfast,
        MealKind::Lunch,
        MealKind::Dinner,
        MealKind::Snacks,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MealKind::Breakfast => "Breakfast",
            MealKind::Lunch => "Lunch",
            MealKind::Dinner => "Dinner",
            MealKind::Snacks => "Snacks",
        }
    }
}

/// One meal slot with its share of the daily targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub kind: MealKind,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fats_g: f64,
    pub suggestion: &'static str,
}

impl Meal {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Everything computed for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionPlan {
    /// Rounded to one decimal.
    pub current_bmi: f64,
    /// Goal weight at the current height, rounded to one decimal.
    pub goal_bmi: f64,
    pub basal_metabolic_rate: f64,
    pub total_daily_energy_expenditure: f64,
    pub target_calories: f64,
    pub weekly_weight_change_kg: f64,
    pub weight_difference_kg: f64,
    pub macros: MacroBreakdown,
    pub meal_plan: Vec<Meal>,
    pub food_catalog: &'static [FoodCategory],
}

impl NutritionPlan {
    /// Sum of the rounded meal calories.
    pub fn meal_calories_total(&self) -> f64 {
        self.meal_plan.iter().map(|m| m.calories).sum()
    }

    /// Weight difference formatted the way the summary shows it, e.g. "+2.5 kg".
    pub fn weight_difference_label(&self) -> String {
        if self.weight_difference_kg > 0.0 {
            format!("+{:.1} kg", self.weight_difference_kg)
        } else {
            format!("{:.1} kg", self.weight_difference_kg)
        }
    }
}
