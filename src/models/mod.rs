pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodCategory, FoodEntry, MacroKind};
pub use plan::{MacroAmount, MacroBreakdown, Meal, MealKind, NutritionPlan};
pub use profile::{Goal, Profile, Sex};
