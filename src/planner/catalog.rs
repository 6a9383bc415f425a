use crate::error::{PlannerError, Result};
use crate::models::{FoodCategory, FoodEntry, MacroKind};

const fn food(name: &'static str, serving: &'static str, macro_grams: u32, calories: u32) -> FoodEntry {
    FoodEntry {
        name,
        serving,
        macro_grams,
        calories,
    }
}

const PROTEIN_SOURCES: [FoodEntry; 7] = [
    food("Chicken Breast (cooked)", "100g", 31, 165),
    food("Salmon (cooked)", "100g", 25, 208),
    food("Greek Yogurt (plain)", "100g", 10, 59),
    food("Eggs (large)", "1 egg", 6, 70),
    food("Tofu (firm)", "100g", 15, 144),
    food("Lentils (cooked)", "100g", 9, 116),
    food("Lean Beef (cooked)", "100g", 26, 250),
];

const CARB_SOURCES: [FoodEntry; 7] = [
    food("Brown Rice (cooked)", "100g", 23, 111),
    food("Quinoa (cooked)", "100g", 22, 120),
    food("Sweet Potato (baked)", "100g", 20, 86),
    food("Oats (dry)", "50g", 32, 190),
    food("Whole Wheat Bread", "1 slice", 12, 69),
    food("Banana (medium)", "1 banana", 27, 105),
    food("Apple (medium)", "1 apple", 25, 95),
];

const HEALTHY_FATS: [FoodEntry; 7] = [
    food("Avocado", "100g", 15, 160),
    food("Almonds", "30g", 15, 174),
    food("Olive Oil", "1 tbsp", 14, 119),
    food("Walnuts", "30g", 20, 196),
    food("Chia Seeds", "1 tbsp", 3, 58),
    food("Peanut Butter", "2 tbsp", 16, 188),
    food("Coconut Oil", "1 tbsp", 14, 117),
];

const VEGETABLES: [FoodEntry; 7] = [
    food("Broccoli (cooked)", "100g", 5, 34),
    food("Spinach (raw)", "100g", 4, 23),
    food("Bell Peppers", "100g", 6, 31),
    food("Cucumber", "100g", 4, 16),
    food("Tomatoes", "100g", 4, 18),
    food("Cauliflower", "100g", 5, 25),
    food("Zucchini", "100g", 3, 17),
];

static FOOD_CATALOG: [FoodCategory; 4] = [
    FoodCategory {
        name: "Protein Sources",
        macro_kind: MacroKind::Protein,
        foods: &PROTEIN_SOURCES,
    },
    FoodCategory {
        name: "Carbohydrate Sources",
        macro_kind: MacroKind::Carbs,
        foods: &CARB_SOURCES,
    },
    FoodCategory {
        name: "Healthy Fats",
        macro_kind: MacroKind::Fat,
        foods: &HEALTHY_FATS,
    },
    FoodCategory {
        name: "Vegetables (Low Calorie)",
        macro_kind: MacroKind::Carbs,
        foods: &VEGETABLES,
    },
];

/// Static reference foods, grouped by the macro they are a source of.
///
/// Independent of any profile or goal.
pub fn food_catalog() -> &'static [FoodCategory] {
    &FOOD_CATALOG
}

/// Find a catalog food by name (case-insensitive).
pub fn find_food(name: &str) -> Option<(&'static FoodCategory, &'static FoodEntry)> {
    let needle = name.trim().to_lowercase();
    FOOD_CATALOG.iter().find_map(|category| {
        category
            .foods
            .iter()
            .find(|f| f.name.to_lowercase() == needle)
            .map(|f| (category, f))
    })
}

/// Like `find_food`, but an unknown name is a `FoodNotFound` error.
pub fn lookup_food(name: &str) -> Result<(&'static FoodCategory, &'static FoodEntry)> {
    find_food(name).ok_or_else(|| PlannerError::FoodNotFound(name.to_string()))
}
