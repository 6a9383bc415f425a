use serde::Serialize;

/// Macronutrient a catalog category is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroKind {
    Protein,
    Carbs,
    Fat,
}

impl MacroKind {
    pub fn label(&self) -> &'static str {
        match self {
            MacroKind::Protein => "protein",
            MacroKind::Carbs => "carbs",
            MacroKind::Fat => "fat",
        }
    }
}

/// A reference food with its nutrition per serving.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodEntry {
    pub name: &'static str,
    /// Serving the numbers refer to, e.g. "100g" or "1 tbsp".
    pub serving: &'static str,
    /// Grams of the category's macro per serving.
    pub macro_grams: u32,
    pub calories: u32,
}

impl FoodEntry {
    /// Human-readable serving line, e.g. "100g = 31g protein, 165 kcal".
    pub fn describe(&self, macro_kind: MacroKind) -> String {
        format!(
            "{} = {}g {}, {} kcal",
            self.serving,
            self.macro_grams,
            macro_kind.label(),
            self.calories
        )
    }
}

/// A named group of reference foods sharing a measured macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodCategory {
    pub name: &'static str,
    pub macro_kind: MacroKind,
    pub foods: &'static [FoodEntry],
}
