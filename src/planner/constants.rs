use crate::models::{Goal, MealKind};

/// Energy density of protein, kcal per gram.
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;

/// Energy density of carbohydrate, kcal per gram.
pub const CARBS_KCAL_PER_G: f64 = 4.0;

/// Energy density of fat, kcal per gram.
pub const FAT_KCAL_PER_G: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;

/// Sex constant added for the male formula.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Sex constant added for the female formula.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal heuristics
// ─────────────────────────────────────────────────────────────────────────────

/// Daily deficit/surplus applied for lose/gain goals (3500 kcal ≈ 1 lb of fat).
pub const DEFAULT_CALORIE_OFFSET: f64 = 500.0;

/// Expected weekly body-mass change in kg for lose/gain goals.
pub const DEFAULT_WEEKLY_CHANGE_KG: f64 = 0.5;

/// Share of daily calories per macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroSplit {
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fats
    }
}

/// Higher protein to preserve muscle in a deficit.
pub const LOSE_SPLIT: MacroSplit = MacroSplit {
    protein: 0.35,
    carbs: 0.35,
    fats: 0.30,
};

pub const MAINTAIN_SPLIT: MacroSplit = MacroSplit {
    protein: 0.30,
    carbs: 0.40,
    fats: 0.30,
};

/// Higher carbs to fuel a surplus.
pub const GAIN_SPLIT: MacroSplit = MacroSplit {
    protein: 0.25,
    carbs: 0.45,
    fats: 0.30,
};

/// Macro split for a goal.
pub fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Lose => LOSE_SPLIT,
        Goal::Gain => GAIN_SPLIT,
        Goal::Maintain => MAINTAIN_SPLIT,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Meal allocation
// ─────────────────────────────────────────────────────────────────────────────

/// Fractions of the daily calories and macro grams assigned to one meal.
///
/// Protein and fats track the calorie share; carbs lean toward breakfast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealShare {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

pub const BREAKFAST_SHARE: MealShare = MealShare {
    calories: 0.25,
    protein: 0.25,
    carbs: 0.30,
    fats: 0.25,
};

pub const LUNCH_SHARE: MealShare = MealShare {
    calories: 0.35,
    protein: 0.35,
    carbs: 0.35,
    fats: 0.35,
};

pub const DINNER_SHARE: MealShare = MealShare {
    calories: 0.30,
    protein: 0.30,
    carbs: 0.25,
    fats: 0.30,
};

pub const SNACKS_SHARE: MealShare = MealShare {
    calories: 0.10,
    protein: 0.10,
    carbs: 0.10,
    fats: 0.10,
};

pub fn meal_share(kind: MealKind) -> MealShare {
    match kind {
        MealKind::Breakfast => BREAKFAST_SHARE,
        MealKind::Lunch => LUNCH_SHARE,
        MealKind::Dinner => DINNER_SHARE,
        MealKind::Snacks => SNACKS_SHARE,
    }
}

pub const BREAKFAST_SUGGESTIONS: [&str; 4] = [
    "Oatmeal with berries and nuts",
    "Greek yogurt with granola",
    "Scrambled eggs with whole grain toast",
    "Protein smoothie with banana",
];

pub const LUNCH_SUGGESTIONS: [&str; 4] = [
    "Grilled chicken salad with quinoa",
    "Salmon with sweet potato and vegetables",
    "Turkey and avocado wrap",
    "Lentil soup with whole grain bread",
];

pub const DINNER_SUGGESTIONS: [&str; 4] = [
    "Lean beef with brown rice and broccoli",
    "Baked fish with roasted vegetables",
    "Chicken stir-fry with mixed vegetables",
    "Tofu curry with cauliflower rice",
];

pub const SNACK_SUGGESTIONS: [&str; 4] = [
    "Apple with almond butter",
    "Greek yogurt with berries",
    "Mixed nuts and seeds",
    "Protein bar",
];

/// Candidate suggestions for a meal slot.
pub fn meal_suggestions(kind: MealKind) -> &'static [&'static str; 4] {
    match kind {
        MealKind::Breakfast => &BREAKFAST_SUGGESTIONS,
        MealKind::Lunch => &LUNCH_SUGGESTIONS,
        MealKind::Dinner => &DINNER_SUGGESTIONS,
        MealKind::Snacks => &SNACK_SUGGESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_splits_sum_to_one() {
        for goal in [Goal::Lose, Goal::Maintain, Goal::Gain] {
            assert!((macro_split(goal).sum() - 1.0).abs() < 1e-9, "{:?}", goal);
        }
    }

    #[test]
    fn test_meal_shares_sum_to_one() {
        let shares: Vec<MealShare> = MealKind::ALL.iter().map(|k| meal_share(*k)).collect();
        let calories: f64 = shares.iter().map(|s| s.calories).sum();
        let protein: f64 = shares.iter().map(|s| s.protein).sum();
        let carbs: f64 = shares.iter().map(|s| s.carbs).sum();
        let fats: f64 = shares.iter().map(|s| s.fats).sum();

        assert!((calories - 1.0).abs() < 1e-9);
        assert!((protein - 1.0).abs() < 1e-9);
        assert!((carbs - 1.0).abs() < 1e-9);
        assert!((fats - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_each_meal_has_four_suggestions() {
        for kind in MealKind::ALL {
            assert_eq!(meal_suggestions(kind).len(), 4);
        }
    }
}
