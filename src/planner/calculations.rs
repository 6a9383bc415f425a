use serde::{Deserialize, Serialize};

use crate::models::{Goal, MacroAmount, MacroBreakdown, Profile, Sex};
use crate::planner::constants::*;

/// Configurable goal heuristics.
///
/// Defaults reproduce the fixed ±500 kcal/day and ±0.5 kg/week rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Daily kcal subtracted for `lose` and added for `gain`.
    pub calorie_offset: f64,
    /// Weekly kg change reported for `lose` (negated) and `gain`.
    pub weekly_change_kg: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            calorie_offset: DEFAULT_CALORIE_OFFSET,
            weekly_change_kg: DEFAULT_WEEKLY_CHANGE_KG,
        }
    }
}

/// Calorie target and the body-mass change it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieTarget {
    pub tdee: f64,
    pub target_calories: f64,
    pub weekly_change_kg: f64,
}

/// Body Mass Index at full precision.
///
/// Formula: weight(kg) / height(m)². Zero height yields infinity.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Round to the nearest integer, halves toward +∞ (-2.5 → -2, 2.5 → 3).
///
/// NaN and infinities pass through unchanged.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Round to one decimal place for display.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Basal Metabolic Rate via Mifflin-St Jeor.
///
/// Male:   10 × weight + 6.25 × height − 5 × age + 5
/// Female: 10 × weight + 6.25 × height − 5 × age − 161
pub fn compute_bmr(profile: &Profile) -> f64 {
    let base = BMR_WEIGHT_COEFF * profile.current_weight_kg
        + BMR_HEIGHT_COEFF * profile.current_height_cm
        - BMR_AGE_COEFF * profile.age as f64;

    match profile.sex {
        Sex::Male => base + BMR_MALE_OFFSET,
        Sex::Female => base + BMR_FEMALE_OFFSET,
    }
}

/// Total Daily Energy Expenditure.
#[inline]
pub fn compute_tdee(bmr: f64, activity_multiplier: f64) -> f64 {
    bmr * activity_multiplier
}

/// Calorie target with the default goal heuristics.
///
/// Returns (target_calories, weekly_change_kg).
pub fn compute_target_calories(bmr: f64, activity_multiplier: f64, goal: Goal) -> (f64, f64) {
    let target = compute_target_calories_with(bmr, activity_multiplier, goal, &PlannerConfig::default());
    (target.target_calories, target.weekly_change_kg)
}

/// Calorie target using the offsets from `config`.
pub fn compute_target_calories_with(
    bmr: f64,
    activity_multiplier: f64,
    goal: Goal,
    config: &PlannerConfig,
) -> CalorieTarget {
    let tdee = compute_tdee(bmr, activity_multiplier);

    let (target_calories, weekly_change_kg) = match goal {
        Goal::Lose => (tdee - config.calorie_offset, -config.weekly_change_kg),
        Goal::Gain => (tdee + config.calorie_offset, config.weekly_change_kg),
        Goal::Maintain => (tdee, 0.0),
    };

    CalorieTarget {
        tdee,
        target_calories,
        weekly_change_kg,
    }
}

fn macro_amount(calories: f64, kcal_per_gram: f64) -> MacroAmount {
    MacroAmount {
        grams: round_half_up(calories / kcal_per_gram),
        calories: round_half_up(calories),
    }
}

/// Split the calorie target into protein, carbs and fats.
///
/// Grams and calories are rounded independently, so grams × density may not
/// match the rounded calories exactly.
pub fn compute_macros(target_calories: f64, goal: Goal) -> MacroBreakdown {
    let split = macro_split(goal);

    MacroBreakdown {
        protein: macro_amount(target_calories * split.protein, PROTEIN_KCAL_PER_G),
        carbs: macro_amount(target_calories * split.carbs, CARBS_KCAL_PER_G),
        fats: macro_amount(target_calories * split.fats, FAT_KCAL_PER_G),
    }
}
