use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{MacroBreakdown, Meal, MealKind};
use crate::planner::calculations::round_half_up;
use crate::planner::constants::{meal_share, meal_suggestions};

/// Pick one suggestion for a meal slot.
fn pick_suggestion<R: Rng + ?Sized>(kind: MealKind, rng: &mut R) -> &'static str {
    let candidates = meal_suggestions(kind);
    // The candidate lists are non-empty constants.
    candidates.choose(rng).copied().unwrap_or(candidates[0])
}

/// Allocate the daily targets across breakfast, lunch, dinner and snacks.
///
/// Calories come from the unrounded `target_calories`; macro grams come from
/// the already-rounded `macros`. Each field is rounded on its own. Only the
/// suggestion text depends on `rng`.
pub fn build_meal_plan<R: Rng + ?Sized>(
    target_calories: f64,
    macros: &MacroBreakdown,
    rng: &mut R,
) -> Vec<Meal> {
    MealKind::ALL
        .iter()
        .map(|&kind| {
            let share = meal_share(kind);
            Meal {
                kind,
                calories: round_half_up(target_calories * share.calories),
                protein_g: round_half_up(macros.protein.grams * share.protein),
                carbs_g: round_half_up(macros.carbs.grams * share.carbs),
                fats_g: round_half_up(macros.fats.grams * share.fats),
                suggestion: pick_suggestion(kind, rng),
            }
        })
        .collect()
}
