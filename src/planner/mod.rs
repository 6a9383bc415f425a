pub mod calculations;
pub mod catalog;
pub mod constants;
pub mod meals;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::models::{NutritionPlan, Profile};

pub use calculations::{
    CalorieTarget, PlannerConfig, compute_bmi, compute_bmr, compute_macros,
    compute_target_calories, compute_target_calories_with, compute_tdee, round_half_up,
    round_to_tenth,
};
pub use catalog::{find_food, food_catalog, lookup_food};
pub use constants::*;
pub use meals::build_meal_plan;

/// Compute the full nutrition plan for a profile.
///
/// Suggestion picks are drawn from `rng`; every numeric field is
/// deterministic in `profile` and `config`.
pub fn plan_nutrition<R: Rng + ?Sized>(
    profile: &Profile,
    config: &PlannerConfig,
    rng: &mut R,
) -> NutritionPlan {
    let current_bmi = compute_bmi(profile.current_weight_kg, profile.current_height_cm);
    let goal_bmi = compute_bmi(profile.goal_weight_kg, profile.current_height_cm);
    let bmr = compute_bmr(profile);
    let target = compute_target_calories_with(bmr, profile.activity_multiplier, profile.goal, config);
    let macros = compute_macros(target.target_calories, profile.goal);

    tracing::debug!(
        bmi = current_bmi,
        bmr,
        tdee = target.tdee,
        target_calories = target.target_calories,
        goal = profile.goal.as_str(),
        "computed energy targets"
    );

    let meal_plan = build_meal_plan(target.target_calories, &macros, rng);

    NutritionPlan {
        current_bmi: round_to_tenth(current_bmi),
        goal_bmi: round_to_tenth(goal_bmi),
        basal_metabolic_rate: bmr,
        total_daily_energy_expenditure: target.tdee,
        target_calories: target.target_calories,
        weekly_weight_change_kg: target.weekly_change_kg,
        weight_difference_kg: profile.weight_difference_kg(),
        macros,
        meal_plan,
        food_catalog: food_catalog(),
    }
}

/// `plan_nutrition` with a `StdRng` seeded from `seed`.
pub fn plan_nutrition_seeded(profile: &Profile, config: &PlannerConfig, seed: u64) -> NutritionPlan {
    let mut rng = StdRng::seed_from_u64(seed);
    plan_nutrition(profile, config, &mut rng)
}
