use crate::models::{FoodCategory, FoodEntry, NutritionPlan};
use crate::planner::round_half_up;

/// Display the summary, macros, and meal plan.
pub fn display_plan(plan: &NutritionPlan) {
    println!();
    println!("=== Your Plan ===");
    println!();
    println!("Current BMI:     {:.1}", plan.current_bmi);
    println!("Goal BMI:        {:.1}", plan.goal_bmi);
    println!("BMR:             {:.0} kcal", plan.basal_metabolic_rate);
    println!("TDEE:            {:.0} kcal", plan.total_daily_energy_expenditure);
    println!("Daily calories:  {:.0} kcal", round_half_up(plan.target_calories));
    println!("Weight change:   {}", plan.weight_difference_label());
    println!("Weekly change:   {:+.1} kg", plan.weekly_weight_change_kg);

    println!();
    println!("--- Macros ---");
    let macros = &plan.macros;
    println!(
        "Protein: {:>4.0}g ({:.0} kcal)",
        macros.protein.grams, macros.protein.calories
    );
    println!(
        "Carbs:   {:>4.0}g ({:.0} kcal)",
        macros.carbs.grams, macros.carbs.calories
    );
    println!(
        "Fats:    {:>4.0}g ({:.0} kcal)",
        macros.fats.grams, macros.fats.calories
    );

    println!();
    println!("--- Meal Plan ---");
    for meal in &plan.meal_plan {
        println!();
        println!("{}", meal.name());
        println!("  Target:     {:.0} kcal", meal.calories);
        println!("  Protein:    {:.0}g", meal.protein_g);
        println!("  Carbs:      {:.0}g", meal.carbs_g);
        println!("  Fats:       {:.0}g", meal.fats_g);
        println!("  Suggestion: {}", meal.suggestion);
    }
    println!();
}

/// Display the reference food list.
pub fn display_food_catalog(catalog: &[FoodCategory]) {
    if catalog.is_empty() {
        println!("Food catalog: (none)");
        return;
    }

    for category in catalog {
        println!();
        println!("=== {} ({} items) ===", category.name, category.foods.len());
        println!();

        let max_name_len = category.foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

        for food in category.foods {
            println!(
                "  {:<width$}  {}",
                food.name,
                food.describe(category.macro_kind),
                width = max_name_len
            );
        }
    }

    println!();
}

/// Display a single catalog food with its category.
pub fn display_food(category: &FoodCategory, food: &FoodEntry) {
    println!();
    println!("{} ({})", food.name, category.name);
    println!("  {}", food.describe(category.macro_kind));
    println!();
}
