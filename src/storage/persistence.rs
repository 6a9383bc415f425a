use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::{NutritionPlan, Profile};
use crate::planner::PlannerConfig;

/// Load a profile from a JSON file.
///
/// Unknown `sex` and `goal` strings fall back to female and maintain.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Profile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load planner settings from a JSON file. Missing fields keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a plan as pretty-printed JSON.
pub fn write_plan_json<W: Write>(writer: W, plan: &NutritionPlan) -> Result<()> {
    serde_json::to_writer_pretty(writer, plan)?;
    Ok(())
}

/// Write the meal plan as CSV, one row per meal.
pub fn write_meal_plan_csv<W: Write>(writer: W, plan: &NutritionPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["meal", "calories", "protein_g", "carbs_g", "fats_g", "suggestion"])?;

    for meal in &plan.meal_plan {
        wtr.write_record([
            meal.name().to_string(),
            format!("{:.0}", meal.calories),
            format!("{:.0}", meal.protein_g),
            format!("{:.0}", meal.carbs_g),
            format!("{:.0}", meal.fats_g),
            meal.suggestion.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Sex};
    use crate::planner::plan_nutrition_seeded;
    use tempfile::NamedTempFile;

    fn sample_plan() -> NutritionPlan {
        let profile = Profile {
            age: 30,
            sex: Sex::Male,
            current_weight_kg: 80.0,
            current_height_cm: 180.0,
            goal_weight_kg: 75.0,
            activity_multiplier: 1.55,
            goal: Goal::Lose,
        };
        plan_nutrition_seeded(&profile, &PlannerConfig::default(), 3)
    }

    #[test]
    fn test_load_profile() {
        let json = r#"{
            "age": 25, "sex": "female", "current_weight_kg": 60,
            "current_height_cm": 165, "goal_weight_kg": 62,
            "activity_multiplier": 1.375, "goal": "gain"
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.age, 25);
        assert_eq!(profile.sex, Sex::Female);
        assert_eq!(profile.goal, Goal::Gain);
    }

    #[test]
    fn test_load_profile_missing_file() {
        assert!(load_profile("/nonexistent/profile.json").is_err());
    }

    #[test]
    fn test_load_config_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_write_plan_json() {
        let mut buf = Vec::new();
        write_plan_json(&mut buf, &sample_plan()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["current_bmi"], 24.7);
        assert_eq!(value["macros"]["fats"]["grams"], 75.0);
        assert_eq!(value["meal_plan"].as_array().unwrap().len(), 4);
        assert_eq!(value["food_catalog"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_write_meal_plan_csv() {
        let mut buf = Vec::new();
        write_meal_plan_csv(&mut buf, &sample_plan()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("meal,calories"));
        assert!(lines[1].starts_with("Breakfast,565,"));
    }
}
