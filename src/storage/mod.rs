mod persistence;

pub use persistence::{load_config, load_profile, write_meal_plan_csv, write_plan_json};
