pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod storage;

pub use error::{PlannerError, Result};
pub use models::{Goal, NutritionPlan, Profile, Sex};
pub use planner::{PlannerConfig, plan_nutrition, plan_nutrition_seeded};
