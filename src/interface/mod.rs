pub mod prompts;
pub mod render;

pub use prompts::{
    PartialProfile, collect_profile, parse_goal_lenient, parse_sex_lenient, prompt_activity,
    prompt_age, prompt_current_weight, prompt_goal, prompt_goal_weight, prompt_height,
    prompt_sex, resolve_choice,
};
pub use render::{display_food, display_food_catalog, display_plan};
