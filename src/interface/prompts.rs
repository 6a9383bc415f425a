use dialoguer::{Input, Select};
use strsim::jaro_winkler;

use crate::cli::PlanArgs;
use crate::error::{PlannerError, Result};
use crate::models::{Goal, Profile, Sex};

/// Minimum Jaro-Winkler similarity to accept a fuzzy match.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Activity presets offered by the interactive prompt.
pub const ACTIVITY_LEVELS: [(&str, f64); 5] = [
    ("Sedentary (little or no exercise)", 1.2),
    ("Lightly active (1-3 days/week)", 1.375),
    ("Moderately active (3-5 days/week)", 1.55),
    ("Very active (6-7 days/week)", 1.725),
    ("Extra active (physical job or twice daily)", 1.9),
];

/// Resolve free text to the closest of `options`.
///
/// Exact (case-insensitive) matches win; otherwise the best Jaro-Winkler
/// score above the threshold. Returns `None` when nothing is close.
pub fn resolve_choice<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = options.iter().find(|o| o.to_lowercase() == needle) {
        return Some(*exact);
    }

    options
        .iter()
        .map(|o| (*o, jaro_winkler(&o.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(o, _)| o)
}

/// Parse a goal, tolerating typos. Unresolvable input means maintain.
pub fn parse_goal_lenient(input: &str) -> Goal {
    let resolved = resolve_choice(input, &["lose", "maintain", "gain"]).unwrap_or(input);
    Goal::parse(resolved)
}

/// Parse a sex value, tolerating typos. Unresolvable input means female.
pub fn parse_sex_lenient(input: &str) -> Sex {
    let resolved = resolve_choice(input, &["male", "female"]).unwrap_or(input);
    Sex::parse(resolved)
}

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    prompt_number("Age (years)", "30")
}

/// Prompt for sex.
pub fn prompt_sex() -> Result<Sex> {
    let options = ["male", "female"];
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Sex::parse(options[selection]))
}

/// Prompt for current weight in kg.
pub fn prompt_current_weight() -> Result<f64> {
    prompt_number("Current weight (kg)", "70")
}

/// Prompt for height in cm.
pub fn prompt_height() -> Result<f64> {
    prompt_number("Height (cm)", "175")
}

/// Prompt for goal weight, defaulting to the current weight.
pub fn prompt_goal_weight(current: f64) -> Result<f64> {
    prompt_number("Goal weight (kg)", &current.to_string())
}

/// Prompt for an activity level and return its multiplier.
pub fn prompt_activity() -> Result<f64> {
    let labels: Vec<&str> = ACTIVITY_LEVELS.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(2)
        .interact()?;

    Ok(ACTIVITY_LEVELS[selection].1)
}

/// Prompt for the weight goal.
pub fn prompt_goal() -> Result<Goal> {
    let options = ["lose", "maintain", "gain"];
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(Goal::parse(options[selection]))
}

/// Profile fields supplied up front; anything missing is prompted for.
#[derive(Debug, Clone, Default)]
pub struct PartialProfile {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub current_weight_kg: Option<f64>,
    pub current_height_cm: Option<f64>,
    pub goal_weight_kg: Option<f64>,
    pub activity_multiplier: Option<f64>,
    pub goal: Option<Goal>,
}

impl PartialProfile {
    /// Merge command-line flags over a profile loaded from file.
    ///
    /// A flag wins over the file; fields absent from both stay `None`.
    pub fn from_args(args: &PlanArgs, base: Option<Profile>) -> Self {
        let base = base.as_ref();
        Self {
            age: args.age.or(base.map(|p| p.age)),
            sex: args
                .sex
                .as_deref()
                .map(parse_sex_lenient)
                .or(base.map(|p| p.sex)),
            current_weight_kg: args.weight.or(base.map(|p| p.current_weight_kg)),
            current_height_cm: args.height.or(base.map(|p| p.current_height_cm)),
            goal_weight_kg: args.goal_weight.or(base.map(|p| p.goal_weight_kg)),
            activity_multiplier: args.activity.or(base.map(|p| p.activity_multiplier)),
            goal: args
                .goal
                .as_deref()
                .map(parse_goal_lenient)
                .or(base.map(|p| p.goal)),
        }
    }

    /// Complete profile if every field is present.
    pub fn complete(&self) -> Option<Profile> {
        Some(Profile {
            age: self.age?,
            sex: self.sex?,
            current_weight_kg: self.current_weight_kg?,
            current_height_cm: self.current_height_cm?,
            goal_weight_kg: self.goal_weight_kg?,
            activity_multiplier: self.activity_multiplier?,
            goal: self.goal?,
        })
    }
}

/// Fill in the missing profile fields interactively.
pub fn collect_profile(partial: PartialProfile) -> Result<Profile> {
    if let Some(profile) = partial.complete() {
        return Ok(profile);
    }

    let age = match partial.age {
        Some(v) => v,
        None => prompt_age()?,
    };
    let sex = match partial.sex {
        Some(v) => v,
        None => prompt_sex()?,
    };
    let current_weight_kg = match partial.current_weight_kg {
        Some(v) => v,
        None => prompt_current_weight()?,
    };
    let current_height_cm = match partial.current_height_cm {
        Some(v) => v,
        None => prompt_height()?,
    };
    let goal_weight_kg = match partial.goal_weight_kg {
        Some(v) => v,
        None => prompt_goal_weight(current_weight_kg)?,
    };
    let activity_multiplier = match partial.activity_multiplier {
        Some(v) => v,
        None => prompt_activity()?,
    };
    let goal = match partial.goal {
        Some(v) => v,
        None => prompt_goal()?,
    };

    Ok(Profile {
        age,
        sex,
        current_weight_kg,
        current_height_cm,
        goal_weight_kg,
        activity_multiplier,
        goal,
    })
}
