use serde::{Deserialize, Serialize};

/// Sex selector for the BMR formula.
///
/// Only "male" is recognised explicitly; every other value parses to `Female`,
/// which selects the -161 constant in the Mifflin-St Jeor equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Lenient parse: "male" (any case) is `Male`, anything else is `Female`.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "male" => Sex::Male,
            "female" => Sex::Female,
            other => {
                tracing::debug!(value = other, "unrecognised sex, using female formula");
                Sex::Female
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        Sex::parse(&value)
    }
}

/// Body-weight goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Goal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl Goal {
    /// Lenient parse: unrecognised values fall back to `Maintain`.
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "lose" => Goal::Lose,
            "gain" => Goal::Gain,
            "maintain" => Goal::Maintain,
            other => {
                tracing::debug!(value = other, "unrecognised goal, using maintain");
                Goal::Maintain
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        Goal::parse(&value)
    }
}

/// Biometric inputs for one plan calculation.
///
/// Values are trusted as already coerced; nothing here is range-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub sex: Sex,
    pub current_weight_kg: f64,
    pub current_height_cm: f64,
    pub goal_weight_kg: f64,
    /// Typically 1.2 (sedentary) to 1.9 (very active).
    pub activity_multiplier: f64,
    #[serde(default)]
    pub goal: Goal,
}

impl Profile {
    /// Goal weight minus current weight, in kg.
    #[inline]
    pub fn weight_difference_kg(&self) -> f64 {
        self.goal_weight_kg - self.current_weight_kg
    }
}
