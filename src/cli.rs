use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

/// MacroPlanner: BMI, calorie targets, macros, and a daily meal plan.
#[derive(Parser, Debug)]
#[command(name = "macro_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a nutrition plan. Missing profile fields are prompted for.
    Plan(PlanArgs),

    /// Print the reference food list, or one food with `--name`.
    Foods {
        /// Look up a single food by name (case-insensitive).
        #[arg(long)]
        name: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

/// Output format for a computed plan.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug, Default)]
pub struct PlanArgs {
    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Sex ("male" or "female"; anything else uses the female formula).
    #[arg(long)]
    pub sex: Option<String>,

    /// Current weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<f64>,

    /// Goal weight in kg.
    #[arg(long)]
    pub goal_weight: Option<f64>,

    /// Activity multiplier, 1.2 (sedentary) to 1.9 (very active).
    #[arg(long)]
    pub activity: Option<f64>,

    /// Goal: lose, maintain, or gain (unrecognised values mean maintain).
    #[arg(long)]
    pub goal: Option<String>,

    /// Read the profile from a JSON file. Flags override its fields.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Planner settings JSON (calorie_offset, weekly_change_kg).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for meal suggestions.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout (json and csv only).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl PlanArgs {
    /// The `--output` path when the chosen format cannot use it.
    pub fn ignored_output(&self) -> Option<&Path> {
        match self.format {
            OutputFormat::Text => self.output.as_deref(),
            OutputFormat::Json | OutputFormat::Csv => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_flags() {
        let cli = Cli::try_parse_from([
            "macro_planner",
            "plan",
            "--age",
            "30",
            "--sex",
            "male",
            "--weight",
            "80",
            "--height",
            "180",
            "--goal-weight",
            "75",
            "--activity",
            "1.55",
            "--goal",
            "lose",
            "--seed",
            "9",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Plan(args)) => {
                assert_eq!(args.age, Some(30));
                assert_eq!(args.goal.as_deref(), Some("lose"));
                assert_eq!(args.goal_weight, Some(75.0));
                assert_eq!(args.seed, Some(9));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_plan() {
        let cli = Cli::try_parse_from(["macro_planner", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan(_)));
    }

    #[test]
    fn test_foods_subcommand() {
        let cli = Cli::try_parse_from(["macro_planner", "foods"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Foods { name: None })));

        let cli = Cli::try_parse_from(["macro_planner", "foods", "--name", "Avocado"]).unwrap();
        match cli.command {
            Some(Command::Foods { name }) => assert_eq!(name.as_deref(), Some("Avocado")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_ignored_only_for_text() {
        let cli = Cli::try_parse_from(["macro_planner", "plan", "--output", "plan.txt"]).unwrap();
        match cli.command {
            Some(Command::Plan(args)) => {
                assert_eq!(args.ignored_output(), Some(Path::new("plan.txt")));
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let args = PlanArgs {
            format: OutputFormat::Csv,
            output: Some(PathBuf::from("plan.csv")),
            ..Default::default()
        };
        assert_eq!(args.ignored_output(), None);
    }
}
