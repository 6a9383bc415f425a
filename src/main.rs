use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;

use macro_planner_rs::cli::{Cli, Command, OutputFormat, PlanArgs};
use macro_planner_rs::error::Result;
use macro_planner_rs::interface::{
    PartialProfile, collect_profile, display_food, display_food_catalog, display_plan,
};
use macro_planner_rs::logging;
use macro_planner_rs::planner::{
    PlannerConfig, food_catalog, lookup_food, plan_nutrition, plan_nutrition_seeded,
};
use macro_planner_rs::storage::{load_config, load_profile, write_meal_plan_csv, write_plan_json};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(args),
        Command::Foods { name: Some(name) } => {
            let (category, food) = lookup_food(&name)?;
            display_food(category, food);
            Ok(())
        }
        Command::Foods { name: None } => {
            display_food_catalog(food_catalog());
            Ok(())
        }
    }
}

/// Compute and output a plan.
fn cmd_plan(args: PlanArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };

    let base = match &args.profile {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading profile");
            Some(load_profile(path)?)
        }
        None => None,
    };

    let profile = collect_profile(PartialProfile::from_args(&args, base))?;
    tracing::info!(
        age = profile.age,
        sex = profile.sex.as_str(),
        goal = profile.goal.as_str(),
        "computing plan"
    );

    let plan = match args.seed {
        Some(seed) => plan_nutrition_seeded(&profile, &config, seed),
        None => plan_nutrition(&profile, &config, &mut rand::thread_rng()),
    };

    if let Some(path) = args.ignored_output() {
        tracing::warn!(path = %path.display(), "--output is ignored for text format");
    }

    match (args.format, &args.output) {
        (OutputFormat::Text, _) => display_plan(&plan),
        (OutputFormat::Json, Some(path)) => {
            write_plan_json(BufWriter::new(File::create(path)?), &plan)?;
            println!("Plan written to {}", path.display());
        }
        (OutputFormat::Json, None) => {
            write_plan_json(io::stdout().lock(), &plan)?;
            println!();
        }
        (OutputFormat::Csv, Some(path)) => {
            write_meal_plan_csv(File::create(path)?, &plan)?;
            println!("Meal plan written to {}", path.display());
        }
        (OutputFormat::Csv, None) => write_meal_plan_csv(io::stdout().lock(), &plan)?,
    }

    Ok(())
}
