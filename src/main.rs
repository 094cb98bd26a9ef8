use std::borrow::Cow;
use std::path::Path;

use chrono::Utc;
use clap::Parser;
use tracing::debug;

use easy_fuel_rs::cli::{Cli, Command};
use easy_fuel_rs::config::{PlannerConfig, load_config};
use easy_fuel_rs::error::Result;
use easy_fuel_rs::interface::{
    display_catalog, display_day_plan, display_meal, display_week_plan, prompt_meal_choice,
    prompt_profile, prompt_schedule, prompt_yes_no,
};
use easy_fuel_rs::logging::init_logger;
use easy_fuel_rs::planner::{MealCatalog, load_catalog};
use easy_fuel_rs::state::{UserState, export_week_csv, load_user_data, save_user_data};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let catalog: Cow<MealCatalog> = match &cli.catalog {
        Some(path) => Cow::Owned(load_catalog(path)?),
        None => Cow::Borrowed(MealCatalog::builtin()),
    };
    let command = cli.command.unwrap_or_default();
    debug!(?command, file = %cli.file.display(), "Running command");

    match command {
        Command::Plan => cmd_plan(&cli.file, &config, &catalog),
        Command::Profile => cmd_profile(&cli.file),
        Command::Schedule => cmd_schedule(&cli.file, &config, &catalog),
        Command::Today => cmd_today(&cli.file),
        Command::Week => cmd_week(&cli.file),
        Command::Meal { name } => cmd_meal(&catalog, &name),
        Command::Catalog => {
            display_catalog(&catalog);
            Ok(())
        }
        Command::Export { output } => cmd_export(&cli.file, &output),
    }
}

/// Generate and save the week plan, then show today's part of it.
fn cmd_plan(file_path: &Path, config: &PlannerConfig, catalog: &MealCatalog) -> Result<()> {
    let mut state = UserState::new(load_user_data(file_path)?);

    if state.schedule().is_empty() {
        println!("No workouts scheduled; every day will be planned as a rest day.");
        println!("Use 'schedule' to enter your training week.");
    }

    state.generate_plan(config, catalog, Utc::now())?;
    save_user_data(file_path, state.data())?;
    println!("Meal plan generated and saved to {}.", file_path.display());

    let (weekday, day) = state.today_plan()?;
    display_day_plan(weekday, day);
    Ok(())
}

/// Enter or update body metrics.
fn cmd_profile(file_path: &Path) -> Result<()> {
    let mut state = UserState::new(load_user_data(file_path)?);

    let profile = prompt_profile(state.profile())?;
    state.set_profile(profile);
    save_user_data(file_path, state.data())?;
    println!("Profile saved.");

    if prompt_yes_no("Set up your weekly workout schedule now?", true)? {
        let schedule = prompt_schedule(state.schedule())?;
        state.set_schedule(schedule);
        save_user_data(file_path, state.data())?;
        println!("Schedule saved. Run 'plan' to generate your meals.");
    }

    Ok(())
}

/// Enter or update the weekly workout schedule.
fn cmd_schedule(file_path: &Path, config: &PlannerConfig, catalog: &MealCatalog) -> Result<()> {
    let mut state = UserState::new(load_user_data(file_path)?);

    let schedule = prompt_schedule(state.schedule())?;
    state.set_schedule(schedule);
    save_user_data(file_path, state.data())?;
    println!("Schedule saved.");

    if state.profile().is_some() && prompt_yes_no("Regenerate your meal plan now?", true)? {
        state.generate_plan(config, catalog, Utc::now())?;
        save_user_data(file_path, state.data())?;
        println!("Meal plan regenerated.");
    }

    Ok(())
}

/// Show today's plan from the saved week.
fn cmd_today(file_path: &Path) -> Result<()> {
    let state = UserState::new(load_user_data(file_path)?);
    let (weekday, day) = state.today_plan()?;
    display_day_plan(weekday, day);
    Ok(())
}

/// Show the whole saved week.
fn cmd_week(file_path: &Path) -> Result<()> {
    let state = UserState::new(load_user_data(file_path)?);
    display_week_plan(state.week_plan()?, state.data().last_generated);
    Ok(())
}

/// Look up a meal by (possibly misspelled) name.
fn cmd_meal(catalog: &MealCatalog, name: &str) -> Result<()> {
    if let Some((slot, meal)) = prompt_meal_choice(catalog, name)? {
        println!();
        display_meal(slot, meal);
    }
    Ok(())
}

/// Export the saved week as CSV.
fn cmd_export(file_path: &Path, output: &Path) -> Result<()> {
    let state = UserState::new(load_user_data(file_path)?);
    let rows = export_week_csv(output, state.week_plan()?)?;
    println!("Exported {} meals to {}.", rows, output.display());
    Ok(())
}
