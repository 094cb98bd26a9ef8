use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// EasyFuel: turns a weekly training schedule into daily calorie, macro, and meal targets.
#[derive(Parser, Debug)]
#[command(name = "easy_fuel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the user data JSON file.
    #[arg(short, long, default_value = "fuel_state.json")]
    pub file: PathBuf,

    /// Optional TOML planner config (fallback metrics, activity level, strict mode).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Optional JSON meal catalog replacing the built-in one.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate this week's meal plan from the saved profile and schedule.
    Plan,

    /// Enter or update body metrics.
    Profile,

    /// Enter or update the weekly workout schedule.
    Schedule,

    /// Show today's plan.
    Today,

    /// Show a summary of the whole week.
    Week,

    /// Show one meal from the catalog (fuzzy name matching).
    Meal {
        /// Meal name.
        name: String,
    },

    /// List every meal in the catalog.
    Catalog,

    /// Export the saved week plan as CSV.
    Export {
        /// Output CSV path.
        #[arg(default_value = "week_plan.csv")]
        output: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
