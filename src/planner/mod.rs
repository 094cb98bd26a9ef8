pub mod calculations;
pub mod catalog;
pub mod constants;
pub mod schedule;
pub mod selection;

pub use calculations::{
    MacroSplit, calculate_bmr, calculate_macros, calculate_tdee, calculate_workout_calories,
    round_half_up,
};
pub use catalog::{MealCatalog, MealMatch, load_catalog};
pub use constants::*;
pub use schedule::{generate_week_plan, plan_day};
pub use selection::{select_best_meal, select_meals};
