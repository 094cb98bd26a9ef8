pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_meal_choice, prompt_profile, prompt_schedule, prompt_workout_day, prompt_yes_no,
};
pub use render::{display_catalog, display_day_plan, display_meal, display_week_plan};
