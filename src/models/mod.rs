pub mod meal;
pub mod plan;
pub mod profile;
pub mod workout;

pub use meal::{MealRecord, MealSlot};
pub use plan::{DayPlan, NutritionTarget, WeekPlan, WorkoutSummary};
pub use profile::{ActivityLevel, Gender, ProfileInput, UserProfile};
pub use workout::{Intensity, Weekday, WeeklySchedule, WorkoutDay, WorkoutType};
