use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::models::WeekPlan;
use crate::state::manager::UserData;

/// Load the user record from a JSON file.
///
/// A missing file is a fresh user, not an error.
pub fn load_user_data<P: AsRef<Path>>(path: P) -> Result<UserData> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(path = %path.display(), "No user data file, starting fresh");
        return Ok(UserData::default());
    }

    let content = fs::read_to_string(path)?;
    let data: UserData = serde_json::from_str(&content)?;
    Ok(data)
}

/// Save the user record as pretty-printed JSON, overwriting any previous file.
pub fn save_user_data<P: AsRef<Path>>(path: P, data: &UserData) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

/// One CSV row per planned meal.
#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    day: &'a str,
    workout: &'a str,
    intensity: &'a str,
    duration_min: u32,
    workout_calories: u64,
    target_calories: i64,
    target_protein_g: i64,
    target_carbs_g: i64,
    target_fat_g: i64,
    slot: &'a str,
    meal: &'a str,
    meal_calories: u32,
    meal_protein_g: u32,
    meal_carbs_g: u32,
    meal_fat_g: u32,
}

/// Write a week plan as CSV, one row per day and meal slot.
///
/// Returns the number of rows written.
pub fn export_week_csv<P: AsRef<Path>>(path: P, plan: &WeekPlan) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut rows = 0;

    for (weekday, day) in plan.iter() {
        let workout = &day.workout.workout;
        for (slot, meal) in &day.meals {
            writer.serialize(PlanRow {
                day: weekday.key(),
                workout: workout.workout_type.as_str(),
                intensity: workout.intensity.as_str(),
                duration_min: workout.duration,
                workout_calories: day.workout.calories,
                target_calories: day.nutrition.total_calories,
                target_protein_g: day.nutrition.protein,
                target_carbs_g: day.nutrition.carbs,
                target_fat_g: day.nutrition.fat,
                slot: slot.key(),
                meal: &meal.name,
                meal_calories: meal.calories,
                meal_protein_g: meal.protein,
                meal_carbs_g: meal.carbs,
                meal_fat_g: meal.fat,
            })?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}
