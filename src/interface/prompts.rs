use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{
    Intensity, MealRecord, MealSlot, ProfileInput, Weekday, WeeklySchedule, WorkoutDay,
    WorkoutType,
};
use crate::planner::MealCatalog;

fn prompt_metric(prompt: &str, current: Option<&str>, fallback: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.unwrap_or(fallback).to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for body metrics, pre-filled with the saved profile.
///
/// Answers are stored as typed; defaulting happens when a plan is generated.
pub fn prompt_profile(existing: Option<&ProfileInput>) -> Result<ProfileInput> {
    let current = existing.cloned().unwrap_or_default();

    let weight = prompt_metric("Weight (lbs)", current.weight.as_deref(), "165")?;
    let height = prompt_metric("Height (inches)", current.height.as_deref(), "68")?;
    let age = prompt_metric("Age (years)", current.age.as_deref(), "28")?;

    Ok(ProfileInput {
        weight: Some(weight),
        height: Some(height),
        age: Some(age),
        ..current
    })
}

/// Prompt for one weekday's workout.
pub fn prompt_workout_day(weekday: Weekday, existing: &WorkoutDay) -> Result<WorkoutDay> {
    let type_options: Vec<String> = WorkoutType::SELECTABLE
        .iter()
        .map(|t| t.to_string())
        .collect();
    let current_type = WorkoutType::SELECTABLE
        .iter()
        .position(|t| *t == existing.workout_type)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(format!("{} workout", weekday))
        .items(&type_options)
        .default(current_type)
        .interact()?;
    let workout_type = WorkoutType::SELECTABLE[selection];

    // Rest days hide the remaining fields
    if workout_type.is_rest() {
        return Ok(WorkoutDay::rest());
    }

    let duration: u32 = Input::new()
        .with_prompt("Duration (minutes)")
        .default(existing.duration.max(30))
        .interact_text()?;

    let intensity_options: Vec<&str> = Intensity::SELECTABLE
        .iter()
        .map(|i| i.as_str())
        .collect();
    let current_intensity = Intensity::SELECTABLE
        .iter()
        .position(|i| *i == existing.intensity)
        .unwrap_or(1);

    let selection = Select::new()
        .with_prompt("Intensity")
        .items(&intensity_options)
        .default(current_intensity)
        .interact()?;

    let description: String = Input::new()
        .with_prompt("Description (optional)")
        .default(existing.description.clone())
        .allow_empty(true)
        .interact_text()?;

    Ok(WorkoutDay::new(workout_type, duration, Intensity::SELECTABLE[selection])
        .with_description(description.trim()))
}

/// Prompt for the whole week, Monday first.
pub fn prompt_schedule(existing: &WeeklySchedule) -> Result<WeeklySchedule> {
    let mut schedule = WeeklySchedule::new();
    for weekday in Weekday::ALL {
        let current = existing.get(&weekday).cloned().unwrap_or_default();
        schedule.insert(weekday, prompt_workout_day(weekday, &current)?);
    }
    Ok(schedule)
}

/// Resolve a typed meal name against the catalog.
///
/// Exact (case-insensitive) matches return directly. Otherwise close names are
/// offered for confirmation or selection. `None` when the user declines or
/// nothing is close.
pub fn prompt_meal_choice<'a>(
    catalog: &'a MealCatalog,
    query: &str,
) -> Result<Option<(MealSlot, &'a MealRecord)>> {
    if let Some(hit) = catalog.find(query) {
        return Ok(Some(hit));
    }

    let candidates = catalog.search(query);

    if candidates.is_empty() {
        println!("No matching meal found for '{}'", query);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let hit = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", hit.meal.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some((hit.slot, hit.meal)));
    }

    let shortlist: Vec<_> = candidates.into_iter().take(5).collect();
    let mut options: Vec<String> = shortlist.iter().map(|m| m.meal.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(shortlist.get(selection).map(|m| (m.slot, m.meal)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
