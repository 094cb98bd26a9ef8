use std::collections::BTreeMap;

use tracing::trace;

use crate::error::{FuelError, Result};
use crate::models::{MealRecord, MealSlot};
use crate::planner::calculations::round_half_up;
use crate::planner::catalog::MealCatalog;
use crate::planner::constants::{SNACK_THRESHOLD, slot_allocation};

/// Pick the meal whose calories best match `target`.
///
/// Starts from the first record and only moves to a later one when it is
/// strictly closer AND within `tolerance`. When nothing qualifies the first
/// record is returned even if another is closer. `None` only for an empty
/// catalog.
pub fn select_best_meal(
    catalog: &[MealRecord],
    target: i64,
    tolerance: i64,
) -> Option<&MealRecord> {
    let first = catalog.first()?;
    let mut best = first;
    let mut smallest_diff = first.deviation(target);

    for meal in catalog {
        let diff = meal.deviation(target);
        if diff < smallest_diff && diff <= tolerance {
            best = meal;
            smallest_diff = diff;
        }
    }

    Some(best)
}

/// Calorie slice for a fixed-share slot.
fn slot_target(total_calories: i64, share: f64) -> i64 {
    round_half_up(total_calories as f64 * share)
}

fn pick(
    catalog: &MealCatalog,
    slot: MealSlot,
    target: i64,
    tolerance: i64,
) -> Result<MealRecord> {
    let meal = select_best_meal(catalog.slot(slot), target, tolerance)
        .ok_or(FuelError::EmptyCatalog(slot))?;
    trace!(%slot, target, meal = %meal.name, calories = meal.calories, "Selected meal");
    Ok(meal.clone())
}

/// Choose the meals for one day.
///
/// Breakfast and dinner are always present. Workout days add pre- and
/// post-workout meals. Whatever is left after those slices becomes a snack if
/// it exceeds [`SNACK_THRESHOLD`].
pub fn select_meals(
    catalog: &MealCatalog,
    total_calories: i64,
    has_workout: bool,
) -> Result<BTreeMap<MealSlot, MealRecord>> {
    let mut slots = vec![MealSlot::Breakfast, MealSlot::Dinner];
    if has_workout {
        slots.extend([MealSlot::PreWorkout, MealSlot::PostWorkout]);
    }

    let mut meals = BTreeMap::new();
    let mut remaining = total_calories;

    for slot in slots {
        let (share, tolerance) = slot_allocation(slot);
        let Some(share) = share else { continue };

        let target = slot_target(total_calories, share);
        remaining -= target;
        meals.insert(slot, pick(catalog, slot, target, tolerance)?);
    }

    if remaining > SNACK_THRESHOLD {
        let (_, tolerance) = slot_allocation(MealSlot::Snack);
        meals.insert(
            MealSlot::Snack,
            pick(catalog, MealSlot::Snack, remaining, tolerance)?,
        );
    }

    Ok(meals)
}
