use chrono::{DateTime, Utc};

use crate::models::{DayPlan, MealRecord, MealSlot, WeekPlan, Weekday};
use crate::planner::MealCatalog;

/// Display one day's workout, meals and totals.
pub fn display_day_plan(weekday: Weekday, day: &DayPlan) {
    let workout = &day.workout.workout;

    println!();
    println!("=== {} ===", weekday);
    println!();

    if workout.workout_type.is_rest() {
        println!("Rest Day - recovery and regeneration");
    } else {
        println!(
            "{}: {} min, {} intensity, ~{} cal",
            workout.workout_type, workout.duration, workout.intensity, day.workout.calories
        );
        if !workout.description.is_empty() {
            println!("  {}", workout.description);
        }
    }
    println!();

    for (slot, meal) in &day.meals {
        display_meal(*slot, meal);
    }

    let n = &day.nutrition;
    println!("--- Daily Totals ---");
    println!(
        "Calories: {} | Protein: {}g | Carbs: {}g | Fat: {}g",
        n.total_calories, n.protein, n.carbs, n.fat
    );
    println!("Planned meals: {} cal", day.planned_calories());
    println!();
}

/// Display a single meal with ingredients and macros.
pub fn display_meal(slot: MealSlot, meal: &MealRecord) {
    println!("{} - {} ({} cal)", slot.title(), meal.name, meal.calories);
    for ingredient in &meal.ingredients {
        println!("    - {}", ingredient);
    }
    println!("    P: {}g  C: {}g  F: {}g", meal.protein, meal.carbs, meal.fat);
    println!();
}

/// Display a compact summary of every day in the week.
pub fn display_week_plan(plan: &WeekPlan, generated_at: Option<DateTime<Utc>>) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    println!();
    println!("=== Weekly Plan ===");
    if let Some(ts) = generated_at {
        println!("Generated {}", ts.format("%Y-%m-%d %H:%M UTC"));
    }
    println!();

    for (weekday, day) in plan.iter() {
        let workout = &day.workout.workout;
        let label = if workout.workout_type.is_rest() {
            "Rest".to_string()
        } else {
            format!("{} {}min", workout.workout_type, workout.duration)
        };
        let meals: Vec<&str> = day.meals.values().map(|m| m.name.as_str()).collect();

        println!(
            "{:<9} {:<26} {:>5} cal  P:{:>3} C:{:>3} F:{:>3}",
            weekday.to_string(),
            label,
            day.nutrition.total_calories,
            day.nutrition.protein,
            day.nutrition.carbs,
            day.nutrition.fat
        );
        println!("          {}", meals.join(", "));
    }
    println!();
}

/// Display all meals in the catalog, grouped by slot.
pub fn display_catalog(catalog: &MealCatalog) {
    println!();
    println!("=== Meal Catalog ({} meals) ===", catalog.len());

    for slot in MealSlot::ALL {
        println!();
        println!("{}:", slot.title());
        for meal in catalog.slot(slot) {
            println!(
                "  {:<26} {:>4} cal  P:{:>3} C:{:>3} F:{:>3}",
                meal.name, meal.calories, meal.protein, meal.carbs, meal.fat
            );
        }
    }
    println!();
}
