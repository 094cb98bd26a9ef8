use std::collections::BTreeMap;

use tracing::debug;

use crate::error::Result;
use crate::models::{
    DayPlan, UserProfile, WeekPlan, Weekday, WeeklySchedule, WorkoutDay, WorkoutSummary,
};
use crate::planner::calculations::{
    calculate_bmr, calculate_macros, calculate_tdee, calculate_workout_calories, round_half_up,
};
use crate::planner::catalog::MealCatalog;
use crate::planner::selection::select_meals;

/// Build one day's plan on top of a precomputed TDEE.
pub fn plan_day(tdee: f64, workout: &WorkoutDay, catalog: &MealCatalog) -> Result<DayPlan> {
    let workout_calories =
        calculate_workout_calories(workout.workout_type, workout.duration, workout.intensity);
    let total_calories = round_half_up(tdee + workout_calories as f64);
    let nutrition = calculate_macros(total_calories, workout.workout_type);

    // Any non-rest type gets workout meals, even with no duration entered
    let has_workout = !workout.workout_type.is_rest();
    let meals = select_meals(catalog, total_calories, has_workout)?;

    Ok(DayPlan {
        workout: WorkoutSummary {
            workout: workout.clone(),
            calories: workout_calories,
        },
        nutrition,
        meals,
    })
}

/// Generate the Monday..Sunday plan for a profile and weekly schedule.
///
/// Weekdays missing from `schedule` are planned as rest days.
pub fn generate_week_plan(
    profile: &UserProfile,
    schedule: &WeeklySchedule,
    catalog: &MealCatalog,
) -> Result<WeekPlan> {
    let bmr = calculate_bmr(
        profile.weight_lb,
        profile.height_in,
        profile.age,
        profile.gender,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level);
    debug!(bmr, tdee, activity = %profile.activity_level, "Computed energy baseline");

    let rest = WorkoutDay::rest();
    let mut days = BTreeMap::new();

    for weekday in Weekday::ALL {
        let workout = schedule.get(&weekday).unwrap_or(&rest);
        let day = plan_day(tdee, workout, catalog)?;
        debug!(
            day = weekday.key(),
            workout = workout.workout_type.as_str(),
            burn = day.workout.calories,
            total = day.nutrition.total_calories,
            meals = day.meals.len(),
            "Planned day"
        );
        days.insert(weekday, day);
    }

    Ok(WeekPlan::new(days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender, Intensity, MealSlot, WorkoutType};

    fn profile() -> UserProfile {
        UserProfile {
            weight_lb: 165.0,
            height_in: 68.0,
            age: 28.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
        }
    }

    #[test]
    fn test_empty_schedule_is_all_rest() {
        let plan =
            generate_week_plan(&profile(), &WeeklySchedule::new(), MealCatalog::builtin())
                .unwrap();

        assert_eq!(plan.len(), 7);
        for (_, day) in plan.iter() {
            assert_eq!(day.workout.workout.workout_type, WorkoutType::Rest);
            assert_eq!(day.workout.calories, 0);
            assert!(day.meal(MealSlot::PreWorkout).is_none());
        }
    }

    #[test]
    fn test_zero_duration_workout_still_gets_workout_meals() {
        let day = plan_day(
            2500.0,
            &WorkoutDay::new(WorkoutType::Yoga, 0, Intensity::Low),
            MealCatalog::builtin(),
        )
        .unwrap();

        assert_eq!(day.workout.calories, 0);
        assert_eq!(day.nutrition.total_calories, 2500);
        assert!(day.meal(MealSlot::PreWorkout).is_some());
        assert!(day.meal(MealSlot::PostWorkout).is_some());
    }

    #[test]
    fn test_tdee_shared_across_days() {
        let mut schedule = WeeklySchedule::new();
        schedule.insert(
            Weekday::Friday,
            WorkoutDay::new(WorkoutType::Cardio, 30, Intensity::Moderate),
        );

        let plan = generate_week_plan(&profile(), &schedule, MealCatalog::builtin()).unwrap();
        let monday = plan.day(Weekday::Monday).unwrap();
        let friday = plan.day(Weekday::Friday).unwrap();
        let sunday = plan.day(Weekday::Sunday).unwrap();

        assert_eq!(monday.nutrition, sunday.nutrition);
        assert_eq!(friday.workout.calories, 330);
        let diff = friday.nutrition.total_calories - monday.nutrition.total_calories;
        assert!((329..=331).contains(&diff));
    }
}
