use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{ActivityLevel, Intensity, MealSlot, WorkoutType};

/// Pounds to kilograms.
pub const LB_TO_KG: f64 = 0.453592;

/// Inches to centimetres.
pub const IN_TO_CM: f64 = 2.54;

/// Mifflin-St Jeor sex constants.
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

/// TDEE multiplier applied when the activity level has no table entry.
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

/// Burn rate (kcal/min) for workout/intensity pairs missing from the table.
pub const DEFAULT_BURN_RATE: f64 = 5.0;

/// Energy density per gram of each macro.
pub const PROTEIN_KCAL_PER_GRAM: f64 = 4.0;
pub const CARBS_KCAL_PER_GRAM: f64 = 4.0;
pub const FAT_KCAL_PER_GRAM: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal slot allocation (share of the day's total, calorie tolerance)
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SHARE: f64 = 0.28;
pub const BREAKFAST_TOLERANCE: i64 = 100;

pub const DINNER_SHARE: f64 = 0.30;
pub const DINNER_TOLERANCE: i64 = 100;

pub const PRE_WORKOUT_SHARE: f64 = 0.12;
pub const PRE_WORKOUT_TOLERANCE: i64 = 60;

pub const POST_WORKOUT_SHARE: f64 = 0.30;
pub const POST_WORKOUT_TOLERANCE: i64 = 120;

/// A snack is added only when more than this many calories are left over.
pub const SNACK_THRESHOLD: i64 = 150;
pub const SNACK_TOLERANCE: i64 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Profile fallbacks
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_WEIGHT_LB: f64 = 165.0;
pub const DEFAULT_HEIGHT_IN: f64 = 68.0;
pub const DEFAULT_AGE: f64 = 28.0;

/// Minimum Jaro-Winkler score for a fuzzy meal-name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// TDEE multipliers by activity level.
pub static ACTIVITY_MULTIPLIERS: LazyLock<HashMap<ActivityLevel, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert(ActivityLevel::Sedentary, 1.2);
    m.insert(ActivityLevel::Light, 1.375);
    m.insert(ActivityLevel::Moderate, 1.55);
    m.insert(ActivityLevel::Active, 1.725);
    m.insert(ActivityLevel::Extreme, 1.9);
    m
});

/// Calories burned per minute by workout type and intensity.
///
/// Rest has no entry; rest days never reach the lookup.
pub static CALORIE_RATES: LazyLock<HashMap<(WorkoutType, Intensity), f64>> =
    LazyLock::new(|| {
        let rows: [(WorkoutType, [f64; 3]); 5] = [
            (WorkoutType::Strength, [4.0, 6.0, 8.0]),
            (WorkoutType::Cardio, [8.0, 11.0, 14.0]),
            (WorkoutType::Hiit, [10.0, 13.0, 16.0]),
            (WorkoutType::Yoga, [2.0, 3.0, 4.0]),
            (WorkoutType::Sports, [6.0, 9.0, 12.0]),
        ];

        let mut m = HashMap::new();
        for (workout, rates) in rows {
            for (intensity, rate) in Intensity::SELECTABLE.into_iter().zip(rates) {
                m.insert((workout, intensity), rate);
            }
        }
        m
    });

/// Get the TDEE multiplier for an activity level.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    *ACTIVITY_MULTIPLIERS
        .get(&level)
        .unwrap_or(&DEFAULT_ACTIVITY_MULTIPLIER)
}

/// Get the per-minute burn rate for a workout.
pub fn burn_rate(workout: WorkoutType, intensity: Intensity) -> f64 {
    *CALORIE_RATES
        .get(&(workout, intensity))
        .unwrap_or(&DEFAULT_BURN_RATE)
}

/// Share of the day's calories and allowed deviation for a meal slot.
///
/// Snack is sized from the leftover calories, so it has no fixed share.
pub fn slot_allocation(slot: MealSlot) -> (Option<f64>, i64) {
    match slot {
        MealSlot::Breakfast => (Some(BREAKFAST_SHARE), BREAKFAST_TOLERANCE),
        MealSlot::PreWorkout => (Some(PRE_WORKOUT_SHARE), PRE_WORKOUT_TOLERANCE),
        MealSlot::PostWorkout => (Some(POST_WORKOUT_SHARE), POST_WORKOUT_TOLERANCE),
        MealSlot::Dinner => (Some(DINNER_SHARE), DINNER_TOLERANCE),
        MealSlot::Snack => (None, SNACK_TOLERANCE),
    }
}
