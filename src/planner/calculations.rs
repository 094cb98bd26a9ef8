use crate::models::{ActivityLevel, Gender, Intensity, NutritionTarget, WorkoutType};
use crate::planner::constants::*;

/// Round to the nearest integer, halves toward positive infinity.
#[inline]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// Takes imperial inputs and converts to kg/cm. No range checks: zero or
/// negative metrics produce whatever the formula gives.
pub fn calculate_bmr(weight_lb: f64, height_in: f64, age: f64, gender: Gender) -> f64 {
    let weight_kg = weight_lb * LB_TO_KG;
    let height_cm = height_in * IN_TO_CM;

    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };

    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + offset
}

/// Total daily energy expenditure: BMR scaled by activity.
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity_multiplier(activity)
}

/// Estimated calories burned by a workout.
///
/// Rest days and zero-length sessions burn nothing.
pub fn calculate_workout_calories(
    workout_type: WorkoutType,
    duration_min: u32,
    intensity: Intensity,
) -> u64 {
    if workout_type.is_rest() || duration_min == 0 {
        return 0;
    }

    let rate = burn_rate(workout_type, intensity);
    round_half_up(rate * duration_min as f64).max(0) as u64
}

/// Percentage split of daily calories across macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroSplit {
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fat_pct: u32,
}

impl MacroSplit {
    /// Split for a workout category.
    ///
    /// Rest favours fat, strength favours protein, cardio and HIIT favour carbs.
    pub fn for_workout(workout_type: WorkoutType) -> Self {
        let (protein_pct, carbs_pct, fat_pct) = match workout_type {
            WorkoutType::Rest => (30, 35, 35),
            WorkoutType::Strength => (35, 40, 25),
            WorkoutType::Cardio | WorkoutType::Hiit => (25, 50, 25),
            _ => (30, 40, 30),
        };
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    pub fn total_pct(&self) -> u32 {
        self.protein_pct + self.carbs_pct + self.fat_pct
    }
}

fn macro_grams(total_calories: i64, pct: u32, kcal_per_gram: f64) -> i64 {
    round_half_up(total_calories as f64 * pct as f64 / 100.0 / kcal_per_gram)
}

/// Gram targets for a day's calories.
///
/// Each macro is rounded on its own, so the grams need not add back up to
/// `total_calories` exactly.
pub fn calculate_macros(total_calories: i64, workout_type: WorkoutType) -> NutritionTarget {
    let split = MacroSplit::for_workout(workout_type);

    NutritionTarget {
        total_calories,
        protein: macro_grams(total_calories, split.protein_pct, PROTEIN_KCAL_PER_GRAM),
        carbs: macro_grams(total_calories, split.carbs_pct, CARBS_KCAL_PER_GRAM),
        fat: macro_grams(total_calories, split.fat_pct, FAT_KCAL_PER_GRAM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
    }

    #[test]
    fn test_bmr_male_vs_female() {
        let male = calculate_bmr(154.0, 68.0, 28.0, Gender::Male);
        let female = calculate_bmr(154.0, 68.0, 28.0, Gender::Female);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_multipliers() {
        assert!((calculate_tdee(1000.0, ActivityLevel::Sedentary) - 1200.0).abs() < 1e-9);
        assert!((calculate_tdee(1000.0, ActivityLevel::Extreme) - 1900.0).abs() < 1e-9);
    }

    #[test]
    fn test_workout_calories_table() {
        assert_eq!(
            calculate_workout_calories(WorkoutType::Yoga, 60, Intensity::Low),
            120
        );
        assert_eq!(
            calculate_workout_calories(WorkoutType::Sports, 10, Intensity::High),
            120
        );
        // Unknown combinations burn 5 kcal/min
        assert_eq!(
            calculate_workout_calories(WorkoutType::Other, 20, Intensity::High),
            100
        );
        assert_eq!(
            calculate_workout_calories(WorkoutType::Cardio, 20, Intensity::Other),
            100
        );
    }

    #[test]
    fn test_long_sessions_do_not_wrap() {
        assert_eq!(
            calculate_workout_calories(WorkoutType::Hiit, 300_000_000, Intensity::High),
            4_800_000_000
        );
        assert_eq!(
            calculate_workout_calories(WorkoutType::Hiit, u32::MAX, Intensity::High),
            16 * u32::MAX as u64
        );
    }

    #[test]
    fn test_zero_duration_burns_nothing() {
        assert_eq!(
            calculate_workout_calories(WorkoutType::Hiit, 0, Intensity::High),
            0
        );
    }

    #[test]
    fn test_macro_rounding_is_per_macro() {
        let target = calculate_macros(2000, WorkoutType::Rest);
        // 600/4, 700/4, 700/9
        assert_eq!(target.protein, 150);
        assert_eq!(target.carbs, 175);
        assert_eq!(target.fat, 78);
        assert_eq!(target.total_calories, 2000);
    }

    #[test]
    fn test_default_split_for_other_types() {
        assert_eq!(
            MacroSplit::for_workout(WorkoutType::Yoga),
            MacroSplit::for_workout(WorkoutType::Other)
        );
        assert_eq!(MacroSplit::for_workout(WorkoutType::Sports).protein_pct, 30);
    }
}
