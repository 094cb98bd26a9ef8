use std::fmt;

use serde::{Deserialize, Serialize};

/// A canned meal with its macro profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    pub name: String,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub calories: u32,
    pub ingredients: Vec<String>,
}

impl MealRecord {
    pub fn new(
        name: &str,
        protein: u32,
        carbs: u32,
        fat: u32,
        calories: u32,
        ingredients: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            protein,
            carbs,
            fat,
            calories,
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    /// Absolute calorie distance from a target.
    #[inline]
    pub fn deviation(&self, target: i64) -> i64 {
        (self.calories as i64 - target).abs()
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Meal occasion within a day. Ordering is the order meals are eaten.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MealSlot {
    Breakfast,
    PreWorkout,
    PostWorkout,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::PreWorkout,
        MealSlot::PostWorkout,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Heading used when rendering a plan.
    pub fn title(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::PreWorkout => "Pre-Workout Snack",
            MealSlot::PostWorkout => "Post-Workout Meal",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::PreWorkout => "preWorkout",
            MealSlot::PostWorkout => "postWorkout",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deviation() {
        let meal = MealRecord::new("Shake", 25, 8, 3, 160, &["whey", "water"]);
        assert_eq!(meal.deviation(200), 40);
        assert_eq!(meal.deviation(100), 60);
        assert_eq!(meal.deviation(160), 0);
    }

    #[test]
    fn test_slot_serialization() {
        assert_eq!(
            serde_json::to_string(&MealSlot::PreWorkout).unwrap(),
            "\"preWorkout\""
        );
        let slot: MealSlot = serde_json::from_str("\"postWorkout\"").unwrap();
        assert_eq!(slot, MealSlot::PostWorkout);
    }
}
