use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{MealRecord, MealSlot, Weekday, WorkoutDay};

/// Daily calorie and macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTarget {
    pub total_calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
}

/// The day's workout input together with its estimated burn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    #[serde(flatten)]
    pub workout: WorkoutDay,
    pub calories: u64,
}

/// Plan for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub workout: WorkoutSummary,
    pub nutrition: NutritionTarget,
    pub meals: BTreeMap<MealSlot, MealRecord>,
}

impl DayPlan {
    pub fn meal(&self, slot: MealSlot) -> Option<&MealRecord> {
        self.meals.get(&slot)
    }

    /// Calories of the selected meals, which need not match the target.
    pub fn planned_calories(&self) -> u32 {
        self.meals.values().map(|m| m.calories).sum()
    }
}

/// A full week of day plans keyed by weekday.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekPlan {
    days: BTreeMap<Weekday, DayPlan>,
}

impl WeekPlan {
    pub fn new(days: BTreeMap<Weekday, DayPlan>) -> Self {
        Self { days }
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.get(&weekday)
    }

    /// Days in Monday..Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (&Weekday, &DayPlan)> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
