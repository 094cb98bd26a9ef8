use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::profile::{NumberOrText, parse_leading_int};

/// Kind of training session planned for a day.
///
/// `Other` carries any activity name the planner has no burn-rate or
/// macro-split entry for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkoutType {
    #[default]
    Rest,
    Strength,
    Cardio,
    Hiit,
    Yoga,
    Sports,
    Other,
}

impl WorkoutType {
    /// Types offered at the prompt. `Other` only arrives from stored text.
    pub const SELECTABLE: [WorkoutType; 6] = [
        WorkoutType::Rest,
        WorkoutType::Strength,
        WorkoutType::Cardio,
        WorkoutType::Hiit,
        WorkoutType::Yoga,
        WorkoutType::Sports,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Rest => "rest",
            WorkoutType::Strength => "strength",
            WorkoutType::Cardio => "cardio",
            WorkoutType::Hiit => "hiit",
            WorkoutType::Yoga => "yoga",
            WorkoutType::Sports => "sports",
            WorkoutType::Other => "other",
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, WorkoutType::Rest)
    }
}

impl From<&str> for WorkoutType {
    /// Empty input means no workout was entered and reads as rest.
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "rest" => WorkoutType::Rest,
            "strength" => WorkoutType::Strength,
            "cardio" => WorkoutType::Cardio,
            "hiit" => WorkoutType::Hiit,
            "yoga" => WorkoutType::Yoga,
            "sports" => WorkoutType::Sports,
            _ => WorkoutType::Other,
        }
    }
}

impl From<String> for WorkoutType {
    fn from(value: String) -> Self {
        WorkoutType::from(value.as_str())
    }
}

impl From<WorkoutType> for String {
    fn from(value: WorkoutType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutType::Hiit => write!(f, "HIIT"),
            WorkoutType::Strength => write!(f, "Strength Training"),
            other => {
                let name = other.as_str();
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
                    None => Ok(()),
                }
            }
        }
    }
}

/// Session intensity. `Other` is any unrecognized label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
    Other,
}

impl Intensity {
    /// Intensities with burn-rate entries, in table column order.
    pub const SELECTABLE: [Intensity; 3] = [Intensity::Low, Intensity::Moderate, Intensity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Moderate => "moderate",
            Intensity::High => "high",
            Intensity::Other => "other",
        }
    }
}

impl From<&str> for Intensity {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "moderate" => Intensity::Moderate,
            "low" => Intensity::Low,
            "high" => Intensity::High,
            _ => Intensity::Other,
        }
    }
}

impl From<String> for Intensity {
    fn from(value: String) -> Self {
        Intensity::from(value.as_str())
    }
}

impl From<Intensity> for String {
    fn from(value: Intensity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Calendar weekday. Ordering follows the plan week, Monday first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Lowercase key used in persisted plans.
    pub fn key(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// One day of the user's training week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkoutDay {
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,

    pub intensity: Intensity,

    /// Minutes. Non-numeric values in a state file read as 0.
    #[serde(deserialize_with = "lenient_minutes")]
    pub duration: u32,

    pub description: String,
}

impl WorkoutDay {
    pub fn new(workout_type: WorkoutType, duration: u32, intensity: Intensity) -> Self {
        Self {
            workout_type,
            intensity,
            duration,
            description: String::new(),
        }
    }

    pub fn rest() -> Self {
        Self::default()
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Workout input per weekday. Days without an entry are rest days.
pub type WeeklySchedule = BTreeMap<Weekday, WorkoutDay>;

fn lenient_minutes<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    let minutes = match raw {
        Some(NumberOrText::Number(n)) if n > 0.0 => n.trunc() as u32,
        Some(NumberOrText::Text(t)) => parse_leading_int(&t)
            .filter(|v| *v > 0)
            .map(|v| u32::try_from(v).unwrap_or(u32::MAX))
            .unwrap_or(0),
        _ => 0,
    };
    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_type_parsing() {
        assert_eq!(WorkoutType::from("HIIT"), WorkoutType::Hiit);
        assert_eq!(WorkoutType::from(""), WorkoutType::Rest);
        assert_eq!(WorkoutType::from("swimming"), WorkoutType::Other);
    }

    #[test]
    fn test_workout_day_defaults_from_json() {
        let day: WorkoutDay = serde_json::from_str("{}").unwrap();
        assert_eq!(day, WorkoutDay::rest());
        assert_eq!(day.intensity, Intensity::Moderate);
        assert_eq!(day.duration, 0);
    }

    #[test]
    fn test_workout_day_lenient_fields() {
        let json = r#"{"type": "Cardio", "duration": "40 min", "intensity": "extreme"}"#;
        let day: WorkoutDay = serde_json::from_str(json).unwrap();
        assert_eq!(day.workout_type, WorkoutType::Cardio);
        assert_eq!(day.duration, 40);
        assert_eq!(day.intensity, Intensity::Other);

        let day: WorkoutDay = serde_json::from_str(r#"{"duration": "soon"}"#).unwrap();
        assert_eq!(day.duration, 0);
    }

    #[test]
    fn test_duration_clamps_out_of_range() {
        let day: WorkoutDay = serde_json::from_str(r#"{"duration": "-30"}"#).unwrap();
        assert_eq!(day.duration, 0);

        let day: WorkoutDay = serde_json::from_str(r#"{"duration": -30}"#).unwrap();
        assert_eq!(day.duration, 0);

        let day: WorkoutDay = serde_json::from_str(r#"{"duration": 1e12}"#).unwrap();
        assert_eq!(day.duration, u32::MAX);

        let day: WorkoutDay = serde_json::from_str(r#"{"duration": "9999999999"}"#).unwrap();
        assert_eq!(day.duration, u32::MAX);
    }

    #[test]
    fn test_weekday_order_and_keys() {
        let mut days = Weekday::ALL.to_vec();
        days.reverse();
        days.sort();
        assert_eq!(days.first(), Some(&Weekday::Monday));
        assert_eq!(days.last(), Some(&Weekday::Sunday));
        assert_eq!(
            serde_json::to_string(&Weekday::Wednesday).unwrap(),
            "\"wednesday\""
        );
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }
}
