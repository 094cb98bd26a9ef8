use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::PlannerConfig;
use crate::error::{FuelError, Result};

/// Sex used to pick the Mifflin-St Jeor constant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Parse a free-text value; missing or unrecognized input falls back to male.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Gender {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(FuelError::InvalidInput(format!("unknown gender '{}'", other))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// Daily activity level, mapped to a TDEE multiplier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    Extreme,
}

impl ActivityLevel {
    /// Parse a free-text value; missing or unrecognized input falls back to moderate.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for ActivityLevel {
    type Err = FuelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "extreme" => Ok(ActivityLevel::Extreme),
            other => Err(FuelError::InvalidInput(format!(
                "unknown activity level '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::Extreme => "extreme",
        };
        write!(f, "{}", name)
    }
}

/// Body metrics as entered by the user, before any defaulting.
///
/// Fields are kept as text so that hand-edited state files and prompt answers
/// go through the same parsing rules. Stored metrics may be JSON numbers or
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileInput {
    #[serde(deserialize_with = "metric_text")]
    pub weight: Option<String>,
    #[serde(deserialize_with = "metric_text")]
    pub height: Option<String>,
    #[serde(deserialize_with = "metric_text")]
    pub age: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "activityLevel")]
    pub activity_level: Option<String>,
}

impl ProfileInput {
    pub fn new(weight: &str, height: &str, age: &str) -> Self {
        Self {
            weight: Some(weight.to_string()),
            height: Some(height.to_string()),
            age: Some(age.to_string()),
            ..Default::default()
        }
    }

    /// Resolve into a usable profile.
    ///
    /// Lenient mode reads the leading integer of each metric and substitutes the
    /// configured default when it is missing, unparsable, or zero. Strict mode
    /// rejects anything that is not a positive whole number and any gender or
    /// activity string it does not recognize.
    pub fn resolve(&self, config: &PlannerConfig) -> Result<UserProfile> {
        let gender_text = self.gender.as_deref().or(config.gender.as_deref());
        let activity_text = self
            .activity_level
            .as_deref()
            .or(config.activity_level.as_deref());

        if config.strict {
            return Ok(UserProfile {
                weight_lb: strict_metric("weight", self.weight.as_deref())?,
                height_in: strict_metric("height", self.height.as_deref())?,
                age: strict_metric("age", self.age.as_deref())?,
                gender: gender_text
                    .map(str::parse::<Gender>)
                    .transpose()?
                    .unwrap_or_default(),
                activity_level: activity_text
                    .map(str::parse::<ActivityLevel>)
                    .transpose()?
                    .unwrap_or_default(),
            });
        }

        let defaults = &config.defaults;
        Ok(UserProfile {
            weight_lb: lenient_metric(self.weight.as_deref(), defaults.weight_lb),
            height_in: lenient_metric(self.height.as_deref(), defaults.height_in),
            age: lenient_metric(self.age.as_deref(), defaults.age),
            gender: Gender::parse_lenient(gender_text),
            activity_level: ActivityLevel::parse_lenient(activity_text),
        })
    }
}

/// Resolved body metrics for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub weight_lb: f64,
    pub height_in: f64,
    pub age: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

/// A stored value that may have been written as a number or as text.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    pub(crate) fn into_text(self) -> String {
        match self {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(t) => t,
        }
    }
}

fn metric_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(raw.map(NumberOrText::into_text))
}

/// Read the leading integer of a string: optional whitespace, optional sign,
/// then digits. Anything after the digits is ignored, and digit runs too long
/// for `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Only overflow can fail here
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(value * sign)
}

fn lenient_metric(text: Option<&str>, default: f64) -> f64 {
    match text.and_then(parse_leading_int) {
        Some(0) | None => default,
        Some(v) => v as f64,
    }
}

fn strict_metric(field: &str, text: Option<&str>) -> Result<f64> {
    let value = text
        .map(str::trim)
        .and_then(|t| t.parse::<u32>().ok())
        .filter(|v| *v > 0)
        .ok_or_else(|| {
            FuelError::InvalidInput(format!("{} must be a positive whole number", field))
        })?;
    Ok(value as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("165"), Some(165));
        assert_eq!(parse_leading_int("  72in"), Some(72));
        assert_eq!(parse_leading_int("180.7"), Some(180));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("+12"), Some(12));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_parse_leading_int_saturates() {
        assert_eq!(parse_leading_int("99999999999999999999lb"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(-i64::MAX));

        let input = ProfileInput::new("99999999999999999999", "68", "28");
        let profile = input.resolve(&PlannerConfig::default()).unwrap();
        assert_eq!(profile.weight_lb, i64::MAX as f64);
    }

    #[test]
    fn test_numeric_metrics_from_json() {
        let json = r#"{"weight": 150, "height": 64.5, "age": "30", "gender": "female"}"#;
        let input: ProfileInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.weight.as_deref(), Some("150"));
        assert_eq!(input.height.as_deref(), Some("64.5"));

        let profile = input.resolve(&PlannerConfig::default()).unwrap();
        assert_eq!(profile.weight_lb, 150.0);
        assert_eq!(profile.height_in, 64.0);
        assert_eq!(profile.age, 30.0);
        assert_eq!(profile.gender, Gender::Female);
    }

    #[test]
    fn test_lenient_defaults() {
        let config = PlannerConfig::default();
        let input = ProfileInput {
            weight: Some("heavy".to_string()),
            height: None,
            age: Some("0".to_string()),
            ..Default::default()
        };

        let profile = input.resolve(&config).unwrap();
        assert_eq!(profile.weight_lb, 165.0);
        assert_eq!(profile.height_in, 68.0);
        assert_eq!(profile.age, 28.0);
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_lenient_keeps_negative_values() {
        let config = PlannerConfig::default();
        let input = ProfileInput::new("-10", "68", "28");
        let profile = input.resolve(&config).unwrap();
        assert_eq!(profile.weight_lb, -10.0);
    }

    #[test]
    fn test_strict_rejects_bad_metric() {
        let config = PlannerConfig {
            strict: true,
            ..Default::default()
        };
        let input = ProfileInput::new("165lb", "68", "28");
        assert!(matches!(
            input.resolve(&config),
            Err(FuelError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_strict_rejects_unknown_gender() {
        let config = PlannerConfig {
            strict: true,
            ..Default::default()
        };
        let mut input = ProfileInput::new("165", "68", "28");
        input.gender = Some("unspecified".to_string());
        assert!(input.resolve(&config).is_err());

        input.gender = Some("Female".to_string());
        assert_eq!(input.resolve(&config).unwrap().gender, Gender::Female);
    }

    #[test]
    fn test_unknown_gender_falls_back_to_male() {
        assert_eq!(Gender::parse_lenient(Some("other")), Gender::Male);
        assert_eq!(Gender::parse_lenient(None), Gender::Male);
        assert_eq!(Gender::parse_lenient(Some("f")), Gender::Female);
    }

    #[test]
    fn test_unknown_activity_falls_back_to_moderate() {
        assert_eq!(
            ActivityLevel::parse_lenient(Some("couch")),
            ActivityLevel::Moderate
        );
        assert_eq!(
            ActivityLevel::parse_lenient(Some("Extreme")),
            ActivityLevel::Extreme
        );
    }
}
