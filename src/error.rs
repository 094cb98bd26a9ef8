use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum FuelError {
    #[error("Profile not set. Run 'profile' to enter your body metrics first")]
    ProfileNotSet,

    #[error("No meal plan generated yet. Run 'plan' first")]
    NoPlanGenerated,

    #[error("Meal catalog has no entries for slot: {0}")]
    EmptyCatalog(MealSlot),

    #[error("Meal not found: {0}")]
    MealNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, FuelError>;
