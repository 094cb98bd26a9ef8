use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PlannerConfig;
use crate::error::{FuelError, Result};
use crate::models::{DayPlan, ProfileInput, WeekPlan, Weekday, WeeklySchedule, WorkoutDay};
use crate::planner::{MealCatalog, generate_week_plan};

/// Everything persisted for the user between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserData {
    pub profile: Option<ProfileInput>,
    pub schedule: WeeklySchedule,
    pub week_schedule: Option<WeekPlan>,
    pub meal_plan_generated: bool,
    pub last_generated: Option<DateTime<Utc>>,
}

/// Owns the user's record for the duration of one command.
pub struct UserState {
    data: UserData,
}

impl UserState {
    pub fn new(data: UserData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &UserData {
        &self.data
    }

    pub fn profile(&self) -> Option<&ProfileInput> {
        self.data.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: ProfileInput) {
        self.data.profile = Some(profile);
    }

    pub fn schedule(&self) -> &WeeklySchedule {
        &self.data.schedule
    }

    /// Workout entered for a weekday, or a rest day when none was entered.
    pub fn workout_for(&self, weekday: Weekday) -> WorkoutDay {
        self.data
            .schedule
            .get(&weekday)
            .cloned()
            .unwrap_or_default()
    }

    pub fn set_workout(&mut self, weekday: Weekday, workout: WorkoutDay) {
        self.data.schedule.insert(weekday, workout);
    }

    pub fn set_schedule(&mut self, schedule: WeeklySchedule) {
        self.data.schedule = schedule;
    }

    /// Run the planner and replace any previous week plan.
    ///
    /// Aborts with [`FuelError::ProfileNotSet`] before computing anything when
    /// no profile has been entered.
    pub fn generate_plan(
        &mut self,
        config: &PlannerConfig,
        catalog: &MealCatalog,
        now: DateTime<Utc>,
    ) -> Result<&WeekPlan> {
        let input = self.data.profile.as_ref().ok_or(FuelError::ProfileNotSet)?;
        let profile = input.resolve(config)?;

        let plan = generate_week_plan(&profile, &self.data.schedule, catalog)?;
        info!(
            weight_lb = profile.weight_lb,
            height_in = profile.height_in,
            age = profile.age,
            "Generated week plan"
        );

        self.data.meal_plan_generated = true;
        self.data.last_generated = Some(now);
        Ok(&*self.data.week_schedule.insert(plan))
    }

    /// The saved week plan, if one has been generated.
    pub fn week_plan(&self) -> Result<&WeekPlan> {
        match (&self.data.week_schedule, self.data.meal_plan_generated) {
            (Some(plan), true) => Ok(plan),
            _ => Err(FuelError::NoPlanGenerated),
        }
    }

    /// Plan for the weekday that `date` falls on.
    pub fn plan_for_date(&self, date: NaiveDate) -> Result<(Weekday, &DayPlan)> {
        use chrono::Datelike;

        let weekday = Weekday::from(date.weekday());
        let day = self
            .week_plan()?
            .day(weekday)
            .ok_or(FuelError::NoPlanGenerated)?;
        Ok((weekday, day))
    }

    /// Plan for the current local day.
    pub fn today_plan(&self) -> Result<(Weekday, &DayPlan)> {
        self.plan_for_date(chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Intensity, WorkoutType};

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-02T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_generate_without_profile_fails() {
        let mut state = UserState::new(UserData::default());
        let result = state.generate_plan(&PlannerConfig::default(), MealCatalog::builtin(), now());

        assert!(matches!(result, Err(FuelError::ProfileNotSet)));
        assert!(!state.data().meal_plan_generated);
        assert!(state.data().week_schedule.is_none());
    }

    #[test]
    fn test_generate_sets_flag_and_timestamp() {
        let mut state = UserState::new(UserData::default());
        state.set_profile(ProfileInput::new("165", "68", "28"));
        state.set_workout(
            Weekday::Monday,
            WorkoutDay::new(WorkoutType::Strength, 45, Intensity::Moderate),
        );

        let plan = state
            .generate_plan(&PlannerConfig::default(), MealCatalog::builtin(), now())
            .unwrap();
        assert_eq!(plan.len(), 7);

        assert!(state.data().meal_plan_generated);
        assert_eq!(state.data().last_generated, Some(now()));
    }

    #[test]
    fn test_regenerate_overwrites() {
        let mut state = UserState::new(UserData::default());
        state.set_profile(ProfileInput::new("165", "68", "28"));
        let config = PlannerConfig::default();

        let first = state
            .generate_plan(&config, MealCatalog::builtin(), now())
            .unwrap()
            .clone();

        state.set_profile(ProfileInput::new("220", "74", "35"));
        let second = state
            .generate_plan(&config, MealCatalog::builtin(), now())
            .unwrap();

        assert_ne!(&first, second);
    }

    #[test]
    fn test_plan_for_date() {
        let mut state = UserState::new(UserData::default());
        assert!(matches!(
            state.week_plan(),
            Err(FuelError::NoPlanGenerated)
        ));

        state.set_profile(ProfileInput::default());
        state
            .generate_plan(&PlannerConfig::default(), MealCatalog::builtin(), now())
            .unwrap();

        // 2026-03-04 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        let (weekday, _) = state.plan_for_date(date).unwrap();
        assert_eq!(weekday, Weekday::Wednesday);
    }

    #[test]
    fn test_workout_for_defaults_to_rest() {
        let state = UserState::new(UserData::default());
        assert_eq!(state.workout_for(Weekday::Sunday), WorkoutDay::rest());
    }
}
