//! Cycle controller: the state machine behind the
//! onboarding, goal entry, plan, and new-cycle flow.
//!
//! All session state lives in one explicit value (`AppData` plus the current
//! phase) threaded through the controller; persistence is awaited after each
//! accepted transition. Write failures are logged and the in-memory state
//! keeps going; the change may be lost on restart, which is accepted.

use std::collections::{BTreeMap, BTreeSet};

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, warn};

use crate::classifier;
use crate::models::{completion_key, Goal, Level, TrainingPlan};
use crate::planner;
use crate::store::{self, AppData, StoreError};

/// Where the user is in the flow. Persisted state decides the starting
/// phase on process start; transitions move it forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Onboarding,
    GoalAndTierEntry,
    ReadyForPlan,
}

/// Blocking user-input failures at a gate. No state transition occurs; the
/// message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    EmptyName,
    #[error("Select a strength level for {goal}")]
    MissingLevel { goal: Goal },
    #[error("Missing answer {index} for {goal} ({level})")]
    MissingResponse {
        goal: Goal,
        level: Level,
        index: usize,
    },
    #[error("Your {goal} numbers are beyond the Beginner range - select the Intermediate level instead")]
    ExceedsBeginnerBounds { goal: Goal },
    #[error("Week {week}, day {day} is not part of the current plan")]
    DayOutOfRange { week: usize, day: usize },
    #[error("'{action}' is not available right now")]
    WrongPhase { action: &'static str },
}

/// Orchestrates the onboarding/plan/progress flow over the store and the
/// plan generator.
pub struct CycleController {
    pool: SqlitePool,
    phase: Phase,
    data: AppData,
}

impl CycleController {
    /// Load persisted state once and pick the starting phase: returning
    /// users (composite check) land on their plan, everyone else onboards.
    pub async fn start(pool: SqlitePool) -> Self {
        let data = store::load(&pool).await;
        let phase = if store::is_returning_user(&data) {
            Phase::ReadyForPlan
        } else {
            Phase::Onboarding
        };

        info!(?phase, "session started");
        Self { pool, phase, data }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    fn require_phase(&self, expected: Phase, action: &'static str) -> Result<(), ValidationError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ValidationError::WrongPhase { action })
        }
    }

    fn log_write_failure(result: Result<(), StoreError>, slice: &str) {
        if let Err(e) = result {
            // In-memory state already advanced; the change may not survive
            // a restart.
            warn!(slice, error = %e, "persist failed");
        }
    }

    /// Onboarding gate: accept a non-empty name.
    pub async fn submit_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.require_phase(Phase::Onboarding, "submit name")?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        self.data.profile.name = name.to_string();
        Self::log_write_failure(
            store::save_onboarding(&self.pool, &self.data.profile).await,
            store::KEY_NAME,
        );

        self.phase = Phase::GoalAndTierEntry;
        Ok(())
    }

    /// Goal-entry gate: every selected goal needs a level, every question of
    /// that level needs an answer, and Beginner answers must pass the
    /// upper-bound gate.
    pub async fn submit_goal_data(
        &mut self,
        goals: BTreeSet<Goal>,
        levels: BTreeMap<Goal, Level>,
        responses: BTreeMap<String, String>,
    ) -> Result<(), ValidationError> {
        self.require_phase(Phase::GoalAndTierEntry, "submit goal data")?;
        validate_goal_data(&goals, &levels, &responses)?;

        self.data.goals = goals;
        self.data.levels = levels;
        self.data.responses = responses;
        Self::log_write_failure(
            store::save_goal_data(
                &self.pool,
                &self.data.goals,
                &self.data.levels,
                &self.data.responses,
            )
            .await,
            "goal data",
        );

        self.phase = Phase::ReadyForPlan;
        Ok(())
    }

    /// Generate the calendar for the current cycle. Idempotent; no state
    /// change.
    pub fn view_plan(&self) -> Result<TrainingPlan, ValidationError> {
        self.require_phase(Phase::ReadyForPlan, "view plan")?;
        Ok(planner::generate(
            &self.data.levels,
            &self.data.goals,
            &self.data.responses,
        ))
    }

    /// Flip one day's completion mark and persist immediately. Returns the
    /// new value.
    pub async fn toggle_day(&mut self, week: usize, day: usize) -> Result<bool, ValidationError> {
        self.require_phase(Phase::ReadyForPlan, "toggle day")?;

        let plan = planner::generate(&self.data.levels, &self.data.goals, &self.data.responses);
        if plan.day(week, day).is_none() {
            return Err(ValidationError::DayOutOfRange { week, day });
        }

        let key = completion_key(week, day);
        let completed = !self.data.completed_days.get(&key).copied().unwrap_or(false);
        self.data.completed_days.insert(key, completed);

        Self::log_write_failure(
            store::save_completion(&self.pool, &self.data.completed_days).await,
            store::KEY_COMPLETED_DAYS,
        );

        Ok(completed)
    }

    /// Start a new cycle: drop everything except the profile and return to
    /// goal entry for fresh benchmarks.
    pub async fn new_cycle(&mut self) -> Result<(), ValidationError> {
        self.require_phase(Phase::ReadyForPlan, "start new cycle")?;

        Self::log_write_failure(store::reset_for_new_cycle(&self.pool).await, "new cycle");

        let profile = std::mem::take(&mut self.data.profile);
        self.data = AppData {
            profile,
            ..AppData::default()
        };
        self.phase = Phase::GoalAndTierEntry;

        info!("new cycle started");
        Ok(())
    }

    /// Full reset: clear everything, including the profile, from any phase.
    pub async fn reset(&mut self) {
        Self::log_write_failure(store::reset_all(&self.pool).await, "reset");

        self.data = AppData::default();
        self.phase = Phase::Onboarding;

        info!("full reset");
    }
}

fn validate_goal_data(
    goals: &BTreeSet<Goal>,
    levels: &BTreeMap<Goal, Level>,
    responses: &BTreeMap<String, String>,
) -> Result<(), ValidationError> {
    for &goal in goals {
        let Some(&level) = levels.get(&goal) else {
            return Err(ValidationError::MissingLevel { goal });
        };

        let questions = classifier::questions_for(level, goal);
        for index in 0..questions.len() {
            let key = classifier::response_key(goal, level, index);
            let answered = responses
                .get(&key)
                .is_some_and(|v| !v.trim().is_empty());
            if !answered {
                return Err(ValidationError::MissingResponse { goal, level, index });
            }
        }

        if level == Level::Beginner {
            let answers = classifier::beginner_answers(goal, responses);
            if classifier::exceeds_beginner_bounds(goal, answers) {
                return Err(ValidationError::ExceedsBeginnerBounds { goal });
            }
        }
    }

    Ok(())
}
