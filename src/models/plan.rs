//! Training plan structure handed to the presentation layer.
//!
//! A plan is derived data: regenerated from (levels, goals, responses) and
//! never persisted or mutated in place.

use serde::{Deserialize, Serialize};

/// How an exercise is dosed: a rep count or a timed hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Dose {
    Reps { reps: u32 },
    Hold { seconds: u32 },
}

impl std::fmt::Display for Dose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dose::Reps { reps } => write!(f, "Reps: {}", reps),
            Dose::Hold { seconds } => write!(f, "Hold: {} sec", seconds),
        }
    }
}

/// One catalog entry: exercise name plus dose, sets, and rest interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExercisePrescription {
    pub name: &'static str,
    pub dose: Dose,
    pub sets: u32,
    pub rest: &'static str,
}

/// A single training day within a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub day_name: &'static str,
    pub exercises: Vec<ExercisePrescription>,
}

/// One labeled week of the cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekEntry {
    pub label: String,
    pub days: Vec<DayEntry>,
}

/// The full multi-week calendar. An empty plan means "no applicable
/// routine"; the presentation layer shows a no-plan state, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainingPlan {
    pub weeks: Vec<WeekEntry>,
}

impl TrainingPlan {
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Look up a day by positional (week, day) index.
    pub fn day(&self, week: usize, day: usize) -> Option<&DayEntry> {
        self.weeks.get(week).and_then(|w| w.days.get(day))
    }

    /// Total number of day entries across all weeks.
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }
}

/// Key into the persisted completion map for a positional day.
pub fn completion_key(week: usize, day: usize) -> String {
    format!("{}-{}", week, day)
}
