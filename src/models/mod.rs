pub mod goal;
pub mod plan;

pub use goal::{Goal, Level, SubTier, UserProfile};
pub use plan::{completion_key, DayEntry, Dose, ExercisePrescription, TrainingPlan, WeekEntry};
