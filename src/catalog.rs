//! Exercise catalog: fixed routine tables consumed by the plan generator.
//!
//! Each routine is an ordered list of prescriptions for one training day.
//! Routines come in first-half/second-half pairs per (goal, sub-tier); the
//! generator picks the pair and the half-cycle split. No runtime mutation.

use crate::models::{Dose, ExercisePrescription};

/// A named, fixed, ordered list of exercise prescriptions.
#[derive(Debug, Clone, Copy)]
pub struct Routine {
    pub id: &'static str,
    pub exercises: &'static [ExercisePrescription],
}

const fn reps(name: &'static str, reps: u32, sets: u32, rest: &'static str) -> ExercisePrescription {
    ExercisePrescription {
        name,
        dose: Dose::Reps { reps },
        sets,
        rest,
    }
}

const fn hold(name: &'static str, seconds: u32, sets: u32, rest: &'static str) -> ExercisePrescription {
    ExercisePrescription {
        name,
        dose: Dose::Hold { seconds },
        sets,
        rest,
    }
}

pub const PLANCHE_EARLY_FIRST_HALF: &[ExercisePrescription] = &[
    reps("Regular Push-Ups", 3, 10, "1 min"),
    reps("Regular Dips (Assisted/Unassisted)", 3, 2, "2 min"),
    hold("Knee Pseudo Lean Hold", 5, 5, "1 min"),
    reps("Warm-Up: Shoulder Dislocates", 10, 2, "30 sec"),
    reps("Cool Down: Knee Retracted Scapula Shrugs", 3, 5, "1 min"),
    reps("Resistance Training: Straight Arm Band Flies", 10, 3, "30 sec"),
];

pub const PLANCHE_EARLY_SECOND_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Wrist Circles", 10, 2, "30 sec"),
    reps("Incline Pseudo Planche Push-Ups", 5, 4, "1 min 30 sec"),
    hold("Knee Pseudo Lean Hold", 8, 5, "1 min"),
    hold("Frog Stand", 10, 3, "1 min"),
    reps("Cool Down: Scapula Push-Ups", 8, 3, "45 sec"),
];

pub const PLANCHE_MID_FIRST_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Shoulder Dislocates", 10, 2, "30 sec"),
    reps("Pseudo Planche Push-Ups", 4, 4, "2 min"),
    hold("Pseudo Planche Lean Hold", 8, 5, "1 min 30 sec"),
    hold("Frog Stand", 15, 3, "1 min"),
    reps("Resistance Training: Straight Arm Band Flies", 12, 3, "45 sec"),
];

pub const PLANCHE_MID_SECOND_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Wrist Push-Ups", 8, 2, "30 sec"),
    reps("Pseudo Planche Push-Ups (Elevated Feet)", 4, 3, "2 min"),
    hold("Tuck Planche Hold", 5, 6, "1 min 30 sec"),
    reps("Tuck Planche Swings", 5, 3, "1 min"),
    reps("Cool Down: Retracted Scapula Shrugs", 10, 3, "1 min"),
];

pub const PLANCHE_LATE_FIRST_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Band Shoulder Dislocates", 12, 2, "30 sec"),
    hold("Tuck Planche Hold", 10, 5, "2 min"),
    reps("Tuck Planche Push-Ups", 3, 4, "2 min"),
    reps("Pseudo Planche Push-Ups (Elevated Feet)", 6, 3, "1 min 30 sec"),
    hold("Resistance Training: Band Planche Lean", 10, 3, "1 min"),
];

pub const PLANCHE_LATE_SECOND_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Wrist Push-Ups", 10, 2, "30 sec"),
    hold("Advanced Tuck Planche Hold", 6, 5, "2 min"),
    reps("Tuck Planche Push-Ups", 5, 4, "2 min"),
    hold("Band Assisted Straddle Planche", 8, 3, "2 min"),
    reps("Cool Down: Scapula Push-Ups", 10, 3, "45 sec"),
];

pub const FRONT_LEVER_EARLY_FIRST_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Scapula Pulls", 8, 2, "30 sec"),
    reps("Australian Pull-Ups", 6, 4, "1 min 30 sec"),
    hold("Dead Hang", 20, 3, "1 min"),
    reps("Negative Pull-Ups", 3, 3, "2 min"),
    reps("Resistance Training: Band Straight Arm Pulldowns", 10, 3, "45 sec"),
];

pub const FRONT_LEVER_EARLY_SECOND_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Scapula Pulls", 10, 2, "30 sec"),
    reps("Australian Pull-Ups (Feet Elevated)", 6, 4, "1 min 30 sec"),
    hold("Band Assisted Tuck Front Lever", 6, 4, "1 min 30 sec"),
    hold("Arch Hangs", 10, 3, "1 min"),
    hold("Cool Down: Dead Hang", 30, 2, "1 min"),
];

pub const FRONT_LEVER_MID_FIRST_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Scapula Pulls", 10, 2, "30 sec"),
    hold("Tuck Front Lever Hold", 6, 5, "1 min 30 sec"),
    reps("Pull-Ups", 5, 4, "2 min"),
    reps("Tuck Front Lever Rows", 4, 3, "1 min 30 sec"),
    reps("Resistance Training: Band Straight Arm Pulldowns", 12, 3, "45 sec"),
];

pub const FRONT_LEVER_MID_SECOND_HALF: &[ExercisePrescription] = &[
    hold("Warm-Up: Arch Hangs", 10, 2, "30 sec"),
    hold("Tuck Front Lever Hold", 10, 5, "1 min 30 sec"),
    reps("Tuck Front Lever Raises", 4, 3, "1 min 30 sec"),
    reps("Pull-Ups", 6, 4, "2 min"),
    hold("Cool Down: Dead Hang", 30, 2, "1 min"),
];

pub const FRONT_LEVER_LATE_FIRST_HALF: &[ExercisePrescription] = &[
    reps("Warm-Up: Scapula Pulls", 12, 2, "30 sec"),
    hold("Advanced Tuck Front Lever Hold", 6, 5, "2 min"),
    reps("Front Lever Negatives", 3, 3, "2 min"),
    reps("Tuck Front Lever Raises", 6, 3, "1 min 30 sec"),
    reps("Resistance Training: Band Straight Arm Pulldowns", 12, 3, "45 sec"),
];

pub const FRONT_LEVER_LATE_SECOND_HALF: &[ExercisePrescription] = &[
    hold("Warm-Up: Arch Hangs", 12, 2, "30 sec"),
    hold("Advanced Tuck Front Lever Hold", 10, 5, "2 min"),
    hold("Single Leg Front Lever Hold", 5, 4, "2 min"),
    reps("Front Lever Negatives", 4, 3, "2 min"),
    hold("Cool Down: Dead Hang", 30, 2, "1 min"),
];

/// Every routine in the catalog.
pub const ROUTINES: &[Routine] = &[
    Routine { id: "planche_early_first_half", exercises: PLANCHE_EARLY_FIRST_HALF },
    Routine { id: "planche_early_second_half", exercises: PLANCHE_EARLY_SECOND_HALF },
    Routine { id: "planche_mid_first_half", exercises: PLANCHE_MID_FIRST_HALF },
    Routine { id: "planche_mid_second_half", exercises: PLANCHE_MID_SECOND_HALF },
    Routine { id: "planche_late_first_half", exercises: PLANCHE_LATE_FIRST_HALF },
    Routine { id: "planche_late_second_half", exercises: PLANCHE_LATE_SECOND_HALF },
    Routine { id: "front_lever_early_first_half", exercises: FRONT_LEVER_EARLY_FIRST_HALF },
    Routine { id: "front_lever_early_second_half", exercises: FRONT_LEVER_EARLY_SECOND_HALF },
    Routine { id: "front_lever_mid_first_half", exercises: FRONT_LEVER_MID_FIRST_HALF },
    Routine { id: "front_lever_mid_second_half", exercises: FRONT_LEVER_MID_SECOND_HALF },
    Routine { id: "front_lever_late_first_half", exercises: FRONT_LEVER_LATE_FIRST_HALF },
    Routine { id: "front_lever_late_second_half", exercises: FRONT_LEVER_LATE_SECOND_HALF },
];

/// Look up a routine by id. `None` only happens if a caller fabricates an
/// id the generator's dispatch tables never produce.
pub fn find_routine(id: &str) -> Option<&'static Routine> {
    ROUTINES.iter().find(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_routine_known_id() {
        let routine = find_routine("planche_early_first_half").expect("routine should exist");
        assert_eq!(routine.exercises.len(), 6);
        assert_eq!(routine.exercises[0].name, "Regular Push-Ups");
        assert_eq!(routine.exercises[0].dose, Dose::Reps { reps: 3 });
        assert_eq!(routine.exercises[0].sets, 10);
        assert_eq!(routine.exercises[0].rest, "1 min");
    }

    #[test]
    fn test_find_routine_unknown_id() {
        assert!(find_routine("handstand_early_first_half").is_none());
    }

    #[test]
    fn test_routine_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for routine in ROUTINES {
            assert!(seen.insert(routine.id), "duplicate routine id: {}", routine.id);
        }
    }

    #[test]
    fn test_every_routine_has_exercises() {
        for routine in ROUTINES {
            assert!(
                !routine.exercises.is_empty(),
                "routine {} is empty",
                routine.id
            );
        }
    }

    #[test]
    fn test_catalog_covers_both_goals_all_tiers() {
        for goal in ["planche", "front_lever"] {
            for tier in ["early", "mid", "late"] {
                for half in ["first_half", "second_half"] {
                    let id = format!("{}_{}_{}", goal, tier, half);
                    assert!(find_routine(&id).is_some(), "missing routine: {}", id);
                }
            }
        }
    }
}
