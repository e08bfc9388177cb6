//! Plan generation: combines selected goals, per-goal levels, and
//! questionnaire responses into a 4-week, day-by-day exercise calendar.
//!
//! Pure and deterministic: same inputs, same plan. Routine selection is a
//! keyed lookup per (goal, sub-tier); week/day assembly is a small fixed
//! combinator over how many goals actually contribute a routine.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{info, warn};

use crate::catalog::{self, Routine};
use crate::classifier;
use crate::models::{DayEntry, Goal, Level, SubTier, TrainingPlan, WeekEntry};

/// Fixed cycle length. The first two weeks run each goal's first-half
/// routine, the last two its second-half routine.
pub const CYCLE_WEEKS: usize = 4;
const FIRST_HALF_WEEKS: usize = 2;

/// Day layout when exactly one goal contributes a routine.
const SINGLE_GOAL_DAYS: &[&str] = &["Monday", "Wednesday", "Friday"];

/// Day layout when both goals contribute: each trains twice a week,
/// offset by one day.
const DUAL_GOAL_DAYS: &[(&str, Goal)] = &[
    ("Monday", Goal::Planche),
    ("Tuesday", Goal::FrontLever),
    ("Thursday", Goal::Planche),
    ("Friday", Goal::FrontLever),
];

/// Catalog ids for a goal/sub-tier pair, (first half, second half).
fn routine_ids(goal: Goal, tier: SubTier) -> (&'static str, &'static str) {
    match (goal, tier) {
        (Goal::Planche, SubTier::Early) => ("planche_early_first_half", "planche_early_second_half"),
        (Goal::Planche, SubTier::Mid) => ("planche_mid_first_half", "planche_mid_second_half"),
        (Goal::Planche, SubTier::Late) => ("planche_late_first_half", "planche_late_second_half"),
        (Goal::FrontLever, SubTier::Early) => {
            ("front_lever_early_first_half", "front_lever_early_second_half")
        }
        (Goal::FrontLever, SubTier::Mid) => {
            ("front_lever_mid_first_half", "front_lever_mid_second_half")
        }
        (Goal::FrontLever, SubTier::Late) => {
            ("front_lever_late_first_half", "front_lever_late_second_half")
        }
    }
}

/// One goal's resolved routine pair for the cycle.
#[derive(Debug, Clone, Copy)]
struct Contribution {
    goal: Goal,
    first_half: &'static str,
    second_half: &'static str,
}

impl Contribution {
    fn routine_for_week(&self, week: usize) -> &'static str {
        if week < FIRST_HALF_WEEKS {
            self.first_half
        } else {
            self.second_half
        }
    }
}

/// Resolve a routine id against the catalog. The dispatch table only emits
/// ids the catalog defines, so a miss is a programming error: fatal in debug
/// builds, a logged skip in release.
fn resolve_routine(id: &str) -> Option<&'static Routine> {
    let routine = catalog::find_routine(id);
    if routine.is_none() {
        debug_assert!(false, "unknown routine id: {}", id);
        warn!(routine = id, "routine id not in catalog, skipping day");
    }
    routine
}

/// Generate the training calendar for the current cycle.
///
/// Goals whose level has no generation rules (Intermediate/Advanced) or whose
/// answers fall outside every threshold band contribute nothing; if no goal
/// contributes, the plan is empty and the caller shows a no-plan state.
pub fn generate(
    levels: &BTreeMap<Goal, Level>,
    goals: &BTreeSet<Goal>,
    responses: &BTreeMap<String, String>,
) -> TrainingPlan {
    let mut contributions: Vec<Contribution> = Vec::new();

    for &goal in goals {
        let Some(&level) = levels.get(&goal) else {
            warn!(%goal, "goal selected without a strength level, skipping");
            continue;
        };

        if level != Level::Beginner {
            // Known gap: no routines are defined above Beginner yet.
            info!(%goal, %level, "no routines defined for this level");
            continue;
        }

        let answers = classifier::beginner_answers(goal, responses);
        match classifier::classify(goal, level, answers) {
            Some(tier) => {
                let (first_half, second_half) = routine_ids(goal, tier);
                contributions.push(Contribution {
                    goal,
                    first_half,
                    second_half,
                });
            }
            None => {
                info!(%goal, ?answers, "answers match no tier band, no routine");
            }
        }
    }

    if contributions.is_empty() {
        return TrainingPlan::default();
    }

    let mut weeks = Vec::with_capacity(CYCLE_WEEKS);
    for week in 0..CYCLE_WEEKS {
        let days = if contributions.len() == 1 {
            single_goal_days(&contributions[0], week)
        } else {
            dual_goal_days(&contributions, week)
        };

        weeks.push(WeekEntry {
            label: format!("Week {}", week + 1),
            days,
        });
    }

    TrainingPlan { weeks }
}

fn single_goal_days(contribution: &Contribution, week: usize) -> Vec<DayEntry> {
    let Some(routine) = resolve_routine(contribution.routine_for_week(week)) else {
        return Vec::new();
    };

    SINGLE_GOAL_DAYS
        .iter()
        .map(|&day_name| DayEntry {
            day_name,
            exercises: routine.exercises.to_vec(),
        })
        .collect()
}

fn dual_goal_days(contributions: &[Contribution], week: usize) -> Vec<DayEntry> {
    DUAL_GOAL_DAYS
        .iter()
        .filter_map(|&(day_name, goal)| {
            let contribution = contributions.iter().find(|c| c.goal == goal)?;
            let id = contribution.routine_for_week(week);
            resolve_routine(id).map(|routine| DayEntry {
                day_name,
                exercises: routine.exercises.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::response_key;

    fn beginner_setup(entries: &[(Goal, &str, &str)]) -> (
        BTreeMap<Goal, Level>,
        BTreeSet<Goal>,
        BTreeMap<String, String>,
    ) {
        let mut levels = BTreeMap::new();
        let mut goals = BTreeSet::new();
        let mut responses = BTreeMap::new();

        for &(goal, count, hold) in entries {
            goals.insert(goal);
            levels.insert(goal, Level::Beginner);
            responses.insert(response_key(goal, Level::Beginner, 0), count.to_string());
            responses.insert(response_key(goal, Level::Beginner, 1), hold.to_string());
        }

        (levels, goals, responses)
    }

    #[test]
    fn test_generate_is_deterministic() {
        let (levels, goals, responses) =
            beginner_setup(&[(Goal::Planche, "4", "5"), (Goal::FrontLever, "5", "6")]);

        let first = generate(&levels, &goals, &responses);
        let second = generate(&levels, &goals, &responses);
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_goal_schedule_shape() {
        let (levels, goals, responses) = beginner_setup(&[(Goal::Planche, "0", "0")]);

        let plan = generate(&levels, &goals, &responses);

        assert_eq!(plan.weeks.len(), 4);
        assert_eq!(plan.day_count(), 12);
        for week in &plan.weeks {
            let names: Vec<_> = week.days.iter().map(|d| d.day_name).collect();
            assert_eq!(names, vec!["Monday", "Wednesday", "Friday"]);
        }

        // Weeks 1-2 run the first-half routine, weeks 3-4 the second half.
        assert_eq!(
            plan.weeks[0].days[0].exercises,
            catalog::PLANCHE_EARLY_FIRST_HALF.to_vec()
        );
        assert_eq!(
            plan.weeks[1].days[2].exercises,
            catalog::PLANCHE_EARLY_FIRST_HALF.to_vec()
        );
        assert_eq!(
            plan.weeks[2].days[0].exercises,
            catalog::PLANCHE_EARLY_SECOND_HALF.to_vec()
        );
        assert_eq!(
            plan.weeks[3].days[1].exercises,
            catalog::PLANCHE_EARLY_SECOND_HALF.to_vec()
        );
    }

    #[test]
    fn test_dual_goal_schedule_interleaves() {
        let (levels, goals, responses) =
            beginner_setup(&[(Goal::Planche, "0", "0"), (Goal::FrontLever, "0", "0")]);

        let plan = generate(&levels, &goals, &responses);

        assert_eq!(plan.weeks.len(), 4);
        assert_eq!(plan.day_count(), 16);
        for week in &plan.weeks {
            let names: Vec<_> = week.days.iter().map(|d| d.day_name).collect();
            assert_eq!(names, vec!["Monday", "Tuesday", "Thursday", "Friday"]);
        }

        // Monday/Thursday planche, Tuesday/Friday front lever.
        let week1 = &plan.weeks[0];
        assert_eq!(week1.days[0].exercises, catalog::PLANCHE_EARLY_FIRST_HALF.to_vec());
        assert_eq!(
            week1.days[1].exercises,
            catalog::FRONT_LEVER_EARLY_FIRST_HALF.to_vec()
        );
        assert_eq!(week1.days[2].exercises, catalog::PLANCHE_EARLY_FIRST_HALF.to_vec());
        assert_eq!(
            week1.days[3].exercises,
            catalog::FRONT_LEVER_EARLY_FIRST_HALF.to_vec()
        );

        let week4 = &plan.weeks[3];
        assert_eq!(week4.days[0].exercises, catalog::PLANCHE_EARLY_SECOND_HALF.to_vec());
        assert_eq!(
            week4.days[3].exercises,
            catalog::FRONT_LEVER_EARLY_SECOND_HALF.to_vec()
        );
    }

    #[test]
    fn test_week_labels_ascending() {
        let (levels, goals, responses) = beginner_setup(&[(Goal::Planche, "3", "5")]);
        let plan = generate(&levels, &goals, &responses);

        let labels: Vec<_> = plan.weeks.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
    }

    #[test]
    fn test_intermediate_level_contributes_nothing() {
        let mut levels = BTreeMap::new();
        levels.insert(Goal::Planche, Level::Intermediate);
        let goals = BTreeSet::from([Goal::Planche]);

        let plan = generate(&levels, &goals, &BTreeMap::new());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_mixed_levels_degrade_to_single_goal_layout() {
        // Front lever at Intermediate has no routines; the planche goal
        // trains alone on the three-day layout.
        let (mut levels, mut goals, responses) = beginner_setup(&[(Goal::Planche, "8", "10")]);
        goals.insert(Goal::FrontLever);
        levels.insert(Goal::FrontLever, Level::Intermediate);

        let plan = generate(&levels, &goals, &responses);

        assert_eq!(plan.day_count(), 12);
        assert_eq!(
            plan.weeks[0].days[0].exercises,
            catalog::PLANCHE_LATE_FIRST_HALF.to_vec()
        );
    }

    #[test]
    fn test_unclassifiable_answers_yield_empty_plan() {
        // Planche count 1 / hold 3 sits in the hole between bands.
        let (levels, goals, responses) = beginner_setup(&[(Goal::Planche, "1", "3")]);
        let plan = generate(&levels, &goals, &responses);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_missing_responses_fall_back_to_early_tier() {
        let mut levels = BTreeMap::new();
        levels.insert(Goal::Planche, Level::Beginner);
        let goals = BTreeSet::from([Goal::Planche]);

        // No response entries at all: both metrics parse to 0 -> Early.
        let plan = generate(&levels, &goals, &BTreeMap::new());

        assert_eq!(plan.day_count(), 12);
        assert_eq!(
            plan.weeks[0].days[0].exercises,
            catalog::PLANCHE_EARLY_FIRST_HALF.to_vec()
        );
    }

    #[test]
    fn test_no_goals_selected_yields_empty_plan() {
        let plan = generate(&BTreeMap::new(), &BTreeSet::new(), &BTreeMap::new());
        assert!(plan.is_empty());
    }

    #[test]
    fn test_dispatch_table_covers_all_pairs() {
        for &goal in Goal::all() {
            for tier in [SubTier::Early, SubTier::Mid, SubTier::Late] {
                let (first, second) = routine_ids(goal, tier);
                assert!(catalog::find_routine(first).is_some(), "missing {}", first);
                assert!(catalog::find_routine(second).is_some(), "missing {}", second);
            }
        }
    }
}
