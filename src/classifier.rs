//! Tier classification for Beginner-level questionnaire answers.
//!
//! Each goal's Beginner question set has exactly two metrics: a rep count
//! (push-ups or pull-ups) at index 0 and a hold time in seconds at index 1.
//! The threshold bands map those to an Early/Mid/Late sub-tier, evaluated in
//! that order with first match winning. Bands are reproduced exactly as the
//! product defines them, including the strict/non-strict boundary mix and the
//! unclassifiable holes between bands.
//!
//! Intermediate and Advanced levels have no classification rules; `classify`
//! returns `None` for them and the generator emits no routine.

use std::collections::BTreeMap;

use crate::models::{Goal, Level, SubTier};

/// Questionnaire text per (level, goal), in question-index order.
pub fn questions_for(level: Level, goal: Goal) -> &'static [&'static str] {
    match (level, goal) {
        (Level::Beginner, Goal::Planche) => &[
            "How many Pseudo Planche Push-Ups can you do?",
            "How long can you hold the Pseudo Planche Lean?(seconds)",
        ],
        (Level::Beginner, Goal::FrontLever) => &[
            "How many Australian Pull-Ups can you do?",
            "How long can you hold a Tuck Front Lever?(seconds)",
        ],
        (Level::Intermediate, Goal::Planche) => &[
            "How long can you hold a straddle planche?(seconds)",
            "How many straddle planche push-ups can you do?",
            "How many straddle planche presses can you do?",
        ],
        (Level::Intermediate, Goal::FrontLever) => &[
            "How long can you hold a full front lever?(seconds)",
            "How many front lever raises can you do?",
            "How many front lever pull-ups can you do?",
        ],
        (Level::Advanced, Goal::Planche) => &[
            "How long can you hold a full planche?(seconds)",
            "How many full planche push-ups can you do?",
            "How many full planche presses can you do?",
        ],
        (Level::Advanced, Goal::FrontLever) => &[
            "How long can you front lever touch?(seconds)",
            "How long can you hold a wide front lever?(seconds)",
            "How many wide front lever raises can you do?",
        ],
    }
}

/// Key of one response in the persisted response map, e.g.
/// `"Planche-Beginner-0"` or `"Front Lever-Beginner-1"`.
pub fn response_key(goal: Goal, level: Level, index: usize) -> String {
    format!("{}-{}-{}", goal.key_name(), level.key_name(), index)
}

/// The two Beginner metrics for one goal, already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeginnerAnswers {
    /// Push-up count (Planche) or pull-up count (Front Lever), index 0.
    pub count: u32,
    /// Hold time in seconds, index 1.
    pub hold_seconds: u32,
}

/// Parse one stored response value. Missing, non-numeric, or negative input
/// counts as 0 for threshold comparisons; the submission gate is responsible
/// for keeping that from happening silently.
fn parse_response(value: Option<&String>) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// Extract the Beginner answer pair for a goal from the raw response map.
pub fn beginner_answers(goal: Goal, responses: &BTreeMap<String, String>) -> BeginnerAnswers {
    BeginnerAnswers {
        count: parse_response(responses.get(&response_key(goal, Level::Beginner, 0))),
        hold_seconds: parse_response(responses.get(&response_key(goal, Level::Beginner, 1))),
    }
}

/// Classify a goal's Beginner answers into a sub-tier.
///
/// Returns `None` for non-Beginner levels (no rules defined) and for answer
/// pairs that fall into none of the three bands.
pub fn classify(goal: Goal, level: Level, answers: BeginnerAnswers) -> Option<SubTier> {
    if level != Level::Beginner {
        return None;
    }

    let BeginnerAnswers {
        count,
        hold_seconds: hold,
    } = answers;

    match goal {
        Goal::Planche => {
            if count == 0 || hold < 3 {
                Some(SubTier::Early)
            } else if (count > 1 && count < 6) || (hold > 3 && hold < 8) {
                Some(SubTier::Mid)
            } else if (6..=12).contains(&count) || (8..=14).contains(&hold) {
                Some(SubTier::Late)
            } else {
                None
            }
        }
        Goal::FrontLever => {
            if count < 3 || hold < 3 {
                Some(SubTier::Early)
            } else if (count > 3 && count <= 10) || (hold > 3 && hold <= 8) {
                Some(SubTier::Mid)
            } else if (count > 10 && count <= 20) || (hold > 8 && hold <= 18) {
                Some(SubTier::Late)
            } else {
                None
            }
        }
    }
}

/// Submission-time gate: Beginner answers beyond these bounds are rejected
/// with a recommendation to select Intermediate instead. This is a blocking
/// validation check, not a silent reclassification.
pub fn exceeds_beginner_bounds(goal: Goal, answers: BeginnerAnswers) -> bool {
    match goal {
        Goal::Planche => answers.count > 12 || answers.hold_seconds > 14,
        Goal::FrontLever => answers.count > 20 || answers.hold_seconds > 18,
    }
}
