//! Core identity types: training goals, coarse strength levels, and the
//! derived sub-tier used for routine selection.

use serde::{Deserialize, Serialize};

/// A training objective the user can pursue.
///
/// Wire and storage form uses the display names (`"Planche"`,
/// `"Front Lever"`); response keys and the persisted goal list are built
/// from these exact strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Goal {
    Planche,
    #[serde(rename = "Front Lever")]
    FrontLever,
}

impl Goal {
    /// Both goals, in canonical order (also the dual-goal scheduling order).
    pub fn all() -> &'static [Goal] {
        &[Goal::Planche, Goal::FrontLever]
    }

    /// The name used in response keys and persisted JSON.
    pub fn key_name(&self) -> &'static str {
        match self {
            Goal::Planche => "Planche",
            Goal::FrontLever => "Front Lever",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key_name())
    }
}

impl std::str::FromStr for Goal {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planche" | "planche" => Ok(Goal::Planche),
            "Front Lever" | "front lever" | "front-lever" | "frontlever" => Ok(Goal::FrontLever),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// Coarse skill stage selected by the user per goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn key_name(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key_name())
    }
}

impl std::str::FromStr for Level {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" | "beginner" => Ok(Level::Beginner),
            "Intermediate" | "intermediate" => Ok(Level::Intermediate),
            "Advanced" | "advanced" => Ok(Level::Advanced),
            _ => Err(format!("Unknown level: {}", s)),
        }
    }
}

/// Finer-grained classification within the Beginner level, derived from
/// questionnaire answers. Never persisted; recomputed on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTier {
    Early,
    Mid,
    Late,
}

impl std::fmt::Display for SubTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubTier::Early => write!(f, "early"),
            SubTier::Mid => write!(f, "mid"),
            SubTier::Late => write!(f, "late"),
        }
    }
}

/// Identity data captured at first onboarding. Survives new cycles; only a
/// full reset clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}
