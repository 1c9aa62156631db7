use serde::{Deserialize, Serialize};
use std::fmt;

/// Points credited for a daily check-in.
pub const CHECK_IN_POINTS: u32 = 2;

/// Points credited for a correct quiz answer.
pub const QUIZ_POINTS: u32 = 5;

/// The user's chosen daily-earning method.
///
/// Exactly one plan is active at a time. A fresh reward session starts on
/// `CheckIn`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    /// Tap once to earn points for the day.
    #[default]
    CheckIn,
    /// Answer the daily question; only a correct answer earns points.
    Quiz,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::CheckIn, Plan::Quiz];

    /// Points awarded when this plan's daily action qualifies.
    #[must_use]
    pub fn award_points(self) -> u32 {
        match self {
            Plan::CheckIn => CHECK_IN_POINTS,
            Plan::Quiz => QUIZ_POINTS,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Plan::CheckIn => "Daily Check-in",
            Plan::Quiz => "Answer a Quiz",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::CheckIn => write!(f, "check-in"),
            Plan::Quiz => write!(f, "quiz"),
        }
    }
}
