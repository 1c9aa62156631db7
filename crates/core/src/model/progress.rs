use thiserror::Error;

use crate::model::{AwardEvent, Plan, QuizItem};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("quiz option {index} is out of range ({options} options)")]
    InvalidArgument { index: usize, options: usize },
}

//
// ─── REWARD STATE ──────────────────────────────────────────────────────────────
//

/// Observable state of the day's reward progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardState {
    /// Check-in plan, not yet checked in.
    CheckInPending,
    /// Check-in plan, checked in for this epoch.
    CheckedIn,
    /// Quiz plan, no answer yet.
    QuizPending,
    /// Quiz plan, answered once; `correct` decides whether points were earned.
    QuizAnswered { correct: bool },
}

impl RewardState {
    #[must_use]
    pub fn plan(self) -> Plan {
        match self {
            RewardState::CheckInPending | RewardState::CheckedIn => Plan::CheckIn,
            RewardState::QuizPending | RewardState::QuizAnswered { .. } => Plan::Quiz,
        }
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        matches!(
            self,
            RewardState::CheckedIn | RewardState::QuizAnswered { .. }
        )
    }
}

//
// ─── DAILY PROGRESS ────────────────────────────────────────────────────────────
//

/// Session-scoped record of what the user has done today under the active plan.
///
/// All transitions are pure: they mutate this record and report the award to
/// emit, if any. Guarded events that do not apply are no-ops, not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyProgress {
    plan: Plan,
    completed_today: bool,
    quiz_selected_index: Option<usize>,
    quiz_was_correct: Option<bool>,
}

impl DailyProgress {
    /// Fresh progress on the default plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn plan(&self) -> Plan {
        self.plan
    }

    #[must_use]
    pub fn completed_today(&self) -> bool {
        self.completed_today
    }

    #[must_use]
    pub fn quiz_selected_index(&self) -> Option<usize> {
        self.quiz_selected_index
    }

    #[must_use]
    pub fn quiz_was_correct(&self) -> Option<bool> {
        self.quiz_was_correct
    }

    #[must_use]
    pub fn state(&self) -> RewardState {
        match (self.plan, self.completed_today, self.quiz_was_correct) {
            (Plan::CheckIn, false, _) => RewardState::CheckInPending,
            (Plan::CheckIn, true, _) => RewardState::CheckedIn,
            (Plan::Quiz, _, None) => RewardState::QuizPending,
            (Plan::Quiz, _, Some(correct)) => RewardState::QuizAnswered { correct },
        }
    }

    /// Switches the active plan and starts a new epoch.
    ///
    /// Returns `false` without touching anything when `plan` is already active.
    pub fn select_plan(&mut self, plan: Plan) -> bool {
        if plan == self.plan {
            return false;
        }
        *self = Self {
            plan,
            ..Self::default()
        };
        true
    }

    /// Marks today's check-in.
    ///
    /// Only the first call of an epoch on the check-in plan yields an award.
    pub fn check_in(&mut self) -> Option<AwardEvent> {
        if self.plan != Plan::CheckIn || self.completed_today {
            return None;
        }
        self.completed_today = true;
        Some(AwardEvent::for_plan(Plan::CheckIn))
    }

    /// Records the answer to today's quiz.
    ///
    /// The index is range-checked before any guard so a bad index never goes
    /// unnoticed. A second answer in the same epoch, or any answer while the
    /// check-in plan is active, is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidArgument` if `option_index` is not an
    /// option of `quiz`. The progress is left unchanged.
    pub fn answer_quiz(
        &mut self,
        quiz: &QuizItem,
        option_index: usize,
    ) -> Result<Option<AwardEvent>, ProgressError> {
        let options = quiz.options().len();
        if option_index >= options {
            return Err(ProgressError::InvalidArgument {
                index: option_index,
                options,
            });
        }

        if self.plan != Plan::Quiz || self.quiz_selected_index.is_some() {
            return Ok(None);
        }

        let correct = quiz.is_correct(option_index);
        self.quiz_selected_index = Some(option_index);
        self.quiz_was_correct = Some(correct);
        self.completed_today = true;

        Ok(correct.then(|| AwardEvent::for_plan(Plan::Quiz)))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
