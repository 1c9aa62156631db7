use std::collections::HashSet;
use std::fmt;

use boba_core::model::{AwardEvent, DailyProgress, Plan, QuizItem, RewardState};
use tracing::{debug, info};

use crate::error::RewardError;

type CloseSink = Box<dyn FnOnce()>;
type EarnPointsSink = Box<dyn FnMut(u32)>;

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Owns one session's daily reward state and reports awards to its host.
///
/// The engine never touches the host's point total. It calls `on_earn_points`
/// with the literal award value and leaves crediting to the host. Each plan
/// pays out at most once per engine, however often the user switches plans.
/// Closing consumes the engine, so no event can reach it afterwards.
pub struct RewardEngine {
    quiz: QuizItem,
    progress: DailyProgress,
    // survives plan switches, unlike `progress`
    paid_plans: HashSet<Plan>,
    on_close: CloseSink,
    on_earn_points: EarnPointsSink,
}

impl RewardEngine {
    /// Mounts a fresh engine on the default plan.
    #[must_use]
    pub fn new<C, E>(quiz: QuizItem, on_close: C, on_earn_points: E) -> Self
    where
        C: FnOnce() + 'static,
        E: FnMut(u32) + 'static,
    {
        Self {
            quiz,
            progress: DailyProgress::new(),
            paid_plans: HashSet::new(),
            on_close: Box::new(on_close),
            on_earn_points: Box::new(on_earn_points),
        }
    }

    /// Mounts a fresh engine serving the built-in daily quiz.
    #[must_use]
    pub fn with_daily_quiz<C, E>(on_close: C, on_earn_points: E) -> Self
    where
        C: FnOnce() + 'static,
        E: FnMut(u32) + 'static,
    {
        Self::new(QuizItem::daily(), on_close, on_earn_points)
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizItem {
        &self.quiz
    }

    #[must_use]
    pub fn progress(&self) -> &DailyProgress {
        &self.progress
    }

    #[must_use]
    pub fn plan(&self) -> Plan {
        self.progress.plan()
    }

    #[must_use]
    pub fn state(&self) -> RewardState {
        self.progress.state()
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.progress.completed_today()
    }

    /// Whether `plan` has already paid out during this engine's lifetime.
    #[must_use]
    pub fn has_paid(&self, plan: Plan) -> bool {
        self.paid_plans.contains(&plan)
    }

    /// Switches the active plan, starting a new epoch when it changes.
    ///
    /// Returns whether the plan changed.
    pub fn select_plan(&mut self, plan: Plan) -> bool {
        let previous = self.progress.plan();
        let changed = self.progress.select_plan(plan);
        if changed {
            info!(from = %previous, to = %plan, "reward plan switched, daily progress reset");
        } else {
            debug!(plan = %plan, "plan already active, ignoring reselection");
        }
        changed
    }

    /// Checks in for today. Only the first call of an epoch on the check-in
    /// plan completes it, and only the first completion per engine pays.
    pub fn perform_check_in(&mut self) -> Option<AwardEvent> {
        match self.progress.check_in() {
            Some(award) => self.emit(award),
            None => {
                debug!(state = ?self.state(), "check-in ignored");
                None
            }
        }
    }

    /// Answers today's quiz with the option at `option_index`.
    ///
    /// A wrong answer completes the day without an award, as does a correct
    /// one once the quiz has already paid out. Answers after the first one, or
    /// while the check-in plan is active, are ignored.
    ///
    /// # Errors
    ///
    /// Returns `RewardError::Progress` wrapping `ProgressError::InvalidArgument`
    /// if `option_index` is outside the quiz options. Nothing changes in that case.
    pub fn answer_quiz(&mut self, option_index: usize) -> Result<Option<AwardEvent>, RewardError> {
        let already_answered = self.progress.quiz_selected_index().is_some();
        let award = self.progress.answer_quiz(&self.quiz, option_index)?;

        match award {
            Some(award) => Ok(self.emit(award)),
            None if self.plan() != Plan::Quiz || already_answered => {
                debug!(option_index, state = ?self.state(), "quiz answer ignored");
                Ok(None)
            }
            None => {
                info!(option_index, "quiz answered incorrectly, no points awarded");
                Ok(None)
            }
        }
    }

    /// Tears the engine down and notifies the host. Awards already emitted stand.
    pub fn close(self) {
        info!(state = ?self.state(), "daily reward closed");
        (self.on_close)();
    }

    fn emit(&mut self, award: AwardEvent) -> Option<AwardEvent> {
        if !self.paid_plans.insert(award.plan()) {
            info!(plan = %award.plan(), "plan already paid out this session, no points awarded");
            return None;
        }
        info!(plan = %award.plan(), points = award.points(), "daily reward earned");
        (self.on_earn_points)(award.points());
        Some(award)
    }
}

impl fmt::Debug for RewardEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RewardEngine")
            .field("quiz", &self.quiz.question())
            .field("progress", &self.progress)
            .field("paid_plans", &self.paid_plans)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
