use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use tracing::info;

use boba_core::{
    model::{PointsProgress, UserProfile},
    time::Clock,
};

//
// ─── AWARD RECORD ──────────────────────────────────────────────────────────────
//

/// One credited award, as kept in the ledger history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardRecord {
    pub points: u32,
    pub earned_at: DateTime<Utc>,
    pub balance: u32,
}

//
// ─── LEDGER ────────────────────────────────────────────────────────────────────
//

#[derive(Debug)]
struct LedgerState {
    clock: Clock,
    profile: UserProfile,
    history: Vec<AwardRecord>,
}

/// Host-side owner of the user's point total.
///
/// Handles are cheap to clone and share one profile, so a handle can be moved
/// into the reward engine's earn-points callback while the host keeps reading
/// through another. Single-threaded by construction.
#[derive(Debug, Clone)]
pub struct PointsLedger {
    inner: Rc<RefCell<LedgerState>>,
}

impl PointsLedger {
    #[must_use]
    pub fn new(profile: UserProfile, clock: Clock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LedgerState {
                clock,
                profile,
                history: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current profile.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        self.inner.borrow().profile.clone()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.inner.borrow().profile.points()
    }

    #[must_use]
    pub fn progress(&self) -> PointsProgress {
        self.inner.borrow().profile.progress()
    }

    /// Awards credited through this ledger, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<AwardRecord> {
        self.inner.borrow().history.clone()
    }

    /// Folds an award into the profile and records it.
    pub fn credit(&self, points: u32) {
        let mut state = self.inner.borrow_mut();
        let earned_at = state.clock.now();
        state.profile.earn(points);
        let balance = state.profile.points();
        state.history.push(AwardRecord {
            points,
            earned_at,
            balance,
        });
        info!(
            user = state.profile.username(),
            points, balance, "points credited"
        );
    }

    /// Callback suitable for `RewardEngine`'s earn-points sink.
    #[must_use]
    pub fn earn_points_sink(&self) -> Box<dyn FnMut(u32)> {
        let ledger = self.clone();
        Box::new(move |points| ledger.credit(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boba_core::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn credit_updates_profile_and_history() {
        let ledger = PointsLedger::new(
            UserProfile::returning_member("Boba Lover"),
            Clock::fixed(fixed_now()),
        );
        ledger.credit(2);

        assert_eq!(ledger.points(), 1252);
        assert_eq!(
            ledger.history(),
            vec![AwardRecord {
                points: 2,
                earned_at: fixed_now(),
                balance: 1252,
            }]
        );
    }

    #[test]
    fn sink_shares_the_same_profile() {
        let ledger = PointsLedger::new(UserProfile::new_member("Taro"), Clock::fixed(fixed_now()));
        let mut sink = ledger.earn_points_sink();
        sink(5);
        sink(2);

        assert_eq!(ledger.points(), 107);
        assert_eq!(ledger.history().len(), 2);
        assert_eq!(ledger.progress().remaining(), 893);
    }

    #[test]
    fn history_uses_ledger_clock() {
        let mut clock = Clock::fixed(fixed_now());
        clock.advance(Duration::days(1));
        let ledger = PointsLedger::new(UserProfile::new_member("Taro"), clock);
        ledger.credit(5);

        assert_eq!(ledger.history()[0].earned_at, fixed_now() + Duration::days(1));
    }
}
