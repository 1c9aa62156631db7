use boba_core::model::UserProfile;
use services::Clock;

/// Session-wide values handed to the view tree by the composition root.
///
/// Only plain data lives here; the points ledger is created per mounted
/// profile view.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    initial_profile: UserProfile,
    clock: Clock,
    open_rewards_on_launch: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(initial_profile: UserProfile, clock: Clock) -> Self {
        Self {
            initial_profile,
            clock,
            open_rewards_on_launch: false,
        }
    }

    #[must_use]
    pub fn with_rewards_open(mut self, open: bool) -> Self {
        self.open_rewards_on_launch = open;
        self
    }

    #[must_use]
    pub fn initial_profile(&self) -> UserProfile {
        self.initial_profile.clone()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn open_rewards_on_launch(&self) -> bool {
        self.open_rewards_on_launch
    }
}
