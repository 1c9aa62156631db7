use chrono::{DateTime, Duration, Utc};

/// Source of award timestamps.
///
/// The default clock reads the system time. A pinned clock keeps ledger
/// history deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    pinned: Option<DateTime<Utc>>,
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self { pinned: Some(at) }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.pinned.unwrap_or_else(Utc::now)
    }

    /// Moves a pinned clock forward; the system clock ignores this.
    pub fn advance(&mut self, delta: Duration) {
        if let Some(at) = &mut self.pinned {
            *at += delta;
        }
    }
}

/// Pinned instant shared by tests (2023-11-14T22:13:20Z).
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + Duration::seconds(1_700_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_clock_only_moves_when_advanced() {
        let mut clock = Clock::fixed(fixed_now());
        assert_eq!(clock.now(), clock.now());

        clock.advance(Duration::hours(24));
        assert_eq!(clock.now(), fixed_now() + Duration::hours(24));
    }
}
