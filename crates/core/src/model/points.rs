/// Points between level milestones.
pub const LEVEL_STEP: u32 = 1000;

/// Progress of a point total toward the next thousand-point milestone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsProgress {
    current: u32,
    target: u32,
}

impl PointsProgress {
    /// A zero total targets the first milestone; an exact multiple of the
    /// step counts as reaching that milestone.
    #[must_use]
    pub fn from_points(points: u32) -> Self {
        let target = points
            .div_ceil(LEVEL_STEP)
            .max(1)
            .saturating_mul(LEVEL_STEP)
            .max(points);
        Self {
            current: points,
            target,
        }
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.target - self.current
    }

    /// Share of the target reached, in `0.0..=100.0`.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        f64::from(self.current) / f64::from(self.target) * 100.0
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage().round() as u32
    }

    #[must_use]
    pub fn drinks_ordered(&self) -> u32 {
        self.current / 50
    }

    #[must_use]
    pub fn friends_made(&self) -> u32 {
        self.current / 100
    }

    #[must_use]
    pub fn reviews_written(&self) -> u32 {
        self.current / 75
    }

    #[must_use]
    pub fn events_attended(&self) -> u32 {
        self.current / 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returning_member_progress() {
        let progress = PointsProgress::from_points(1250);
        assert_eq!(progress.target(), 2000);
        assert_eq!(progress.remaining(), 750);
        assert!((progress.percentage() - 62.5).abs() < f64::EPSILON);
        assert_eq!(progress.rounded_percentage(), 63);
    }

    #[test]
    fn zero_points_target_first_milestone() {
        let progress = PointsProgress::from_points(0);
        assert_eq!(progress.target(), 1000);
        assert_eq!(progress.rounded_percentage(), 0);
    }

    #[test]
    fn exact_milestone_is_complete() {
        let progress = PointsProgress::from_points(1000);
        assert_eq!(progress.target(), 1000);
        assert_eq!(progress.remaining(), 0);
        assert_eq!(progress.rounded_percentage(), 100);
    }

    #[test]
    fn milestone_counters_floor() {
        let progress = PointsProgress::from_points(1250);
        assert_eq!(progress.drinks_ordered(), 25);
        assert_eq!(progress.friends_made(), 12);
        assert_eq!(progress.reviews_written(), 16);
        assert_eq!(progress.events_attended(), 6);
    }

    #[test]
    fn saturated_total_stays_in_range() {
        let progress = PointsProgress::from_points(u32::MAX);
        assert_eq!(progress.target(), u32::MAX);
        assert_eq!(progress.remaining(), 0);
    }
}
