use serde::{Deserialize, Serialize};

use crate::model::PointsProgress;

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Membership tier shown on the profile.
///
/// The tier is a label carried by the profile; it is not derived from points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Newbie,
    Explorer,
    Enthusiast,
    Master,
    Legend,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Newbie,
        Level::Explorer,
        Level::Enthusiast,
        Level::Master,
        Level::Legend,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Level::Newbie => "Bubble Tea Newbie",
            Level::Explorer => "Bubble Tea Explorer",
            Level::Enthusiast => "Bubble Tea Enthusiast",
            Level::Master => "Bubble Tea Master",
            Level::Legend => "Bubble Tea Legend",
        }
    }

    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Level::Newbie => "🌱",
            Level::Explorer => "🗺️",
            Level::Enthusiast => "⭐",
            Level::Master => "👑",
            Level::Legend => "🏆",
        }
    }

    /// Parses a tier from a display title by keyword, ignoring case.
    #[must_use]
    pub fn from_title(title: &str) -> Option<Self> {
        let title = title.to_lowercase();
        Self::ALL.into_iter().find(|level| {
            let keyword = format!("{level:?}").to_lowercase();
            title.contains(&keyword)
        })
    }
}

//
// ─── USER PROFILE ──────────────────────────────────────────────────────────────
//

/// The host-side user record that awards are folded into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    username: String,
    points: u32,
    level: Level,
    streak_days: u32,
}

impl UserProfile {
    #[must_use]
    pub fn new(username: impl Into<String>, points: u32, level: Level, streak_days: u32) -> Self {
        Self {
            username: username.into(),
            points,
            level,
            streak_days,
        }
    }

    /// Profile handed out on sign-in.
    #[must_use]
    pub fn returning_member(username: impl Into<String>) -> Self {
        Self::new(username, 1250, Level::Master, 7)
    }

    /// Profile handed out right after registration.
    #[must_use]
    pub fn new_member(username: impl Into<String>) -> Self {
        Self::new(username, 100, Level::Newbie, 1)
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    #[must_use]
    pub fn progress(&self) -> PointsProgress {
        PointsProgress::from_points(self.points)
    }

    /// Credits awarded points. Saturates at `u32::MAX`.
    pub fn earn(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }
}
