#![forbid(unsafe_code)]

//! Domain model for the daily reward flow: plans, the fixed quiz, the
//! per-epoch progress state machine and the host-side profile.

pub mod model;
pub mod time;

pub use model::{
    AwardEvent, DailyProgress, Level, Plan, PointsProgress, ProgressError, QuizError, QuizItem,
    RewardState, UserProfile,
};
pub use time::Clock;
