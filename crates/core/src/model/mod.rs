mod award;
mod plan;
mod points;
mod profile;
mod progress;
mod quiz;

pub use award::AwardEvent;
pub use plan::{CHECK_IN_POINTS, Plan, QUIZ_POINTS};
pub use points::{LEVEL_STEP, PointsProgress};
pub use profile::{Level, UserProfile};
pub use progress::{DailyProgress, ProgressError, RewardState};
pub use quiz::{QUIZ_OPTION_COUNT, QuizError, QuizItem};
