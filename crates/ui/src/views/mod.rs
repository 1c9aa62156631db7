mod profile;
mod reward;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use profile::{PointsProgressCard, ProfileView};
pub use reward::DailyRewardModal;
