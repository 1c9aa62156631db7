mod points_vm;
mod reward_vm;

pub use points_vm::{MilestoneTileVm, PointsProgressVm, map_points_progress};
pub use reward_vm::{QuizResultVm, RewardModalVm, RewardOptionVm, map_reward_modal};
