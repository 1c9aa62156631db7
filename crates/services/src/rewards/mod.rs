mod engine;

pub use engine::RewardEngine;
