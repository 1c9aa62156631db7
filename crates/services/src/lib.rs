#![forbid(unsafe_code)]

pub mod error;
pub mod points_ledger;
pub mod rewards;

pub use boba_core::Clock;

pub use error::RewardError;
pub use points_ledger::{AwardRecord, PointsLedger};
pub use rewards::RewardEngine;
