//! Shared error types for the services crate.

use thiserror::Error;

use boba_core::model::ProgressError;

/// Errors emitted by `RewardEngine`.
///
/// Only caller contract violations surface here; races such as a double
/// click resolve to silent no-ops inside the engine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RewardError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
