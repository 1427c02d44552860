//! Shared error types for the services crate.

use thiserror::Error;

use dojo_core::model::{DojoKind, SettingsError};

/// Errors emitted by `ChallengeSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no {} selected for the timed challenge", .kind.label().to_lowercase())]
    NoSelection { kind: DojoKind },
    #[error("challenge already finished")]
    Finished,
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Errors emitted by the phase-machine runner.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunnerError {
    #[error("machine runner did not accept the event")]
    Stopped,
    #[error("machine runner task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
