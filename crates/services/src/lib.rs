#![forbid(unsafe_code)]

pub mod challenge;
pub mod cues;
pub mod error;
pub mod runner;

pub use dojo_core::Clock;

pub use error::{RunnerError, SessionError};

pub use challenge::{ChallengeOutcome, ChallengeProgress, ChallengeSession, TickOutcome};
pub use cues::{AudioCues, LoggingCues, RecordingCues};
pub use runner::{MachineHandle, run_machine, spawn_machine};
