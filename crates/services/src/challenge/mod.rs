mod outcome;
mod progress;
mod service;

// Public API of the timed-challenge subsystem.
pub use crate::error::SessionError;
pub use outcome::ChallengeOutcome;
pub use progress::{ChallengeProgress, TickOutcome};
pub use service::ChallengeSession;
