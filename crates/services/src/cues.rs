//! Audio feedback seam.
//!
//! Game transitions only name the cue they want; playing it belongs to
//! whatever implements [`AudioCues`].

use std::sync::{Arc, Mutex, PoisonError};

use dojo_core::games::Cue;

pub trait AudioCues: Send + Sync {
    fn play(&self, cue: Cue);

    fn play_all(&self, cues: &[Cue]) {
        for &cue in cues {
            self.play(cue);
        }
    }
}

/// Logs cues at debug level instead of playing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingCues;

impl AudioCues for LoggingCues {
    fn play(&self, cue: Cue) {
        log::debug!("cue: {cue:?}");
    }
}

/// Keeps every cue it receives, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCues {
    played: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingCues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn played(&self) -> Vec<Cue> {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AudioCues for RecordingCues {
    fn play(&self, cue: Cue) {
        self.played
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(cue);
    }
}

impl<T: AudioCues + ?Sized> AudioCues for Arc<T> {
    fn play(&self, cue: Cue) {
        (**self).play(cue);
    }
}
