//! Mini-game state machines.
//!
//! Each game is an owned state value plus a pure transition. Timers are not
//! owned here: a machine only reports the one timer it is waiting on through
//! [`PhaseMachine::pending_timer`], and whoever drives it feeds the timer's
//! event back through [`PhaseMachine::apply`] when it fires.

use std::time::Duration;

use rand::Rng;
use serde::Serialize;

pub mod breathing;
pub mod constellation;
pub mod garden;
pub mod haiku;
pub mod memory;
pub mod rain;
pub mod typing;

pub use breathing::{BreathPhase, Breathing, BreathingEvent};
pub use constellation::{Constellation, ConstellationEvent, Line, StarPoint};
pub use garden::{GardenEvent, GardenTile, SoundGarden};
pub use haiku::{DailyHaiku, HaikuEvent};
pub use memory::{MemoryCard, MemoryEvent, MemoryPalace, MemoryPhase, Verdict};
pub use rain::{KanaRain, RainDrop, RainEvent};
pub use typing::{SpeedTyping, TypingEvent, TypingState};

/// Sound feedback requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cue {
    Click,
    Correct,
    Error,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    pub state: S,
    pub cues: Vec<Cue>,
}

impl<S> Step<S> {
    #[must_use]
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            cues: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cue(state: S, cue: Cue) -> Self {
        Self {
            state,
            cues: vec![cue],
        }
    }
}

/// The single timer a state is waiting on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer<E> {
    pub after: Duration,
    pub fire: E,
}

impl<E> PendingTimer<E> {
    #[must_use]
    pub fn millis(ms: u64, fire: E) -> Self {
        Self {
            after: Duration::from_millis(ms),
            fire,
        }
    }
}

pub trait PhaseMachine: Sized {
    type Event: Clone + PartialEq + std::fmt::Debug;

    fn apply<R: Rng + ?Sized>(self, event: Self::Event, rng: &mut R) -> Step<Self>;

    fn pending_timer(&self) -> Option<PendingTimer<Self::Event>>;
}
