use rand::Rng;
use serde::Serialize;

use super::{Cue, PendingTimer, PhaseMachine, Step};
use crate::model::kana::{Kana, random_kana};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
    Rest,
}

impl BreathPhase {
    #[must_use]
    pub fn duration_ms(self) -> u64 {
        match self {
            BreathPhase::Inhale | BreathPhase::Hold | BreathPhase::Exhale => 4000,
            BreathPhase::Rest => 2000,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Breathe In",
            BreathPhase::Hold => "Hold",
            BreathPhase::Exhale => "Breathe Out",
            BreathPhase::Rest => "Rest",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Rest,
            BreathPhase::Rest => BreathPhase::Inhale,
        }
    }

    /// The guide circle is full-size while breathing in and holding.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, BreathPhase::Inhale | BreathPhase::Hold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathingEvent {
    PhaseElapsed,
    TogglePlay,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breathing {
    pub phase: BreathPhase,
    /// Completed cycles; the display shows `cycle + 1`.
    pub cycle: u32,
    pub playing: bool,
    pub kana: Kana,
}

impl Breathing {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            phase: BreathPhase::Inhale,
            cycle: 0,
            playing: true,
            kana: random_kana(rng),
        }
    }

    #[must_use]
    pub fn cycle_label(&self) -> String {
        format!("Cycle {}", self.cycle + 1)
    }
}

impl PhaseMachine for Breathing {
    type Event = BreathingEvent;

    fn apply<R: Rng + ?Sized>(mut self, event: BreathingEvent, rng: &mut R) -> Step<Self> {
        match event {
            BreathingEvent::TogglePlay => {
                self.playing = !self.playing;
                Step::with_cue(self, Cue::Click)
            }
            BreathingEvent::PhaseElapsed if !self.playing => Step::quiet(self),
            BreathingEvent::PhaseElapsed => {
                if self.phase == BreathPhase::Rest {
                    self.cycle += 1;
                    self.kana = random_kana(rng);
                }
                self.phase = self.phase.next();
                Step::quiet(self)
            }
        }
    }

    fn pending_timer(&self) -> Option<PendingTimer<BreathingEvent>> {
        self.playing.then(|| {
            PendingTimer::millis(self.phase.duration_ms(), BreathingEvent::PhaseElapsed)
        })
    }
}
