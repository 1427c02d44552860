use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use super::{Cue, PendingTimer, PhaseMachine, Step};
use crate::model::accuracy_percent;
use crate::model::kana::{Kana, random_kana};

pub const GAME_SECS: u32 = 60;
pub const QUEUE_SIZE: usize = 10;
/// Number of queued kana shown ahead of the input.
pub const VISIBLE_QUEUE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypingState {
    Idle,
    Playing,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingEvent {
    Start,
    Input(String),
    Tick,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedTyping {
    pub state: TypingState,
    pub queue: VecDeque<Kana>,
    pub input: String,
    pub score: u32,
    pub mistakes: u32,
    pub time_left: u32,
}

impl Default for SpeedTyping {
    fn default() -> Self {
        Self {
            state: TypingState::Idle,
            queue: VecDeque::new(),
            input: String::new(),
            score: 0,
            mistakes: 0,
            time_left: GAME_SECS,
        }
    }
}

impl SpeedTyping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&Kana> {
        self.queue.front()
    }

    /// Kana per minute over the time actually played.
    #[must_use]
    pub fn kana_per_minute(&self) -> u32 {
        let played = f64::from(GAME_SECS.saturating_sub(self.time_left)) / 60.0;
        let minutes = if played == 0.0 { 1.0 } else { played };
        (f64::from(self.score) / minutes).round() as u32
    }

    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        accuracy_percent(self.score, self.score.saturating_add(self.mistakes))
    }

    fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            state: TypingState::Playing,
            queue: (0..QUEUE_SIZE).map(|_| random_kana(rng)).collect(),
            ..Self::default()
        }
    }

    fn input<R: Rng + ?Sized>(mut self, raw: &str, rng: &mut R) -> Step<Self> {
        if self.state != TypingState::Playing {
            return Step::quiet(self);
        }
        let value = raw.to_lowercase();
        let Some(target) = self.queue.front().map(|k| k.romaji) else {
            self.input = value;
            return Step::quiet(self);
        };

        if value == target {
            self.score += 1;
            self.input.clear();
            self.queue.pop_front();
            self.queue.push_back(random_kana(rng));
            Step::with_cue(self, Cue::Correct)
        } else if target.starts_with(value.as_str()) {
            self.input = value;
            Step::quiet(self)
        } else {
            self.mistakes += 1;
            self.input.clear();
            Step::with_cue(self, Cue::Error)
        }
    }
}

impl PhaseMachine for SpeedTyping {
    type Event = TypingEvent;

    fn apply<R: Rng + ?Sized>(mut self, event: TypingEvent, rng: &mut R) -> Step<Self> {
        match event {
            TypingEvent::Start => Step::with_cue(Self::start(rng), Cue::Click),
            TypingEvent::Input(raw) => self.input(&raw, rng),
            TypingEvent::Tick if self.state == TypingState::Playing => {
                if self.time_left <= 1 {
                    self.time_left = 0;
                    self.state = TypingState::Finished;
                } else {
                    self.time_left -= 1;
                }
                Step::quiet(self)
            }
            TypingEvent::Tick => Step::quiet(self),
        }
    }

    fn pending_timer(&self) -> Option<PendingTimer<TypingEvent>> {
        (self.state == TypingState::Playing).then(|| PendingTimer::millis(1000, TypingEvent::Tick))
    }
}
