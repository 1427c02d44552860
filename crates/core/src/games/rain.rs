use std::collections::VecDeque;

use rand::Rng;
use serde::Serialize;

use super::{PendingTimer, PhaseMachine, Step};
use crate::model::DropId;
use crate::model::kana::{Kana, random_kana};

pub const COLUMNS: u32 = 20;
pub const INITIAL_DROPS: usize = 40;
pub const MAX_DROPS: usize = 60;
const SPAWN_MS: u64 = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainDrop {
    pub id: DropId,
    pub column: u32,
    pub kana: Kana,
    /// Fall time in seconds.
    pub speed: f64,
    pub opacity: f64,
}

impl RainDrop {
    /// Horizontal offset in percent of the screen width.
    #[must_use]
    pub fn left_percent(&self) -> f64 {
        f64::from(self.column) / f64::from(COLUMNS) * 100.0 + 2.5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainEvent {
    Spawn,
    Hover(Option<DropId>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanaRain {
    pub drops: VecDeque<RainDrop>,
    pub hovered: Option<DropId>,
    next_id: u64,
}

impl KanaRain {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut rain = Self {
            drops: VecDeque::with_capacity(MAX_DROPS + 1),
            hovered: None,
            next_id: 0,
        };
        for _ in 0..INITIAL_DROPS {
            rain.spawn(rng);
        }
        rain
    }

    #[must_use]
    pub fn is_hovered(&self, id: DropId) -> bool {
        self.hovered == Some(id)
    }

    fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let drop = RainDrop {
            id: DropId::new(self.next_id),
            column: rng.random_range(0..COLUMNS),
            kana: random_kana(rng),
            speed: rng.random_range(2.0..5.0),
            opacity: rng.random_range(0.3..0.8),
        };
        self.next_id += 1;
        self.drops.push_back(drop);
        while self.drops.len() > MAX_DROPS {
            self.drops.pop_front();
        }
    }
}

impl PhaseMachine for KanaRain {
    type Event = RainEvent;

    fn apply<R: Rng + ?Sized>(mut self, event: RainEvent, rng: &mut R) -> Step<Self> {
        match event {
            RainEvent::Spawn => self.spawn(rng),
            RainEvent::Hover(id) => self.hovered = id,
        }
        Step::quiet(self)
    }

    fn pending_timer(&self) -> Option<PendingTimer<RainEvent>> {
        Some(PendingTimer::millis(SPAWN_MS, RainEvent::Spawn))
    }
}
