use rand::Rng;
use serde::Serialize;

use super::{Cue, PendingTimer, PhaseMachine, Step};
use crate::model::kana::{Kana, hiragana_only};

pub const GARDEN_SIZE: usize = 20;
const ACTIVE_MS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GardenTile {
    pub kana: Kana,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenEvent {
    Tap(usize),
    Settle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundGarden {
    pub tiles: Vec<GardenTile>,
    pub last_played: Option<&'static str>,
}

impl Default for SoundGarden {
    fn default() -> Self {
        Self {
            tiles: hiragana_only()
                .iter()
                .take(GARDEN_SIZE)
                .map(|&kana| GardenTile {
                    kana,
                    active: false,
                })
                .collect(),
            last_played: None,
        }
    }
}

impl SoundGarden {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PhaseMachine for SoundGarden {
    type Event = GardenEvent;

    fn apply<R: Rng + ?Sized>(mut self, event: GardenEvent, _rng: &mut R) -> Step<Self> {
        match event {
            GardenEvent::Tap(index) => {
                self.last_played = self.tiles.get(index).map(|t| t.kana.romaji);
                for (i, tile) in self.tiles.iter_mut().enumerate() {
                    tile.active = i == index;
                }
                Step::with_cue(self, Cue::Correct)
            }
            GardenEvent::Settle => {
                for tile in &mut self.tiles {
                    tile.active = false;
                }
                Step::quiet(self)
            }
        }
    }

    fn pending_timer(&self) -> Option<PendingTimer<GardenEvent>> {
        self.tiles
            .iter()
            .any(|t| t.active)
            .then(|| PendingTimer::millis(ACTIVE_MS, GardenEvent::Settle))
    }
}
