use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use super::{Cue, PendingTimer, PhaseMachine, Step};
use crate::model::haiku::{Haiku, daily_haiku, haiku_for_day, random_haiku};
use crate::time::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaikuEvent {
    NewHaiku,
    ToggleRomaji,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyHaiku {
    pub haiku: &'static Haiku,
    pub is_daily: bool,
    pub show_romaji: bool,
}

impl DailyHaiku {
    #[must_use]
    pub fn for_date(now: DateTime<Utc>) -> Self {
        Self {
            haiku: daily_haiku(now),
            is_daily: true,
            show_romaji: false,
        }
    }

    /// Today's haiku according to `clock`.
    #[must_use]
    pub fn today(clock: &Clock) -> Self {
        Self {
            haiku: haiku_for_day(clock.day_of_year()),
            ..Self::for_date(clock.now())
        }
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.is_daily {
            "Today's Haiku"
        } else {
            "Random Haiku"
        }
    }
}

impl PhaseMachine for DailyHaiku {
    type Event = HaikuEvent;

    fn apply<R: Rng + ?Sized>(mut self, event: HaikuEvent, rng: &mut R) -> Step<Self> {
        match event {
            HaikuEvent::NewHaiku => {
                self.haiku = random_haiku(rng);
                self.is_daily = false;
            }
            HaikuEvent::ToggleRomaji => self.show_romaji = !self.show_romaji,
        }
        Step::with_cue(self, Cue::Click)
    }

    fn pending_timer(&self) -> Option<PendingTimer<HaikuEvent>> {
        None
    }
}
