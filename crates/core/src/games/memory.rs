use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::Serialize;

use super::{Cue, PendingTimer, PhaseMachine, Step};
use crate::model::CardId;
use crate::model::kana::{Kana, hiragana_only};

pub const GRID_SIZE: usize = 8;
pub const MEMORIZE_SECS: u32 = 5;
const TICK_MS: u64 = 1000;
const COMPLETION_CHECK_MS: u64 = 300;
const MISMATCH_HIDE_MS: u64 = 800;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryCard {
    pub id: CardId,
    pub kana: Kana,
    pub position: usize,
    pub revealed: bool,
    pub matched: bool,
}

/// Timer-driven work scheduled during recall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecallWait {
    /// A wrong pair is on display; input is locked until it is hidden.
    Mismatch,
    /// Every pair matched; the round ends once the check fires.
    Completion,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MemoryPhase {
    Memorize {
        seconds_left: u32,
    },
    Recall {
        selected: Option<CardId>,
        waiting: Option<RecallWait>,
    },
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryEvent {
    Tick,
    Select(CardId),
    HideMismatch,
    CheckCompletion,
    NextRound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Perfect,
    Great,
    KeepPracticing,
}

impl Verdict {
    #[must_use]
    pub fn from_mistakes(mistakes: u32) -> Self {
        match mistakes {
            0 => Verdict::Perfect,
            1..=2 => Verdict::Great,
            _ => Verdict::KeepPracticing,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Perfect!",
            Verdict::Great => "Great job!",
            Verdict::KeepPracticing => "Keep practicing!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryPalace {
    pub phase: MemoryPhase,
    /// Ordered by `position`.
    pub cards: Vec<MemoryCard>,
    pub score: u32,
    pub mistakes: u32,
    pub round: u32,
}

fn deal<R: Rng + ?Sized>(rng: &mut R) -> Vec<MemoryCard> {
    let picks: Vec<Kana> = hiragana_only()
        .choose_multiple(rng, GRID_SIZE / 2)
        .copied()
        .collect();

    let mut cards: Vec<MemoryCard> = picks
        .iter()
        .zip(0_u32..)
        .flat_map(|(kana, i)| {
            [i * 2, i * 2 + 1].map(|id| MemoryCard {
                id: CardId::new(id),
                kana: *kana,
                position: 0,
                revealed: true,
                matched: false,
            })
        })
        .collect();
    cards.shuffle(rng);
    for (position, card) in cards.iter_mut().enumerate() {
        card.position = position;
    }
    cards
}

impl MemoryPalace {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            phase: MemoryPhase::Memorize {
                seconds_left: MEMORIZE_SECS,
            },
            cards: deal(rng),
            score: 0,
            mistakes: 0,
            round: 1,
        }
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_mistakes(self.mistakes)
    }

    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        match &self.phase {
            MemoryPhase::Memorize { seconds_left } => {
                format!("Memorize the positions! {seconds_left}s")
            }
            MemoryPhase::Recall { .. } => "Find the matching pairs!".to_string(),
            MemoryPhase::Result => "Round Complete!".to_string(),
        }
    }

    fn card(&self, id: CardId) -> Option<&MemoryCard> {
        self.cards.iter().find(|c| c.id == id)
    }

    fn reveal(&mut self, id: CardId) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.revealed = true;
        }
    }

    fn tick(mut self) -> Step<Self> {
        let MemoryPhase::Memorize { seconds_left } = self.phase else {
            return Step::quiet(self);
        };
        if seconds_left <= 1 {
            for card in &mut self.cards {
                card.revealed = false;
            }
            self.phase = MemoryPhase::Recall {
                selected: None,
                waiting: None,
            };
        } else {
            self.phase = MemoryPhase::Memorize {
                seconds_left: seconds_left - 1,
            };
        }
        Step::quiet(self)
    }

    fn hide_mismatch(mut self) -> Step<Self> {
        if let MemoryPhase::Recall {
            waiting: Some(RecallWait::Mismatch),
            ..
        } = self.phase
        {
            for card in self.cards.iter_mut().filter(|c| !c.matched) {
                card.revealed = false;
            }
            self.phase = MemoryPhase::Recall {
                selected: None,
                waiting: None,
            };
        }
        Step::quiet(self)
    }

    fn check_completion(mut self) -> Step<Self> {
        if let MemoryPhase::Recall {
            waiting: Some(RecallWait::Completion),
            ..
        } = self.phase
        {
            if self.all_matched() {
                self.phase = MemoryPhase::Result;
            }
        }
        Step::quiet(self)
    }

    fn select(mut self, id: CardId) -> Step<Self> {
        let MemoryPhase::Recall {
            selected,
            waiting: None,
        } = self.phase
        else {
            return Step::quiet(self);
        };
        let Some(card) = self.card(id).cloned() else {
            return Step::quiet(self);
        };
        if card.matched || card.revealed {
            return Step::quiet(self);
        }

        self.reveal(id);
        let Some(first_id) = selected else {
            self.phase = MemoryPhase::Recall {
                selected: Some(id),
                waiting: None,
            };
            return Step::with_cue(self, Cue::Click);
        };

        let is_match = self
            .card(first_id)
            .is_some_and(|first| first.kana == card.kana && first.id != card.id);
        if is_match {
            self.score += 1;
            for c in self.cards.iter_mut().filter(|c| c.kana == card.kana) {
                c.matched = true;
                c.revealed = true;
            }
            let waiting = self.all_matched().then_some(RecallWait::Completion);
            self.phase = MemoryPhase::Recall {
                selected: None,
                waiting,
            };
            Step {
                state: self,
                cues: vec![Cue::Click, Cue::Correct],
            }
        } else {
            self.mistakes += 1;
            self.phase = MemoryPhase::Recall {
                selected: Some(first_id),
                waiting: Some(RecallWait::Mismatch),
            };
            Step {
                state: self,
                cues: vec![Cue::Click, Cue::Error],
            }
        }
    }
}

impl PhaseMachine for MemoryPalace {
    type Event = MemoryEvent;

    fn apply<R: Rng + ?Sized>(self, event: MemoryEvent, rng: &mut R) -> Step<Self> {
        match event {
            MemoryEvent::Tick => self.tick(),
            MemoryEvent::Select(id) => self.select(id),
            MemoryEvent::HideMismatch => self.hide_mismatch(),
            MemoryEvent::CheckCompletion => self.check_completion(),
            MemoryEvent::NextRound => {
                let next = Self {
                    round: self.round + 1,
                    score: self.score,
                    ..Self::new(rng)
                };
                Step::with_cue(next, Cue::Click)
            }
        }
    }

    fn pending_timer(&self) -> Option<PendingTimer<MemoryEvent>> {
        match self.phase {
            MemoryPhase::Memorize { .. } => Some(PendingTimer::millis(TICK_MS, MemoryEvent::Tick)),
            MemoryPhase::Recall {
                waiting: Some(RecallWait::Mismatch),
                ..
            } => Some(PendingTimer::millis(
                MISMATCH_HIDE_MS,
                MemoryEvent::HideMismatch,
            )),
            MemoryPhase::Recall {
                waiting: Some(RecallWait::Completion),
                ..
            } => Some(PendingTimer::millis(
                COMPLETION_CHECK_MS,
                MemoryEvent::CheckCompletion,
            )),
            MemoryPhase::Recall { waiting: None, .. } | MemoryPhase::Result => None,
        }
    }
}
