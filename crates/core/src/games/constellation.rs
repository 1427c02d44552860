use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

use super::{Cue, PendingTimer, PhaseMachine, Step};
use crate::model::kana::{Kana, hiragana_only};

const MIN_POINTS: usize = 5;
const MAX_POINTS: usize = 7;

/// A star, positioned in percent of the sky area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarPoint {
    pub kana: Kana,
    pub x: f64,
    pub y: f64,
    pub order: usize,
    pub connected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstellationEvent {
    Select(usize),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constellation {
    pub points: Vec<StarPoint>,
    pub lines: Vec<Line>,
    pub current: usize,
    pub complete: bool,
    /// Constellations finished so far; survives `Reset`.
    pub completed: u32,
}

fn generate<R: Rng + ?Sized>(rng: &mut R) -> Vec<StarPoint> {
    let count = rng.random_range(MIN_POINTS..=MAX_POINTS);
    let picks: Vec<Kana> = hiragana_only()
        .choose_multiple(rng, count)
        .copied()
        .collect();
    picks
        .into_iter()
        .enumerate()
        .map(|(order, kana)| StarPoint {
            kana,
            x: rng.random_range(15.0..85.0),
            y: rng.random_range(15.0..75.0),
            order,
            connected: false,
        })
        .collect()
}

impl Constellation {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            points: generate(rng),
            lines: Vec::new(),
            current: 0,
            complete: false,
            completed: 0,
        }
    }

    /// The kana the learner should pick next, if any remain.
    #[must_use]
    pub fn next_kana(&self) -> Option<&Kana> {
        self.points
            .iter()
            .find(|p| p.order == self.current)
            .map(|p| &p.kana)
    }

    fn select(mut self, index: usize) -> Step<Self> {
        let Some(point) = self.points.get(index).cloned() else {
            return Step::quiet(self);
        };
        if point.order != self.current {
            return Step::with_cue(self, Cue::Error);
        }

        self.points[index].connected = true;
        if let Some(prev) = self
            .current
            .checked_sub(1)
            .and_then(|order| self.points.iter().find(|p| p.order == order))
        {
            self.lines.push(Line {
                x1: prev.x,
                y1: prev.y,
                x2: point.x,
                y2: point.y,
            });
        }
        self.current += 1;
        if self.current == self.points.len() {
            self.complete = true;
            self.completed += 1;
        }
        Step::with_cue(self, Cue::Correct)
    }
}

impl PhaseMachine for Constellation {
    type Event = ConstellationEvent;

    fn apply<R: Rng + ?Sized>(self, event: ConstellationEvent, rng: &mut R) -> Step<Self> {
        match event {
            ConstellationEvent::Select(index) => self.select(index),
            ConstellationEvent::Reset => {
                let next = Self {
                    completed: self.completed,
                    ..Self::new(rng)
                };
                Step::with_cue(next, Cue::Click)
            }
        }
    }

    fn pending_timer(&self) -> Option<PendingTimer<ConstellationEvent>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn index_of(state: &Constellation, order: usize) -> usize {
        state.points.iter().position(|p| p.order == order).unwrap()
    }

    #[test]
    fn generated_points_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..50 {
            let state = Constellation::new(&mut rng);
            assert!((MIN_POINTS..=MAX_POINTS).contains(&state.points.len()));
            for (i, p) in state.points.iter().enumerate() {
                assert_eq!(p.order, i);
                assert!((15.0..85.0).contains(&p.x));
                assert!((15.0..75.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn connecting_in_order_completes() {
        let mut rng = StdRng::seed_from_u64(32);
        let mut state = Constellation::new(&mut rng);
        let n = state.points.len();
        for order in 0..n {
            let step = state.clone().apply(
                ConstellationEvent::Select(index_of(&state, order)),
                &mut rng,
            );
            assert_eq!(step.cues, vec![Cue::Correct]);
            state = step.state;
        }
        assert!(state.complete);
        assert_eq!(state.completed, 1);
        assert_eq!(state.lines.len(), n - 1);
        assert!(state.next_kana().is_none());
    }

    #[test]
    fn out_of_order_is_an_error() {
        let mut rng = StdRng::seed_from_u64(33);
        let state = Constellation::new(&mut rng);
        let wrong = index_of(&state, 2);
        let step = state.clone().apply(ConstellationEvent::Select(wrong), &mut rng);
        assert_eq!(step.cues, vec![Cue::Error]);
        assert_eq!(step.state, state);
    }

    #[test]
    fn reset_keeps_completed_count() {
        let mut rng = StdRng::seed_from_u64(34);
        let mut state = Constellation::new(&mut rng);
        state.completed = 4;
        state.current = 2;
        let step = state.apply(ConstellationEvent::Reset, &mut rng);
        assert_eq!(step.cues, vec![Cue::Click]);
        assert_eq!(step.state.completed, 4);
        assert_eq!(step.state.current, 0);
        assert!(step.state.lines.is_empty());
    }
}
