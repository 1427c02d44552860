use chrono::{DateTime, Utc};

use dojo_core::model::{
    ChallengeGate, ChallengeSettings, ChallengeSettingsDraft, GoalTimer, SessionStats,
};

use super::outcome::ChallengeOutcome;
use super::progress::{ChallengeProgress, TickOutcome};
use crate::Clock;
use crate::error::SessionError;

//
// ─── CHALLENGE SESSION ─────────────────────────────────────────────────────────
//

/// Live counters of one timed challenge.
///
/// The session owns correct/wrong counts, streaks and elapsed time while the
/// challenge runs. Once finished the counters are frozen and the same
/// [`ChallengeOutcome`] is returned on every call to [`finish`](Self::finish).
pub struct ChallengeSession {
    settings: ChallengeSettings,
    clock: Clock,
    correct: u32,
    wrong: u32,
    streak: u32,
    best_streak: u32,
    elapsed_secs: u32,
    goals: Vec<GoalTimer>,
    started_at: DateTime<Utc>,
    outcome: Option<ChallengeOutcome>,
}

impl ChallengeSession {
    /// Start a challenge over the current selection.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoSelection` when `selected_items` is zero.
    pub fn start(
        settings: ChallengeSettings,
        selected_items: usize,
        clock: Clock,
    ) -> Result<Self, SessionError> {
        if !ChallengeGate::from_selection(selected_items).is_open() {
            log::warn!(
                "refusing to start {} challenge without a selection",
                settings.kind()
            );
            return Err(SessionError::NoSelection {
                kind: settings.kind(),
            });
        }

        log::info!(
            "starting {} challenge: {}s, {} goals, {} items",
            settings.kind(),
            settings.duration().secs(),
            settings.goals().len(),
            selected_items
        );
        Ok(Self {
            goals: settings.goals().to_vec(),
            started_at: clock.now(),
            settings,
            clock,
            correct: 0,
            wrong: 0,
            streak: 0,
            best_streak: 0,
            elapsed_secs: 0,
            outcome: None,
        })
    }

    /// Validate `draft` and start a challenge with it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Settings` for an invalid draft and
    /// `SessionError::NoSelection` when nothing is selected.
    pub fn from_draft(
        draft: ChallengeSettingsDraft,
        selected_items: usize,
        clock: Clock,
    ) -> Result<Self, SessionError> {
        let settings = draft.validate()?;
        Self::start(settings, selected_items, clock)
    }

    #[must_use]
    pub fn settings(&self) -> &ChallengeSettings {
        &self.settings
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.settings
            .duration()
            .secs()
            .saturating_sub(self.elapsed_secs)
    }

    #[must_use]
    pub fn goals(&self) -> &[GoalTimer] {
        &self.goals
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Counters so far; equal to the final snapshot once finished.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        SessionStats::new(self.correct, self.wrong, self.best_streak)
    }

    #[must_use]
    pub fn progress(&self) -> ChallengeProgress {
        ChallengeProgress {
            elapsed_secs: self.elapsed_secs,
            remaining_secs: self.remaining_secs(),
            correct: self.correct,
            wrong: self.wrong,
            streak: self.streak,
            best_streak: self.best_streak,
            is_finished: self.is_finished(),
        }
    }

    /// Count one answer and update the streaks.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` once the challenge has ended.
    pub fn record_answer(&mut self, correct: bool) -> Result<SessionStats, SessionError> {
        if self.is_finished() {
            log::warn!("answer recorded after the challenge finished");
            return Err(SessionError::Finished);
        }

        if correct {
            self.correct = self.correct.saturating_add(1);
            self.streak = self.streak.saturating_add(1);
            self.best_streak = self.best_streak.max(self.streak);
        } else {
            self.wrong = self.wrong.saturating_add(1);
            self.streak = 0;
        }
        log::debug!(
            "answer correct={correct}: {}/{} streak {}",
            self.correct,
            self.wrong,
            self.streak
        );
        Ok(self.stats())
    }

    /// Advance the clock by `delta_secs`.
    ///
    /// Goals are marked as soon as their target is crossed. Reaching the
    /// configured duration finishes the challenge.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Finished` once the challenge has ended.
    pub fn tick(&mut self, delta_secs: u32) -> Result<TickOutcome, SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }

        let duration = self.settings.duration().secs();
        self.elapsed_secs = self.elapsed_secs.saturating_add(delta_secs).min(duration);

        let elapsed = self.elapsed_secs;
        let newly_reached = self
            .goals
            .iter_mut()
            .filter(|goal| !goal.reached && goal.is_reached_at(elapsed))
            .map(|goal| {
                goal.reached = true;
                log::debug!("goal {} reached at {elapsed}s", goal.label);
                goal.id
            })
            .collect();

        let finished = elapsed >= duration;
        if finished {
            self.finish();
        }
        Ok(TickOutcome {
            newly_reached,
            finished,
        })
    }

    /// End the challenge and return its frozen outcome.
    ///
    /// Calling this again returns the same outcome.
    pub fn finish(&mut self) -> ChallengeOutcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        let outcome = ChallengeOutcome::build(
            self.settings.kind(),
            self.stats(),
            self.settings.duration(),
            self.elapsed_secs,
            &self.goals,
            self.settings.show_goal_timers(),
            self.started_at,
            self.clock.now(),
        );
        self.goals.clone_from(&outcome.goals);
        log::info!(
            "{} challenge finished: {} answers, {}% accuracy, {}/{} goals reached",
            outcome.kind,
            outcome.results.total_answers,
            outcome.results.accuracy_percent,
            outcome.partition.reached.len(),
            outcome.goals.len()
        );
        self.outcome = Some(outcome.clone());
        outcome
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&ChallengeOutcome> {
        self.outcome.as_ref()
    }

    /// Reset counters and goals for another attempt with the same settings.
    pub fn restart(&mut self) {
        log::info!("restarting {} challenge", self.settings.kind());
        self.correct = 0;
        self.wrong = 0;
        self.streak = 0;
        self.best_streak = 0;
        self.elapsed_secs = 0;
        self.goals = self.settings.goals().to_vec();
        self.started_at = self.clock.now();
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_core::model::{DojoKind, GoalDraft};
    use dojo_core::time::fixed_clock;

    fn settings(duration_secs: u32, goals: &[u32]) -> ChallengeSettings {
        ChallengeSettingsDraft {
            kind: DojoKind::Kana,
            duration_secs,
            goals: goals.iter().copied().map(GoalDraft::at).collect(),
            show_goal_timers: true,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn streaks_track_best_run() {
        let mut session = ChallengeSession::start(settings(60, &[]), 5, fixed_clock()).unwrap();
        for answer in [true, true, false, true, true, true, false] {
            session.record_answer(answer).unwrap();
        }
        let progress = session.progress();
        assert_eq!(progress.correct, 5);
        assert_eq!(progress.wrong, 2);
        assert_eq!(progress.streak, 0);
        assert_eq!(progress.best_streak, 3);
    }

    #[test]
    fn tick_clamps_to_duration() {
        let mut session = ChallengeSession::start(settings(30, &[]), 1, fixed_clock()).unwrap();
        let outcome = session.tick(45).unwrap();
        assert!(outcome.finished);
        assert_eq!(session.elapsed_secs(), 30);
        assert_eq!(session.remaining_secs(), 0);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut session = ChallengeSession::start(settings(60, &[20]), 1, fixed_clock()).unwrap();
        session.record_answer(true).unwrap();
        session.tick(25).unwrap();
        let first = session.finish();
        let second = session.finish();
        assert_eq!(first, second);
        assert_eq!(session.outcome(), Some(&first));
    }
}
