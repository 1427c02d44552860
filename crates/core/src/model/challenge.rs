use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::GoalId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Inputs rejected before they reach the derivation functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge duration must be positive")]
    ZeroDuration,

    #[error("goal {id:?} must have a positive target")]
    ZeroGoalTarget { id: GoalId },

    #[error("goal id {id:?} appears more than once")]
    DuplicateGoal { id: GoalId },
}

//
// ─── SESSION STATS ────────────────────────────────────────────────────────────
//

/// Counters of a finished timed challenge.
///
/// During a session the orchestrator only ever increases `correct` and
/// `wrong`; once the session ends the snapshot is frozen and handed to
/// [`derive_results`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionStats {
    pub correct: u32,
    pub wrong: u32,
    pub best_streak: u32,
}

impl SessionStats {
    #[must_use]
    pub fn new(correct: u32, wrong: u32, best_streak: u32) -> Self {
        Self {
            correct,
            wrong,
            best_streak,
        }
    }

    /// Exact number of answers given. Saturates instead of wrapping.
    #[must_use]
    pub fn total_answers(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }
}

//
// ─── DURATION ─────────────────────────────────────────────────────────────────
//

/// Configured length of a challenge in whole seconds. Always positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ChallengeDuration(u32);

impl ChallengeDuration {
    /// # Errors
    ///
    /// Returns `ChallengeError::ZeroDuration` for a zero-length challenge.
    pub fn from_secs(secs: u32) -> Result<Self, ChallengeError> {
        if secs == 0 {
            return Err(ChallengeError::ZeroDuration);
        }
        Ok(Self(secs))
    }

    #[must_use]
    pub fn secs(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ChallengeDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChallengeDuration({}s)", self.0)
    }
}

impl TryFrom<u32> for ChallengeDuration {
    type Error = ChallengeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_secs(value)
    }
}

impl From<ChallengeDuration> for u32 {
    fn from(value: ChallengeDuration) -> Self {
        value.0
    }
}

//
// ─── GOAL TIMERS ──────────────────────────────────────────────────────────────
//

/// A named elapsed-time threshold the learner tries to survive to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTimer {
    pub id: GoalId,
    pub label: String,
    pub target_seconds: u32,
    pub reached: bool,
}

impl GoalTimer {
    /// Build a goal that has not been reached yet.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::ZeroGoalTarget` when `target_seconds` is zero.
    pub fn new(
        id: GoalId,
        label: impl Into<String>,
        target_seconds: u32,
    ) -> Result<Self, ChallengeError> {
        if target_seconds == 0 {
            return Err(ChallengeError::ZeroGoalTarget { id });
        }
        Ok(Self {
            id,
            label: label.into(),
            target_seconds,
            reached: false,
        })
    }

    /// Whether this goal counts as reached after `elapsed_secs`.
    #[must_use]
    pub fn is_reached_at(&self, elapsed_secs: u32) -> bool {
        elapsed_secs >= self.target_seconds
    }

    /// Copy of the goal with `reached` computed from the final elapsed time.
    #[must_use]
    pub fn finalized(&self, elapsed_secs: u32) -> Self {
        Self {
            reached: self.is_reached_at(elapsed_secs),
            ..self.clone()
        }
    }
}

/// Check that every goal id appears once.
///
/// # Errors
///
/// Returns `ChallengeError::DuplicateGoal` for the first repeated id.
pub fn ensure_unique_goal_ids(goals: &[GoalTimer]) -> Result<(), ChallengeError> {
    let mut seen = HashSet::with_capacity(goals.len());
    for goal in goals {
        if !seen.insert(goal.id) {
            return Err(ChallengeError::DuplicateGoal { id: goal.id });
        }
    }
    Ok(())
}

/// Goals split by whether they were reached, each side in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalPartition {
    pub reached: Vec<GoalTimer>,
    pub missed: Vec<GoalTimer>,
}

impl GoalPartition {
    #[must_use]
    pub fn len(&self) -> usize {
        self.reached.len() + self.missed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reached.is_empty() && self.missed.is_empty()
    }
}

/// Stable partition of `goals` into reached and missed.
#[must_use]
pub fn partition_goals(goals: &[GoalTimer]) -> GoalPartition {
    let (reached, missed) = goals.iter().cloned().partition(|goal| goal.reached);
    GoalPartition { reached, missed }
}

//
// ─── DERIVED RESULTS ──────────────────────────────────────────────────────────
//

/// Answers per minute, kept as the raw rate so the display string is derived
/// in one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Throughput(f64);

impl Throughput {
    #[must_use]
    pub fn per_minute(&self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Throughput {
    /// `"0"` when nothing was answered, otherwise one fractional digit with
    /// ties rounded up.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let tenths = (self.0 * 10.0).round() as u64;
        write!(f, "{}.{}", tenths / 10, tenths % 10)
    }
}

/// Display-ready values computed from a [`SessionStats`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedResults {
    pub total_answers: u32,
    pub accuracy_percent: u32,
    pub throughput: Throughput,
}

impl DerivedResults {
    /// Throughput formatted for display (`"0"` or one decimal place).
    #[must_use]
    pub fn throughput_per_minute(&self) -> String {
        self.throughput.to_string()
    }
}

/// Percentage of `correct` in `total`, rounded half-up. Zero when `total` is zero.
#[must_use]
pub fn accuracy_percent(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = f64::from(correct) / f64::from(total) * 100.0;
    // Values stay within u32 for every correct <= total.
    (ratio + 0.5).floor() as u32
}

/// Derive accuracy and throughput for a completed challenge.
#[must_use]
pub fn derive_results(stats: &SessionStats, duration: ChallengeDuration) -> DerivedResults {
    let total_answers = stats.total_answers();
    let throughput = if total_answers > 0 {
        Throughput(f64::from(total_answers) / f64::from(duration.secs()) * 60.0)
    } else {
        Throughput(0.0)
    };

    DerivedResults {
        total_answers,
        accuracy_percent: accuracy_percent(stats.correct, total_answers),
        throughput,
    }
}

//
// ─── FORMATTING ───────────────────────────────────────────────────────────────
//

/// `M:SS` with no hour component; 3661 renders as `61:01`.
#[must_use]
pub fn format_goal_time(target_seconds: u32) -> String {
    let minutes = target_seconds / 60;
    let seconds = target_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

/// Human label for a challenge length.
///
/// Minutes use integer division and only pluralise above 60 seconds, so
/// `60` is `"1 minute"` and `90` is `"1 minutes"`.
#[must_use]
pub fn describe_duration(duration: ChallengeDuration) -> String {
    let secs = duration.secs();
    if secs < 60 {
        return format!("{secs} seconds");
    }
    let minutes = secs / 60;
    let plural = if secs > 60 { "s" } else { "" };
    format!("{minutes} minute{plural}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duration(secs: u32) -> ChallengeDuration {
        ChallengeDuration::from_secs(secs).unwrap()
    }

    fn goal(id: u32, target: u32, reached: bool) -> GoalTimer {
        GoalTimer {
            id: GoalId::new(id),
            label: format!("{target}s"),
            target_seconds: target,
            reached,
        }
    }

    #[test]
    fn derive_results_for_typical_session() {
        let stats = SessionStats::new(18, 2, 7);
        let results = derive_results(&stats, duration(60));

        assert_eq!(results.total_answers, 20);
        assert_eq!(results.accuracy_percent, 90);
        assert_eq!(results.throughput_per_minute(), "20.0");
    }

    #[test]
    fn derive_results_without_answers_is_zero() {
        for secs in [1, 30, 60, 3600] {
            let results = derive_results(&SessionStats::default(), duration(secs));
            assert_eq!(results.total_answers, 0);
            assert_eq!(results.accuracy_percent, 0);
            assert_eq!(results.throughput_per_minute(), "0");
            assert!(results.throughput.is_zero());
        }
    }

    #[test]
    fn accuracy_rounds_half_up() {
        // 1 / 8 = 12.5%
        assert_eq!(accuracy_percent(1, 8), 13);
        // 2 / 3 = 66.67%
        assert_eq!(accuracy_percent(2, 3), 67);
        // 1 / 3 = 33.33%
        assert_eq!(accuracy_percent(1, 3), 33);
        assert_eq!(accuracy_percent(5, 5), 100);
        assert_eq!(accuracy_percent(0, 5), 0);
    }

    #[test]
    fn accuracy_stays_in_range() {
        for total in 1..=50 {
            for correct in 0..=total {
                let pct = accuracy_percent(correct, total);
                assert!(pct <= 100, "{correct}/{total} gave {pct}");
            }
        }
    }

    #[test]
    fn throughput_uses_configured_duration() {
        let stats = SessionStats::new(10, 5, 3);
        let results = derive_results(&stats, duration(90));
        assert_eq!(results.throughput_per_minute(), "10.0");

        let results = derive_results(&SessionStats::new(1, 0, 1), duration(7));
        assert_eq!(results.throughput_per_minute(), "8.6");

        // 1 answer over 4 minutes is exactly 0.25 per minute.
        let results = derive_results(&SessionStats::new(0, 1, 0), duration(240));
        assert_eq!(results.throughput_per_minute(), "0.3");
    }

    #[test]
    fn derive_results_is_idempotent() {
        let stats = SessionStats::new(13, 4, 9);
        let first = derive_results(&stats, duration(45));
        let second = derive_results(&stats, duration(45));
        assert_eq!(first, second);
        assert_eq!(
            first.throughput.per_minute().to_bits(),
            second.throughput.per_minute().to_bits()
        );
    }

    #[test]
    fn partition_keeps_relative_order() {
        let goals = vec![
            goal(1, 30, true),
            goal(2, 60, false),
            goal(3, 90, true),
            goal(4, 120, false),
            goal(5, 150, true),
        ];
        let split = partition_goals(&goals);

        let reached: Vec<u32> = split.reached.iter().map(|g| g.id.value()).collect();
        let missed: Vec<u32> = split.missed.iter().map(|g| g.id.value()).collect();
        assert_eq!(reached, vec![1, 3, 5]);
        assert_eq!(missed, vec![2, 4]);
        assert_eq!(split.len(), goals.len());
    }

    #[test]
    fn partition_of_two_goals() {
        let goals = vec![goal(1, 30, true), goal(2, 60, false)];
        let split = partition_goals(&goals);
        assert_eq!(split.reached, vec![goals[0].clone()]);
        assert_eq!(split.missed, vec![goals[1].clone()]);
    }

    #[test]
    fn partition_of_nothing_is_empty() {
        let split = partition_goals(&[]);
        assert!(split.is_empty());
        assert!(split.reached.is_empty());
        assert!(split.missed.is_empty());
    }

    #[test]
    fn goal_time_has_no_hour_rollover() {
        assert_eq!(format_goal_time(0), "0:00");
        assert_eq!(format_goal_time(65), "1:05");
        assert_eq!(format_goal_time(600), "10:00");
        assert_eq!(format_goal_time(3661), "61:01");
    }

    #[test]
    fn duration_descriptions() {
        assert_eq!(describe_duration(duration(30)), "30 seconds");
        assert_eq!(describe_duration(duration(1)), "1 seconds");
        assert_eq!(describe_duration(duration(60)), "1 minute");
        assert_eq!(describe_duration(duration(90)), "1 minutes");
        assert_eq!(describe_duration(duration(120)), "2 minutes");
    }

    #[test]
    fn zero_inputs_are_rejected_at_construction() {
        assert_eq!(
            ChallengeDuration::from_secs(0),
            Err(ChallengeError::ZeroDuration)
        );
        assert_eq!(
            GoalTimer::new(GoalId::new(3), "never", 0),
            Err(ChallengeError::ZeroGoalTarget { id: GoalId::new(3) })
        );
    }

    #[test]
    fn goals_finalize_against_elapsed_time() {
        let goal = GoalTimer::new(GoalId::new(1), "1 min", 60).unwrap();
        assert!(!goal.finalized(59).reached);
        assert!(goal.finalized(60).reached);
        assert!(goal.finalized(61).reached);
    }

    #[test]
    fn duplicate_goal_ids_are_reported() {
        let goals = vec![goal(1, 30, false), goal(2, 60, false), goal(1, 90, false)];
        assert_eq!(
            ensure_unique_goal_ids(&goals),
            Err(ChallengeError::DuplicateGoal { id: GoalId::new(1) })
        );
        assert!(ensure_unique_goal_ids(&goals[..2]).is_ok());
    }

    #[test]
    fn duration_deserializes_with_validation() {
        let ok: ChallengeDuration = serde_json::from_str("45").unwrap();
        assert_eq!(ok.secs(), 45);
        assert!(serde_json::from_str::<ChallengeDuration>("0").is_err());
    }
}
