use chrono::{DateTime, Utc};
use serde::Serialize;

use dojo_core::model::{
    ChallengeDuration, DerivedResults, DojoKind, GoalPartition, GoalTimer, SessionStats,
    derive_results, partition_goals,
};

/// Frozen result of a finished challenge, ready for the results screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeOutcome {
    pub kind: DojoKind,
    pub stats: SessionStats,
    pub duration: ChallengeDuration,
    pub elapsed_secs: u32,
    pub goals: Vec<GoalTimer>,
    pub results: DerivedResults,
    pub partition: GoalPartition,
    pub show_goal_timers: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ChallengeOutcome {
    /// Finalise goals against `elapsed_secs` and derive the display values.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn build(
        kind: DojoKind,
        stats: SessionStats,
        duration: ChallengeDuration,
        elapsed_secs: u32,
        goals: &[GoalTimer],
        show_goal_timers: bool,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let goals: Vec<GoalTimer> = goals.iter().map(|g| g.finalized(elapsed_secs)).collect();
        let partition = partition_goals(&goals);
        Self {
            kind,
            stats,
            duration,
            elapsed_secs,
            results: derive_results(&stats, duration),
            partition,
            goals,
            show_goal_timers,
            started_at,
            finished_at,
        }
    }

    /// Pretty JSON rendering for the `results --json` command.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Whether the results screen should render the goal block.
    #[must_use]
    pub fn shows_goals(&self) -> bool {
        self.show_goal_timers && !self.goals.is_empty()
    }
}
