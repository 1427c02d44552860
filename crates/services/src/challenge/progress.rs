use dojo_core::model::GoalId;

/// Live view of a running challenge, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeProgress {
    pub elapsed_secs: u32,
    pub remaining_secs: u32,
    pub correct: u32,
    pub wrong: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub is_finished: bool,
}

/// What a single `tick` changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Goals whose target was crossed by this tick, in list order.
    pub newly_reached: Vec<GoalId>,
    pub finished: bool,
}
