use dojo_core::model::GoalTimer;
use services::ChallengeProgress;

use crate::vm::time_fmt::format_remaining;

/// Live counters shown above the prompt while a challenge runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeHudVm {
    pub time_str: String,
    pub correct_str: String,
    pub wrong_str: String,
    pub streak_str: String,
    pub goal_chips: Vec<GoalChipVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalChipVm {
    pub key: u32,
    pub label: String,
    pub reached: bool,
    pub class: &'static str,
}

#[must_use]
pub fn map_challenge_hud(
    progress: &ChallengeProgress,
    goals: &[GoalTimer],
    show_goal_timers: bool,
) -> ChallengeHudVm {
    let goal_chips = if show_goal_timers {
        goals
            .iter()
            .map(|goal| GoalChipVm {
                key: goal.id.value(),
                label: goal.label.clone(),
                reached: goal.reached,
                class: if goal.reached {
                    "goal-chip goal-chip--reached"
                } else {
                    "goal-chip"
                },
            })
            .collect()
    } else {
        Vec::new()
    };

    ChallengeHudVm {
        time_str: format_remaining(progress.remaining_secs),
        correct_str: format!("Correct: {}", progress.correct),
        wrong_str: format!("Wrong: {}", progress.wrong),
        streak_str: format!("Streak: {}", progress.streak),
        goal_chips,
    }
}
