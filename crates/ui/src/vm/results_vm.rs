use dojo_core::model::{GoalTimer, describe_duration, format_goal_time};
use services::ChallengeOutcome;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalRowVm {
    pub key: u32,
    pub label: String,
    pub target_str: String,
}

impl From<&GoalTimer> for GoalRowVm {
    fn from(goal: &GoalTimer) -> Self {
        Self {
            key: goal.id.value(),
            label: goal.label.clone(),
            target_str: format_goal_time(goal.target_seconds),
        }
    }
}

/// Reached/missed goal lists. Either header is `None` when its list is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalResultsVm {
    pub reached_header: Option<String>,
    pub reached: Vec<GoalRowVm>,
    pub missed_header: Option<String>,
    pub missed: Vec<GoalRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub title: &'static str,
    pub subtitle: String,
    pub correct: u32,
    pub wrong: u32,
    pub accuracy_str: String,
    pub per_minute_str: String,
    pub best_streak_str: String,
    pub total_answers: u32,
    pub finished_at_str: String,
    pub goals: Option<GoalResultsVm>,
}

fn goal_rows(goals: &[GoalTimer]) -> Vec<GoalRowVm> {
    goals.iter().map(GoalRowVm::from).collect()
}

#[must_use]
pub fn map_results(outcome: &ChallengeOutcome) -> ResultsVm {
    let goals = outcome.shows_goals().then(|| {
        let reached = goal_rows(&outcome.partition.reached);
        let missed = goal_rows(&outcome.partition.missed);
        GoalResultsVm {
            reached_header: (!reached.is_empty()).then(|| format!("Reached ({})", reached.len())),
            missed_header: (!missed.is_empty()).then(|| format!("Not Reached ({})", missed.len())),
            reached,
            missed,
        }
    });

    ResultsVm {
        title: "Challenge Complete!",
        subtitle: format!("{} challenge finished", describe_duration(outcome.duration)),
        correct: outcome.stats.correct,
        wrong: outcome.stats.wrong,
        accuracy_str: format!("{}%", outcome.results.accuracy_percent),
        per_minute_str: outcome.results.throughput_per_minute(),
        best_streak_str: format!("🔥 {}", outcome.stats.best_streak),
        total_answers: outcome.results.total_answers,
        finished_at_str: format_datetime(outcome.finished_at),
        goals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_core::model::{ChallengeSettingsDraft, DojoKind, GoalDraft};
    use dojo_core::time::fixed_clock;
    use services::ChallengeSession;

    fn outcome(duration_secs: u32, goals: &[u32], show: bool, elapsed: u32) -> ChallengeOutcome {
        let draft = ChallengeSettingsDraft {
            kind: DojoKind::Kanji,
            duration_secs,
            goals: goals.iter().copied().map(GoalDraft::at).collect(),
            show_goal_timers: show,
        };
        let mut session = ChallengeSession::from_draft(draft, 4, fixed_clock()).unwrap();
        for answer in [true, true, false, true] {
            session.record_answer(answer).unwrap();
        }
        session.tick(elapsed).unwrap();
        session.finish()
    }

    #[test]
    fn maps_header_and_stats() {
        let vm = map_results(&outcome(120, &[], true, 120));
        assert_eq!(vm.title, "Challenge Complete!");
        assert_eq!(vm.subtitle, "2 minutes challenge finished");
        assert_eq!(vm.correct, 3);
        assert_eq!(vm.wrong, 1);
        assert_eq!(vm.accuracy_str, "75%");
        assert_eq!(vm.per_minute_str, "2.0");
        assert_eq!(vm.best_streak_str, "🔥 2");
        assert_eq!(vm.total_answers, 4);
        assert!(vm.goals.is_none());
    }

    #[test]
    fn splits_goals_into_reached_and_missed() {
        let vm = map_results(&outcome(300, &[30, 90, 240], true, 100));
        let goals = vm.goals.unwrap();
        assert_eq!(goals.reached_header.as_deref(), Some("Reached (2)"));
        assert_eq!(goals.missed_header.as_deref(), Some("Not Reached (1)"));
        let targets: Vec<_> = goals.reached.iter().map(|g| g.target_str.as_str()).collect();
        assert_eq!(targets, vec!["0:30", "1:30"]);
        assert_eq!(goals.missed[0].target_str, "4:00");
    }

    #[test]
    fn hidden_goal_timers_are_not_mapped() {
        let vm = map_results(&outcome(60, &[30], false, 60));
        assert!(vm.goals.is_none());
    }

    #[test]
    fn all_reached_leaves_missed_header_empty() {
        let vm = map_results(&outcome(60, &[10], true, 60));
        let goals = vm.goals.unwrap();
        assert!(goals.missed_header.is_none());
        assert!(goals.missed.is_empty());
    }
}
