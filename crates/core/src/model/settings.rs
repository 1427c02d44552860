use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::challenge::{
    ChallengeDuration, ChallengeError, GoalTimer, ensure_unique_goal_ids, format_goal_time,
};
use crate::model::dojo::DojoKind;
use crate::model::ids::GoalId;

/// Default challenge length when nothing is configured.
pub const DEFAULT_DURATION_SECS: u32 = 60;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error(transparent)]
    Challenge(#[from] ChallengeError),
}

/// Validated configuration of one timed challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChallengeSettings {
    kind: DojoKind,
    duration: ChallengeDuration,
    goals: Vec<GoalTimer>,
    show_goal_timers: bool,
}

/// A goal as entered by the user; the label falls back to the `M:SS` target.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GoalDraft {
    pub label: Option<String>,
    pub target_seconds: u32,
}

impl GoalDraft {
    #[must_use]
    pub fn at(target_seconds: u32) -> Self {
        Self {
            label: None,
            target_seconds,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChallengeSettingsDraft {
    pub kind: DojoKind,
    pub duration_secs: u32,
    pub goals: Vec<GoalDraft>,
    pub show_goal_timers: bool,
}

impl Default for ChallengeSettingsDraft {
    fn default() -> Self {
        Self {
            kind: DojoKind::Kana,
            duration_secs: DEFAULT_DURATION_SECS,
            goals: Vec::new(),
            show_goal_timers: true,
        }
    }
}

impl ChallengeSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft into settings. Goal ids follow list order from 1.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Challenge` for a zero duration or a zero goal target.
    pub fn validate(self) -> Result<ChallengeSettings, SettingsError> {
        let duration = ChallengeDuration::from_secs(self.duration_secs)?;

        let goals = self
            .goals
            .into_iter()
            .zip(1_u32..)
            .map(|(draft, id)| {
                let label = normalize_label(draft.label)
                    .unwrap_or_else(|| format_goal_time(draft.target_seconds));
                GoalTimer::new(GoalId::new(id), label, draft.target_seconds)
            })
            .collect::<Result<Vec<_>, _>>()?;
        ensure_unique_goal_ids(&goals)?;

        Ok(ChallengeSettings {
            kind: self.kind,
            duration,
            goals,
            show_goal_timers: self.show_goal_timers,
        })
    }
}

impl ChallengeSettings {
    #[must_use]
    pub fn kind(&self) -> DojoKind {
        self.kind
    }

    #[must_use]
    pub fn duration(&self) -> ChallengeDuration {
        self.duration
    }

    #[must_use]
    pub fn goals(&self) -> &[GoalTimer] {
        &self.goals
    }

    #[must_use]
    pub fn show_goal_timers(&self) -> bool {
        self.show_goal_timers
    }
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            kind: DojoKind::Kana,
            duration: ChallengeDuration::from_secs(DEFAULT_DURATION_SECS)
                .unwrap_or_else(|_| unreachable!("default duration is positive")),
            goals: Vec::new(),
            show_goal_timers: true,
        }
    }
}

fn normalize_label(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
