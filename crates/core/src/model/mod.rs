mod challenge;
mod dojo;
pub mod haiku;
mod ids;
pub mod kana;
mod mastery;
mod settings;

pub use challenge::{
    ChallengeDuration, ChallengeError, DerivedResults, GoalPartition, GoalTimer, SessionStats,
    Throughput, accuracy_percent, derive_results, describe_duration, ensure_unique_goal_ids,
    format_goal_time, partition_goals,
};
pub use dojo::{ChallengeGate, DojoKind, EmptyStateCopy, ParseDojoKindError};
pub use haiku::Haiku;
pub use ids::{CardId, DropId, GoalId};
pub use kana::{Kana, Script};
pub use mastery::{
    INLINE_LABEL_MIN_PERCENT, MasteryDisplayValues, MasteryDistribution, MasteryLevel,
    MasterySegment, format_fixed, percentage,
};
pub use settings::{
    ChallengeSettings, ChallengeSettingsDraft, DEFAULT_DURATION_SECS, GoalDraft, SettingsError,
};
