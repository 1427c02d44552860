mod challenge_vm;
mod mastery_vm;
mod results_vm;
mod time_fmt;

pub use challenge_vm::{ChallengeHudVm, GoalChipVm, map_challenge_hud};
pub use mastery_vm::{MasteryChartVm, MasterySegmentVm, map_mastery_chart};
pub use results_vm::{GoalResultsVm, GoalRowVm, ResultsVm, map_results};
pub use time_fmt::{format_datetime, format_remaining};
