use chrono::{DateTime, Utc};
use dojo_core::model::format_goal_time;

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Countdown shown while a challenge runs, e.g. `Time: 0:45`.
#[must_use]
pub fn format_remaining(remaining_secs: u32) -> String {
    format!("Time: {}", format_goal_time(remaining_secs))
}
