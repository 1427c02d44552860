mod blitz;
mod breathing;
mod constellation;
mod empty_state;
mod garden;
mod haiku;
mod home;
mod machine;
mod memory;
mod rain;
mod results;
mod stats;
mod typing;
mod zen;

pub use blitz::BlitzView;
pub use breathing::BreathingView;
pub use constellation::ConstellationView;
pub use empty_state::EmptyState;
pub use garden::GardenView;
pub use haiku::HaikuView;
pub use home::HomeView;
pub use machine::{Machine, use_machine};
pub use memory::MemoryView;
pub use rain::RainView;
pub use results::ResultsScreen;
pub use stats::StatsView;
pub use typing::TypingView;
pub use zen::ZenView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
