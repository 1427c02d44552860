use std::sync::Arc;

use dojo_core::decorations::DecorationsStore;
use dojo_core::model::{ChallengeSettings, MasteryDistribution};
use services::{AudioCues, Clock};

/// One selected item a timed challenge can ask about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeItem {
    pub prompt: String,
    pub answer: String,
}

pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn cues(&self) -> Arc<dyn AudioCues>;
    fn decorations(&self) -> DecorationsStore;

    fn challenge_settings(&self) -> ChallengeSettings;
    /// Items currently selected for the configured dojo. Empty means the
    /// challenge shows its empty state.
    fn selection(&self) -> Vec<PracticeItem>;
    fn mastery(&self) -> MasteryDistribution;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    cues: Arc<dyn AudioCues>,
    decorations: DecorationsStore,
    settings: ChallengeSettings,
    selection: Arc<Vec<PracticeItem>>,
    mastery: MasteryDistribution,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            cues: app.cues(),
            decorations: app.decorations(),
            settings: app.challenge_settings(),
            selection: Arc::new(app.selection()),
            mastery: app.mastery(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn cues(&self) -> Arc<dyn AudioCues> {
        Arc::clone(&self.cues)
    }

    #[must_use]
    pub fn decorations(&self) -> DecorationsStore {
        self.decorations.clone()
    }

    #[must_use]
    pub fn challenge_settings(&self) -> &ChallengeSettings {
        &self.settings
    }

    #[must_use]
    pub fn selection(&self) -> Arc<Vec<PracticeItem>> {
        Arc::clone(&self.selection)
    }

    #[must_use]
    pub fn mastery(&self) -> MasteryDistribution {
        self.mastery
    }
}

// Provided by the desktop launcher in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
