use dioxus::prelude::*;
use dojo_core::games::Cue;
use services::AudioCues;

use crate::context::AppContext;
use crate::views::{
    BlitzView, BreathingView, ConstellationView, GardenView, HaikuView, HomeView, MemoryView,
    RainView, StatsView, TypingView, ZenView,
};

/// Top-level screens. The shell swaps between them with a signal; there is no
/// router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Blitz,
    Breathing,
    Memory,
    Typing,
    Constellation,
    Garden,
    Rain,
    Haiku,
    Zen,
    Stats,
}

impl Screen {
    /// Entries listed on the home screen, in display order.
    pub const MENU: [Screen; 10] = [
        Screen::Blitz,
        Screen::Breathing,
        Screen::Memory,
        Screen::Typing,
        Screen::Constellation,
        Screen::Garden,
        Screen::Rain,
        Screen::Haiku,
        Screen::Zen,
        Screen::Stats,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Kana Dojo",
            Screen::Blitz => "Blitz",
            Screen::Breathing => "Breathing",
            Screen::Memory => "Memory Palace",
            Screen::Typing => "Speed Typing",
            Screen::Constellation => "Kana Constellation",
            Screen::Garden => "Sound Garden",
            Screen::Rain => "Kana Rain",
            Screen::Haiku => "Daily Haiku",
            Screen::Zen => "Zen Mode",
            Screen::Stats => "Statistics",
        }
    }

    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Screen::Home => "",
            Screen::Blitz => "Answer as many as you can before time runs out.",
            Screen::Breathing => "Slow down with a four-phase breathing cycle.",
            Screen::Memory => "Memorize the grid, then find the pairs.",
            Screen::Typing => "Type the romaji for each kana in one minute.",
            Screen::Constellation => "Connect the stars in kana order.",
            Screen::Garden => "Tap a tile to hear its kana.",
            Screen::Rain => "Watch kana fall and hover to read them.",
            Screen::Haiku => "A classical haiku for today.",
            Screen::Zen => "Hide the clutter and just practice.",
            Screen::Stats => "How your characters are coming along.",
        }
    }
}

#[component]
pub fn App() -> Element {
    let screen = use_context_provider(|| Signal::new(Screen::Home));

    rsx! {
        document::Title { "Kana Dojo" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                ScreenView { screen: screen() }
            }
        }
    }
}

#[component]
pub fn ScreenView(screen: Screen) -> Element {
    match screen {
        Screen::Home => rsx! { HomeView {} },
        Screen::Blitz => rsx! { BlitzView {} },
        Screen::Breathing => rsx! { BreathingView {} },
        Screen::Memory => rsx! { MemoryView {} },
        Screen::Typing => rsx! { TypingView {} },
        Screen::Constellation => rsx! { ConstellationView {} },
        Screen::Garden => rsx! { GardenView {} },
        Screen::Rain => rsx! { RainView {} },
        Screen::Haiku => rsx! { HaikuView {} },
        Screen::Zen => rsx! { ZenView {} },
        Screen::Stats => rsx! { StatsView {} },
    }
}

/// Button that plays a click and returns to the home screen.
#[component]
pub fn BackButton(#[props(default = "Back".to_string())] label: String) -> Element {
    let ctx = use_context::<AppContext>();
    let mut screen = use_context::<Signal<Screen>>();

    rsx! {
        button {
            class: "btn btn-secondary back-button",
            r#type: "button",
            onclick: move |_| {
                ctx.cues().play(Cue::Click);
                screen.set(Screen::Home);
            },
            "{label}"
        }
    }
}
