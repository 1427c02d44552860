use dioxus::prelude::*;
use dojo_core::games::Cue;
use dojo_core::model::describe_duration;
use services::AudioCues;

use crate::app::Screen;
use crate::context::AppContext;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let screen = use_context::<Signal<Screen>>();
    let settings = ctx.challenge_settings();
    let blitz_summary = format!(
        "{} blitz: {}",
        settings.kind().label(),
        describe_duration(settings.duration())
    );

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Kana Dojo" }
                p { class: "view-subtitle", "{blitz_summary}" }
            }
            div { class: "view-divider" }
            ul { class: "home-menu",
                for entry in Screen::MENU {
                    li { key: "{entry:?}",
                        button {
                            class: "home-menu-item",
                            r#type: "button",
                            onclick: {
                                let cues = ctx.cues();
                                let mut screen = screen;
                                move |_| {
                                    cues.play(Cue::Click);
                                    screen.set(entry);
                                }
                            },
                            span { class: "home-menu-title", "{entry.title()}" }
                            span { class: "home-menu-blurb", "{entry.blurb()}" }
                        }
                    }
                }
            }
        }
    }
}
