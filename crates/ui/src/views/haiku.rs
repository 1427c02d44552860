use dioxus::prelude::*;
use dojo_core::games::{DailyHaiku, HaikuEvent};

use crate::app::BackButton;
use crate::context::AppContext;
use crate::views::use_machine;

#[component]
pub fn HaikuView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let machine = use_machine(move |_| DailyHaiku::today(&clock));
    let view = machine.state();
    let haiku = view.haiku;
    let toggle_label = if view.show_romaji { "Hide Romaji" } else { "Show Romaji" };

    rsx! {
        div { class: "page haiku-page",
            header { class: "view-header",
                h2 { class: "view-title", "{view.title()}" }
                BackButton {}
            }
            div { class: "haiku-lines",
                for (i, line) in haiku.japanese.iter().enumerate() {
                    p { key: "{i}", class: "haiku-japanese", "{line}" }
                }
            }
            if view.show_romaji {
                div { class: "haiku-romaji",
                    for (i, line) in haiku.romaji.iter().enumerate() {
                        p { key: "{i}", "{line}" }
                    }
                }
            }
            div { class: "haiku-english",
                for (i, line) in haiku.english.iter().enumerate() {
                    p { key: "{i}", "{line}" }
                }
            }
            p { class: "haiku-author", "{haiku.author} ({haiku.author_japanese})" }
            div { class: "haiku-actions",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| machine.send(HaikuEvent::ToggleRomaji),
                    "{toggle_label}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| machine.send(HaikuEvent::NewHaiku),
                    "New Haiku"
                }
            }
        }
    }
}
