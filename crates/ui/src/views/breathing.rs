use dioxus::prelude::*;
use dojo_core::games::{Breathing, BreathingEvent};

use crate::app::BackButton;
use crate::views::use_machine;

#[component]
pub fn BreathingView() -> Element {
    let machine = use_machine(Breathing::new);
    let state = machine.state();

    let circle_class = if state.phase.is_expanded() {
        "breath-circle breath-circle--expanded"
    } else {
        "breath-circle"
    };
    let toggle_label = if state.playing { "Pause" } else { "Resume" };
    let phase_label = state.phase.label();
    let cycle_label = state.cycle_label();

    rsx! {
        div { class: "page breathing-page",
            header { class: "view-header",
                h2 { class: "view-title", "Breathing" }
                BackButton {}
            }
            div { class: "{circle_class}",
                span { class: "breath-kana", "{state.kana.glyph}" }
                span { class: "breath-romaji", "{state.kana.romaji}" }
            }
            p { class: "breath-phase", "{phase_label}" }
            p { class: "breath-cycle", "{cycle_label}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| machine.send(BreathingEvent::TogglePlay),
                "{toggle_label}"
            }
        }
    }
}
