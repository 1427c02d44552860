use dioxus::prelude::*;
use dojo_core::games::{KanaRain, RainEvent};

use crate::app::BackButton;
use crate::views::use_machine;

#[component]
pub fn RainView() -> Element {
    let machine = use_machine(KanaRain::new);
    let rain = machine.state();

    let drops = rain.drops.iter().map(|falling| {
        let id = falling.id;
        let hovered = rain.is_hovered(id);
        let class = if hovered { "rain-drop rain-drop--hovered" } else { "rain-drop" };
        let opacity = if hovered { 1.0 } else { falling.opacity };
        let style = format!(
            "left: {:.1}%; opacity: {opacity:.2}; animation-duration: {:.2}s",
            falling.left_percent(),
            falling.speed
        );
        rsx! {
            div {
                key: "{id}",
                class: "{class}",
                style: "{style}",
                onmouseenter: move |_| machine.send(RainEvent::Hover(Some(id))),
                onmouseleave: move |_| machine.send(RainEvent::Hover(None)),
                span { class: "rain-kana", "{falling.kana.glyph}" }
                if hovered {
                    span { class: "rain-romaji", "{falling.kana.romaji}" }
                }
            }
        }
    });

    rsx! {
        div { class: "page rain-page",
            header { class: "view-header",
                h2 { class: "view-title", "Kana Rain" }
                BackButton {}
            }
            div { class: "rain-field", {drops} }
        }
    }
}
