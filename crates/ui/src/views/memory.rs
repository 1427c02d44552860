use dioxus::prelude::*;
use dojo_core::games::{MemoryEvent, MemoryPalace, MemoryPhase};

use crate::app::BackButton;
use crate::views::use_machine;

#[component]
pub fn MemoryView() -> Element {
    let machine = use_machine(MemoryPalace::new);
    let game = machine.state();
    let status = game.status_line();
    let in_recall = matches!(game.phase, MemoryPhase::Recall { .. });

    let cards = game.cards.iter().map(|card| {
        let id = card.id;
        let face = if card.revealed || card.matched {
            card.kana.glyph
        } else {
            "?"
        };
        let class = if card.matched {
            "memory-card memory-card--matched"
        } else if card.revealed {
            "memory-card memory-card--revealed"
        } else {
            "memory-card"
        };
        rsx! {
            button {
                key: "{id}",
                class: "{class}",
                r#type: "button",
                disabled: !in_recall || card.matched,
                onclick: move |_| machine.send(MemoryEvent::Select(id)),
                "{face}"
            }
        }
    });

    rsx! {
        div { class: "page memory-page",
            header { class: "view-header",
                h2 { class: "view-title", "Memory Palace" }
                BackButton {}
            }
            div { class: "memory-stats",
                span { "Round {game.round}" }
                span { "Score: {game.score}" }
                span { "Mistakes: {game.mistakes}" }
            }
            p { class: "memory-status", "{status}" }
            if matches!(game.phase, MemoryPhase::Result) {
                div { class: "memory-result",
                    p { class: "memory-verdict", "{game.verdict().message()}" }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| machine.send(MemoryEvent::NextRound),
                        "Next Round"
                    }
                }
            } else {
                div { class: "memory-grid", {cards} }
            }
        }
    }
}
