use dioxus::prelude::*;
use dojo_core::games::{Constellation, ConstellationEvent};

use crate::app::BackButton;
use crate::views::use_machine;

#[component]
pub fn ConstellationView() -> Element {
    let machine = use_machine(Constellation::new);
    let sky = machine.state();

    let hint = match sky.next_kana() {
        Some(kana) if !sky.complete => format!("Next: {} ({})", kana.glyph, kana.romaji),
        _ => "Constellation complete!".to_string(),
    };

    let lines = sky.lines.iter().enumerate().map(|(i, line)| {
        rsx! {
            line {
                key: "{i}",
                x1: "{line.x1}",
                y1: "{line.y1}",
                x2: "{line.x2}",
                y2: "{line.y2}",
                class: "constellation-line",
            }
        }
    });
    let stars = sky.points.iter().enumerate().map(|(index, point)| {
        let class = if point.connected {
            "constellation-star constellation-star--connected"
        } else {
            "constellation-star"
        };
        let style = format!("left: {:.1}%; top: {:.1}%", point.x, point.y);
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                style: "{style}",
                onclick: move |_| machine.send(ConstellationEvent::Select(index)),
                "{point.kana.glyph}"
            }
        }
    });

    rsx! {
        div { class: "page constellation-page",
            header { class: "view-header",
                h2 { class: "view-title", "Kana Constellation" }
                BackButton {}
            }
            p { class: "constellation-hint", "{hint}" }
            p { class: "constellation-count", "Completed: {sky.completed}" }
            div { class: "constellation-sky",
                svg {
                    class: "constellation-lines",
                    view_box: "0 0 100 100",
                    preserve_aspect_ratio: "none",
                    {lines}
                }
                {stars}
            }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| machine.send(ConstellationEvent::Reset),
                "New Constellation"
            }
        }
    }
}
