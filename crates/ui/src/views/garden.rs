use dioxus::prelude::*;
use dojo_core::games::{GardenEvent, SoundGarden};

use crate::app::BackButton;
use crate::views::use_machine;

#[component]
pub fn GardenView() -> Element {
    let machine = use_machine(|_| SoundGarden::new());
    let garden = machine.state();

    let tiles = garden.tiles.iter().enumerate().map(|(index, tile)| {
        let class = if tile.active {
            "garden-tile garden-tile--active"
        } else {
            "garden-tile"
        };
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| machine.send(GardenEvent::Tap(index)),
                span { class: "garden-kana", "{tile.kana.glyph}" }
                span { class: "garden-romaji", "{tile.kana.romaji}" }
            }
        }
    });

    rsx! {
        div { class: "page garden-page",
            header { class: "view-header",
                h2 { class: "view-title", "Sound Garden" }
                BackButton {}
            }
            if let Some(romaji) = garden.last_played {
                p { class: "garden-last", "Last played: {romaji}" }
            } else {
                p { class: "garden-last", "Tap a tile to play it." }
            }
            div { class: "garden-grid", {tiles} }
        }
    }
}
