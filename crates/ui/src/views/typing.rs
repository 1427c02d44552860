use dioxus::prelude::*;
use dojo_core::games::typing::VISIBLE_QUEUE;
use dojo_core::games::{SpeedTyping, TypingEvent, TypingState};

use crate::app::BackButton;
use crate::views::use_machine;

#[component]
pub fn TypingView() -> Element {
    let machine = use_machine(|_| SpeedTyping::new());
    let game = machine.state();

    let body = match game.state {
        TypingState::Idle => rsx! {
            p { "Type the romaji for each kana as fast as you can." }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| machine.send(TypingEvent::Start),
                "Start"
            }
        },
        TypingState::Playing => {
            let current = game.current().map_or("", |kana| kana.glyph);
            let upcoming = game
                .queue
                .iter()
                .skip(1)
                .take(VISIBLE_QUEUE - 1)
                .enumerate()
                .map(|(i, kana)| rsx! {
                    span { key: "{i}", class: "typing-upcoming", "{kana.glyph}" }
                });
            rsx! {
                div { class: "typing-hud",
                    span { "Time: {game.time_left}s" }
                    span { "Score: {game.score}" }
                }
                p { class: "typing-current", "{current}" }
                div { class: "typing-queue", {upcoming} }
                input {
                    class: "typing-input",
                    r#type: "text",
                    autofocus: true,
                    value: "{game.input}",
                    oninput: move |evt| machine.send(TypingEvent::Input(evt.value())),
                }
            }
        }
        TypingState::Finished => rsx! {
            h3 { "Time's up!" }
            div { class: "typing-results",
                p { "Score: {game.score}" }
                p { "Kana per minute: {game.kana_per_minute()}" }
                p { "Accuracy: {game.accuracy_percent()}%" }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| machine.send(TypingEvent::Start),
                "Play Again"
            }
        },
    };

    rsx! {
        div { class: "page typing-page",
            header { class: "view-header",
                h2 { class: "view-title", "Speed Typing" }
                BackButton {}
            }
            {body}
        }
    }
}
