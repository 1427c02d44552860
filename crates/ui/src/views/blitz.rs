use std::time::Duration;

use dioxus::prelude::*;
use dojo_core::games::Cue;
use dojo_core::model::ChallengeGate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use services::{AudioCues, ChallengeSession};
use tokio::time::MissedTickBehavior;

use crate::app::BackButton;
use crate::context::AppContext;
use crate::views::{EmptyState, ResultsScreen};
use crate::vm::{map_challenge_hud, map_results};

const TICK: Duration = Duration::from_secs(1);

/// Timed challenge over the current selection.
#[component]
pub fn BlitzView() -> Element {
    let ctx = use_context::<AppContext>();
    let gate = ChallengeGate::from_selection(ctx.selection().len());

    if gate.is_open() {
        rsx! { ChallengeRun {} }
    } else {
        rsx! { EmptyState { kind: ctx.challenge_settings().kind() } }
    }
}

#[component]
fn ChallengeRun() -> Element {
    let ctx = use_context::<AppContext>();
    let items = ctx.selection();
    let mut session = use_signal({
        let ctx = ctx.clone();
        move || {
            ChallengeSession::start(
                ctx.challenge_settings().clone(),
                ctx.selection().len(),
                ctx.clock(),
            )
        }
    });
    let mut rng = use_signal(StdRng::from_os_rng);
    let mut current = use_signal({
        let len = items.len().max(1);
        move || rng.write().random_range(0..len)
    });
    let mut answer = use_signal(String::new);
    let mut last_correct = use_signal(|| None::<bool>);

    use_future(move || async move {
        let mut ticker = tokio::time::interval(TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let finished = match &*session.peek() {
                Ok(running) => running.is_finished(),
                Err(_) => break,
            };
            if finished {
                continue;
            }
            let mut guard = session.write();
            if let Ok(running) = &mut *guard {
                match running.tick(1) {
                    Ok(outcome) => {
                        for id in outcome.newly_reached {
                            log::debug!("goal {id} reached");
                        }
                    }
                    Err(err) => log::warn!("challenge tick rejected: {err}"),
                }
            }
        }
    });

    let snapshot = {
        let read = session.read();
        match &*read {
            Err(err) => Err(err.to_string()),
            Ok(running) => Ok((
                running.outcome().map(map_results),
                map_challenge_hud(
                    &running.progress(),
                    running.goals(),
                    running.settings().show_goal_timers(),
                ),
            )),
        }
    };
    let (results, hud) = match snapshot {
        Ok(parts) => parts,
        Err(message) => {
            return rsx! {
                div { class: "page blitz-page",
                    p { class: "error", "{message}" }
                    BackButton {}
                }
            };
        }
    };

    if let Some(vm) = results {
        return rsx! {
            ResultsScreen {
                vm,
                on_restart: move |()| {
                    if let Ok(running) = &mut *session.write() {
                        running.restart();
                    }
                    let len = items.len().max(1);
                    current.set(rng.write().random_range(0..len));
                    answer.set(String::new());
                    last_correct.set(None);
                },
            }
        };
    }

    let prompt = items
        .get(current())
        .map(|item| item.prompt.clone())
        .unwrap_or_default();
    let feedback = match last_correct() {
        Some(true) => "Correct!",
        Some(false) => "Wrong!",
        None => "",
    };

    let cues = ctx.cues();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(item) = items.get(current()) else {
            return;
        };
        let correct = answer().trim().eq_ignore_ascii_case(item.answer.trim());
        let recorded = match &mut *session.write() {
            Ok(running) => running.record_answer(correct),
            Err(err) => Err(err.clone()),
        };
        match recorded {
            Ok(_) => {
                cues.play(if correct { Cue::Correct } else { Cue::Error });
                last_correct.set(Some(correct));
            }
            Err(err) => log::warn!("answer not recorded: {err}"),
        }
        answer.set(String::new());
        let len = items.len().max(1);
        current.set(rng.write().random_range(0..len));
    };

    rsx! {
        div { class: "page blitz-page",
            header { class: "view-header",
                h2 { class: "view-title", "Blitz" }
                BackButton {}
            }
            div { class: "blitz-hud",
                span { class: "blitz-time", "{hud.time_str}" }
                span { "{hud.correct_str}" }
                span { "{hud.wrong_str}" }
                span { "{hud.streak_str}" }
            }
            if !hud.goal_chips.is_empty() {
                div { class: "blitz-goals",
                    for chip in hud.goal_chips.iter() {
                        span {
                            key: "{chip.key}",
                            class: "{chip.class}",
                            "{chip.label}"
                        }
                    }
                }
            }
            p { class: "blitz-prompt", "{prompt}" }
            form { class: "blitz-form", onsubmit: submit,
                input {
                    class: "blitz-input",
                    r#type: "text",
                    autofocus: true,
                    value: "{answer}",
                    oninput: move |evt| answer.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Submit" }
            }
            p { class: "blitz-feedback", "{feedback}" }
        }
    }
}
