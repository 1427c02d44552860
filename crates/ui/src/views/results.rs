use dioxus::prelude::*;
use dojo_core::games::Cue;
use services::AudioCues;

use crate::app::BackButton;
use crate::context::AppContext;
use crate::vm::{GoalRowVm, ResultsVm};

#[component]
pub fn ResultsScreen(vm: ResultsVm, on_restart: EventHandler<()>) -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page results-page",
            header { class: "view-header results-header",
                h2 { class: "view-title", "{vm.title}" }
                p { class: "view-subtitle", "{vm.subtitle}" }
            }
            div { class: "results-grid",
                StatCard { label: "Correct", value: vm.correct.to_string() }
                StatCard { label: "Wrong", value: vm.wrong.to_string() }
                StatCard { label: "Accuracy", value: vm.accuracy_str.clone() }
                StatCard { label: "Q/Min", value: vm.per_minute_str.clone() }
            }
            div { class: "results-secondary",
                StatCard { label: "Best Streak", value: vm.best_streak_str.clone() }
                StatCard { label: "Total Answers", value: vm.total_answers.to_string() }
            }
            if let Some(goals) = vm.goals.clone() {
                div { class: "results-goals",
                    h3 { "Goal Timers Results" }
                    if let Some(header) = goals.reached_header {
                        GoalList { header, class: "goals-reached", rows: goals.reached }
                    }
                    if let Some(header) = goals.missed_header {
                        GoalList { header, class: "goals-missed", rows: goals.missed }
                    }
                }
            }
            p { class: "results-finished-at", "Finished {vm.finished_at_str}" }
            div { class: "results-actions",
                BackButton {}
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| {
                        ctx.cues().play(Cue::Click);
                        on_restart.call(());
                    },
                    "Try Again"
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "stat-card",
            p { class: "stat-label", "{label}" }
            p { class: "stat-value", "{value}" }
        }
    }
}

#[component]
fn GoalList(header: String, class: &'static str, rows: Vec<GoalRowVm>) -> Element {
    rsx! {
        div { class: "{class}",
            p { class: "goals-header", "{header}" }
            for row in rows.iter() {
                div { key: "{row.key}", class: "goal-row",
                    span { class: "goal-label", "{row.label}" }
                    span { class: "goal-target", "{row.target_str}" }
                }
            }
        }
    }
}
