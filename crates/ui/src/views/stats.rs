use dioxus::prelude::*;

use crate::app::BackButton;
use crate::context::AppContext;
use crate::vm::map_mastery_chart;

#[component]
pub fn StatsView() -> Element {
    let ctx = use_context::<AppContext>();
    let chart = map_mastery_chart(&ctx.mastery());

    rsx! {
        div { class: "page stats-page",
            header { class: "view-header",
                h2 { class: "view-title", "Statistics" }
                BackButton {}
            }
            div { class: "view-divider" }
            h3 { "Mastery Distribution" }
            match chart {
                None => rsx! {
                    p { class: "stats-empty", "No characters practiced yet" }
                },
                Some(chart) => rsx! {
                    p { class: "stats-total", "{chart.total} characters practiced" }
                    div { class: "mastery-bar",
                        for segment in chart.bar.iter() {
                            div {
                                key: "{segment.label}",
                                class: "mastery-segment {segment.class}",
                                style: "{segment.width_style}",
                                if segment.inline_label {
                                    span { class: "mastery-inline", "{segment.percent_str}" }
                                }
                            }
                        }
                    }
                    ul { class: "mastery-legend",
                        for segment in chart.legend.iter() {
                            li { key: "{segment.label}", class: "{segment.class}",
                                span { class: "legend-label", "{segment.label}" }
                                span { class: "legend-count", "{segment.count} ({segment.percent_str})" }
                                span { class: "legend-description", "{segment.description}" }
                            }
                        }
                    }
                },
            }
        }
    }
}
