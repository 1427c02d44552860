use dioxus::prelude::*;
use dojo_core::model::{DojoKind, EmptyStateCopy};

use crate::app::BackButton;

/// Shown in place of a challenge while nothing is selected.
#[component]
pub fn EmptyState(kind: DojoKind) -> Element {
    let copy = EmptyStateCopy::for_dojo(kind);

    rsx! {
        div { class: "page empty-state",
            h2 { class: "view-title", "{copy.title}" }
            p { class: "empty-state-message", "{copy.message}" }
            BackButton { label: copy.action_label }
        }
    }
}
