use std::rc::Rc;

use dioxus::prelude::*;
use dojo_core::games::Cue;
use dojo_core::model::kana::all_kana;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use services::AudioCues;

use crate::app::BackButton;
use crate::context::AppContext;

const DECORATION_COUNT: usize = 64;

#[component]
pub fn ZenView() -> Element {
    let ctx = use_context::<AppContext>();
    // Decorations stay expanded for as long as this view is mounted.
    let _expanded = use_hook({
        let decorations = ctx.decorations();
        move || Rc::new(decorations.expand())
    });
    let glyphs = use_hook(|| {
        let mut rng = StdRng::from_os_rng();
        Rc::new(
            all_kana()
                .choose_multiple(&mut rng, DECORATION_COUNT)
                .map(|kana| kana.glyph)
                .collect::<Vec<_>>(),
        )
    });

    let field_class = if ctx.decorations().is_expanded() {
        "zen-field decorations-expanded"
    } else {
        "zen-field"
    };
    let cues = ctx.cues();

    rsx! {
        div { class: "page zen-page",
            header { class: "view-header",
                BackButton { label: "Return to home".to_string() }
            }
            div { class: "{field_class}",
                for (i, glyph) in glyphs.iter().enumerate() {
                    span {
                        key: "{i}",
                        class: "zen-glyph",
                        onclick: {
                            let cues = cues.clone();
                            move |_| cues.play(Cue::Click)
                        },
                        "{glyph}"
                    }
                }
            }
        }
    }
}
