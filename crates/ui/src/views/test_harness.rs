use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dojo_core::decorations::DecorationsStore;
use dojo_core::model::{ChallengeSettings, ChallengeSettingsDraft, MasteryDistribution};
use dojo_core::time::fixed_now;
use services::{AudioCues, Clock, RecordingCues};

use crate::app::{Screen, ScreenView};
use crate::context::{PracticeItem, UiApp, build_app_context};
use crate::views::ResultsScreen;
use crate::vm::ResultsVm;

#[derive(Clone)]
pub struct TestApp {
    pub settings: ChallengeSettings,
    pub selection: Vec<PracticeItem>,
    pub mastery: MasteryDistribution,
    pub cues: RecordingCues,
    pub decorations: DecorationsStore,
}

impl Default for TestApp {
    fn default() -> Self {
        Self {
            settings: ChallengeSettingsDraft::default()
                .validate()
                .expect("default draft is valid"),
            selection: Vec::new(),
            mastery: MasteryDistribution::default(),
            cues: RecordingCues::new(),
            decorations: DecorationsStore::default(),
        }
    }
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn cues(&self) -> Arc<dyn AudioCues> {
        Arc::new(self.cues.clone())
    }

    fn decorations(&self) -> DecorationsStore {
        self.decorations.clone()
    }

    fn challenge_settings(&self) -> ChallengeSettings {
        self.settings.clone()
    }

    fn selection(&self) -> Vec<PracticeItem> {
        self.selection.clone()
    }

    fn mastery(&self) -> MasteryDistribution {
        self.mastery
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    Screen(Screen),
    Results(ResultsVm),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let screen = use_context_provider(|| {
        Signal::new(match props.view {
            ViewKind::Screen(screen) => screen,
            ViewKind::Results(_) => Screen::Blitz,
        })
    });

    match props.view.clone() {
        ViewKind::Screen(_) => rsx! { ScreenView { screen: screen() } },
        ViewKind::Results(vm) => rsx! { ResultsScreen { vm, on_restart: |()| {} } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub cues: RecordingCues,
    pub decorations: DecorationsStore,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, app: TestApp) -> ViewHarness {
    let cues = app.cues.clone();
    let decorations = app.decorations.clone();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app: Arc::new(app),
            view,
        },
    );
    ViewHarness {
        dom,
        cues,
        decorations,
    }
}
