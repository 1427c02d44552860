use dojo_core::model::{
    ChallengeSettingsDraft, DojoKind, GoalDraft, MasteryDistribution,
};
use dojo_core::time::fixed_clock;
use services::ChallengeSession;

use super::test_harness::{TestApp, ViewKind, setup_view_harness};
use crate::app::Screen;
use crate::context::PracticeItem;
use crate::vm::map_results;

fn kana_item() -> PracticeItem {
    PracticeItem {
        prompt: "あ".to_string(),
        answer: "a".to_string(),
    }
}

fn settings(kind: DojoKind, duration_secs: u32, goals: &[u32]) -> ChallengeSettingsDraft {
    ChallengeSettingsDraft {
        kind,
        duration_secs,
        goals: goals.iter().copied().map(GoalDraft::at).collect(),
        show_goal_timers: true,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_every_screen() {
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Home), TestApp::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Kana blitz: 1 minute"), "missing summary in {html}");
    for entry in Screen::MENU {
        assert!(html.contains(entry.title()), "missing {} in {html}", entry.title());
    }
}

#[tokio::test(flavor = "current_thread")]
async fn blitz_view_smoke_shows_empty_state_without_selection() {
    let app = TestApp {
        settings: settings(DojoKind::Vocabulary, 60, &[]).validate().unwrap(),
        ..TestApp::default()
    };
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Blitz), app);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Please select some vocabulary first to begin the timed challenge."),
        "missing empty-state message in {html}"
    );
    assert!(html.contains("Select Vocabulary"), "missing action in {html}");
    assert!(!html.contains("Time:"), "challenge should not start in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn blitz_view_smoke_renders_running_challenge() {
    let app = TestApp {
        settings: settings(DojoKind::Kana, 90, &[30]).validate().unwrap(),
        selection: vec![kana_item()],
        ..TestApp::default()
    };
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Blitz), app);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Time: 1:30"), "missing countdown in {html}");
    assert!(html.contains("Correct: 0"), "missing counter in {html}");
    assert!(html.contains("あ"), "missing prompt in {html}");
    assert!(html.contains("0:30"), "missing goal chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_screen_smoke_renders_goal_sections() {
    let mut session = ChallengeSession::from_draft(
        settings(DojoKind::Kana, 60, &[30, 90]),
        3,
        fixed_clock(),
    )
    .unwrap();
    for answer in [true, true, true, false] {
        session.record_answer(answer).unwrap();
    }
    session.tick(60).unwrap();
    let vm = map_results(&session.finish());

    let mut harness = setup_view_harness(ViewKind::Results(vm), TestApp::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Challenge Complete!"), "missing title in {html}");
    assert!(html.contains("1 minute challenge finished"), "missing subtitle in {html}");
    assert!(html.contains("75%"), "missing accuracy in {html}");
    assert!(html.contains("4.0"), "missing throughput in {html}");
    assert!(html.contains("Goal Timers Results"), "missing goals in {html}");
    assert!(html.contains("Reached (1)"), "missing reached in {html}");
    assert!(html.contains("Not Reached (1)"), "missing missed in {html}");
    assert!(html.contains("1:30"), "missing missed target in {html}");
    assert!(html.contains("Try Again"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stats_view_smoke_handles_empty_and_filled_distributions() {
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Stats), TestApp::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No characters practiced yet"), "missing empty copy in {html}");

    let app = TestApp {
        mastery: MasteryDistribution {
            mastered: 1,
            learning: 1,
            needs_practice: 1,
            total: 3,
        },
        ..TestApp::default()
    };
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Stats), app);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("33.3%"), "missing percentage in {html}");
    assert!(html.contains("Needs Practice"), "missing legend in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn zen_view_smoke_expands_decorations_while_mounted() {
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Zen), TestApp::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("decorations-expanded"), "missing expanded class in {html}");
    assert!(harness.decorations.is_expanded());

    let decorations = harness.decorations.clone();
    drop(harness);
    assert!(!decorations.is_expanded());
}

#[tokio::test(flavor = "current_thread")]
async fn breathing_view_smoke_starts_on_inhale() {
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Breathing), TestApp::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Breathe In"), "missing phase in {html}");
    assert!(html.contains("Cycle 1"), "missing cycle in {html}");
    assert!(html.contains("Pause"), "missing toggle in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn memory_view_smoke_starts_memorizing() {
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Memory), TestApp::default());
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Memorize the positions! 5s"), "missing status in {html}");
    assert!(html.contains("Round 1"), "missing round in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn garden_and_typing_views_smoke_render_idle_state() {
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Garden), TestApp::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Tap a tile to play it."), "missing prompt in {html}");
    assert!(html.contains("あ"), "missing first tile in {html}");

    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Typing), TestApp::default());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn haiku_view_smoke_shows_todays_haiku() {
    let mut harness = setup_view_harness(ViewKind::Screen(Screen::Haiku), TestApp::default());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Today&#39;s Haiku") || html.contains("Today's Haiku"), "missing title in {html}");
    assert!(html.contains("Show Romaji"), "missing toggle in {html}");
    assert!(harness.cues.played().is_empty());
}
