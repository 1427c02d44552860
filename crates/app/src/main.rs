mod args;

use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dojo_core::decorations::DecorationsStore;
use dojo_core::model::kana::all_kana;
use dojo_core::model::{ChallengeSettings, DojoKind, MasteryDistribution};
use services::{AudioCues, ChallengeOutcome, ChallengeSession, Clock, LoggingCues};
use ui::vm::{ResultsVm, map_results};
use ui::{App, PracticeItem, UiApp, build_app_context};

use crate::args::{Args, Command, print_usage};

struct DesktopApp {
    clock: Clock,
    settings: ChallengeSettings,
    selection: Vec<PracticeItem>,
    cues: Arc<LoggingCues>,
    decorations: DecorationsStore,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn cues(&self) -> Arc<dyn AudioCues> {
        self.cues.clone()
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
        // Practice history is not persisted, so every launch starts empty.
        MasteryDistribution::default()
    }
}

/// Items the desktop shell can quiz on. Only kana ship with the app.
fn practice_items(kind: DojoKind) -> Vec<PracticeItem> {
    match kind {
        DojoKind::Kana => all_kana()
            .iter()
            .map(|kana| PracticeItem {
                prompt: kana.glyph.to_string(),
                answer: kana.romaji.to_string(),
            })
            .collect(),
        DojoKind::Kanji | DojoKind::Vocabulary => Vec::new(),
    }
}

fn print_results(vm: &ResultsVm) {
    println!("{}", vm.title);
    println!("{}", vm.subtitle);
    println!();
    println!("Correct:       {}", vm.correct);
    println!("Wrong:         {}", vm.wrong);
    println!("Accuracy:      {}", vm.accuracy_str);
    println!("Q/Min:         {}", vm.per_minute_str);
    println!("Best Streak:   {}", vm.best_streak_str);
    println!("Total Answers: {}", vm.total_answers);

    if let Some(goals) = &vm.goals {
        println!();
        println!("Goal Timers Results");
        for (header, rows) in [
            (&goals.reached_header, &goals.reached),
            (&goals.missed_header, &goals.missed),
        ] {
            if let Some(header) = header {
                println!("  {header}");
                for row in rows {
                    println!("    {:<12} {}", row.label, row.target_str);
                }
            }
        }
    }
}

fn run_results(parsed: Args, clock: Clock) -> Result<ChallengeOutcome, Box<dyn std::error::Error>> {
    let selected = parsed
        .selected
        .unwrap_or_else(|| practice_items(parsed.draft.kind).len());
    let mut session = ChallengeSession::from_draft(parsed.draft, selected, clock)?;

    for correct in parsed.answers {
        session.record_answer(correct)?;
    }
    let elapsed = parsed
        .elapsed_secs
        .unwrap_or_else(|| session.settings().duration().secs());
    if elapsed > 0 {
        session.tick(elapsed)?;
    }
    Ok(session.finish())
}

fn launch_ui(parsed: Args, clock: Clock) -> Result<(), Box<dyn std::error::Error>> {
    let settings = parsed.draft.validate()?;
    let selection = practice_items(settings.kind());
    if selection.is_empty() {
        log::warn!("no {} items available, blitz will show its empty state", settings.kind());
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        clock,
        settings,
        selection,
        cues: Arc::new(LoggingCues),
        decorations: DecorationsStore::default(),
    });
    let context = build_app_context(&app);

    // A practice window should sit behind other apps when it loses focus.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Kana Dojo")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    log::debug!("{cmd:?} with {:?}", parsed.draft);

    let clock = Clock::default_clock();
    match cmd {
        Command::Results => {
            let json = parsed.json;
            let outcome = run_results(parsed, clock)?;
            if json {
                println!("{}", outcome.to_json()?);
            } else {
                print_results(&map_results(&outcome));
            }
            Ok(())
        }
        Command::Ui => launch_ui(parsed, clock),
    }
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
