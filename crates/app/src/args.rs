use std::fmt;

use dojo_core::model::{ChallengeSettingsDraft, DojoKind, GoalDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDuration { raw: String },
    InvalidGoal { raw: String },
    InvalidKind { raw: String },
    InvalidAnswers { raw: String },
    InvalidCount { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDuration { raw } => write!(f, "invalid duration: {raw}"),
            ArgsError::InvalidGoal { raw } => write!(f, "invalid goal: {raw}"),
            ArgsError::InvalidKind { raw } => write!(f, "invalid dojo kind: {raw}"),
            ArgsError::InvalidAnswers { raw } => {
                write!(f, "invalid --answers value: {raw} (use y/n per answer)")
            }
            ArgsError::InvalidCount { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ui,
    Results,
}

impl Command {
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "results" => Some(Self::Results),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub draft: ChallengeSettingsDraft,
    /// Answer sequence replayed by `results`, `true` for correct.
    pub answers: Vec<bool>,
    pub elapsed_secs: Option<u32>,
    pub selected: Option<usize>,
    pub json: bool,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--kind <kana|kanji|vocabulary>] [--duration <secs>] [--goal <secs>]...");
    eprintln!("  cargo run -p app -- results [--answers <yyn...>] [--elapsed <secs>] [--selected <n>] [--json]");
    eprintln!();
    eprintln!("Options shared by both commands:");
    eprintln!("  --kind, --duration, --goal (repeatable), --hide-goals");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  DOJO_KIND, DOJO_DURATION, DOJO_GOALS (comma-separated seconds), RUST_LOG");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_duration(raw: &str) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ArgsError::InvalidDuration {
            raw: raw.to_string(),
        }),
    }
}

fn parse_goal(raw: &str) -> Result<GoalDraft, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(secs) if secs > 0 => Ok(GoalDraft::at(secs)),
        _ => Err(ArgsError::InvalidGoal {
            raw: raw.to_string(),
        }),
    }
}

fn parse_goal_list(raw: &str) -> Result<Vec<GoalDraft>, ArgsError> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_goal)
        .collect()
}

fn parse_kind(raw: &str) -> Result<DojoKind, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidKind {
        raw: raw.to_string(),
    })
}

fn parse_answers(raw: &str) -> Result<Vec<bool>, ArgsError> {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'y' | '1' | '+' => Ok(true),
            'n' | '0' | '-' => Ok(false),
            _ => Err(ArgsError::InvalidAnswers {
                raw: raw.to_string(),
            }),
        })
        .collect()
}

fn parse_count(raw: &str, flag: &'static str) -> Result<u32, ArgsError> {
    raw.trim().parse().map_err(|_| ArgsError::InvalidCount {
        flag,
        raw: raw.to_string(),
    })
}

impl Args {
    /// Parse flags on top of values read through `env`.
    ///
    /// Flags win over the environment; the first `--goal` replaces any goals
    /// taken from `DOJO_GOALS`.
    pub fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut draft = ChallengeSettingsDraft::default();
        if let Some(raw) = env("DOJO_KIND") {
            draft.kind = parse_kind(&raw)?;
        }
        if let Some(raw) = env("DOJO_DURATION") {
            draft.duration_secs = parse_duration(&raw)?;
        }
        if let Some(raw) = env("DOJO_GOALS") {
            draft.goals = parse_goal_list(&raw)?;
        }

        let mut parsed = Self {
            draft,
            answers: Vec::new(),
            elapsed_secs: None,
            selected: None,
            json: false,
        };
        let mut goals_from_flags = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--kind" => {
                    let value = require_value(args, "--kind")?;
                    parsed.draft.kind = parse_kind(&value)?;
                }
                "--duration" => {
                    let value = require_value(args, "--duration")?;
                    parsed.draft.duration_secs = parse_duration(&value)?;
                }
                "--goal" => {
                    let value = require_value(args, "--goal")?;
                    let goal = parse_goal(&value)?;
                    if !goals_from_flags {
                        parsed.draft.goals.clear();
                        goals_from_flags = true;
                    }
                    parsed.draft.goals.push(goal);
                }
                "--hide-goals" => parsed.draft.show_goal_timers = false,
                "--answers" => {
                    let value = require_value(args, "--answers")?;
                    parsed.answers = parse_answers(&value)?;
                }
                "--elapsed" => {
                    let value = require_value(args, "--elapsed")?;
                    parsed.elapsed_secs = Some(parse_count(&value, "--elapsed")?);
                }
                "--selected" => {
                    let value = require_value(args, "--selected")?;
                    let count = parse_count(&value, "--selected")?;
                    parsed.selected = usize::try_from(count).ok();
                }
                "--json" => parsed.json = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Args::parse(&mut iter, |key| {
            env.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
        })
    }

    fn targets(args: &Args) -> Vec<u32> {
        args.draft.goals.iter().map(|g| g.target_seconds).collect()
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let args = parse(&[], &[]).unwrap();
        assert_eq!(args.draft, ChallengeSettingsDraft::default());
        assert!(args.answers.is_empty());
        assert!(!args.json);
    }

    #[test]
    fn env_values_are_read() {
        let args = parse(
            &[],
            &[("DOJO_KIND", "kanji"), ("DOJO_DURATION", "90"), ("DOJO_GOALS", "30, 60,")],
        )
        .unwrap();
        assert_eq!(args.draft.kind, DojoKind::Kanji);
        assert_eq!(args.draft.duration_secs, 90);
        assert_eq!(targets(&args), vec![30, 60]);
    }

    #[test]
    fn flags_override_env() {
        let args = parse(
            &["--duration", "120", "--goal", "45", "--goal", "100", "--kind", "vocab"],
            &[("DOJO_DURATION", "90"), ("DOJO_GOALS", "30")],
        )
        .unwrap();
        assert_eq!(args.draft.duration_secs, 120);
        assert_eq!(args.draft.kind, DojoKind::Vocabulary);
        assert_eq!(targets(&args), vec![45, 100]);
    }

    #[test]
    fn results_flags_are_parsed() {
        let args = parse(
            &["--answers", "yyn y", "--elapsed", "40", "--selected", "3", "--json", "--hide-goals"],
            &[],
        )
        .unwrap();
        assert_eq!(args.answers, vec![true, true, false, true]);
        assert_eq!(args.elapsed_secs, Some(40));
        assert_eq!(args.selected, Some(3));
        assert!(args.json);
        assert!(!args.draft.show_goal_timers);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_eq!(
            parse(&["--duration", "0"], &[]),
            Err(ArgsError::InvalidDuration { raw: "0".into() })
        );
        assert_eq!(
            parse(&["--goal"], &[]),
            Err(ArgsError::MissingValue { flag: "--goal" })
        );
        assert_eq!(
            parse(&[], &[("DOJO_KIND", "hanzi")]),
            Err(ArgsError::InvalidKind { raw: "hanzi".into() })
        );
        assert_eq!(
            parse(&["--answers", "yx"], &[]),
            Err(ArgsError::InvalidAnswers { raw: "yx".into() })
        );
        assert_eq!(
            parse(&["--verbose"], &[]),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
    }

    #[test]
    fn errors_render_flag_names() {
        let err = ArgsError::MissingValue { flag: "--kind" };
        assert_eq!(err.to_string(), "--kind requires a value");
    }
}
