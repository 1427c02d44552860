use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Practice area a timed challenge draws its items from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DojoKind {
    Kana,
    Kanji,
    Vocabulary,
}

impl DojoKind {
    pub const ALL: [DojoKind; 3] = [DojoKind::Kana, DojoKind::Kanji, DojoKind::Vocabulary];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DojoKind::Kana => "Kana",
            DojoKind::Kanji => "Kanji",
            DojoKind::Vocabulary => "Vocabulary",
        }
    }

    /// Path of the item-selection screen for this dojo.
    #[must_use]
    pub fn selection_path(self) -> &'static str {
        match self {
            DojoKind::Kana => "/kana",
            DojoKind::Kanji => "/kanji",
            DojoKind::Vocabulary => "/vocabulary",
        }
    }
}

impl fmt::Display for DojoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a dojo name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDojoKindError {
    raw: String,
}

impl fmt::Display for ParseDojoKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown dojo kind: {}", self.raw)
    }
}

impl std::error::Error for ParseDojoKindError {}

impl FromStr for DojoKind {
    type Err = ParseDojoKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kana" => Ok(DojoKind::Kana),
            "kanji" => Ok(DojoKind::Kanji),
            "vocabulary" | "vocab" => Ok(DojoKind::Vocabulary),
            _ => Err(ParseDojoKindError { raw: s.to_string() }),
        }
    }
}

//
// ─── EMPTY-STATE GATE ─────────────────────────────────────────────────────────
//

/// Whether a timed challenge may run at all.
///
/// Results are only ever derived in `ActiveOrComplete`; with nothing
/// selected the empty-state screen is shown instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeGate {
    NoSelection,
    ActiveOrComplete,
}

impl ChallengeGate {
    #[must_use]
    pub fn from_selection(selected_items: usize) -> Self {
        if selected_items == 0 {
            ChallengeGate::NoSelection
        } else {
            ChallengeGate::ActiveOrComplete
        }
    }

    /// Next gate state after the selection collaborator reports a new count.
    #[must_use]
    pub fn on_selection_changed(self, selected_items: usize) -> Self {
        Self::from_selection(selected_items)
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, ChallengeGate::ActiveOrComplete)
    }
}

/// Copy shown instead of a challenge when nothing has been selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyStateCopy {
    pub title: &'static str,
    pub message: String,
    pub action_label: String,
    pub action_path: &'static str,
}

impl EmptyStateCopy {
    #[must_use]
    pub fn for_dojo(kind: DojoKind) -> Self {
        let label = kind.label();
        Self {
            title: "Blitz",
            message: format!(
                "Please select some {} first to begin the timed challenge.",
                label.to_lowercase()
            ),
            action_label: format!("Select {label}"),
            action_path: kind.selection_path(),
        }
    }
}
