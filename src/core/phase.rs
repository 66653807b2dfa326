//! Match lifecycle phases.
//!
//! A match begins in `New` (roster editing), moves to `On` when play
//! starts, and lands in `Over` when a winner is declared. The rules
//! layer drives every transition.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a match.
///
/// Serializes in lowercase (`"new"`, `"on"`, `"over"`), which is also
/// the `Display` form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Roster editing; the match has not started.
    #[default]
    New,
    /// Scoring in progress.
    On,
    /// A winner has been declared.
    Over,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::New => "new",
            Phase::On => "on",
            Phase::Over => "over",
        };
        f.write_str(s)
    }
}
