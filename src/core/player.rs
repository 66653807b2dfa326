//! Players and their scorecards.
//!
//! ## PlayerId
//!
//! Stable player identifier allocated by `GameState`. Ids are handed out
//! monotonically and never reused, even after a player is removed
//! mid-match, so a stale id reliably fails lookup instead of silently
//! hitting a newer player.
//!
//! ## Player
//!
//! One roster entry: display name, accumulated score, and one
//! `TargetHits` cell per scorable target.

use serde::{Deserialize, Serialize};

use super::target::{Target, TargetHits, TARGET_COUNT};

/// Player identifier.
///
/// `Display` renders the raw number, which is how ids appear in
/// user-facing messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A roster entry: identity, display name, score, and scorecard.
///
/// `score` is the running sum of all applied hit amounts, unclamped.
/// Which registrations apply at all is the rules layer's call; the
/// scorecard itself is dumb arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier allocated at add time.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Accumulated score.
    pub score: i32,
    /// Scorecard, one cell per `Target::ALL` entry in order.
    targets: [TargetHits; TARGET_COUNT],
}

impl Player {
    /// Create a fresh player with a zeroed scorecard.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            targets: Target::ALL.map(TargetHits::new),
        }
    }

    /// The full scorecard in display order.
    #[must_use]
    pub fn targets(&self) -> &[TargetHits; TARGET_COUNT] {
        &self.targets
    }

    /// Recorded hits on a single target.
    #[must_use]
    pub fn hits(&self, target: Target) -> i32 {
        self.targets[target.index()].hit_count
    }

    /// Whether this player has closed a target (three or more hits).
    #[must_use]
    pub fn is_closed(&self, target: Target) -> bool {
        self.targets[target.index()].is_closed()
    }

    /// Apply a hit amount to one cell and the score, unguarded.
    ///
    /// The closed/empty guards live in the rules layer; this is the
    /// arithmetic they protect.
    pub(crate) fn apply_hit(&mut self, target: Target, amount: i32) {
        self.targets[target.index()].hit_count += amount;
        self.score += amount;
    }
}
