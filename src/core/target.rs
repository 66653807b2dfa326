//! Dartboard targets and per-target hit bookkeeping.
//!
//! ## Target
//!
//! The seven scorable zones in Cricket, in board display order:
//! 20 down to 15, then the bullseye. The set is fixed — Cricket is
//! always played on these seven.
//!
//! ## TargetHits
//!
//! One scorecard cell: how many times a player has hit one target.
//! Three hits close the target.

use serde::{Deserialize, Serialize};

/// Number of scorable targets.
pub const TARGET_COUNT: usize = 7;

/// Hits required to close a target.
pub const HITS_TO_CLOSE: i32 = 3;

/// A scorable dartboard zone.
///
/// Discriminants are positions in display order, so
/// `Target::ALL[t.index()] == t` for every target.
///
/// Serializes as the board label (`"20"` … `"15"`, `"B"`), which is also
/// the `Display` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Target {
    /// The 20 segment.
    #[serde(rename = "20")]
    Twenty = 0,
    /// The 19 segment.
    #[serde(rename = "19")]
    Nineteen = 1,
    /// The 18 segment.
    #[serde(rename = "18")]
    Eighteen = 2,
    /// The 17 segment.
    #[serde(rename = "17")]
    Seventeen = 3,
    /// The 16 segment.
    #[serde(rename = "16")]
    Sixteen = 4,
    /// The 15 segment.
    #[serde(rename = "15")]
    Fifteen = 5,
    /// The bullseye.
    #[serde(rename = "B")]
    Bullseye = 6,
}

impl Target {
    /// All targets in display order (20 down to 15, then bull).
    pub const ALL: [Target; TARGET_COUNT] = [
        Target::Twenty,
        Target::Nineteen,
        Target::Eighteen,
        Target::Seventeen,
        Target::Sixteen,
        Target::Fifteen,
        Target::Bullseye,
    ];

    /// Position in display order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The board label: `"20"` through `"15"`, `"B"` for the bullseye.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Target::Twenty => "20",
            Target::Nineteen => "19",
            Target::Eighteen => "18",
            Target::Seventeen => "17",
            Target::Sixteen => "16",
            Target::Fifteen => "15",
            Target::Bullseye => "B",
        }
    }

    /// Parse a board label back into a target.
    ///
    /// ```
    /// use cricket_darts::core::Target;
    ///
    /// assert_eq!(Target::from_label("20"), Some(Target::Twenty));
    /// assert_eq!(Target::from_label("B"), Some(Target::Bullseye));
    /// assert_eq!(Target::from_label("21"), None);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Option<Target> {
        Target::ALL.iter().copied().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One scorecard cell: the hit count for a single target.
///
/// `hit_count` is signed. Unit (±1) registrations keep it within
/// `[0, HITS_TO_CLOSE]` via the rules-layer guards; larger amounts are
/// applied verbatim and may leave that range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetHits {
    /// Which target this cell tracks.
    pub target: Target,
    /// Number of recorded hits.
    pub hit_count: i32,
}

impl TargetHits {
    /// Create a fresh cell with no hits.
    #[must_use]
    pub const fn new(target: Target) -> Self {
        Self {
            target,
            hit_count: 0,
        }
    }

    /// A target with three or more hits is closed; further positive
    /// registrations on it are ignored by the rules layer.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.hit_count >= HITS_TO_CLOSE
    }
}
