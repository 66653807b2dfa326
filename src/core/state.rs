//! Match state: roster, phase, standings, and notices.
//!
//! ## GameState
//!
//! The root aggregate. Fields are private: reads go through query
//! methods, writes through `pub(crate)` mechanical operations driven by
//! the rules layer (`rules::GameEngine`). The mechanical layer performs
//! no validation — every guard and policy decision lives in the rules
//! layer.
//!
//! ## Notice
//!
//! Typed user-validation message. The state holds at most one; the view
//! renders it via `Display`, and commands replace or clear it.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::{Player, PlayerId};

/// Maximum roster size.
pub const MAX_PLAYERS: usize = 4;

/// User-facing validation message.
///
/// Held in `GameState` rather than returned to the caller so the view
/// can render the latest message after any command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// Rejected add: the submitted name is empty.
    InvalidName {
        /// The name as submitted.
        given: String,
    },
    /// Rejected add: the roster already holds `MAX_PLAYERS` players.
    RosterFull,
    /// Rejected add: another roster entry already uses this name,
    /// compared case-insensitively.
    NameTaken {
        /// The name as submitted.
        name: String,
    },
    /// Rejected start: a match needs at least one player.
    EmptyRoster,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::InvalidName { given } => write!(f, "invalid player name ({})", given),
            Notice::RosterFull => {
                write!(f, "cannot add player, reached max-players ({})", MAX_PLAYERS)
            }
            Notice::NameTaken { name } => write!(f, "player name already exists ({})", name),
            Notice::EmptyRoster => write!(f, "cannot start game, need at least 1 player"),
        }
    }
}

/// Complete match state.
///
/// The roster is an `im::Vector`, so owned snapshots clone in O(1) via
/// structural sharing — the view takes a snapshot per command and
/// re-renders from it.
///
/// Equality compares every field, which keeps "state unchanged"
/// assertions in tests one-liners.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current lifecycle phase.
    phase: Phase,
    /// Roster in insertion order.
    players: Vector<Player>,
    /// Leader as of the most recent hit registration.
    leader: Option<PlayerId>,
    /// Winner, once a score lands exactly on the winning total.
    winner: Option<PlayerId>,
    /// Latest user-validation message, if any.
    notice: Option<Notice>,
    /// Next player id to allocate. Monotonic, never reused.
    next_player_id: u32,
}

impl GameState {
    /// Create an empty match state in phase `New`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Iterate the roster in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Current leader: the first player in roster order with the
    /// strictly highest score, as of the most recent hit registration.
    ///
    /// `None` until a hit has been registered. Roster removal does not
    /// recompute this, so the id may refer to a player no longer on the
    /// roster until the next hit.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        self.leader
    }

    /// Winner, once declared. Set only by hit registration, when a
    /// score lands exactly on the winning total.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Latest user-validation message, if one is pending.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // === Mechanical operations (rules layer only) ===

    /// Allocate the next player id.
    pub(crate) fn alloc_player_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    /// Append a player to the roster.
    pub(crate) fn push_player(&mut self, player: Player) {
        self.players.push_back(player);
    }

    /// Remove a player by id, returning it if present.
    pub(crate) fn take_player(&mut self, id: PlayerId) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }

    /// Mutable access to a player by id.
    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    /// Set the lifecycle phase.
    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Replace the pending notice.
    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Clear the pending notice.
    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// Record the winner.
    pub(crate) fn set_winner(&mut self, id: PlayerId) {
        self.winner = Some(id);
    }

    /// Recompute the leader: scan the roster in order, keeping the
    /// first player whose score is strictly greater than the running
    /// best. Ties keep the earlier-inserted player. Empty roster clears
    /// the leader.
    pub(crate) fn recompute_leader(&mut self) {
        let mut best: Option<&Player> = None;
        for p in &self.players {
            if best.map_or(true, |b| p.score > b.score) {
                best = Some(p);
            }
        }
        self.leader = best.map(|p| p.id);
    }
}
