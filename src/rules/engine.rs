//! The command engine: every match rule lives here.
//!
//! ## GameEngine
//!
//! Exclusively owns a `GameState` and applies commands to it: roster
//! edits (`add_player`, `rename_player`, `remove_player`), scoring
//! (`register_hit`), and lifecycle (`start_game`, `new_game`). Callers
//! read through `state()` or take owned snapshots.
//!
//! ## Outcome classes
//!
//! - User-validation rejections set a `Notice` in state and return
//!   `false`: expected, recoverable, rendered by the view.
//! - A stale `PlayerId` is a caller fault: `Err(PlayerNotFound)`.
//! - Taps on closed or empty targets are normal interactions that
//!   change nothing: `Ok(HitOutcome::NoOp)`, no notice.

use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::phase::Phase;
use crate::core::player::{Player, PlayerId};
use crate::core::state::{GameState, Notice, MAX_PLAYERS};
use crate::core::target::Target;

/// Winning score. A player wins on the hit that lands their score on
/// exactly this total; overshooting it declares nothing. Closing all
/// seven targets scores 7 × 3 = 21.
pub const WIN_SCORE: i32 = 21;

/// Caller fault: a command referenced a player id not on the roster.
///
/// Distinct from user-validation notices. A stale id means the caller's
/// view of the roster is out of date, not that the user made a
/// recoverable mistake.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("didn't find playerId ({0})")]
pub struct PlayerNotFound(pub PlayerId);

/// Outcome of a hit registration that found its player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// The hit was applied to the scorecard and score.
    Applied,
    /// Nothing changed: positive amount on a closed target, or negative
    /// amount on an empty one.
    NoOp,
}

impl HitOutcome {
    /// Whether the registration changed state.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, HitOutcome::Applied)
    }
}

/// Match engine: owns the state and applies the Cricket rules.
///
/// ## Example
///
/// ```
/// use cricket_darts::core::Target;
/// use cricket_darts::rules::GameEngine;
///
/// let mut engine = GameEngine::new();
/// assert!(engine.add_player("Ann"));
/// assert!(engine.start_game());
///
/// let ann = engine.players().next().unwrap().id;
/// engine.register_hit(ann, Target::Twenty, 1).unwrap();
/// assert_eq!(engine.leader(), Some(ann));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create an engine with an empty roster in phase `New`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and feed each name through `add_player`.
    ///
    /// Normal add validation applies: an invalid or duplicate seed name
    /// is skipped and leaves its notice in state.
    pub fn with_roster<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut engine = Self::new();
        for name in names {
            engine.add_player(name);
        }
        engine
    }

    // === Queries ===

    /// Read access to the full state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Owned snapshot of the state.
    ///
    /// Cheap: the roster is a persistent structure, so the clone shares
    /// storage with the live state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Iterate the roster in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.state.players()
    }

    /// Current leader, if any hit has been registered.
    ///
    /// See `GameState::leader` for the tie-break and staleness rules.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        self.state.leader()
    }

    /// Winner, once declared.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Latest user-validation message, if one is pending.
    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.state.notice()
    }

    // === Commands ===

    /// Add a player to the roster.
    ///
    /// Validation, first failure wins:
    /// 1. empty name → `Notice::InvalidName`;
    /// 2. roster already at `MAX_PLAYERS` → `Notice::RosterFull`;
    /// 3. name already in use, compared case-insensitively →
    ///    `Notice::NameTaken`.
    ///
    /// On success: the player joins with a fresh scorecard and the next
    /// monotonic id, the notice is cleared, and `true` comes back. The
    /// leader and winner are not recomputed.
    #[instrument(skip(self, name))]
    pub fn add_player(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();

        if name.is_empty() {
            debug!(name = %name, "rejected add: invalid name");
            self.state.set_notice(Notice::InvalidName { given: name });
            return false;
        }

        if self.state.player_count() >= MAX_PLAYERS {
            debug!(name = %name, "rejected add: roster full");
            self.state.set_notice(Notice::RosterFull);
            return false;
        }

        if self.name_in_use(&name) {
            debug!(name = %name, "rejected add: name taken");
            self.state.set_notice(Notice::NameTaken { name });
            return false;
        }

        let id = self.state.alloc_player_id();
        debug!(%id, name = %name, "player added");
        self.state.push_player(Player::new(id, name));
        self.state.clear_notice();
        true
    }

    /// Rename a player in place.
    ///
    /// The new name is accepted verbatim — it is not run through the
    /// add-time validation, so empty or duplicate names can enter the
    /// roster this way. Unknown ids fail with `PlayerNotFound` and
    /// leave the state untouched; success clears the notice.
    //
    // TODO: run renames through the add_player validation rules.
    #[instrument(skip(self, new_name))]
    pub fn rename_player(
        &mut self,
        id: PlayerId,
        new_name: impl Into<String>,
    ) -> Result<(), PlayerNotFound> {
        let new_name = new_name.into();
        let player = self.state.player_mut(id).ok_or(PlayerNotFound(id))?;

        debug!(%id, name = %new_name, "player renamed");
        player.name = new_name;
        self.state.clear_notice();
        Ok(())
    }

    /// Remove a player from the roster, returning the removed entry.
    ///
    /// Unknown ids fail with `PlayerNotFound` and leave the state
    /// untouched. Remaining ids are not renumbered, and the leader is
    /// not recomputed — only hit registration does that — so a removed
    /// player can stay leader until the next hit. Success clears the
    /// notice.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, PlayerNotFound> {
        let player = self.state.take_player(id).ok_or(PlayerNotFound(id))?;

        debug!(%id, name = %player.name, "player removed");
        self.state.clear_notice();
        Ok(player)
    }

    /// Register `amount` hits on a target for a player.
    ///
    /// Unit amounts (±1) are the normal interaction; other values are
    /// applied verbatim with no clamping, which can push a cell past
    /// closed or a score past `WIN_SCORE` without declaring a winner.
    ///
    /// Guards, checked before applying:
    /// - positive amount on a closed target → `Ok(NoOp)`;
    /// - negative amount on an empty target → `Ok(NoOp)`.
    ///
    /// On apply, the cell and the score both move by `amount`, the
    /// leader is recomputed, and a score of exactly `WIN_SCORE`
    /// declares the player the winner and moves the phase to `Over`.
    /// This command never touches the notice.
    #[instrument(skip(self))]
    pub fn register_hit(
        &mut self,
        id: PlayerId,
        target: Target,
        amount: i32,
    ) -> Result<HitOutcome, PlayerNotFound> {
        let player = self.state.player_mut(id).ok_or(PlayerNotFound(id))?;

        if amount > 0 && player.is_closed(target) {
            debug!(%id, %target, "target is closed");
            return Ok(HitOutcome::NoOp);
        }
        if amount < 0 && player.hits(target) == 0 {
            debug!(%id, %target, "target is empty");
            return Ok(HitOutcome::NoOp);
        }

        player.apply_hit(target, amount);
        let score = player.score;
        debug!(%id, %target, amount, score, "hit applied");

        self.state.recompute_leader();

        if score == WIN_SCORE {
            debug!(%id, "winner declared");
            self.state.set_winner(id);
            self.state.set_phase(Phase::Over);
        }

        Ok(HitOutcome::Applied)
    }

    /// Start the match.
    ///
    /// An empty roster is rejected with `Notice::EmptyRoster` and
    /// `false`. Otherwise the phase moves to `On` and the notice is
    /// cleared. There is no phase precondition: calling this while
    /// already `On` or `Over` lands on `On` again.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) -> bool {
        if self.state.player_count() == 0 {
            debug!("rejected start: empty roster");
            self.state.set_notice(Notice::EmptyRoster);
            return false;
        }

        debug!(players = self.state.player_count(), "game started");
        self.state.set_phase(Phase::On);
        self.state.clear_notice();
        true
    }

    /// Re-rack: move the phase back to `New`, unconditionally.
    ///
    /// Nothing else resets — roster, scores, leader, winner, and any
    /// pending notice all survive. A full reset is the caller's job:
    /// drop the engine, or remove the players.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!("re-rack");
        self.state.set_phase(Phase::New);
    }

    // === Internals ===

    /// Case-insensitive collision check against current roster names.
    fn name_in_use(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.state.players().any(|p| p.name.to_lowercase() == lower)
    }
}
