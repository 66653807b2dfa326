//! # cricket-darts
//!
//! Match-state engine for the Cricket darts game: roster management,
//! per-target hit tallies, score accumulation, leader tracking, and win
//! detection for up to four players.
//!
//! ## Design
//!
//! - **Two layers**: `core` holds dumb state types with mechanical
//!   mutations; `rules` owns every guard and policy decision. State
//!   fields are private, so all writes flow through the engine.
//!
//! - **Snapshot reads**: the engine owns its `GameState` exclusively;
//!   callers borrow it or take cheap owned snapshots (the roster is an
//!   `im` persistent structure) and re-render from those.
//!
//! - **Three outcome classes**: user mistakes set a `Notice` for the
//!   view to render; stale player ids are `PlayerNotFound` faults; taps
//!   on closed or empty targets come back as `HitOutcome::NoOp`.
//!
//! ## Rules
//!
//! Seven targets (20 down to 15, then the bullseye), three hits to
//! close each, one point per applied hit. A player who closes all seven
//! targets reaches 7 × 3 = 21 and wins the match on the hit that lands
//! there.
//!
//! ## Example
//!
//! ```
//! use cricket_darts::{GameEngine, HitOutcome, Target};
//!
//! let mut engine = GameEngine::with_roster(["Ann", "Ben"]);
//! engine.start_game();
//!
//! let ann = engine.players().next().unwrap().id;
//! for _ in 0..3 {
//!     engine.register_hit(ann, Target::Twenty, 1).unwrap();
//! }
//!
//! // A fourth tap on a closed target changes nothing.
//! let outcome = engine.register_hit(ann, Target::Twenty, 1).unwrap();
//! assert_eq!(outcome, HitOutcome::NoOp);
//! assert_eq!(engine.leader(), Some(ann));
//! ```

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameState, Notice, Phase, Player, PlayerId, Target, TargetHits,
    HITS_TO_CLOSE, MAX_PLAYERS, TARGET_COUNT,
};

pub use crate::rules::{GameEngine, HitOutcome, PlayerNotFound, WIN_SCORE};

/// Default roster for demo embedders, fed through
/// `GameEngine::with_roster` at startup. Configuration data, not rules.
pub const DEMO_ROSTER: [&str; 2] = ["Player 1", "Player 2"];
