//! Core match-state types: targets, players, phases, the state aggregate.
//!
//! These are the fundamental data carriers and hold no rule knowledge.
//! Validation, guards, and command policy live in `crate::rules`.

pub mod target;
pub mod player;
pub mod phase;
pub mod state;

pub use target::{Target, TargetHits, HITS_TO_CLOSE, TARGET_COUNT};
pub use player::{Player, PlayerId};
pub use phase::Phase;
pub use state::{GameState, Notice, MAX_PLAYERS};
