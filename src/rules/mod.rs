//! Match rules: the command engine and its outcome types.
//!
//! `crate::core` carries dumb state; every guard, notice, and derived
//! value update lives here. The engine owns its state exclusively, so
//! all mutation flows through these commands.

pub mod engine;

pub use engine::{GameEngine, HitOutcome, PlayerNotFound, WIN_SCORE};
