//! Core types: players, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PathType, PlayerId, PlayerMap, PlayerState, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{EventTrigger, GameConfig, RiddleNormalization, SelectionPolicy};
pub use error::GameError;
