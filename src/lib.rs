//! # genome-quest
//!
//! A two-player, turn-based board game for the terminal, themed around a
//! DNA lab.
//!
//! ## Rules in Brief
//!
//! 1. Each player walks a private lane of colored tiles, one tile per turn.
//! 2. Landing on a tile triggers its effect: a random event, a DNA puzzle,
//!    a riddle, or nothing. Effects change the player's stats.
//! 3. When both players reach the Finish tile, Discover Points plus 1000
//!    per full hundred of Accuracy, Efficiency and Insight decide the
//!    winner.
//!
//! ## Determinism
//!
//! All randomness flows through one seeded `GameRng` owned by the session,
//! so a logged seed reproduces a game's lanes and event rolls.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `board`: Tile colors, lane generation, positions, rendering
//! - `dna`: Strand similarity, alignment, mutation diff, transcription
//! - `data`: Character, event and riddle files
//! - `effects`: Stat effects and the tile effect router
//! - `rules`: Final scores and the winner
//! - `game`: The session and turn loop
//! - `terminal`: Player-facing input and output

pub mod core;
pub mod board;
pub mod dna;
pub mod data;
pub mod effects;
pub mod rules;
pub mod game;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{
    EventTrigger, GameConfig, GameError, GameRng, PathType, PlayerId, PlayerMap, PlayerState,
    RiddleNormalization, SelectionPolicy,
};

pub use crate::board::{DnaTask, Lane, PlayerTrack, TileColor, TileDeck};

pub use crate::data::{CharacterRecord, RandomEvent, Riddle};

pub use crate::effects::{Effect, EffectRouter, Resolution, ResolutionKind, Stat};

pub use crate::rules::{final_score, winner, GameResult};

pub use crate::game::{GameSession, TurnRecord};

pub use crate::terminal::{ConsoleTerminal, ScriptedTerminal, Terminal};
