//! Running a game.
//!
//! `GameSession` owns both lanes, both players, the loaded data and the
//! RNG. It drives character and path selection, then alternates turns
//! until both players reach the Finish tile.

mod session;

pub use session::{parse_choice, path_bonus, GameSession, TurnRecord};
