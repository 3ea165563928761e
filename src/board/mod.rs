//! The board: tile colors, lane generation, player positions and rendering.
//!
//! - `TileColor`: what a tile does when landed on
//! - `TileDeck`: builds a `Lane` with a fixed Regular tile quota
//! - `PlayerTrack`: per-player lanes and positions
//! - `render_board`: ANSI view of both lanes

mod tile;
mod deck;
mod track;
mod display;

pub use tile::{DnaTask, TileColor};
pub use deck::{Lane, LaneError, TileDeck};
pub use track::PlayerTrack;
pub use display::{render_board, render_lane};
