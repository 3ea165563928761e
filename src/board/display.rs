//! Terminal rendering of lanes.

use super::{Lane, PlayerTrack};
use crate::core::PlayerId;

const RESET: &str = "\x1b[0m";

/// Render one lane as a row of colored `| |` cells, with the player's seat
/// number on the tile at `position`.
#[must_use]
pub fn render_lane(lane: &Lane, player: PlayerId, position: usize) -> String {
    let mut out = String::new();
    for (index, tile) in lane.tiles().iter().enumerate() {
        out.push_str(tile.ansi_background());
        if index == position {
            out.push('|');
            out.push_str(&player.seat().to_string());
            out.push('|');
        } else {
            out.push_str("| |");
        }
        out.push_str(RESET);
    }
    out
}

/// Render both lanes, one per line, separated by a blank line.
#[must_use]
pub fn render_board(track: &PlayerTrack) -> String {
    PlayerId::all()
        .filter_map(|player| {
            let lane = track.lane(player)?;
            let position = track.position(player)?;
            Some(render_lane(lane, player, position))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
