//! Player positions on their lanes.

use serde::Serialize;

use super::{Lane, TileColor};
use crate::core::{PlayerId, PlayerMap};

/// Both lanes and where each player stands on theirs.
///
/// Every player moves one tile per turn. Positions only grow, and stop on
/// the Finish tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerTrack {
    lanes: PlayerMap<Lane>,
    positions: PlayerMap<usize>,
}

impl PlayerTrack {
    /// Place both players on the Start tile of their lanes.
    ///
    /// Panics if the lanes differ in length.
    pub fn new(lanes: PlayerMap<Lane>) -> Self {
        let len = lanes[PlayerId::new(0)].len();
        assert!(
            lanes.iter().all(|(_, lane)| lane.len() == len),
            "All lanes must have the same length"
        );

        Self {
            lanes,
            positions: PlayerMap::with_value(0),
        }
    }

    /// Tiles per lane.
    #[must_use]
    pub fn lane_len(&self) -> usize {
        self.lanes[PlayerId::new(0)].len()
    }

    /// Move `player` forward one tile.
    ///
    /// Returns true when the player lands on Finish. Panics if the player is
    /// already there: callers gate on the finished flag.
    pub fn advance(&mut self, player: PlayerId) -> bool {
        let finish = self.lanes[player].finish_index();
        let position = &mut self.positions[player];
        assert!(*position < finish, "{} cannot advance past the Finish tile", player);

        *position += 1;
        *position == finish
    }

    /// Current tile index of `player`, or `None` for an unknown player.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<usize> {
        self.positions.get(player).copied()
    }

    /// Color of tile `position` on `player`'s lane, or `None` when either
    /// index is out of range.
    #[must_use]
    pub fn tile_color(&self, player: PlayerId, position: usize) -> Option<TileColor> {
        self.lanes.get(player)?.get(position)
    }

    /// Color of the tile `player` is standing on.
    #[must_use]
    pub fn current_tile(&self, player: PlayerId) -> Option<TileColor> {
        self.tile_color(player, self.position(player)?)
    }

    #[must_use]
    pub fn lane(&self, player: PlayerId) -> Option<&Lane> {
        self.lanes.get(player)
    }

    /// Whether `player` stands on Finish. False for an unknown player.
    #[must_use]
    pub fn is_finished(&self, player: PlayerId) -> bool {
        match (self.position(player), self.lane(player)) {
            (Some(position), Some(lane)) => position == lane.finish_index(),
            _ => false,
        }
    }
}
