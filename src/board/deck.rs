//! Lane generation.
//!
//! A lane always opens with Start and closes with Finish. The interior
//! receives a fixed number of Regular tiles spread by a quota draw: at each
//! position the chance of Regular is `remaining_quota / remaining_slots`,
//! so the quota is met exactly and never overrun, whatever the draws were
//! earlier in the lane.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TileColor;
use crate::core::GameRng;

/// Why a tile sequence is not a lane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LaneError {
    #[error("Lane needs at least Start and Finish tiles")]
    TooShort,

    #[error("Lane must open with Start")]
    MissingStart,

    #[error("Lane must close with Finish")]
    MissingFinish,
}

/// One player's ordered tile sequence.
///
/// Deserializing goes through the same checks as `from_tiles`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TileColor>", into = "Vec<TileColor>")]
pub struct Lane {
    tiles: Vec<TileColor>,
}

impl TryFrom<Vec<TileColor>> for Lane {
    type Error = LaneError;

    fn try_from(tiles: Vec<TileColor>) -> Result<Self, Self::Error> {
        if tiles.len() < 2 {
            return Err(LaneError::TooShort);
        }
        if tiles[0] != TileColor::Start {
            return Err(LaneError::MissingStart);
        }
        if tiles[tiles.len() - 1] != TileColor::Finish {
            return Err(LaneError::MissingFinish);
        }
        Ok(Self { tiles })
    }
}

impl From<Lane> for Vec<TileColor> {
    fn from(lane: Lane) -> Self {
        lane.tiles
    }
}

impl Lane {
    /// Build a lane from explicit tiles.
    ///
    /// Panics unless the tiles open with Start and close with Finish. Use
    /// `Lane::try_from` to get the error instead.
    pub fn from_tiles(tiles: Vec<TileColor>) -> Self {
        match Self::try_from(tiles) {
            Ok(lane) => lane,
            Err(err) => panic!("{}", err),
        }
    }

    /// Number of tiles, Start and Finish included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false; a lane holds at least Start and Finish.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Index of the Finish tile.
    #[must_use]
    pub fn finish_index(&self) -> usize {
        self.tiles.len() - 1
    }

    /// Tile at `position`, or `None` past the end.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<TileColor> {
        self.tiles.get(position).copied()
    }

    #[must_use]
    pub fn tiles(&self) -> &[TileColor] {
        &self.tiles
    }

    /// How many tiles of `color` the lane holds.
    #[must_use]
    pub fn count(&self, color: TileColor) -> usize {
        self.tiles.iter().filter(|&&tile| tile == color).count()
    }
}

/// Generates lanes with a fixed Regular tile quota.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileDeck {
    regular_quota: usize,
}

impl TileDeck {
    pub fn new(regular_quota: usize) -> Self {
        Self { regular_quota }
    }

    /// Generate a lane of `size` tiles.
    ///
    /// The lane holds exactly `min(quota, size - 2)` Regular tiles. Every
    /// other interior tile is one of the four task colors or Riddle, each
    /// equally likely.
    ///
    /// ```
    /// use genome_quest::board::{TileColor, TileDeck};
    /// use genome_quest::core::GameRng;
    ///
    /// let lane = TileDeck::new(30).generate(52, &mut GameRng::new(1));
    /// assert_eq!(lane.get(0), Some(TileColor::Start));
    /// assert_eq!(lane.get(51), Some(TileColor::Finish));
    /// assert_eq!(lane.count(TileColor::Regular), 30);
    /// ```
    pub fn generate(&self, size: usize, rng: &mut GameRng) -> Lane {
        assert!(size >= 2, "Lane needs at least Start and Finish tiles");

        let last = size - 1;
        let mut tiles = Vec::with_capacity(size);
        let mut remaining_quota = self.regular_quota.min(size - 2);

        tiles.push(TileColor::Start);
        for i in 1..last {
            // Interior slots still open, this one included.
            let remaining_slots = last - i;
            let regular = remaining_quota > 0
                && rng.gen_range_usize(0..remaining_slots) < remaining_quota;

            if regular {
                remaining_quota -= 1;
                tiles.push(TileColor::Regular);
            } else {
                let pick = rng.gen_range_usize(0..TileColor::SPECIAL.len());
                tiles.push(TileColor::SPECIAL[pick]);
            }
        }
        tiles.push(TileColor::Finish);

        debug_assert_eq!(remaining_quota, 0);
        Lane { tiles }
    }
}
