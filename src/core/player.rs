//! Player identification, per-player storage and scientist stats.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. The game seats exactly two players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//!
//! ## PlayerState
//!
//! The scientist a player controls: name, stats, chosen path and whether
//! the final tile has been reached.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the board.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based seat number shown to humans.
    #[must_use]
    pub const fn seat(self) -> usize {
        self.0 as usize + 1
    }

    /// Iterate over both seats in turn order.
    ///
    /// ```
    /// use genome_quest::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.seat())
    }
}

/// Per-player data storage with O(1) access.
///
/// Indexing with `[]` panics on a foreign id; `get` returns `None` instead.
///
/// ```
/// use genome_quest::core::{PlayerId, PlayerMap};
///
/// let mut laps: PlayerMap<u32> = PlayerMap::with_value(0);
/// laps[PlayerId::new(1)] += 1;
/// assert_eq!(laps[PlayerId::new(1)], 1);
/// assert!(laps.get(PlayerId::new(5)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        let data = PlayerId::all().map(&mut factory).collect();
        Self { data }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data, or `None` for an unknown id.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Career path picked after character selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathType {
    /// Training Fellowship: fewer Discover Points, bigger stat boosts.
    #[default]
    Fellowship,
    /// Direct Lab Assignment: more Discover Points, modest stat boosts.
    DirectLab,
}

impl PathType {
    /// Map the menu code (`0` or `1`) to a path.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PathType::Fellowship),
            1 => Some(PathType::DirectLab),
            _ => None,
        }
    }
}

impl std::fmt::Display for PathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathType::Fellowship => write!(f, "Training Fellowship"),
            PathType::DirectLab => write!(f, "Direct Lab Assignment"),
        }
    }
}

/// A scientist's running stats.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub experience: i64,
    pub accuracy: i64,
    pub efficiency: i64,
    pub insight: i64,
    pub discover_points: i64,
    pub path: PathType,
    /// Set once the player lands on the Finish tile.
    pub finished: bool,
}

impl PlayerState {
    /// Create a scientist with the given name and all stats at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stats(
        mut self,
        experience: i64,
        accuracy: i64,
        efficiency: i64,
        insight: i64,
        discover_points: i64,
    ) -> Self {
        self.experience = experience;
        self.accuracy = accuracy;
        self.efficiency = efficiency;
        self.insight = insight;
        self.discover_points = discover_points;
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: PathType) -> Self {
        self.path = path;
        self
    }

    /// One-line stat summary used in menus and turn reports.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} [Exp: {}, Acc: {}, Eff: {}, Ins: {}, DP: {}]",
            self.name,
            self.experience,
            self.accuracy,
            self.efficiency,
            self.insight,
            self.discover_points
        )
    }
}
