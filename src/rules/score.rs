//! Final scoring.
//!
//! `score = discover_points + 1000 * floor(accuracy / 100)
//!        + 1000 * floor(efficiency / 100) + 1000 * floor(insight / 100)`
//!
//! Partial hundreds count for nothing. Experience does not score. The sum
//! saturates at the `i64` bounds.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap, PlayerState};

/// Points awarded per full hundred of Accuracy, Efficiency or Insight.
pub const POINTS_PER_HUNDRED: i64 = 1000;

/// Final score of one player.
///
/// ```
/// use genome_quest::core::PlayerState;
/// use genome_quest::rules::final_score;
///
/// let player = PlayerState::new("Ada").with_stats(0, 250, 0, 99, 1000);
/// assert_eq!(final_score(&player), 3000);
/// ```
#[must_use]
pub fn final_score(player: &PlayerState) -> i64 {
    let hundreds = |stat: i64| stat.div_euclid(100).saturating_mul(POINTS_PER_HUNDRED);

    player
        .discover_points
        .saturating_add(hundreds(player.accuracy))
        .saturating_add(hundreds(player.efficiency))
        .saturating_add(hundreds(player.insight))
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores. There is no tiebreak.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Compare both players' final scores. Strictly greater wins.
#[must_use]
pub fn winner(players: &PlayerMap<PlayerState>) -> GameResult {
    let first = PlayerId::new(0);
    let second = PlayerId::new(1);
    let a = final_score(&players[first]);
    let b = final_score(&players[second]);

    match a.cmp(&b) {
        std::cmp::Ordering::Greater => GameResult::Winner(first),
        std::cmp::Ordering::Less => GameResult::Winner(second),
        std::cmp::Ordering::Equal => GameResult::Tie,
    }
}

/// A player's name and final score, for the end-of-game summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub player: PlayerId,
    pub name: String,
    pub score: i64,
}

impl ScoreLine {
    /// Score lines for both players in seat order.
    pub fn for_players(players: &PlayerMap<PlayerState>) -> Vec<ScoreLine> {
        players
            .iter()
            .map(|(player, state)| ScoreLine {
                player,
                name: state.name.clone(),
                score: final_score(state),
            })
            .collect()
    }
}

impl std::fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} total points", self.name, self.score)
    }
}
