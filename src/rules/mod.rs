//! End-of-game rules: final scores and the winner.

mod score;

pub use score::{final_score, winner, GameResult, ScoreLine, POINTS_PER_HUNDRED};
