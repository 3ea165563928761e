//! Tile effects.
//!
//! - `Effect`: a stat change, possibly batched
//! - `EffectRouter`: resolves a landed tile color into an `Effect`, asking
//!   the player for DNA strands or riddle answers along the way

mod effect;
mod router;

pub use effect::{Effect, Stat};
pub use router::{
    similarity_bonus, EffectRouter, Resolution, ResolutionKind, SkipReason, BEST_MATCH_BONUS,
    MUTATION_BONUS, RIDDLE_BONUS, SIMILARITY_MAX_BONUS, TRANSCRIPTION_BONUS,
};
