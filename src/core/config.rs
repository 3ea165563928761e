//! Game configuration.
//!
//! Everything that shapes a run lives in `GameConfig`:
//! - Board shape: lane length and the Regular tile quota
//! - Seed for reproducible games
//! - Policies for event/riddle selection and answer normalization
//! - Data file locations and the per-file record capacity

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tiles per lane, Start and Finish included.
pub const DEFAULT_BOARD_SIZE: usize = 52;

/// Regular (green) tiles placed on each lane.
pub const DEFAULT_REGULAR_QUOTA: usize = 30;

/// Records kept per data file before truncating.
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// Environment variable holding an optional `u64` seed.
pub const SEED_ENV_VAR: &str = "GENOME_QUEST_SEED";

/// How the next random event or riddle is picked from its list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Walk the list in order and wrap around.
    #[default]
    Cyclic,
    /// Uniform draw from the game RNG.
    Random,
}

/// Whether a Regular tile fires a random event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTrigger {
    /// Fair coin flip from the game RNG.
    #[default]
    CoinFlip,
    /// Event, quiet, event, quiet, ... shared across both players.
    Alternate,
}

/// How riddle answers are compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiddleNormalization {
    /// Lowercase both sides; whitespace is significant.
    #[default]
    CaseOnly,
    /// Lowercase both sides and trim leading/trailing whitespace.
    Trimmed,
}

impl RiddleNormalization {
    /// Normalize an answer for comparison.
    #[must_use]
    pub fn normalize(self, answer: &str) -> String {
        match self {
            RiddleNormalization::CaseOnly => answer.to_lowercase(),
            RiddleNormalization::Trimmed => answer.trim().to_lowercase(),
        }
    }

    /// Compare a player's answer against the stored one.
    #[must_use]
    pub fn matches(self, given: &str, expected: &str) -> bool {
        self.normalize(given) == self.normalize(expected)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles per lane (>= 2).
    pub board_size: usize,

    /// Regular tiles per lane. Capped at `board_size - 2`.
    pub regular_quota: usize,

    /// Fixed seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    pub event_policy: SelectionPolicy,
    pub riddle_policy: SelectionPolicy,
    pub event_trigger: EventTrigger,
    pub riddle_normalization: RiddleNormalization,

    pub characters_path: PathBuf,
    pub events_path: PathBuf,
    pub riddles_path: PathBuf,

    /// Maximum records loaded per data file.
    pub max_records: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            regular_quota: DEFAULT_REGULAR_QUOTA,
            seed: None,
            event_policy: SelectionPolicy::default(),
            riddle_policy: SelectionPolicy::default(),
            event_trigger: EventTrigger::default(),
            riddle_normalization: RiddleNormalization::default(),
            characters_path: PathBuf::from("characters.txt"),
            events_path: PathBuf::from("random_events.txt"),
            riddles_path: PathBuf::from("riddles.txt"),
            max_records: DEFAULT_MAX_RECORDS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with `GENOME_QUEST_SEED` applied when set.
    ///
    /// An unparsable value is logged and ignored.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => config.with_seed(seed),
                Err(_) => {
                    tracing::warn!("ignoring {}={:?}: not a u64", SEED_ENV_VAR, raw);
                    config
                }
            },
            Err(_) => config,
        }
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    #[must_use]
    pub fn with_regular_quota(mut self, quota: usize) -> Self {
        self.regular_quota = quota;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_event_policy(mut self, policy: SelectionPolicy) -> Self {
        self.event_policy = policy;
        self
    }

    #[must_use]
    pub fn with_riddle_policy(mut self, policy: SelectionPolicy) -> Self {
        self.riddle_policy = policy;
        self
    }

    #[must_use]
    pub fn with_event_trigger(mut self, trigger: EventTrigger) -> Self {
        self.event_trigger = trigger;
        self
    }

    #[must_use]
    pub fn with_riddle_normalization(mut self, normalization: RiddleNormalization) -> Self {
        self.riddle_normalization = normalization;
        self
    }

    /// Point all three data files at `dir`, keeping their file names.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.characters_path = dir.join("characters.txt");
        self.events_path = dir.join("random_events.txt");
        self.riddles_path = dir.join("riddles.txt");
        self
    }

    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = max;
        self
    }

    /// Assert the board can hold a Start and a Finish tile.
    pub fn validate(&self) {
        assert!(self.board_size >= 2, "Board needs at least Start and Finish tiles");
    }
}
