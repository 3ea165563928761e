//! Tile colors and what they stand for.

use serde::{Deserialize, Serialize};

/// The color of a single board tile.
///
/// Colors decide which effect runs when a player lands on the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    /// Grey starting tile.
    Start,
    /// Orange finish line.
    Finish,
    /// Green tile: may fire a random event.
    Regular,
    /// Blue tile: strand similarity.
    TaskA,
    /// Pink tile: best strand match.
    TaskB,
    /// Red tile: mutation identification.
    TaskC,
    /// Brown tile: DNA to RNA transcription.
    TaskD,
    /// Purple tile: riddle.
    Riddle,
}

impl TileColor {
    /// Interior colors that are not Regular, in draw order.
    pub const SPECIAL: [TileColor; 5] = [
        TileColor::TaskA,
        TileColor::TaskB,
        TileColor::TaskC,
        TileColor::TaskD,
        TileColor::Riddle,
    ];

    /// The DNA task behind a task tile.
    #[must_use]
    pub const fn task(self) -> Option<DnaTask> {
        match self {
            TileColor::TaskA => Some(DnaTask::Similarity),
            TileColor::TaskB => Some(DnaTask::BestMatch),
            TileColor::TaskC => Some(DnaTask::Mutations),
            TileColor::TaskD => Some(DnaTask::Transcription),
            _ => None,
        }
    }

    /// Display name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileColor::Start => "Grey",
            TileColor::Finish => "Orange",
            TileColor::Regular => "Green",
            TileColor::TaskA => "Blue",
            TileColor::TaskB => "Pink",
            TileColor::TaskC => "Red",
            TileColor::TaskD => "Brown",
            TileColor::Riddle => "Purple",
        }
    }

    /// 24-bit ANSI background escape for this color.
    #[must_use]
    pub const fn ansi_background(self) -> &'static str {
        match self {
            TileColor::Start => "\x1b[48;2;128;128;128m",
            TileColor::Finish => "\x1b[48;2;230;115;0m",
            TileColor::Regular => "\x1b[48;2;34;139;34m",
            TileColor::TaskA => "\x1b[48;2;10;10;230m",
            TileColor::TaskB => "\x1b[48;2;255;105;180m",
            TileColor::TaskC => "\x1b[48;2;230;10;10m",
            TileColor::TaskD => "\x1b[48;2;139;69;19m",
            TileColor::Riddle => "\x1b[48;2;128;0;128m",
        }
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The four DNA puzzles behind task tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DnaTask {
    /// Equal-length strand similarity.
    Similarity,
    /// Best alignment of a target inside a longer strand.
    BestMatch,
    /// Substitutions, insertions and deletions between two strands.
    Mutations,
    /// DNA to RNA.
    Transcription,
}

impl DnaTask {
    /// Heading shown when the task starts.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            DnaTask::Similarity => "DNA Task 1 - Similarity (Equal-Length)",
            DnaTask::BestMatch => "DNA Task 2 - Best Strand Match (Unequal-Length)",
            DnaTask::Mutations => "DNA Task 3 - Mutation Identification",
            DnaTask::Transcription => "DNA Task 4 - Transcribe DNA to RNA",
        }
    }
}
