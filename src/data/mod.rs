//! Game data: characters, random events and riddles.
//!
//! - `Record`: parse one line of a data file
//! - `parse_records` / `load_file` / `load_or_empty`: whole-file loading
//! - `default_roster`: built-in scientists used when the character file is
//!   missing or too short

mod records;
mod loader;

pub use records::{CharacterRecord, RandomEvent, Record, Riddle};
pub use loader::{load_file, load_or_empty, parse_bytes, parse_records, Loaded};

/// Scientists available when `characters.txt` provides fewer than two.
pub fn default_roster() -> Vec<CharacterRecord> {
    vec![
        CharacterRecord::new("Dr. Rosalind Franklin", 5, 500, 500, 1000, 20000),
        CharacterRecord::new("Dr. Barbara McClintock", 8, 900, 600, 600, 20000),
        CharacterRecord::new("Dr. Francis Crick", 3, 600, 900, 500, 20000),
    ]
}
