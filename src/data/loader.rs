//! Reading data files into record lists.
//!
//! Files are plain text: one header line, then one `|`-separated record per
//! line. Bad lines are skipped, extra records past the capacity are dropped,
//! and a missing file yields an empty list. Each of those is logged.

use std::path::Path;

use tracing::{debug, error, warn};

use super::Record;
use crate::core::GameError;

/// Records read from one file, plus what was left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    /// 1-based line numbers of lines that failed to parse.
    pub skipped: Vec<usize>,
    /// Valid records dropped because the capacity was reached.
    pub truncated: usize,
}

impl<T> Loaded<T> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
            truncated: 0,
        }
    }
}

/// Parse file contents. The first line is a header and is ignored, as are
/// blank lines.
pub fn parse_records<T: Record>(text: &str, capacity: usize) -> Loaded<T> {
    parse_bytes(text.as_bytes(), capacity)
}

/// Parse raw file contents line by line. A line that is not valid UTF-8
/// is skipped like any other malformed record.
pub fn parse_bytes<T: Record>(bytes: &[u8], capacity: usize) -> Loaded<T> {
    let mut loaded = Loaded::empty();

    for (index, raw) in bytes.split(|&b| b == b'\n').enumerate().skip(1) {
        let line = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

        let parsed = match std::str::from_utf8(raw) {
            Ok(text) if text.trim().is_empty() => continue,
            Ok(text) => T::parse_line(text, line),
            Err(err) => Err(GameError::MalformedRecord {
                line,
                reason: format!("not valid UTF-8 ({})", err),
            }),
        };

        match parsed {
            Ok(record) if loaded.records.len() < capacity => loaded.records.push(record),
            Ok(_) => loaded.truncated += 1,
            Err(err) => {
                warn!("skipping line: {}", err);
                loaded.skipped.push(line);
            }
        }
    }

    if loaded.truncated > 0 {
        warn!(
            "capacity of {} records reached, {} more dropped",
            capacity, loaded.truncated
        );
    }

    loaded
}

/// Read and parse a data file.
///
/// Returns `MissingResource` when the file cannot be read. Encoding
/// problems are per line and only skip that line.
pub fn load_file<T: Record>(path: &Path, capacity: usize) -> Result<Loaded<T>, GameError> {
    let bytes = std::fs::read(path).map_err(|err| {
        debug!("reading {}: {}", path.display(), err);
        GameError::MissingResource { path: path.to_path_buf() }
    })?;

    let loaded = parse_bytes(&bytes, capacity);
    debug!(
        "loaded {} records from {} ({} skipped)",
        loaded.records.len(),
        path.display(),
        loaded.skipped.len()
    );
    Ok(loaded)
}

/// Like `load_file`, but a missing file is logged and treated as empty.
pub fn load_or_empty<T: Record>(path: &Path, capacity: usize) -> Vec<T> {
    match load_file(path, capacity) {
        Ok(loaded) => loaded.records,
        Err(err) => {
            error!("{}; continuing without it", err);
            Vec::new()
        }
    }
}
