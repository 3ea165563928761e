//! DNA strand utilities used by the task tiles.
//!
//! All functions are pure. Strands must be ASCII; comparisons are
//! byte-wise and case-sensitive, so positions and lengths agree across
//! every task.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a strand comparison is undefined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DnaError {
    #[error("strands must be non-empty")]
    Empty,
    #[error("strands must be the same length ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("target strand ({target}) is longer than input strand ({input})")]
    TargetTooLong { input: usize, target: usize },
    #[error("strands may only contain ASCII letters")]
    NotAscii,
}

fn bases(strand: &str) -> Result<&[u8], DnaError> {
    if strand.is_ascii() {
        Ok(strand.as_bytes())
    } else {
        Err(DnaError::NotAscii)
    }
}

/// Fraction of positions at which two equal-length strands agree.
///
/// ```
/// use genome_quest::dna::similarity;
///
/// assert_eq!(similarity("AAAA", "AAAT"), Ok(0.75));
/// assert!(similarity("AA", "AAA").is_err());
/// ```
pub fn similarity(a: &str, b: &str) -> Result<f64, DnaError> {
    let count = matching_bases(a, b)?;
    Ok(count as f64 / a.len() as f64)
}

/// Number of positions at which two equal-length strands agree.
pub fn matching_bases(a: &str, b: &str) -> Result<usize, DnaError> {
    if a.is_empty() || b.is_empty() {
        return Err(DnaError::Empty);
    }
    let (a, b) = (bases(a)?, bases(b)?);
    if a.len() != b.len() {
        return Err(DnaError::LengthMismatch { left: a.len(), right: b.len() });
    }

    Ok(matches(a, b))
}

/// Best placement of a target strand inside an input strand.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alignment {
    /// Offset into the input strand.
    pub index: usize,
    /// Fraction of target bases matched at that offset.
    pub score: f64,
}

/// Slide `target` along `input` and return the offset with the most
/// matching bases. Ties keep the earliest offset.
pub fn best_alignment(input: &str, target: &str) -> Result<Alignment, DnaError> {
    if input.is_empty() || target.is_empty() {
        return Err(DnaError::Empty);
    }
    let (input, target) = (bases(input)?, bases(target)?);
    if target.len() > input.len() {
        return Err(DnaError::TargetTooLong { input: input.len(), target: target.len() });
    }

    let mut best_index = 0;
    let mut best_matches = 0;
    for start in 0..=input.len() - target.len() {
        let count = matches(&input[start..start + target.len()], target);
        if count > best_matches {
            best_matches = count;
            best_index = start;
        }
    }

    Ok(Alignment {
        index: best_index,
        score: best_matches as f64 / target.len() as f64,
    })
}

/// A single difference between an input strand and a target strand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// Bases differ at the same position.
    Substitution { position: usize, expected: char, found: char },
    /// Input carries an extra base past the end of the target.
    Insertion { position: usize, base: char },
    /// Input is missing a base the target has.
    Deletion { position: usize, base: char },
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mutation::Substitution { position, expected, found } => {
                write!(f, "Substitution at position {}: {} -> {}", position, expected, found)
            }
            Mutation::Insertion { position, base } => {
                write!(f, "Insertion at position {}: extra base '{}' in input strand", position, base)
            }
            Mutation::Deletion { position, base } => {
                write!(f, "Deletion at position {}: missing base '{}' from input strand", position, base)
            }
        }
    }
}

/// Position-by-position diff of `input` against `target`.
///
/// Overlapping positions that differ are substitutions; the tail of the
/// longer strand is reported as insertions (input longer) or deletions
/// (target longer). Empty strands are allowed.
pub fn diff_report(input: &str, target: &str) -> Result<Vec<Mutation>, DnaError> {
    let (input, target) = (bases(input)?, bases(target)?);

    let mut report: Vec<Mutation> = input
        .iter()
        .zip(target)
        .enumerate()
        .filter(|(_, (found, expected))| found != expected)
        .map(|(position, (&found, &expected))| Mutation::Substitution {
            position,
            expected: expected as char,
            found: found as char,
        })
        .collect();

    let overlap = input.len().min(target.len());
    report.extend(
        input[overlap..]
            .iter()
            .enumerate()
            .map(|(i, &base)| Mutation::Insertion { position: overlap + i, base: base as char }),
    );
    report.extend(
        target[overlap..]
            .iter()
            .enumerate()
            .map(|(i, &base)| Mutation::Deletion { position: overlap + i, base: base as char }),
    );

    Ok(report)
}

/// DNA to RNA: every `T` becomes `U`.
///
/// ```
/// assert_eq!(genome_quest::dna::transcribe("GATTACA"), "GAUUACA");
/// ```
#[must_use]
pub fn transcribe(strand: &str) -> String {
    strand.replace('T', "U")
}

fn matches(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}
