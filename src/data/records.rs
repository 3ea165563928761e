//! Record types read from the pipe-delimited data files.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, PathType, PlayerState};

/// A record that can be parsed from one line of a data file.
pub trait Record: Sized {
    /// Parse a single line. `line` is the 1-based line number for errors.
    fn parse_line(text: &str, line: usize) -> Result<Self, GameError>;
}

/// A selectable scientist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    pub experience: i64,
    pub accuracy: i64,
    pub efficiency: i64,
    pub insight: i64,
    pub discover_points: i64,
}

impl CharacterRecord {
    pub fn new(
        name: impl Into<String>,
        experience: i64,
        accuracy: i64,
        efficiency: i64,
        insight: i64,
        discover_points: i64,
    ) -> Self {
        Self {
            name: name.into(),
            experience,
            accuracy,
            efficiency,
            insight,
            discover_points,
        }
    }

    /// Start a player from this character. The path is chosen later.
    #[must_use]
    pub fn to_player(&self) -> PlayerState {
        PlayerState::new(self.name.clone()).with_stats(
            self.experience,
            self.accuracy,
            self.efficiency,
            self.insight,
            self.discover_points,
        )
    }
}

impl Record for CharacterRecord {
    fn parse_line(text: &str, line: usize) -> Result<Self, GameError> {
        let fields = split_fields(text, 6, line)?;
        Ok(Self {
            name: fields[0].to_string(),
            experience: parse_int(fields[1], "experience", line)?,
            accuracy: parse_int(fields[2], "accuracy", line)?,
            efficiency: parse_int(fields[3], "efficiency", line)?,
            insight: parse_int(fields[4], "insight", line)?,
            discover_points: parse_int(fields[5], "discover points", line)?,
        })
    }
}

/// A random event fired from a Regular tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomEvent {
    pub description: String,
    pub path_type: Option<PathType>,
    pub advisor_type: i64,
    /// Signed change to Discover Points.
    pub discover_point_delta: i64,
}

impl RandomEvent {
    pub fn new(description: impl Into<String>, discover_point_delta: i64) -> Self {
        Self {
            description: description.into(),
            path_type: None,
            advisor_type: 0,
            discover_point_delta,
        }
    }
}

impl Record for RandomEvent {
    fn parse_line(text: &str, line: usize) -> Result<Self, GameError> {
        let fields = split_fields(text, 4, line)?;
        let path_code = parse_int(fields[1], "path type", line)?;
        Ok(Self {
            description: fields[0].to_string(),
            // Codes other than 0/1 mean the event applies to any path.
            path_type: PathType::from_code(path_code),
            advisor_type: parse_int(fields[2], "advisor type", line)?,
            discover_point_delta: parse_int(fields[3], "discover point delta", line)?,
        })
    }
}

/// A riddle shown on a purple tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Riddle {
    pub question: String,
    pub answer: String,
}

impl Riddle {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

impl Record for Riddle {
    fn parse_line(text: &str, line: usize) -> Result<Self, GameError> {
        // Answers may themselves contain '|'.
        let (question, answer) = text.split_once('|').ok_or_else(|| GameError::MalformedRecord {
            line,
            reason: "expected question|answer".to_string(),
        })?;
        Ok(Self::new(question, answer))
    }
}

fn split_fields(text: &str, expected: usize, line: usize) -> Result<Vec<&str>, GameError> {
    let fields: Vec<&str> = text.split('|').collect();
    if fields.len() != expected {
        return Err(GameError::MalformedRecord {
            line,
            reason: format!("expected {} fields, found {}", expected, fields.len()),
        });
    }
    Ok(fields)
}

fn parse_int(field: &str, name: &str, line: usize) -> Result<i64, GameError> {
    field.trim().parse().map_err(|_| GameError::MalformedRecord {
        line,
        reason: format!("{} is not a number: {:?}", name, field),
    })
}
