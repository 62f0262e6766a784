//! Match records fed into the points table

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TableResult;

/// Outcome of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MatchOutcome {
    Win,
    Tie,
    /// Abandoned match. Also used for any unrecognised result string.
    NoResult,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "win",
            MatchOutcome::Tie => "tie",
            MatchOutcome::NoResult => "no_result",
        }
    }
}

impl From<&str> for MatchOutcome {
    fn from(s: &str) -> Self {
        match s {
            "win" => MatchOutcome::Win,
            "tie" => MatchOutcome::Tie,
            _ => MatchOutcome::NoResult,
        }
    }
}

impl From<String> for MatchOutcome {
    fn from(s: String) -> Self {
        MatchOutcome::from(s.as_str())
    }
}

impl From<MatchOutcome> for String {
    fn from(outcome: MatchOutcome) -> Self {
        outcome.as_str().to_string()
    }
}

/// A single match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1: String,
    pub team2: String,
    pub result: MatchOutcome,
    /// Only read when `result` is a win
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl MatchRecord {
    pub fn new(team1: &str, team2: &str, result: MatchOutcome, winner: Option<&str>) -> Self {
        Self {
            team1: team1.to_string(),
            team2: team2.to_string(),
            result,
            winner: winner.map(str::to_string),
        }
    }

    pub fn win(team1: &str, team2: &str, winner: &str) -> Self {
        Self::new(team1, team2, MatchOutcome::Win, Some(winner))
    }

    pub fn tie(team1: &str, team2: &str) -> Self {
        Self::new(team1, team2, MatchOutcome::Tie, None)
    }

    pub fn no_result(team1: &str, team2: &str) -> Self {
        Self::new(team1, team2, MatchOutcome::NoResult, None)
    }

    /// Decode a record without validating its shape.
    ///
    /// Team ids and the winner are read as text, so numeric or
    /// boolean ids keep distinct rows. A missing team field reads as `""`,
    /// a missing or non-string result reads as no result, and a non-object
    /// value reads as a record with every field missing.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name);

        Self {
            team1: field("team1").map(id_text).unwrap_or_default(),
            team2: field("team2").map(id_text).unwrap_or_default(),
            result: field("result")
                .and_then(Value::as_str)
                .map(MatchOutcome::from)
                .unwrap_or(MatchOutcome::NoResult),
            winner: field("winner").map(id_text),
        }
    }
}

/// Text form of an id value: strings as-is, anything else as its JSON text
fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Strictly decode a JSON array of match records
pub fn parse_matches(json: &str) -> TableResult<Vec<MatchRecord>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
