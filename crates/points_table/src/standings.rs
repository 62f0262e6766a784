//! Standings calculation from match results

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::collation::NameCollator;
use crate::config::PointsConfig;
use crate::record::{MatchOutcome, MatchRecord};

/// One row of the points table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            ..Default::default()
        }
    }

    fn record_win(&mut self, points: u32) {
        self.won += 1;
        self.points += points;
    }

    fn record_loss(&mut self) {
        self.lost += 1;
    }

    fn record_tie(&mut self, points: u32) {
        self.tied += 1;
        self.points += points;
    }

    fn record_no_result(&mut self, points: u32) {
        self.no_result += 1;
        self.points += points;
    }
}

/// Folds match records into a sorted points table
#[derive(Debug, Clone, Default)]
pub struct StandingsCalculator {
    points: PointsConfig,
}

impl StandingsCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_points(points: PointsConfig) -> Self {
        Self { points }
    }

    /// Build the table for `matches`.
    ///
    /// Records are not validated. A win whose `winner` is not `team1`
    /// credits `team2`, even when `winner` names neither side.
    pub fn compute(&self, matches: &[MatchRecord]) -> Vec<TeamStanding> {
        if matches.is_empty() {
            return Vec::new();
        }

        let mut table: HashMap<String, TeamStanding> = HashMap::new();

        for record in matches {
            self.apply(&mut table, record);
        }

        let mut collator = NameCollator::new();
        let mut standings: Vec<TeamStanding> = table.into_values().collect();
        standings.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| collator.compare(&a.team, &b.team))
        });

        debug!(
            matches = matches.len(),
            teams = standings.len(),
            "Computed points table"
        );
        standings
    }

    /// Build the table from an untyped JSON value.
    ///
    /// Anything other than a non-empty array yields an empty table.
    pub fn compute_from_json(&self, value: &Value) -> Vec<TeamStanding> {
        let Some(entries) = value.as_array() else {
            debug!("Match input is not an array, returning empty table");
            return Vec::new();
        };

        let matches: Vec<MatchRecord> = entries.iter().map(MatchRecord::from_value).collect();
        self.compute(&matches)
    }

    fn apply(&self, table: &mut HashMap<String, TeamStanding>, record: &MatchRecord) {
        let team1 = record.team1.as_str();
        let team2 = record.team2.as_str();

        entry(table, team1).played += 1;
        entry(table, team2).played += 1;

        match record.result {
            MatchOutcome::Win => {
                let (winner, loser) = if record.winner.as_deref() == Some(team1) {
                    (team1, team2)
                } else {
                    (team2, team1)
                };
                trace!(winner = %winner, loser = %loser, "Win");
                entry(table, winner).record_win(self.points.win);
                entry(table, loser).record_loss();
            }
            MatchOutcome::Tie => {
                trace!(team1 = %team1, team2 = %team2, "Tie");
                entry(table, team1).record_tie(self.points.tie);
                entry(table, team2).record_tie(self.points.tie);
            }
            MatchOutcome::NoResult => {
                trace!(team1 = %team1, team2 = %team2, "No result");
                entry(table, team1).record_no_result(self.points.no_result);
                entry(table, team2).record_no_result(self.points.no_result);
            }
        }
    }
}

fn entry<'a>(table: &'a mut HashMap<String, TeamStanding>, team: &str) -> &'a mut TeamStanding {
    table
        .entry(team.to_string())
        .or_insert_with(|| TeamStanding::new(team))
}

/// Compute the points table with the default points scheme
pub fn compute_standings(matches: &[MatchRecord]) -> Vec<TeamStanding> {
    StandingsCalculator::new().compute(matches)
}

/// Compute the points table from an untyped JSON value with the default
/// points scheme
pub fn compute_from_json(value: &Value) -> Vec<TeamStanding> {
    StandingsCalculator::new().compute_from_json(value)
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
