//! Points awarded per match outcome

use serde::{Deserialize, Serialize};

use crate::error::TableResult;

/// Points for a win
pub const WIN_POINTS: u32 = 2;

/// Points for a tie
pub const TIE_POINTS: u32 = 1;

/// Points for an abandoned match
pub const NO_RESULT_POINTS: u32 = 1;

/// Points scheme used by the calculator. A loss is always worth zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointsConfig {
    pub win: u32,
    pub tie: u32,
    pub no_result: u32,
}

impl Default for PointsConfig {
    fn default() -> Self {
        Self {
            win: WIN_POINTS,
            tie: TIE_POINTS,
            no_result: NO_RESULT_POINTS,
        }
    }
}

impl PointsConfig {
    /// Decode from a TOML fragment such as `win = 4`. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(contents: &str) -> TableResult<Self> {
        Ok(toml::from_str(contents)?)
    }
}
