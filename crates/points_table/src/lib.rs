//! Points table for round-robin tournaments
//!
//! This crate provides:
//! - Match record types, with loose decoding from JSON values
//! - A standings calculator that folds match results into per-team rows
//! - Plain-text rendering of the resulting table
//!
//! # Usage
//!
//! ```
//! use points_table::{compute_standings, MatchRecord};
//!
//! let matches = vec![
//!     MatchRecord::win("CSK", "MI", "CSK"),
//!     MatchRecord::tie("RCB", "CSK"),
//! ];
//! let table = compute_standings(&matches);
//! assert_eq!(table[0].team, "CSK");
//! assert_eq!(table[0].points, 3);
//! ```

mod collation;
mod config;
mod error;
mod record;
mod report;
mod standings;

pub use collation::*;
pub use config::*;
pub use error::*;
pub use record::*;
pub use report::*;
pub use standings::*;
