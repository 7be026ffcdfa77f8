//! Error types for the coverage solver.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors raised by input validation, before any computation begins.
///
/// The solver never returns a partially computed result: every variant here
/// means the whole call was rejected.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoverageError {
    /// A grid, obliquity, limit, or tolerance parameter is out of contract.
    InvalidConfig(&'static str),
    /// The territory contains no anchor points.
    EmptyTerritory,
    /// An anchor point has a non-finite or out-of-range coordinate.
    InvalidPoint {
        /// Index of the offending point in the input slice.
        index: usize,
        /// Which constraint failed.
        reason: &'static str,
    },
}

impl Display for CoverageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::EmptyTerritory => {
                write!(f, "territory must contain at least one anchor point")
            }
            Self::InvalidPoint { index, reason } => {
                write!(f, "anchor point {index}: {reason}")
            }
        }
    }
}

impl Error for CoverageError {}
