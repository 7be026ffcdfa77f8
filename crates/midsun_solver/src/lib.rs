//! Worst-case Sun coverage solver.
//!
//! Answers one question for a territory described by geographic anchor
//! points: does at least one anchor always have the Sun at or above a
//! configurable visibility altitude, for every physically achievable Sun
//! direction (declination bounded by the obliquity, hour angle over the full
//! day)?
//!
//! This crate provides:
//! - The brute-force declination × hour-angle grid search
//! - The max-over-points / min-over-grid reduction and its tie-break rules
//! - The witness record explaining the verdict (worst-case cell, margin,
//!   best anchors)

pub mod error;
pub mod solver;
pub mod types;

pub use error::CoverageError;
pub use solver::check_never_sets;
pub use types::{CoverageConfig, CoverageResult, Witness};
