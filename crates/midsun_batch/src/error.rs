//! Error types for the batch driver.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use midsun_report::ReportError;
use midsun_solver::CoverageError;
use midsun_territory::LoadError;

/// Errors from a batch run. Each variant is terminal for the run; no
/// per-territory skipping.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BatchError {
    /// A territory definition failed to load.
    Load(LoadError),
    /// The solver rejected a territory's points or the shared parameters.
    Coverage(CoverageError),
    /// A report or witness archive could not be written.
    Report(ReportError),
    /// Filesystem failure outside the writers (output dir, summary index).
    Io { path: PathBuf, message: String },
}

impl Display for BatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(e) => write!(f, "load error: {e}"),
            Self::Coverage(e) => write!(f, "coverage error: {e}"),
            Self::Report(e) => write!(f, "report error: {e}"),
            Self::Io { path, message } => {
                write!(f, "I/O error at {}: {message}", path.display())
            }
        }
    }
}

impl Error for BatchError {}

impl From<LoadError> for BatchError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<CoverageError> for BatchError {
    fn from(e: CoverageError) -> Self {
        Self::Coverage(e)
    }
}

impl From<ReportError> for BatchError {
    fn from(e: ReportError) -> Self {
        Self::Report(e)
    }
}
