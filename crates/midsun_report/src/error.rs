//! Error types for report and archive writers.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors from writing a report or reading/writing a witness archive.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ReportError {
    /// Filesystem failure.
    Io { path: PathBuf, message: String },
    /// A witness archive could not be parsed.
    Json { path: PathBuf, message: String },
}

impl Display for ReportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "I/O error at {}: {message}", path.display())
            }
            Self::Json { path, message } => {
                write!(f, "invalid witness archive {}: {message}", path.display())
            }
        }
    }
}

impl Error for ReportError {}
