//! Error types for territory loading.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Errors from reading or parsing a territory definition file.
///
/// Structural problems in a definition are a loader concern, kept fully
/// separate from the solver's numeric input validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LoadError {
    /// The file could not be read.
    Io {
        /// Offending file (or directory, for listing failures).
        path: PathBuf,
        message: String,
    },
    /// The file is not valid JSON.
    Json { path: PathBuf, message: String },
    /// The JSON is well-formed but violates the territory schema.
    Schema { path: PathBuf, message: String },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, message } => {
                write!(f, "failed to read {}: {message}", path.display())
            }
            Self::Json { path, message } => {
                write!(f, "invalid JSON in {}: {message}", path.display())
            }
            Self::Schema { path, message } => {
                write!(
                    f,
                    "invalid territory definition in {}: {message}",
                    path.display()
                )
            }
        }
    }
}

impl Error for LoadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_file() {
        let e = LoadError::Schema {
            path: PathBuf::from("data/france.json"),
            message: "missing required field 'id'".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("france.json"), "got: {msg}");
        assert!(msg.contains("'id'"), "got: {msg}");
    }
}
