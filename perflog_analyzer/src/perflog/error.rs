//!
//! Perflog reading error.
//!

use std::path::PathBuf;

use crate::perflog::record::error::Error as RecordError;

///
/// Perflog reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the log file.
    #[error("Reading perflog {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the log file.
        path: PathBuf,
    },
    /// A line of the log file is malformed.
    #[error("Parsing perflog {path:?} line {line}: {error}")]
    Malformed {
        /// The underlying record error.
        #[source]
        error: RecordError,
        /// The path to the log file.
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
    },
    /// The file search pattern is invalid.
    #[error("Invalid perflog search pattern `{pattern}`: {error}")]
    Pattern {
        /// The underlying pattern error.
        error: glob::PatternError,
        /// The offending pattern.
        pattern: String,
    },
}
