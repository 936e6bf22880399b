//!
//! HTML injection error.
//!

use std::path::PathBuf;

///
/// HTML injection error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The template does not exist.
    #[error("Cannot create a file from {path:?}: it does not exist")]
    TemplateMissing {
        /// The template path.
        path: PathBuf,
    },
    /// The current page cannot be read.
    #[error("HTML file {path:?} reading: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The page path.
        path: PathBuf,
    },
    /// The output page cannot be written.
    #[error("HTML file {path:?} writing: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The page path.
        path: PathBuf,
    },
    /// The page has no `</body>` line.
    #[error("HTML file {path:?} has no `</body>` line")]
    BodyEndNotFound {
        /// The page path.
        path: PathBuf,
    },
    /// The page has no line holding only the anchor.
    #[error("Replacement failed: failed to find {index} in {template:?}")]
    AnchorNotFound {
        /// The numbered anchor.
        index: usize,
        /// The template path.
        template: PathBuf,
    },
}
