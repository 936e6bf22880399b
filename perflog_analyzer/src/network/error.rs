//!
//! Network construction error.
//!

use std::path::PathBuf;

///
/// Network construction error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configured cluster has no perflog directory.
    #[error("Failed to find a directory for cluster `{cluster}`: {path:?}")]
    ClusterDirectoryMissing {
        /// The cluster name.
        cluster: String,
        /// The expected directory.
        path: PathBuf,
    },
    /// A perflog directory cannot be listed.
    #[error("Directory {path:?} reading: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The directory path.
        path: PathBuf,
    },
    /// The network file cannot be written.
    #[error("Network file {path:?} writing: {error}")]
    Writing {
        /// The underlying IO error.
        error: std::io::Error,
        /// The output path.
        path: PathBuf,
    },
}
