//!
//! Spack invocation error.
//!

use std::path::PathBuf;

///
/// Spack invocation error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The subprocess could not be spawned.
    #[error("`{command}` subprocess spawning error: {error}")]
    Launch {
        /// The command line.
        command: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The subprocess exited with a failure.
    #[error("`{command}` failed: {stderr}")]
    Failed {
        /// The command line.
        command: String,
        /// The standard error output.
        stderr: String,
    },
    /// A Spack environment could not be created or configured.
    #[error("Creation of the Spack environment {path:?} failed: {stderr}")]
    EnvironmentCreation {
        /// The environment directory.
        path: PathBuf,
        /// The standard error output.
        stderr: String,
    },
    /// A spec has no installation prefix.
    #[error("Spack did not report an installation prefix of `{spec}`")]
    LocationMissing {
        /// The package spec.
        spec: String,
    },
}
