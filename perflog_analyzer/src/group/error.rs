//!
//! Log file group error.
//!

use std::path::PathBuf;

///
/// Log file group error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A group member does not carry the plotted metric.
    #[error("Perflog {path:?} has no values of metric `{metric}`")]
    MetricMissing {
        /// The member path.
        path: PathBuf,
        /// The requested metric.
        metric: String,
    },
    /// A group member does not reveal its core count.
    #[error("Perflog {path:?} has no `num_total_cores` field nor a numeric test name suffix")]
    CoreCountMissing {
        /// The member path.
        path: PathBuf,
    },
}
