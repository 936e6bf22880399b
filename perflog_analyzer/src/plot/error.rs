//!
//! Plot construction error.
//!

use std::path::PathBuf;

///
/// Plot construction error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No log files matched the plot pattern.
    #[error("Plot `{id}` has no data: no perflogs matched")]
    NoData {
        /// The plot identifier.
        id: String,
    },
    /// A log file lacks the plotted metric.
    #[error("Perflog {path:?} has no values of metric `{metric}`")]
    MetricMissing {
        /// The log file path.
        path: PathBuf,
        /// The plotted metric.
        metric: String,
    },
    /// Group series extraction failed.
    #[error(transparent)]
    Group(#[from] crate::group::error::Error),
    /// Time series processing failed.
    #[error(transparent)]
    TimeSeries(#[from] crate::timeseries::error::Error),
}
