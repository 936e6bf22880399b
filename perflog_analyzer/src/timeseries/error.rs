//!
//! Time series error.
//!

use std::path::PathBuf;

///
/// Time series error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The first value of a series is zero, so relative values are undefined.
    #[error("Series cannot be normalized against a zero first value")]
    ZeroBaseline,
    /// The log file has no values of the requested metric.
    #[error("Perflog {path:?} has no values of metric `{metric}`")]
    MetricMissing {
        /// The log file path.
        path: PathBuf,
        /// The requested metric.
        metric: String,
    },
    /// Smoothing was requested with zero bins.
    #[error("The number of smoothing bins must be positive")]
    ZeroBins,
    /// Block averaging was requested with zero-sized blocks.
    #[error("The block size must be positive")]
    ZeroBlockSize,
    /// The cache file cannot be read.
    #[error("Time series cache {path:?} reading: {error}")]
    CacheReading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The cache path.
        path: PathBuf,
    },
    /// The cache file cannot be written.
    #[error("Time series cache {path:?} writing: {error}")]
    CacheWriting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The cache path.
        path: PathBuf,
    },
    /// A cache line lacks the `:` or `|` separator.
    #[error("Time series cache line {line}: expected `name:x,...|y,...`")]
    CacheSeparator {
        /// The 1-based line number.
        line: usize,
    },
    /// A cache line holds a non-numeric coordinate.
    #[error("Time series cache line {line}: invalid number `{raw}`")]
    CacheValue {
        /// The 1-based line number.
        line: usize,
        /// The raw coordinate.
        raw: String,
    },
    /// A cache line holds coordinate lists of different lengths.
    #[error("Time series cache line {line}: series `{name}` has {x} x values and {y} y values")]
    CacheLength {
        /// The 1-based line number.
        line: usize,
        /// The series name.
        name: String,
        /// The number of x values.
        x: usize,
        /// The number of y values.
        y: usize,
    },
}
