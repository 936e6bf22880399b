//!
//! Perflog record parsing error.
//!

///
/// Perflog record parsing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The line has no fields at all.
    #[error("Empty record")]
    Empty,
    /// The leading timestamp field cannot be parsed.
    #[error("Invalid timestamp `{raw}`: {error}")]
    Timestamp {
        /// The raw timestamp field.
        raw: String,
        /// The underlying parsing error.
        error: chrono::ParseError,
    },
    /// No `metric=value` field was found at the expected position.
    #[error("No `metric=value` field found in `{line}`")]
    MetricNotFound {
        /// The offending line.
        line: String,
    },
    /// The metric at the expected position is not the requested one.
    #[error("Expected metric `{expected}`, found `{found}`")]
    MetricMismatch {
        /// The requested metric name.
        expected: String,
        /// The metric name found in the record.
        found: String,
    },
    /// The units field following the metric is absent.
    #[error("Metric `{metric}` has no units field")]
    MissingUnits {
        /// The metric name.
        metric: String,
    },
    /// The metric value is not a number.
    #[error("Metric `{metric}` has a non-numeric value `{raw}`")]
    NonNumericValue {
        /// The metric name.
        metric: String,
        /// The raw value.
        raw: String,
    },
}
