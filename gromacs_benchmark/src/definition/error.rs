//!
//! The benchmark definition error.
//!

///
/// The benchmark definition error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern is not a valid regular expression.
    #[error("Invalid pattern `{pattern}`: {error}")]
    Pattern {
        /// The pattern.
        pattern: String,
        /// The underlying regex error.
        error: regex::Error,
    },
    /// A performance variable was not found in the output.
    #[error("Performance variable `{variable}` not found in the {stream}")]
    PerformanceMissing {
        /// The variable name.
        variable: String,
        /// The searched stream.
        stream: String,
    },
    /// A performance variable is not numeric.
    #[error("Performance variable `{variable}` has a non-numeric value `{raw}`")]
    NonNumeric {
        /// The variable name.
        variable: String,
        /// The raw value.
        raw: String,
    },
    /// The time limit is malformed.
    #[error("Invalid time limit `{raw}`, expected e.g. `30m`, `2h`, or `90s`")]
    TimeLimit {
        /// The raw value.
        raw: String,
    },
}
