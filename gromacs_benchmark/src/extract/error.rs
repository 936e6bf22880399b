//!
//! The output extraction error.
//!

///
/// The output extraction error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `time` output is malformed.
    #[error("Invalid `time` output `{raw}`")]
    Time {
        /// The raw text.
        raw: String,
    },
    /// The OSU output has no header line.
    #[error("No OSU test header found")]
    OsuHeaderMissing,
    /// The OSU output starts with something other than a header.
    #[error("Unexpected non-blank, non-header line `{line}`")]
    OsuUnexpectedLine {
        /// The offending line.
        line: String,
    },
    /// The OSU test is not known.
    #[error("Do not know how to parse the output of `{title}`")]
    OsuUnknownTest {
        /// The test title.
        title: String,
    },
    /// An OSU data row is malformed.
    #[error("OSU data row `{line}` has {found} numeric columns, expected {expected}")]
    OsuRow {
        /// The offending line.
        line: String,
        /// The number of columns found.
        found: usize,
        /// The number of columns expected.
        expected: usize,
    },
}
