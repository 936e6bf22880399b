//!
//! Resource resolution error.
//!

///
/// Resource resolution error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No cores were requested.
    #[error("The total number of cores must be positive")]
    ZeroCores,
    /// No OpenMP threads were requested.
    #[error("The number of OpenMP threads must be positive")]
    ZeroThreads,
}
