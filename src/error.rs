//! Errors reported by the transform entry points

use thiserror::Error;

/// Errors that can occur when transforming a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FftError {
    /// The signal has no samples.
    #[error("invalid input: cannot transform an empty signal")]
    InvalidInput,

    /// The signal cannot be padded in place and its length is not a power of two.
    #[error("signal length {len} is not a power of two")]
    NotPowerOfTwo {
        /// Length of the rejected signal
        len: usize,
    },
}
