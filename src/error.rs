//! Error type for the key schedule entry points.

use thiserror::Error;

/// Errors raised when constructing a key or expanding it from raw bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KeyScheduleError {
    /// The supplied key material is not exactly 16 bytes long.
    #[error("AES-128 key must be exactly 16 bytes, got {len}")]
    InvalidKeyLength {
        /// Length of the rejected input.
        len: usize,
    },
}
