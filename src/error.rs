//! Error types for the IDEA cipher library.

use std::fmt;

/// Errors produced by the IDEA cipher library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaError {
    /// Primary key is not exactly 16 bytes (128 bits).
    InvalidKeyLength,
    /// Ciphertext length is not a positive multiple of the 8-byte block size.
    InvalidCiphertextLength,
    /// Recovered padding marker is outside the valid 1..=8 range.
    CorruptPadding,
}

impl fmt::Display for IdeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdeaError::InvalidKeyLength => {
                write!(f, "Primary key must be exactly 16 bytes (128 bits)")
            }
            IdeaError::InvalidCiphertextLength => {
                write!(
                    f,
                    "Ciphertext length must be a positive multiple of 8 bytes"
                )
            }
            IdeaError::CorruptPadding => {
                write!(
                    f,
                    "Padding marker is outside the valid 1..=8 range (wrong key or corrupted data)"
                )
            }
        }
    }
}

impl std::error::Error for IdeaError {}
