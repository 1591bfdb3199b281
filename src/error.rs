//! Error types for seqmask

use thiserror::Error;

/// Result type alias for seqmask operations
pub type Result<T> = std::result::Result<T, SeqmaskError>;

/// Error types that can occur in seqmask
#[derive(Debug, Error)]
pub enum SeqmaskError {
    /// Invalid masking parameter (cutoff or window span out of range)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Sequence contains the reserved terminator symbol
    #[error("Alphabet violation at position {position}: sequence contains reserved terminator '{}'", *.symbol as char)]
    AlphabetViolation {
        /// Zero-based position of the offending symbol
        position: usize,
        /// The offending byte
        symbol: u8,
    },

    /// A transformed string that cannot be inverted (no terminator row)
    #[error("Invalid transform: {0}")]
    InvalidTransform(String),
}
