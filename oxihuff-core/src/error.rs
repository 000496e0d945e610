//! Error types for OxiHuff operations.
//!
//! This module provides a single error type that covers every failure the
//! codec can report: ordered-sequence misuse, malformed headers and bodies,
//! and I/O errors from the collaborators that supply or persist byte streams.

use std::io;
use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Error)]
pub enum OxiHuffError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Index beyond the bounds of an ordered sequence.
    #[error("Index out of range: {index} (length {len})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Current number of elements.
        len: usize,
    },

    /// Value absent from an ordered sequence.
    #[error("Value not found")]
    NotFound,

    /// Frequency header could not be parsed.
    #[error("Malformed header: {message}")]
    MalformedHeader {
        /// Description of the header error.
        message: String,
    },

    /// Encoded body could not be decoded against the rebuilt tree.
    #[error("Malformed body at symbol {position}: {message}")]
    MalformedBody {
        /// Symbol (bit) position where decoding failed.
        position: u64,
        /// Description of the body error.
        message: String,
    },

    /// Decoding the freshly encoded stream did not reproduce the input.
    #[error("Round-trip verification failed at byte {offset}")]
    VerificationFailed {
        /// First byte offset where the decoded output differs.
        offset: u64,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, OxiHuffError>;

impl OxiHuffError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create a malformed header error.
    pub fn malformed_header(message: impl Into<String>) -> Self {
        Self::MalformedHeader {
            message: message.into(),
        }
    }

    /// Create a malformed body error.
    pub fn malformed_body(position: u64, message: impl Into<String>) -> Self {
        Self::MalformedBody {
            position,
            message: message.into(),
        }
    }

    /// Create a verification failure error.
    pub fn verification_failed(offset: u64) -> Self {
        Self::VerificationFailed { offset }
    }
}
