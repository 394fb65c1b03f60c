//! Errors raised by cipher construction and block processing.

use core::fmt;

/// Failure modes of the block cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Key length (in bytes) is not 16, 24 or 32.
    InvalidKeySize(usize),
    /// Block size (in bytes) is not 16, 24 or 32.
    InvalidBlockSize(usize),
    /// A block passed to `encrypt`/`decrypt` does not match the cipher's block size.
    BlockLength {
        /// Block size the cipher was built for.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize(len) => {
                write!(f, "invalid key size: {len} bytes (expected 16, 24 or 32)")
            }
            Error::InvalidBlockSize(len) => {
                write!(f, "invalid block size: {len} bytes (expected 16, 24 or 32)")
            }
            Error::BlockLength { expected, actual } => {
                write!(f, "wrong block length: expected {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for Error {}
