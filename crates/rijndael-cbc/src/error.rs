//! Error types for padding and chaining.

use core::fmt;

use rijndael_core::Error as CipherError;

/// Padded data could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaddingError {
    /// Input length is not a positive multiple of the block size.
    Length {
        /// Length of the rejected input.
        len: usize,
        /// Block size the padding was configured for.
        block_size: usize,
    },
    /// The trailing pad bytes are inconsistent.
    Malformed,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaddingError::Length { len, block_size } => write!(
                f,
                "padded length {len} is not a multiple of the {block_size}-byte block"
            ),
            PaddingError::Malformed => f.write_str("malformed padding"),
        }
    }
}

impl std::error::Error for PaddingError {}

/// Failures of CBC construction, encryption or decryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbcError {
    /// Key or block size rejected by the block cipher, or a wrongly sized block.
    Cipher(CipherError),
    /// The IV must be exactly one block long.
    IvLength {
        /// Block size of the cipher.
        expected: usize,
        /// Length of the supplied IV.
        actual: usize,
    },
    /// The padding aligns to a different block size than the cipher.
    PaddingBlockSize {
        /// Block size of the cipher.
        expected: usize,
        /// Block size of the padding.
        actual: usize,
    },
    /// Ciphertext length is not a multiple of the block size.
    UnalignedCiphertext {
        /// Length of the rejected ciphertext.
        len: usize,
        /// Block size of the cipher.
        block_size: usize,
    },
    /// The padding collaborator rejected the decrypted data.
    Padding(PaddingError),
}

impl fmt::Display for CbcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CbcError::Cipher(err) => write!(f, "cipher error: {err}"),
            CbcError::IvLength { expected, actual } => {
                write!(f, "IV must be {expected} bytes, got {actual}")
            }
            CbcError::PaddingBlockSize { expected, actual } => write!(
                f,
                "padding block size {actual} does not match the {expected}-byte cipher block"
            ),
            CbcError::UnalignedCiphertext { len, block_size } => write!(
                f,
                "ciphertext length {len} is not a multiple of the {block_size}-byte block"
            ),
            CbcError::Padding(err) => write!(f, "padding error: {err}"),
        }
    }
}

impl std::error::Error for CbcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CbcError::Cipher(err) => Some(err),
            CbcError::Padding(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CipherError> for CbcError {
    fn from(err: CipherError) -> Self {
        CbcError::Cipher(err)
    }
}

impl From<PaddingError> for CbcError {
    fn from(err: PaddingError) -> Self {
        CbcError::Padding(err)
    }
}
