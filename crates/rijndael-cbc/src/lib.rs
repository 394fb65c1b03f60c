//! Cipher Block Chaining over [`rijndael_core::Rijndael`].
//!
//! Padding is supplied by the caller through the [`Padding`] trait; PKCS#7 and zero
//! padding are provided.
//!
//! Ciphertexts are not authenticated, and every call starts from the same IV. See
//! [`RijndaelCbc`] for what that means for callers.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cbc;
mod error;
mod padding;

pub use crate::cbc::RijndaelCbc;
pub use crate::error::{CbcError, PaddingError};
pub use crate::padding::{Padding, Pkcs7Padding, ZeroPadding};
pub use rijndael_core::{Error as CipherError, Rijndael, VALID_SIZES};
