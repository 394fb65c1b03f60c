//! Table-driven Rijndael implementation shared by the CBC wrapper and CLI.
//!
//! Unlike AES, Rijndael lets the block size and the key size vary independently
//! between 128, 192 and 256 bits. This crate provides:
//! - Precomputed GF(2^8) tables (S-boxes, T-tables, round constants).
//! - The key schedule producing forward and inverse round keys.
//! - Single-block encryption and decryption for every block size.
//!
//! With a 16-byte block the cipher is AES and matches the FIPS-197 vectors.
//! Table lookups are data dependent; this crate is not side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod tables;

pub use crate::block::{xor_in_place, VALID_SIZES};
pub use crate::cipher::{Rijndael, DEFAULT_BLOCK_SIZE};
pub use crate::error::Error;
pub use crate::key::{expand_key, rounds_for, RoundKeys};
pub use crate::tables::{multiply, tables, Tables};
