//! Rijndael cipher instance and single-block encryption/decryption.

use crate::block::load_words;
use crate::error::Error;
use crate::key::{expand_key, RoundKeys};
use crate::round::{add_round_key, decrypt_shifts, encrypt_shifts, final_round, full_round};
use crate::tables::tables;

/// Block size used when none is given (AES).
pub const DEFAULT_BLOCK_SIZE: usize = 16;

/// A keyed Rijndael instance for one block size.
///
/// Round keys are derived once in [`Rijndael::new`] and never change, so an instance
/// can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rijndael {
    block_size: usize,
    round_keys: RoundKeys,
}

impl Rijndael {
    /// Builds a cipher for `block_size`-byte blocks. Both the key length and the block
    /// size must be 16, 24 or 32 bytes.
    pub fn new(key: &[u8], block_size: usize) -> Result<Self, Error> {
        let round_keys = expand_key(key, block_size)?;
        Ok(Self {
            block_size,
            round_keys,
        })
    }

    /// Builds a cipher with 16-byte blocks, i.e. AES with a 128/192/256-bit key.
    pub fn aes(key: &[u8]) -> Result<Self, Error> {
        Self::new(key, DEFAULT_BLOCK_SIZE)
    }

    /// Block size in bytes.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.round_keys.rounds()
    }

    /// Expanded round keys.
    #[inline]
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts exactly one block.
    pub fn encrypt(&self, block: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_len(block)?;
        let t = tables();
        let keys = &self.round_keys;
        let rounds = keys.rounds();
        let shifts = encrypt_shifts(self.block_size / 4);

        let mut state = load_words(block);
        add_round_key(&mut state, keys.encryption(0));
        let mut next = vec![0u32; state.len()];
        for round in 1..rounds {
            full_round(&state, &mut next, &t.te, &shifts, keys.encryption(round));
            core::mem::swap(&mut state, &mut next);
        }

        let mut out = vec![0u8; self.block_size];
        final_round(&state, &mut out, &t.s, &shifts, keys.encryption(rounds));
        Ok(out)
    }

    /// Decrypts exactly one block.
    pub fn decrypt(&self, block: &[u8]) -> Result<Vec<u8>, Error> {
        self.check_len(block)?;
        let t = tables();
        let keys = &self.round_keys;
        let rounds = keys.rounds();
        let shifts = decrypt_shifts(self.block_size / 4);

        let mut state = load_words(block);
        add_round_key(&mut state, keys.decryption(0));
        let mut next = vec![0u32; state.len()];
        for round in 1..rounds {
            full_round(&state, &mut next, &t.td, &shifts, keys.decryption(round));
            core::mem::swap(&mut state, &mut next);
        }

        let mut out = vec![0u8; self.block_size];
        final_round(&state, &mut out, &t.si, &shifts, keys.decryption(rounds));
        Ok(out)
    }

    fn check_len(&self, block: &[u8]) -> Result<(), Error> {
        if block.len() != self.block_size {
            return Err(Error::BlockLength {
                expected: self.block_size,
                actual: block.len(),
            });
        }
        Ok(())
    }
}
