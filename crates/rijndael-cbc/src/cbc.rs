//! CBC chaining over whole messages.

use rijndael_core::{xor_in_place, Error as CipherError, Rijndael};

use crate::error::CbcError;
use crate::padding::Padding;

/// Rijndael in CBC mode with a fixed IV and a padding scheme.
///
/// The IV is stored once and every [`encrypt`](Self::encrypt) and
/// [`decrypt`](Self::decrypt) call chains from it afresh; it is never advanced.
/// Each call must therefore be one complete, independent message. Encrypting several
/// related messages under the same key and IV leaks equality of their common
/// prefixes; callers that need that must construct a new instance with a fresh IV.
#[derive(Clone, Debug)]
pub struct RijndaelCbc<P> {
    cipher: Rijndael,
    iv: Vec<u8>,
    padding: P,
}

impl<P: Padding> RijndaelCbc<P> {
    /// Builds the block cipher from `key` and wraps it. `padding` must align to
    /// `block_size`.
    pub fn new(key: &[u8], iv: &[u8], padding: P, block_size: usize) -> Result<Self, CbcError> {
        let cipher = Rijndael::new(key, block_size)?;
        Self::from_cipher(cipher, iv, padding)
    }

    /// Wraps an existing cipher. `iv` must be exactly one block long and `padding`
    /// must use the cipher's block size.
    pub fn from_cipher(cipher: Rijndael, iv: &[u8], padding: P) -> Result<Self, CbcError> {
        if iv.len() != cipher.block_size() {
            return Err(CbcError::IvLength {
                expected: cipher.block_size(),
                actual: iv.len(),
            });
        }
        if padding.block_size() != cipher.block_size() {
            return Err(CbcError::PaddingBlockSize {
                expected: cipher.block_size(),
                actual: padding.block_size(),
            });
        }
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
            padding,
        })
    }

    /// Underlying block cipher.
    pub fn cipher(&self) -> &Rijndael {
        &self.cipher
    }

    /// The IV every call starts from.
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Block size in bytes.
    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    /// Pads and encrypts `plaintext`. The output is a whole number of blocks.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CbcError> {
        let padded = self.padding.encode(plaintext);
        let bs = self.block_size();
        let mut out = Vec::with_capacity(padded.len());
        let mut chain = self.iv.clone();
        for chunk in padded.chunks(bs) {
            // A padding whose output is not block aligned is a broken collaborator.
            if chunk.len() != bs {
                return Err(CipherError::BlockLength {
                    expected: bs,
                    actual: chunk.len(),
                }
                .into());
            }
            xor_in_place(&mut chain, chunk);
            chain = self.cipher.encrypt(&chain)?;
            out.extend_from_slice(&chain);
        }
        Ok(out)
    }

    /// Decrypts `ciphertext` and strips the padding.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CbcError> {
        let bs = self.block_size();
        if ciphertext.len() % bs != 0 {
            return Err(CbcError::UnalignedCiphertext {
                len: ciphertext.len(),
                block_size: bs,
            });
        }
        let mut padded = Vec::with_capacity(ciphertext.len());
        let mut chain: &[u8] = &self.iv;
        for block in ciphertext.chunks_exact(bs) {
            let mut plain = self.cipher.decrypt(block)?;
            xor_in_place(&mut plain, chain);
            padded.extend_from_slice(&plain);
            chain = block;
        }
        Ok(self.padding.decode(&padded)?)
    }
}
