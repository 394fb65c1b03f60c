//! Padding schemes for whole-message CBC.

use crate::error::PaddingError;

/// Pads messages to a whole number of blocks and removes that padding again.
pub trait Padding {
    /// Block size the padding aligns to, in bytes.
    fn block_size(&self) -> usize;

    /// Returns `data` extended to a multiple of the block size.
    fn encode(&self, data: &[u8]) -> Vec<u8>;

    /// Strips the padding added by [`Padding::encode`].
    fn decode(&self, padded: &[u8]) -> Result<Vec<u8>, PaddingError>;
}

impl<P: Padding + ?Sized> Padding for &P {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encode(&self, data: &[u8]) -> Vec<u8> {
        (**self).encode(data)
    }

    fn decode(&self, padded: &[u8]) -> Result<Vec<u8>, PaddingError> {
        (**self).decode(padded)
    }
}

impl<P: Padding + ?Sized> Padding for Box<P> {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encode(&self, data: &[u8]) -> Vec<u8> {
        (**self).encode(data)
    }

    fn decode(&self, padded: &[u8]) -> Result<Vec<u8>, PaddingError> {
        (**self).decode(padded)
    }
}

/// PKCS#7: append `n` bytes of value `n`, adding a full block when already aligned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pkcs7Padding {
    block_size: usize,
}

impl Pkcs7Padding {
    /// Padding for `block_size`-byte blocks.
    ///
    /// # Panics
    ///
    /// If `block_size` is 0 or larger than 255.
    pub fn new(block_size: usize) -> Self {
        assert!(
            (1..=255).contains(&block_size),
            "PKCS#7 block size must be in 1..=255"
        );
        Self { block_size }
    }
}

impl Padding for Pkcs7Padding {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn encode(&self, data: &[u8]) -> Vec<u8> {
        let pad = self.block_size - data.len() % self.block_size;
        let mut out = Vec::with_capacity(data.len() + pad);
        out.extend_from_slice(data);
        out.resize(data.len() + pad, pad as u8);
        out
    }

    fn decode(&self, padded: &[u8]) -> Result<Vec<u8>, PaddingError> {
        if padded.is_empty() || padded.len() % self.block_size != 0 {
            return Err(PaddingError::Length {
                len: padded.len(),
                block_size: self.block_size,
            });
        }
        let pad = padded[padded.len() - 1] as usize;
        if pad == 0 || pad > self.block_size {
            return Err(PaddingError::Malformed);
        }
        let (body, tail) = padded.split_at(padded.len() - pad);
        if tail.iter().any(|&b| b as usize != pad) {
            return Err(PaddingError::Malformed);
        }
        Ok(body.to_vec())
    }
}

/// Zero fill up to the next block boundary; aligned input is left as is.
///
/// Decoding strips trailing zeros from the last block only, and never more than
/// `block_size - 1` of them, so messages that themselves end in zero bytes do not
/// survive a round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZeroPadding {
    block_size: usize,
}

impl ZeroPadding {
    /// Padding for `block_size`-byte blocks.
    ///
    /// # Panics
    ///
    /// If `block_size` is 0.
    pub fn new(block_size: usize) -> Self {
        assert!(block_size > 0, "zero padding block size must be positive");
        Self { block_size }
    }
}

impl Padding for ZeroPadding {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn encode(&self, data: &[u8]) -> Vec<u8> {
        let rem = data.len() % self.block_size;
        let pad = if rem == 0 { 0 } else { self.block_size - rem };
        let mut out = Vec::with_capacity(data.len() + pad);
        out.extend_from_slice(data);
        out.resize(data.len() + pad, 0);
        out
    }

    fn decode(&self, padded: &[u8]) -> Result<Vec<u8>, PaddingError> {
        if padded.len() % self.block_size != 0 {
            return Err(PaddingError::Length {
                len: padded.len(),
                block_size: self.block_size,
            });
        }
        if padded.is_empty() {
            return Ok(Vec::new());
        }
        let floor = padded.len() - self.block_size + 1;
        let mut end = padded.len();
        while end > floor && padded[end - 1] == 0 {
            end -= 1;
        }
        Ok(padded[..end].to_vec())
    }
}
