//! Rijndael key schedule.

use crate::block::{byte0, byte1, byte2, byte3, is_valid_size, load_words};
use crate::error::Error;
use crate::tables::tables;

/// Forward and inverse round keys, `rounds + 1` rows of `block_size / 4` words each.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundKeys {
    encrypt: Vec<Vec<u32>>,
    decrypt: Vec<Vec<u32>>,
}

impl RoundKeys {
    /// Number of full rounds (one less than the number of round keys).
    #[inline]
    pub fn rounds(&self) -> usize {
        self.encrypt.len() - 1
    }

    /// Encryption round key for `round` (0..=rounds).
    ///
    /// # Panics
    ///
    /// If `round` is greater than [`rounds`](Self::rounds).
    #[inline]
    pub fn encryption(&self, round: usize) -> &[u32] {
        &self.encrypt[round]
    }

    /// Decryption round key for `round` (0..=rounds), already in the order the inverse
    /// cipher consumes them.
    ///
    /// # Panics
    ///
    /// If `round` is greater than [`rounds`](Self::rounds).
    #[inline]
    pub fn decryption(&self, round: usize) -> &[u32] {
        &self.decrypt[round]
    }
}

/// Number of rounds for a block/key size pair, both in bytes.
pub fn rounds_for(block_size: usize, key_size: usize) -> usize {
    if block_size == 32 || key_size == 32 {
        14
    } else if block_size == 16 && key_size == 16 {
        10
    } else {
        12
    }
}

fn sub_word(word: u32) -> u32 {
    let s = &tables().s;
    u32::from_be_bytes([
        s[byte0(word)],
        s[byte1(word)],
        s[byte2(word)],
        s[byte3(word)],
    ])
}

fn inv_mix_word(word: u32) -> u32 {
    let u = &tables().u;
    u[0][byte0(word)] ^ u[1][byte1(word)] ^ u[2][byte2(word)] ^ u[3][byte3(word)]
}

/// Expands `key` into the round keys for a cipher with `block_size`-byte blocks.
pub fn expand_key(key: &[u8], block_size: usize) -> Result<RoundKeys, Error> {
    if !is_valid_size(block_size) {
        return Err(Error::InvalidBlockSize(block_size));
    }
    if !is_valid_size(key.len()) {
        return Err(Error::InvalidKeySize(key.len()));
    }

    let bc = block_size / 4;
    let kc = key.len() / 4;
    let rounds = rounds_for(block_size, key.len());
    let total = (rounds + 1) * bc;
    let rcon = &tables().rcon;

    let mut ke = vec![vec![0u32; bc]; rounds + 1];
    let mut kd = vec![vec![0u32; bc]; rounds + 1];
    let mut tk = load_words(key);

    // `t` counts words placed so far; decryption keys fill from the last round back.
    let mut t = 0;
    let mut place = |tk: &[u32], t: &mut usize| {
        for &word in tk.iter().take(total - *t) {
            ke[*t / bc][*t % bc] = word;
            kd[rounds - *t / bc][*t % bc] = word;
            *t += 1;
        }
    };

    place(&tk, &mut t);
    let mut rcon_idx = 0;
    while t < total {
        let last = tk[kc - 1];
        tk[0] ^= sub_word(last.rotate_left(8)) ^ (u32::from(rcon[rcon_idx]) << 24);
        rcon_idx += 1;
        if kc != 8 {
            for i in 1..kc {
                tk[i] ^= tk[i - 1];
            }
        } else {
            let half = kc / 2;
            for i in 1..half {
                tk[i] ^= tk[i - 1];
            }
            tk[half] ^= sub_word(tk[half - 1]);
            for i in half + 1..kc {
                tk[i] ^= tk[i - 1];
            }
        }
        place(&tk, &mut t);
    }

    for round in kd.iter_mut().take(rounds).skip(1) {
        for word in round.iter_mut() {
            *word = inv_mix_word(*word);
        }
    }

    Ok(RoundKeys {
        encrypt: ke,
        decrypt: kd,
    })
}
