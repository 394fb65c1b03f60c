//! Table-driven Rijndael round transformations.
//!
//! The state is held as `block_size / 4` big-endian column words. Each full round
//! fuses SubBytes, ShiftRows and MixColumns into four T-table lookups per word; the
//! final round has no MixColumns and falls back to the plain S-box.

use crate::block::{byte0, byte1, byte2, byte3};

/// ShiftRows displacement for rows 1..=3, in columns.
pub type Shifts = [usize; 3];

/// Forward ShiftRows offsets for a state of `words` columns.
pub fn encrypt_shifts(words: usize) -> Shifts {
    match words {
        4 | 6 => [1, 2, 3],
        _ => [1, 3, 4],
    }
}

/// Inverse ShiftRows offsets for a state of `words` columns.
pub fn decrypt_shifts(words: usize) -> Shifts {
    match words {
        4 => [3, 2, 1],
        6 => [5, 4, 3],
        _ => [7, 5, 4],
    }
}

/// XORs the round key into the state words.
#[inline]
pub fn add_round_key(state: &mut [u32], round_key: &[u32]) {
    for (s, k) in state.iter_mut().zip(round_key.iter()) {
        *s ^= *k;
    }
}

/// One full round: `out[i]` combines column `i` with its shifted neighbours through
/// the four lookup tables, then adds the round key.
#[inline]
pub fn full_round(
    state: &[u32],
    out: &mut [u32],
    tables: &[[u32; 256]; 4],
    shifts: &Shifts,
    round_key: &[u32],
) {
    let w = state.len();
    let [s1, s2, s3] = *shifts;
    for (i, dst) in out.iter_mut().enumerate() {
        *dst = tables[0][byte0(state[i])]
            ^ tables[1][byte1(state[(i + s1) % w])]
            ^ tables[2][byte2(state[(i + s2) % w])]
            ^ tables[3][byte3(state[(i + s3) % w])]
            ^ round_key[i];
    }
}

/// Final round: byte substitution and shift only, written straight to bytes.
#[inline]
pub fn final_round(
    state: &[u32],
    out: &mut [u8],
    sbox: &[u8; 256],
    shifts: &Shifts,
    round_key: &[u32],
) {
    let w = state.len();
    let [s1, s2, s3] = *shifts;
    for (i, chunk) in out.chunks_exact_mut(4).enumerate() {
        let word = u32::from_be_bytes([
            sbox[byte0(state[i])],
            sbox[byte1(state[(i + s1) % w])],
            sbox[byte2(state[(i + s2) % w])],
            sbox[byte3(state[(i + s3) % w])],
        ]) ^ round_key[i];
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}
