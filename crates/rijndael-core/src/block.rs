//! Block and word helpers.

/// Block and key sizes accepted by Rijndael, in bytes.
pub const VALID_SIZES: [usize; 3] = [16, 24, 32];

/// XORs `rhs` into `dst` byte by byte; the shorter slice bounds the operation.
#[inline]
pub fn xor_in_place(dst: &mut [u8], rhs: &[u8]) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Returns true if `size` is one of the sizes in [`VALID_SIZES`].
#[inline]
pub(crate) fn is_valid_size(size: usize) -> bool {
    VALID_SIZES.contains(&size)
}

/// Packs `bytes` into big-endian 32-bit words.
pub(crate) fn load_words(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

#[inline]
pub(crate) const fn byte0(word: u32) -> usize {
    (word >> 24) as usize
}

#[inline]
pub(crate) const fn byte1(word: u32) -> usize {
    ((word >> 16) & 0xff) as usize
}

#[inline]
pub(crate) const fn byte2(word: u32) -> usize {
    ((word >> 8) & 0xff) as usize
}

#[inline]
pub(crate) const fn byte3(word: u32) -> usize {
    (word & 0xff) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_words_is_big_endian() {
        let words = load_words(&[0x01, 0x02, 0x03, 0x04, 0xaa, 0xbb, 0xcc, 0xdd]);
        assert_eq!(words, vec![0x0102_0304, 0xaabb_ccdd]);
    }

    #[test]
    fn byte_lanes_split_word() {
        let word = 0x1122_3344;
        assert_eq!(
            [byte0(word), byte1(word), byte2(word), byte3(word)],
            [0x11, 0x22, 0x33, 0x44]
        );
    }

    #[test]
    fn xor_in_place_stops_at_shorter_slice() {
        let mut dst = [0xffu8; 4];
        xor_in_place(&mut dst, &[0x0f, 0xf0]);
        assert_eq!(dst, [0xf0, 0x0f, 0xff, 0xff]);
    }
}
