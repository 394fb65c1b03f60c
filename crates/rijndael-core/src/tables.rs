//! Precomputed GF(2^8) lookup tables.
//!
//! Everything here is derived from two constants: the reduction polynomial
//! `x^8 + x^4 + x^3 + x + 1` and the generator `3`. The tables are built once, on
//! first use, and shared read-only by every cipher instance.

use once_cell::sync::Lazy;

/// The Rijndael reduction polynomial.
const POLY: u16 = 0x11b;

/// Round constants needed by the longest schedule (4-word key, 8-word block) plus slack.
const RCON_LEN: usize = 30;

/// Forward MixColumns matrix, one row per output byte lane.
const MIX: [[u8; 4]; 4] = [[2, 1, 1, 3], [3, 2, 1, 1], [1, 3, 2, 1], [1, 1, 3, 2]];

/// Inverse MixColumns matrix.
const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x09, 0x0d, 0x0b],
    [0x0b, 0x0e, 0x09, 0x0d],
    [0x0d, 0x0b, 0x0e, 0x09],
    [0x09, 0x0d, 0x0b, 0x0e],
];

static TABLES: Lazy<Tables> = Lazy::new(Tables::build);

/// Lookup tables used by the key schedule and the round function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tables {
    /// Discrete logarithm base 3; `log[0]` is unused.
    pub log: [u8; 256],
    /// Powers of 3: `alog[i] = 3^i`, with `alog[255] == alog[0] == 1`.
    pub alog: [u8; 256],
    /// Substitution box.
    pub s: [u8; 256],
    /// Inverse substitution box, `si[s[x]] == x`.
    pub si: [u8; 256],
    /// Forward T-tables (T1..T4): S-box output multiplied through each MixColumns row.
    pub te: [[u32; 256]; 4],
    /// Inverse T-tables (T5..T8): inverse S-box output through each InvMixColumns row.
    pub td: [[u32; 256]; 4],
    /// InvMixColumns tables (U1..U4) without substitution, for decryption round keys.
    pub u: [[u32; 256]; 4],
    /// Round constants, `rcon[0] = 1` and `rcon[t] = 2 * rcon[t - 1]`.
    pub rcon: [u8; RCON_LEN],
}

/// Returns the process-wide tables, building them on first call.
#[inline]
pub fn tables() -> &'static Tables {
    &TABLES
}

/// Multiplies two field elements.
#[inline]
pub fn multiply(a: u8, b: u8) -> u8 {
    let t = tables();
    field_mul(&t.log, &t.alog, a, b)
}

fn field_mul(log: &[u8; 256], alog: &[u8; 256], a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    alog[(log[a as usize] as usize + log[b as usize] as usize) % 255]
}

/// Packs `a * row[0] .. a * row[3]` into one big-endian word.
fn mul_row(log: &[u8; 256], alog: &[u8; 256], a: u8, row: &[u8; 4]) -> u32 {
    row.iter()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(field_mul(log, alog, a, b)))
}

fn affine(b: u8) -> u8 {
    b ^ b.rotate_left(1) ^ b.rotate_left(2) ^ b.rotate_left(3) ^ b.rotate_left(4) ^ 0x63
}

impl Tables {
    fn build() -> Self {
        let mut alog = [0u8; 256];
        let mut log = [0u8; 256];
        let mut x = 1u16;
        for (i, entry) in alog.iter_mut().enumerate() {
            *entry = x as u8;
            if i < 255 {
                log[x as usize] = i as u8;
            }
            // x * 3 = x * 2 ^ x
            let mut doubled = x << 1;
            if doubled & 0x100 != 0 {
                doubled ^= POLY;
            }
            x = doubled ^ x;
        }

        let mut s = [0u8; 256];
        let mut si = [0u8; 256];
        for i in 0..256 {
            let inv = if i == 0 {
                0
            } else {
                alog[255 - log[i] as usize]
            };
            s[i] = affine(inv);
            si[s[i] as usize] = i as u8;
        }

        let mut te = [[0u32; 256]; 4];
        let mut td = [[0u32; 256]; 4];
        let mut u = [[0u32; 256]; 4];
        for i in 0..256 {
            for lane in 0..4 {
                te[lane][i] = mul_row(&log, &alog, s[i], &MIX[lane]);
                td[lane][i] = mul_row(&log, &alog, si[i], &INV_MIX[lane]);
                u[lane][i] = mul_row(&log, &alog, i as u8, &INV_MIX[lane]);
            }
        }

        let mut rcon = [0u8; RCON_LEN];
        rcon[0] = 1;
        for t in 1..RCON_LEN {
            rcon[t] = field_mul(&log, &alog, 2, rcon[t - 1]);
        }

        Self {
            log,
            alog,
            s,
            si,
            te,
            td,
            u,
            rcon,
        }
    }
}
