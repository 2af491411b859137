//! Constant tables of the cipher. Everything here is a pure function of
//! the GOST R 34.12-2015 constants and is evaluated at compile time.

/// The π byte substitution.
pub(crate) const P: [u8; 256] = [
    0xFC, 0xEE, 0xDD, 0x11, 0xCF, 0x6E, 0x31, 0x16, 0xFB, 0xC4, 0xFA, 0xDA, 0x23, 0xC5, 0x04, 0x4D,
    0xE9, 0x77, 0xF0, 0xDB, 0x93, 0x2E, 0x99, 0xBA, 0x17, 0x36, 0xF1, 0xBB, 0x14, 0xCD, 0x5F, 0xC1,
    0xF9, 0x18, 0x65, 0x5A, 0xE2, 0x5C, 0xEF, 0x21, 0x81, 0x1C, 0x3C, 0x42, 0x8B, 0x01, 0x8E, 0x4F,
    0x05, 0x84, 0x02, 0xAE, 0xE3, 0x6A, 0x8F, 0xA0, 0x06, 0x0B, 0xED, 0x98, 0x7F, 0xD4, 0xD3, 0x1F,
    0xEB, 0x34, 0x2C, 0x51, 0xEA, 0xC8, 0x48, 0xAB, 0xF2, 0x2A, 0x68, 0xA2, 0xFD, 0x3A, 0xCE, 0xCC,
    0xB5, 0x70, 0x0E, 0x56, 0x08, 0x0C, 0x76, 0x12, 0xBF, 0x72, 0x13, 0x47, 0x9C, 0xB7, 0x5D, 0x87,
    0x15, 0xA1, 0x96, 0x29, 0x10, 0x7B, 0x9A, 0xC7, 0xF3, 0x91, 0x78, 0x6F, 0x9D, 0x9E, 0xB2, 0xB1,
    0x32, 0x75, 0x19, 0x3D, 0xFF, 0x35, 0x8A, 0x7E, 0x6D, 0x54, 0xC6, 0x80, 0xC3, 0xBD, 0x0D, 0x57,
    0xDF, 0xF5, 0x24, 0xA9, 0x3E, 0xA8, 0x43, 0xC9, 0xD7, 0x79, 0xD6, 0xF6, 0x7C, 0x22, 0xB9, 0x03,
    0xE0, 0x0F, 0xEC, 0xDE, 0x7A, 0x94, 0xB0, 0xBC, 0xDC, 0xE8, 0x28, 0x50, 0x4E, 0x33, 0x0A, 0x4A,
    0xA7, 0x97, 0x60, 0x73, 0x1E, 0x00, 0x62, 0x44, 0x1A, 0xB8, 0x38, 0x82, 0x64, 0x9F, 0x26, 0x41,
    0xAD, 0x45, 0x46, 0x92, 0x27, 0x5E, 0x55, 0x2F, 0x8C, 0xA3, 0xA5, 0x7D, 0x69, 0xD5, 0x95, 0x3B,
    0x07, 0x58, 0xB3, 0x40, 0x86, 0xAC, 0x1D, 0xF7, 0x30, 0x37, 0x6B, 0xE4, 0x88, 0xD9, 0xE7, 0x89,
    0xE1, 0x1B, 0x83, 0x49, 0x4C, 0x3F, 0xF8, 0xFE, 0x8D, 0x53, 0xAA, 0x90, 0xCA, 0xD8, 0x85, 0x61,
    0x20, 0x71, 0x67, 0xA4, 0x2D, 0x2B, 0x09, 0x5B, 0xCB, 0x9B, 0x25, 0xD0, 0xBE, 0xE5, 0x6C, 0x52,
    0x59, 0xA6, 0x74, 0xD2, 0xE6, 0xF4, 0xB4, 0xC0, 0xD1, 0x66, 0xAF, 0xC2, 0x39, 0x4B, 0x63, 0xB6,
];

/// Positional inverse of `P`.
pub(crate) const P_INV: [u8; 256] = invert(&P);

/// Coefficients of the linear transform.
pub(crate) const LC: [u8; 16] = [
    148, 32, 133, 16, 194, 192, 1, 251, 1, 192, 194, 16, 133, 32, 148, 1,
];

/// Multiplication table for GF(2^8) with the reduction polynomial
/// x^8 + x^7 + x^6 + x + 1.
pub(crate) const GF: [[u8; 256]; 256] = gf_table();

/// Key schedule iteration constants C_1..C_32.
pub(crate) const C: [[u8; 16]; 32] = iter_constants();

const fn invert(sbox: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inv
}

const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut c = 0;
    while b != 0 {
        if b & 1 != 0 {
            c ^= a;
        }
        if a & 0x80 != 0 {
            a = (a << 1) ^ 0xC3;
        } else {
            a <<= 1;
        }
        b >>= 1;
    }
    c
}

const fn gf_table() -> [[u8; 256]; 256] {
    let mut table = [[0u8; 256]; 256];
    let mut a = 0;
    while a < 256 {
        let mut b = 0;
        while b < 256 {
            table[a][b] = gf_mul(a as u8, b as u8);
            b += 1;
        }
        a += 1;
    }
    table
}

const fn iter_constants() -> [[u8; 16]; 32] {
    let mut c = [[0u8; 16]; 32];
    let mut i = 0;
    while i < 32 {
        let mut blk = [0u8; 16];
        blk[15] = i as u8 + 1;
        c[i] = crate::l(blk);
        i += 1;
    }
    c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_is_invertible() {
        for i in 0..256 {
            assert_eq!(P_INV[P[i] as usize] as usize, i);
            assert_eq!(P[P_INV[i] as usize] as usize, i);
        }
    }

    #[test]
    fn gf_mul_properties() {
        for a in 0..256 {
            assert_eq!(GF[a][0], 0);
            assert_eq!(GF[a][1], a as u8);
            for b in 0..256 {
                assert_eq!(GF[a][b], GF[b][a]);
            }
        }
        // 0x94 * 2 overflows the high bit and folds with 0xC3
        assert_eq!(GF[0x94][0x02], 0xEB);
    }

    #[test]
    fn first_iter_constant() {
        assert_eq!(
            C[0],
            [
                0x6E, 0xA2, 0x76, 0x72, 0x6C, 0x48, 0x7A, 0xB8, 0x5D, 0x27, 0xBD, 0x10, 0xDD, 0x84,
                0x94, 0x01,
            ]
        );
    }
}
