//! Substitution boxes used by the round function.

/// Trait implemented for the GOST 28147-89 S-box parameter sets.
pub trait Sbox: Copy + Clone {
    /// Eight 16-entry nibble substitution tables, one per nibble position.
    const TABLE: [[u8; 16]; 8];

    /// Apply the per-nibble substitution to a 32-bit value.
    #[inline(always)]
    fn substitute(a: u32) -> u32 {
        let mut out = 0;
        for i in (0..8).rev() {
            out = (out << 4) | (Self::TABLE[i][((a >> (4 * i)) & 0xF) as usize] as u32);
        }
        out
    }

    /// The round function: modular key addition, nibble substitution and
    /// an 11-bit left rotation.
    #[inline(always)]
    fn g(a: u32, k: u32) -> u32 {
        Self::substitute(a.wrapping_add(k)).rotate_left(11)
    }
}

/// The S-box defined in the GOST R 34.12-2015 standard
/// (`id-tc26-gost-28147-param-Z`).
#[derive(Clone, Copy)]
pub struct Tc26;

impl Sbox for Tc26 {
    const TABLE: [[u8; 16]; 8] = [
        [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
        [6, 8, 2, 3, 9, 10, 5, 12, 1, 14, 4, 7, 11, 13, 0, 15],
        [11, 3, 5, 8, 2, 15, 10, 13, 14, 1, 7, 4, 12, 9, 6, 0],
        [12, 8, 2, 1, 13, 4, 15, 6, 7, 0, 10, 5, 3, 14, 9, 11],
        [7, 15, 5, 10, 8, 1, 6, 13, 0, 9, 3, 14, 11, 4, 2, 12],
        [5, 13, 15, 6, 9, 2, 12, 10, 11, 7, 8, 1, 4, 3, 14, 0],
        [8, 14, 2, 5, 6, 9, 1, 12, 15, 4, 11, 0, 13, 10, 3, 7],
        [1, 7, 14, 13, 0, 5, 8, 3, 4, 15, 10, 6, 9, 12, 11, 2],
    ];
}
