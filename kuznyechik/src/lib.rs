//! Pure Rust implementation of the [Kuznyechik][1] (GOST R 34.12-2015)
//! block cipher.
//!
//! # Examples
//! ```
//! use kuznyechik::Kuznyechik;
//! use kuznyechik::cipher::{
//!     generic_array::GenericArray,
//!     BlockEncrypt, BlockDecrypt, KeyInit,
//! };
//! use hex_literal::hex;
//!
//! // Example vector from GOST 34.12-2018
//! let key = hex!("
//!     8899AABBCCDDEEFF0011223344556677
//!     FEDCBA98765432100123456789ABCDEF
//! ");
//! let plaintext = hex!("1122334455667700FFEEDDCCBBAA9988");
//! let ciphertext = hex!("7F679D90BEBC24305A468D42B9D4EDCD");
//!
//! let cipher = Kuznyechik::new(GenericArray::from_slice(&key));
//!
//! let mut block = GenericArray::clone_from_slice(&plaintext);
//! cipher.encrypt_block(&mut block);
//! assert_eq!(&ciphertext, block.as_slice());
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(&plaintext, block.as_slice());
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Kuznyechik
#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::needless_range_loop)]

pub use cipher;

use cipher::{
    consts::{U16, U32},
    AlgorithmName, BlockCipher, KeyInit, KeySizeUser,
};
use core::fmt;

mod consts;

const BLOCK_SIZE: usize = 16;

/// Block over which the Kuznyechik cipher operates.
pub type Block = cipher::Block<Kuznyechik>;
/// The Kuznyechik cipher initialization key.
pub type Key = cipher::Key<Kuznyechik>;

type RoundKeys = [[u8; BLOCK_SIZE]; 10];

/// Kuznyechik (GOST R 34.12-2015) block cipher.
#[derive(Clone, Copy)]
pub struct Kuznyechik {
    keys: RoundKeys,
}

#[inline(always)]
fn x(a: &mut [u8; BLOCK_SIZE], b: &[u8; BLOCK_SIZE]) {
    for i in 0..BLOCK_SIZE {
        a[i] ^= b[i];
    }
}

#[inline(always)]
fn s(blk: &mut [u8; BLOCK_SIZE]) {
    for b in blk.iter_mut() {
        *b = consts::P[*b as usize];
    }
}

#[inline(always)]
fn s_inv(blk: &mut [u8; BLOCK_SIZE]) {
    for b in blk.iter_mut() {
        *b = consts::P_INV[*b as usize];
    }
}

/// Linear transform: sixteen LFSR-like steps, each computing a feedback
/// byte over GF(2^8) and rotating it in at the low end.
///
/// `const fn` so the key schedule constants can be derived from it at
/// compile time.
pub(crate) const fn l(mut blk: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut n = 0;
    while n < BLOCK_SIZE {
        let mut t = blk[15];
        let mut i = 0;
        while i < 15 {
            t ^= consts::GF[blk[i] as usize][consts::LC[i] as usize];
            i += 1;
        }
        let mut j = 15;
        while j > 0 {
            blk[j] = blk[j - 1];
            j -= 1;
        }
        blk[0] = t;
        n += 1;
    }
    blk
}

/// Exact inverse of `l`: rotate the low byte out, then recompute the
/// feedback over the already-rotated bytes with the same coefficient order.
const fn l_inv(mut blk: [u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut n = 0;
    while n < BLOCK_SIZE {
        let mut t = blk[0];
        let mut i = 0;
        while i < 15 {
            blk[i] = blk[i + 1];
            i += 1;
        }
        let mut j = 0;
        while j < 15 {
            t ^= consts::GF[blk[j] as usize][consts::LC[j] as usize];
            j += 1;
        }
        blk[15] = t;
        n += 1;
    }
    blk
}

impl KeySizeUser for Kuznyechik {
    type KeySize = U32;
}

impl KeyInit for Kuznyechik {
    fn new(key: &Key) -> Self {
        let mut k1 = [0u8; BLOCK_SIZE];
        let mut k2 = [0u8; BLOCK_SIZE];
        k1.copy_from_slice(&key[..BLOCK_SIZE]);
        k2.copy_from_slice(&key[BLOCK_SIZE..]);

        let mut keys = [[0u8; BLOCK_SIZE]; 10];
        keys[0] = k1;
        keys[1] = k2;

        for i in 0..4 {
            for j in 0..8 {
                let mut t = k1;
                x(&mut t, &consts::C[8 * i + j]);
                s(&mut t);
                t = l(t);
                x(&mut t, &k2);
                k2 = k1;
                k1 = t;
            }
            keys[2 + 2 * i] = k1;
            keys[3 + 2 * i] = k2;
        }

        Self { keys }
    }
}

impl BlockCipher for Kuznyechik {}

impl AlgorithmName for Kuznyechik {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Kuznyechik")
    }
}

impl fmt::Debug for Kuznyechik {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Kuznyechik { ... }")
    }
}

cipher::impl_simple_block_encdec!(
    Kuznyechik, U16, cipher, block,
    encrypt: {
        let mut b: [u8; BLOCK_SIZE] = (*block.get_in()).into();
        for i in 0..9 {
            x(&mut b, &cipher.keys[i]);
            s(&mut b);
            b = l(b);
        }
        x(&mut b, &cipher.keys[9]);
        *block.get_out() = b.into();
    }
    decrypt: {
        let mut b: [u8; BLOCK_SIZE] = (*block.get_in()).into();
        for i in (1..10).rev() {
            x(&mut b, &cipher.keys[i]);
            b = l_inv(b);
            s_inv(&mut b);
        }
        x(&mut b, &cipher.keys[0]);
        *block.get_out() = b.into();
    }
);
