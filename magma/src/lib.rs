//! Pure Rust implementation of the Magma [block cipher][1] defined in
//! GOST 28147-89 and GOST R 34.12-2015.
//!
//! The [`Gost89`] core works on the little-endian word convention used by
//! the 28147-89 era implementations. The [`Magma`] type wraps it and
//! reverses bytes at the boundary, which yields the byte order used by the
//! GOST R 34.12-2015 test vectors.
//!
//! # Examples
//! ```
//! use magma::Magma;
//! use magma::cipher::{
//!     generic_array::GenericArray,
//!     BlockEncrypt, BlockDecrypt, KeyInit,
//! };
//! use hex_literal::hex;
//!
//! // Example vector from GOST 34.12-2018
//! let key = hex!("
//!     FFEEDDCCBBAA99887766554433221100
//!     F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF
//! ");
//! let plaintext = hex!("FEDCBA9876543210");
//! let ciphertext = hex!("4EE901E5C2D8CA3D");
//!
//! let cipher = Magma::new(GenericArray::from_slice(&key));
//!
//! let mut block = GenericArray::clone_from_slice(&plaintext);
//! cipher.encrypt_block(&mut block);
//! assert_eq!(&ciphertext, block.as_slice());
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(&plaintext, block.as_slice());
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/GOST_(block_cipher)
#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub use cipher;

use cipher::{
    consts::{U32, U8},
    AlgorithmName, BlockCipher, BlockDecrypt, BlockEncrypt, KeyInit, KeySizeUser,
};
use core::{convert::TryInto, fmt, marker::PhantomData};

mod sboxes;

pub use sboxes::{Sbox, Tc26};

/// Block over which the cipher operates.
pub type Block = cipher::Block<Magma>;
/// The cipher initialization key.
pub type Key = cipher::Key<Magma>;

/// Feistel core of the cipher, generic over the S-box.
///
/// Block halves and key words use the little-endian convention; the two
/// halves swap position between input and output framing.
#[derive(Clone, Copy)]
pub struct Gost89<S: Sbox> {
    key: [u32; 8],
    _p: PhantomData<S>,
}

fn to_u32(chunk: &[u8]) -> u32 {
    u32::from_le_bytes(chunk.try_into().unwrap())
}

impl<S: Sbox> KeySizeUser for Gost89<S> {
    type KeySize = U32;
}

impl<S: Sbox> KeyInit for Gost89<S> {
    fn new(key: &Key) -> Self {
        let mut key_u32 = [0u32; 8];
        key.chunks_exact(4)
            .zip(key_u32.iter_mut())
            .for_each(|(chunk, v)| *v = to_u32(chunk));
        Self {
            key: key_u32,
            _p: PhantomData,
        }
    }
}

impl<S: Sbox> BlockCipher for Gost89<S> {}

impl<S: Sbox> AlgorithmName for Gost89<S> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Gost89")
    }
}

impl<S: Sbox> fmt::Debug for Gost89<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Gost89 { ... }")
    }
}

cipher::impl_simple_block_encdec!(
    <S: Sbox> Gost89, U8, cipher, block,
    encrypt: {
        let b = block.get_in();
        let mut v = (to_u32(&b[0..4]), to_u32(&b[4..8]));
        for _ in 0..3 {
            for i in 0..8 {
                v = (S::g(v.0, cipher.key[i]) ^ v.1, v.0);
            }
        }
        for i in (0..8).rev() {
            v = (S::g(v.0, cipher.key[i]) ^ v.1, v.0);
        }
        let block = block.get_out();
        block[0..4].copy_from_slice(&v.1.to_le_bytes());
        block[4..8].copy_from_slice(&v.0.to_le_bytes());
    }
    decrypt: {
        let b = block.get_in();
        let mut v = (to_u32(&b[0..4]), to_u32(&b[4..8]));
        for i in 0..8 {
            v = (S::g(v.0, cipher.key[i]) ^ v.1, v.0);
        }
        for _ in 0..3 {
            for i in (0..8).rev() {
                v = (S::g(v.0, cipher.key[i]) ^ v.1, v.0);
            }
        }
        let block = block.get_out();
        block[0..4].copy_from_slice(&v.1.to_le_bytes());
        block[4..8].copy_from_slice(&v.0.to_le_bytes());
    }
);

/// Magma (GOST R 34.12-2015) block cipher.
///
/// Adapter around [`Gost89`] with the standard S-box which exposes the
/// byte order used by the published test vectors: every 4-byte key word
/// and every block is byte-reversed at the boundary.
#[derive(Clone, Copy)]
pub struct Magma {
    core: Gost89<Tc26>,
}

impl KeySizeUser for Magma {
    type KeySize = U32;
}

impl KeyInit for Magma {
    fn new(key: &Key) -> Self {
        let mut swapped = Key::default();
        for (src, dst) in key.chunks_exact(4).zip(swapped.chunks_exact_mut(4)) {
            dst.copy_from_slice(src);
            dst.reverse();
        }
        Self {
            core: Gost89::new(&swapped),
        }
    }
}

impl BlockCipher for Magma {}

impl AlgorithmName for Magma {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magma")
    }
}

impl fmt::Debug for Magma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magma { ... }")
    }
}

cipher::impl_simple_block_encdec!(
    Magma, U8, cipher, block,
    encrypt: {
        let mut b = *block.get_in();
        b.reverse();
        cipher.core.encrypt_block(&mut b);
        b.reverse();
        *block.get_out() = b;
    }
    decrypt: {
        let mut b = *block.get_in();
        b.reverse();
        cipher.core.decrypt_block(&mut b);
        b.reverse();
        *block.get_out() = b;
    }
);
