//! Byte padding for block ciphers: a `0x80` marker byte followed by zero
//! fill up to the block boundary.
//!
//! Data whose length is already a multiple of the block size still gets a
//! full extra block of padding, so padding always grows the data and is
//! always removable.
//!
//! Known limitation inherited from the scheme itself: plaintext that ends
//! in `0x80` (optionally followed by zero bytes) cannot be told apart from
//! the padding marker. Callers must rule such data out or add a length
//! prefix on top.
//!
//! # Examples
//! ```
//! let padded = gost_padding::add_padding(b"abcde", 8);
//! assert_eq!(padded, [b'a', b'b', b'c', b'd', b'e', 0x80, 0x00, 0x00]);
//! assert_eq!(gost_padding::remove_padding(&padded), Ok(&b"abcde"[..]));
//! ```
#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

/// The padding marker byte.
pub const MARKER: u8 = 0x80;

/// Error returned when unpadded data contains no marker byte.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UnpadError;

impl fmt::Display for UnpadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("padding marker not found")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnpadError {}

/// Append the marker byte and zero fill up to the next multiple of
/// `block_size`.
///
/// The result is always strictly longer than `data`: input that already
/// fills its last block gets a whole extra block of padding.
///
/// # Panics
///
/// Panics if `block_size` is zero.
pub fn add_padding(data: &[u8], block_size: usize) -> Vec<u8> {
    assert!(block_size > 0, "block size must be non-zero");
    let padding_size = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + padding_size);
    padded.extend_from_slice(data);
    padded.push(MARKER);
    padded.resize(data.len() + padding_size, 0);
    padded
}

/// Strip the padding by scanning backward for the marker byte, returning
/// the data that precedes it.
///
/// Returns [`UnpadError`] if no marker is present.
pub fn remove_padding(data: &[u8]) -> Result<&[u8], UnpadError> {
    match data.iter().rposition(|&b| b == MARKER) {
        Some(n) => Ok(&data[..n]),
        None => Err(UnpadError),
    }
}
