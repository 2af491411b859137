#![cfg_attr(rustfmt, rustfmt_skip)]

use cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, BlockSizeUser, KeyInit};
use hex_literal::hex;
use kuznyechik::{Block, Kuznyechik};

#[test]
fn block_size() {
    assert_eq!(Kuznyechik::block_size(), 16);
}

/// Example vectors from GOST 34.12-2018
#[test]
fn kuznyechik() {
    let key = hex!("
        8899AABBCCDDEEFF0011223344556677
        FEDCBA98765432100123456789ABCDEF
    ");
    let plaintext = hex!("1122334455667700FFEEDDCCBBAA9988");
    let ciphertext = hex!("7F679D90BEBC24305A468D42B9D4EDCD");

    let cipher = Kuznyechik::new_from_slice(&key).unwrap();

    let mut block = GenericArray::clone_from_slice(&plaintext);
    cipher.encrypt_block(&mut block);
    assert_eq!(&ciphertext, block.as_slice());

    cipher.decrypt_block(&mut block);
    assert_eq!(&plaintext, block.as_slice());

    // test that encrypt_blocks/decrypt_blocks work correctly
    let mut blocks = [Block::default(); 101];
    for (i, block) in blocks.iter_mut().enumerate() {
        block.iter_mut().enumerate().for_each(|(j, b)| {
            *b = (i + j) as u8;
        });
    }

    let mut blocks2 = blocks;
    let blocks_cpy = blocks;

    cipher.encrypt_blocks(&mut blocks);
    assert!(blocks[..] != blocks_cpy[..]);
    for block in blocks2.iter_mut() {
        cipher.encrypt_block(block);
    }
    assert_eq!(blocks[..], blocks2[..]);

    cipher.decrypt_blocks(&mut blocks);
    assert_eq!(blocks[..], blocks_cpy[..]);
    for block in blocks2.iter_mut() {
        cipher.decrypt_block(block);
    }
    assert_eq!(blocks2[..], blocks_cpy[..]);
}

#[test]
fn round_trip() {
    let key = hex!("
        000102030405060708090A0B0C0D0E0F
        101112131415161718191A1B1C1D1E1F
    ");
    let cipher = Kuznyechik::new_from_slice(&key).unwrap();

    for seed in 0..64u8 {
        let mut block = Block::default();
        block.iter_mut().enumerate().for_each(|(i, b)| {
            *b = seed.wrapping_mul(31).wrapping_add(i as u8);
        });
        let orig = block;
        cipher.encrypt_block(&mut block);
        assert_ne!(block, orig);
        cipher.decrypt_block(&mut block);
        assert_eq!(block, orig);
    }
}

#[test]
fn encrypt_block_b2b() {
    let key = hex!("
        8899AABBCCDDEEFF0011223344556677
        FEDCBA98765432100123456789ABCDEF
    ");
    let cipher = Kuznyechik::new_from_slice(&key).unwrap();

    let src = GenericArray::clone_from_slice(&hex!("1122334455667700FFEEDDCCBBAA9988"));
    let mut dst = Block::default();
    cipher.encrypt_block_b2b(&src, &mut dst);
    assert_eq!(dst.as_slice(), &hex!("7F679D90BEBC24305A468D42B9D4EDCD"));

    let mut back = Block::default();
    cipher.decrypt_block_b2b(&dst, &mut back);
    assert_eq!(back, src);
}

#[test]
fn invalid_key_size() {
    assert!(Kuznyechik::new_from_slice(&[0u8; 16]).is_err());
    assert!(Kuznyechik::new_from_slice(&[0u8; 33]).is_err());
    assert!(Kuznyechik::new_from_slice(&[]).is_err());
}

#[test]
fn deterministic() {
    let key = hex!("
        8899AABBCCDDEEFF0011223344556677
        FEDCBA98765432100123456789ABCDEF
    ");
    let c1 = Kuznyechik::new_from_slice(&key).unwrap();
    let c2 = Kuznyechik::new_from_slice(&key).unwrap();

    let mut b1 = GenericArray::clone_from_slice(&hex!("1122334455667700FFEEDDCCBBAA9988"));
    let mut b2 = b1;
    c1.encrypt_block(&mut b1);
    c2.encrypt_block(&mut b2);
    assert_eq!(b1, b2);
}
