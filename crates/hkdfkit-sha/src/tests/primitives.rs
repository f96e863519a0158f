// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hkdfkit_core::ensure_supported;

use crate::{HashPrimitive, Sha1, Sha224, Sha256, Sha384, Sha512};

#[test]
fn test_sizes() {
    assert_eq!((Sha1.hash_len(), Sha1.block_len()), (20, 64));
    assert_eq!((Sha224.hash_len(), Sha224.block_len()), (28, 64));
    assert_eq!((Sha256.hash_len(), Sha256.block_len()), (32, 64));
    assert_eq!((Sha384.hash_len(), Sha384.block_len()), (48, 128));
    assert_eq!((Sha512.hash_len(), Sha512.block_len()), (64, 128));
}

#[test]
fn test_max_output_len() {
    assert_eq!(Sha1::MAX_OUTPUT_LEN, 5100);
    assert_eq!(Sha256::MAX_OUTPUT_LEN, 8160);
    assert_eq!(Sha512::MAX_OUTPUT_LEN, 16320);
    assert_eq!(Sha256.max_output_len(), Sha256::MAX_OUTPUT_LEN);
}

#[test]
fn test_all_builtins_supported() {
    assert_eq!(ensure_supported(&Sha1), Ok(20));
    assert_eq!(ensure_supported(&Sha224), Ok(28));
    assert_eq!(ensure_supported(&Sha256), Ok(32));
    assert_eq!(ensure_supported(&Sha384), Ok(48));
    assert_eq!(ensure_supported(&Sha512), Ok(64));
}

#[test]
fn test_key_exactly_block_len_is_not_hashed() {
    // A BLOCK_LEN key is used as-is; BLOCK_LEN + 1 is hashed first
    let block_key = [0x42u8; 64];
    let long_key = [0x42u8; 65];

    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    Sha256.compute(&block_key, &[b"msg"], &mut a);
    Sha256.compute(&long_key, &[b"msg"], &mut b);

    assert_ne!(a, b);
}

#[test]
fn test_empty_key_equals_zero_key() {
    // HMAC zero-pads the key, so an empty key and HashLen zeros coincide
    let mut empty = [0u8; 64];
    let mut zeros = [0u8; 64];
    Sha512.compute(&[], &[b"ikm"], &mut empty);
    Sha512.compute(&[0u8; 64], &[b"ikm"], &mut zeros);

    assert_eq!(empty, zeros);
}

#[test]
fn test_compute_is_deterministic() {
    let mut a = [0u8; 48];
    let mut b = [0u8; 48];
    Sha384.compute(b"key", &[b"data"], &mut a);
    Sha384.compute(b"key", &[b"data"], &mut b);

    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "sha256 output buffer must be 32 bytes")]
fn test_wrong_output_buffer_panics() {
    let mut out = [0u8; 16];
    Sha256.compute(b"key", &[b"data"], &mut out);
}
