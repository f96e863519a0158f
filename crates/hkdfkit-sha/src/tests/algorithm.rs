// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::ToString;

use hkdfkit_core::HkdfError;

use crate::{Algorithm, HashPrimitive, Sha1, Sha224, Sha256, Sha384, Sha512};

#[test]
fn test_from_name_canonical() {
    assert_eq!(Algorithm::from_name("sha1"), Ok(Algorithm::Sha1));
    assert_eq!(Algorithm::from_name("sha224"), Ok(Algorithm::Sha224));
    assert_eq!(Algorithm::from_name("sha256"), Ok(Algorithm::Sha256));
    assert_eq!(Algorithm::from_name("sha384"), Ok(Algorithm::Sha384));
    assert_eq!(Algorithm::from_name("sha512"), Ok(Algorithm::Sha512));
}

#[test]
fn test_from_name_spellings() {
    assert_eq!(Algorithm::from_name("SHA-256"), Ok(Algorithm::Sha256));
    assert_eq!(Algorithm::from_name("Sha_512"), Ok(Algorithm::Sha512));
    assert_eq!(Algorithm::from_name(" sha-1 "), Ok(Algorithm::Sha1));
}

#[test]
fn test_from_name_unsupported() {
    for name in ["md5", "sha3-256", "blake2b", "", "sha"] {
        assert_eq!(
            Algorithm::from_name(name),
            Err(HkdfError::UnsupportedPrimitive {
                name: name.to_string()
            }),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn test_from_str() {
    let algorithm: Algorithm = "SHA-384".parse().expect("Failed to parse(..)");
    assert_eq!(algorithm, Algorithm::Sha384);
    assert!("whirlpool".parse::<Algorithm>().is_err());
}

#[test]
fn test_display_roundtrips_through_from_name() {
    for algorithm in Algorithm::ALL {
        let name = algorithm.to_string();
        assert_eq!(Algorithm::from_name(&name), Ok(algorithm));
    }
}

#[test]
fn test_dispatch_matches_unit_primitives() {
    fn check<H: HashPrimitive>(algorithm: Algorithm, unit: H) {
        assert_eq!(algorithm.name(), unit.name());
        assert_eq!(algorithm.hash_len(), unit.hash_len());
        assert_eq!(algorithm.block_len(), unit.block_len());

        let mut a = alloc::vec![0u8; unit.hash_len()];
        let mut b = alloc::vec![0u8; unit.hash_len()];
        algorithm.compute(b"key", &[b"message"], &mut a);
        unit.compute(b"key", &[b"message"], &mut b);
        assert_eq!(a, b);
    }

    check(Algorithm::Sha1, Sha1);
    check(Algorithm::Sha224, Sha224);
    check(Algorithm::Sha256, Sha256);
    check(Algorithm::Sha384, Sha384);
    check(Algorithm::Sha512, Sha512);
}

#[test]
fn test_all_is_ordered_by_output_size() {
    let lens: alloc::vec::Vec<usize> = Algorithm::ALL.iter().map(|a| a.hash_len()).collect();
    assert_eq!(lens, [20, 28, 32, 48, 64]);
}
