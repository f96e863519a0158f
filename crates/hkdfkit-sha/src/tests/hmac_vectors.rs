// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Known-answer tests for the HMAC primitives
//
// References:
// [1] RFC 2202: Test Cases for HMAC-MD5 and HMAC-SHA-1
//     https://www.rfc-editor.org/rfc/rfc2202
// [2] RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//     HMAC-SHA-384, and HMAC-SHA-512
//     https://www.rfc-editor.org/rfc/rfc4231

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::{Algorithm, HashPrimitive};

struct HmacCase {
    name: &'static str,
    algorithm: Algorithm,
    key: Vec<u8>,
    data: &'static [u8],
    mac: &'static str,
}

fn hi_there(algorithm: Algorithm, mac: &'static str) -> HmacCase {
    HmacCase {
        name: "test case 1 (Hi There)",
        algorithm,
        key: vec![0x0b; 20],
        data: b"Hi There",
        mac,
    }
}

fn jefe(algorithm: Algorithm, mac: &'static str) -> HmacCase {
    HmacCase {
        name: "test case 2 (Jefe)",
        algorithm,
        key: b"Jefe".to_vec(),
        data: b"what do ya want for nothing?",
        mac,
    }
}

/// Key longer than the block size of every primitive: forces key hashing
fn large_key(algorithm: Algorithm, mac: &'static str) -> HmacCase {
    HmacCase {
        name: "test case 6 (131-byte key)",
        algorithm,
        key: vec![0xaa; 131],
        data: b"Test Using Larger Than Block-Size Key - Hash Key First",
        mac,
    }
}

fn cases() -> Vec<HmacCase> {
    vec![
        hi_there(Algorithm::Sha1, "b617318655057264e28bc0b6fb378c8ef146be00"),
        jefe(Algorithm::Sha1, "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"),
        large_key(Algorithm::Sha1, "90d0dace1c1bdc957339307803160335bde6df2b"),
        hi_there(
            Algorithm::Sha224,
            "896fb1128abbdf196832107cd49df33f47b4b1169912ba4f53684b22",
        ),
        jefe(
            Algorithm::Sha224,
            "a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44",
        ),
        large_key(
            Algorithm::Sha224,
            "95e9a0db962095adaebe9b2d6f0dbce2d499f112f2d2b7273fa6870e",
        ),
        hi_there(
            Algorithm::Sha256,
            "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
        ),
        jefe(
            Algorithm::Sha256,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
        ),
        large_key(
            Algorithm::Sha256,
            "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
        ),
        hi_there(
            Algorithm::Sha384,
            "afd03944d84895626b0825f4ab46907f15f9dadbe4101ec682aa034c7cebc59c             faea9ea9076ede7f4af152e8b2fa9cb6",
        ),
        jefe(
            Algorithm::Sha384,
            "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e             8e2240ca5e69e2c78b3239ecfab21649",
        ),
        large_key(
            Algorithm::Sha384,
            "4ece084485813e9088d2c63a041bc5b44f9ef1012a2b588f3cd11f05033ac4c6             0c2ef6ab4030fe8296248df163f44952",
        ),
        hi_there(
            Algorithm::Sha512,
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde             daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854",
        ),
        jefe(
            Algorithm::Sha512,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737",
        ),
        large_key(
            Algorithm::Sha512,
            "80b24263c7c1a3ebb71493c1dd7be8b49b46d1f41b4aeec1121b013783f8f352             6b56d037e05f2598bd0fd2215d6a1e5295e64f73f63f0aec8b915a985d786598",
        ),
    ]
}

fn run_case(case: &HmacCase) -> Result<(), String> {
    let expected = hex::decode(case.mac).map_err(|e| format!("{}: bad hex: {}", case.name, e))?;
    let mut out = vec![0u8; case.algorithm.hash_len()];
    case.algorithm.compute(&case.key, &[case.data], &mut out);

    if out == expected {
        Ok(())
    } else {
        Err(format!(
            "{} / {}: mac mismatch\n  expected: {}\n  got:      {}",
            case.algorithm,
            case.name,
            case.mac,
            hex::encode(&out)
        ))
    }
}

#[test]
fn test_hmac_known_answers() {
    let cases = cases();
    let failures: Vec<String> = cases.iter().filter_map(|c| run_case(c).err()).collect();

    if !failures.is_empty() {
        panic!(
            "HMAC known-answer failures ({}/{}):\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        );
    }
}

#[test]
fn test_hmac_message_parts_are_concatenated() {
    let mut whole = [0u8; 32];
    let mut split = [0u8; 32];

    Algorithm::Sha256.compute(b"Jefe", &[b"what do ya want for nothing?"], &mut whole);
    Algorithm::Sha256.compute(
        b"Jefe",
        &[b"what do ", b"", b"ya want", b" for nothing?"],
        &mut split,
    );

    assert_eq!(whole, split);
}
