// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// HKDF test vectors
//
// References:
// [1] RFC 5869, Appendix A: Test Vectors
//     https://www.rfc-editor.org/rfc/rfc5869#appendix-A

/// What a vector targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    /// Standard valid test cases
    Normal,
    /// Zero-length salt (replaced by HashLen zeros)
    EmptySalt,
    /// Absent salt (replaced by HashLen zeros)
    MissingSalt,
    /// Zero-length info
    EmptyInfo,
    /// Maximum permitted output (255 * HashLen)
    MaximalOutputSize,
    /// Invalid requests exceeding 255 * HashLen
    SizeTooLarge,
}

/// Expected outcome of a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestResult {
    /// Derivation succeeds; PRK and OKM match when given
    Valid,
    /// Derivation is rejected
    Invalid,
}

/// A single HKDF test case
#[derive(Debug, Clone)]
pub struct TestCase {
    /// Unique test case identifier
    pub tc_id: usize,
    /// Human-readable description
    pub comment: &'static str,
    /// Flags indicating what this test targets
    pub flags: &'static [Flag],
    /// Primitive name (`"sha1"`, `"sha256"`, ...)
    pub hash: &'static str,
    /// Input keying material (hex)
    pub ikm: &'static str,
    /// Salt (hex), `None` when absent
    pub salt: Option<&'static str>,
    /// Info/context (hex)
    pub info: &'static str,
    /// Requested output size in bytes
    pub size: usize,
    /// Expected pseudorandom key (hex), empty when not checked
    pub prk: &'static str,
    /// Expected output keying material (hex), empty when not checked
    pub okm: &'static str,
    /// Expected result
    pub result: TestResult,
}

const IKM_22: &str = "0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b0b";

const IKM_80: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f\
                      202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f\
                      404142434445464748494a4b4c4d4e4f";

const SALT_80: &str = "606162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f\
                       808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9f\
                       a0a1a2a3a4a5a6a7a8a9aaabacadaeaf";

const INFO_80: &str = "b0b1b2b3b4b5b6b7b8b9babbbcbdbebfc0c1c2c3c4c5c6c7c8c9cacbcccdcecf\
                       d0d1d2d3d4d5d6d7d8d9dadbdcdddedfe0e1e2e3e4e5e6e7e8e9eaebecedeeef\
                       f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";

/// All vectors: RFC 5869 A.1-A.7 followed by boundary cases
pub fn test_vectors() -> Vec<TestCase> {
    vec![
        TestCase {
            tc_id: 1,
            comment: "A.1 basic test case with SHA-256",
            flags: &[Flag::Normal],
            hash: "sha256",
            ikm: IKM_22,
            salt: Some("000102030405060708090a0b0c"),
            info: "f0f1f2f3f4f5f6f7f8f9",
            size: 42,
            prk: "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5",
            okm: "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf\
                  34007208d5b887185865",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 2,
            comment: "A.2 SHA-256 with longer inputs/outputs",
            flags: &[Flag::Normal],
            hash: "sha256",
            ikm: IKM_80,
            salt: Some(SALT_80),
            info: INFO_80,
            size: 82,
            prk: "06a6b88c5853361a06104c9ceb35b45cef760014904671014a193f40c15fc244",
            okm: "b11e398dc80327a1c8e7f78c596a49344f012eda2d4efad8a050cc4c19afa97c\
                  59045a99cac7827271cb41c65e590e09da3275600c2f09b8367793a9aca3db71\
                  cc30c58179ec3e87c14c01d5c1f3434f1d87",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 3,
            comment: "A.3 SHA-256 with zero-length salt/info",
            flags: &[Flag::EmptySalt, Flag::EmptyInfo],
            hash: "sha256",
            ikm: IKM_22,
            salt: Some(""),
            info: "",
            size: 42,
            prk: "19ef24a32c717b167f33a91d6f648bdf96596776afdb6377ac434c1c293ccb04",
            okm: "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d\
                  9d201395faa4b61a96c8",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 4,
            comment: "A.4 basic test case with SHA-1",
            flags: &[Flag::Normal],
            hash: "sha1",
            ikm: "0b0b0b0b0b0b0b0b0b0b0b",
            salt: Some("000102030405060708090a0b0c"),
            info: "f0f1f2f3f4f5f6f7f8f9",
            size: 42,
            prk: "9b6c18c432a7bf8f0e71c8eb88f4b30baa2ba243",
            okm: "085a01ea1b10f36933068b56efa5ad81a4f14b822f5b091568a9cdd4f155fda2\
                  c22e422478d305f3f896",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 5,
            comment: "A.5 SHA-1 with longer inputs/outputs",
            flags: &[Flag::Normal],
            hash: "sha1",
            ikm: IKM_80,
            salt: Some(SALT_80),
            info: INFO_80,
            size: 82,
            prk: "8adae09a2a307059478d309b26c4115a224cfaf6",
            okm: "0bd770a74d1160f7c9f12cd5912a06ebff6adcae899d92191fe4305673ba2ffe\
                  8fa3f1a4e5ad79f3f334b3b202b2173c486ea37ce3d397ed034c7f9dfeb15c5e\
                  927336d0441f4c4300e2cff0d0900b52d3b4",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 6,
            comment: "A.6 SHA-1 with zero-length salt/info",
            flags: &[Flag::EmptySalt, Flag::EmptyInfo],
            hash: "sha1",
            ikm: IKM_22,
            salt: Some(""),
            info: "",
            size: 42,
            prk: "da8c8a73c7fa77288ec6f5e7c297786aa0d32d01",
            okm: "0ac1af7002b3d761d1e55298da9d0506b9ae52057220a306e07b6b87e8df21d0\
                  ea00033de03984d34918",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 7,
            comment: "A.7 SHA-1 with salt not provided, zero-length info",
            flags: &[Flag::MissingSalt, Flag::EmptyInfo],
            hash: "sha1",
            ikm: "0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c",
            salt: None,
            info: "",
            size: 42,
            prk: "2adccada18779e7c2077ad2eb19d3f3e731385dd",
            okm: "2c91117204d745f3500d636a62f64f0ab3bae548aa53d423b0d1f27ebba6f5e5\
                  673a081d70cce7acfc48",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 8,
            comment: "SHA-256 maximal output (255 * 32 = 8160 bytes)",
            flags: &[Flag::MaximalOutputSize],
            hash: "sha256",
            ikm: IKM_22,
            salt: Some("000102030405060708090a0b0c"),
            info: "f0f1f2f3f4f5f6f7f8f9",
            size: 255 * 32,
            prk: "077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5",
            okm: "",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 9,
            comment: "SHA-256 output one byte past the maximum",
            flags: &[Flag::SizeTooLarge],
            hash: "sha256",
            ikm: IKM_22,
            salt: Some("000102030405060708090a0b0c"),
            info: "f0f1f2f3f4f5f6f7f8f9",
            size: 255 * 32 + 1,
            prk: "",
            okm: "",
            result: TestResult::Invalid,
        },
        TestCase {
            tc_id: 10,
            comment: "SHA-1 output one byte past the maximum",
            flags: &[Flag::SizeTooLarge],
            hash: "sha1",
            ikm: IKM_22,
            salt: None,
            info: "",
            size: 255 * 20 + 1,
            prk: "",
            okm: "",
            result: TestResult::Invalid,
        },
        TestCase {
            tc_id: 11,
            comment: "SHA-512 maximal output (255 * 64 = 16320 bytes)",
            flags: &[Flag::MaximalOutputSize, Flag::MissingSalt],
            hash: "sha512",
            ikm: IKM_22,
            salt: None,
            info: "",
            size: 255 * 64,
            prk: "",
            okm: "",
            result: TestResult::Valid,
        },
        TestCase {
            tc_id: 12,
            comment: "SHA-512 output one byte past the maximum",
            flags: &[Flag::SizeTooLarge],
            hash: "sha512",
            ikm: IKM_22,
            salt: None,
            info: "",
            size: 255 * 64 + 1,
            prk: "",
            okm: "",
            result: TestResult::Invalid,
        },
    ]
}
