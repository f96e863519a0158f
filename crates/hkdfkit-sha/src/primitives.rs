// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unit-struct primitives, one per supported digest

use hkdfkit_core::HashPrimitive;

use crate::consts::{
    BLOCK_LEN_64, BLOCK_LEN_128, SHA1_HASH_LEN, SHA224_HASH_LEN, SHA256_HASH_LEN, SHA384_HASH_LEN,
    SHA512_HASH_LEN,
};
use crate::hmac::HmacState;

macro_rules! hmac_primitive {
    ($(#[$meta:meta])* $name:ident, $digest:ty, $label:literal, $hash_len:expr, $block_len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            /// Stable identifier
            pub const NAME: &'static str = $label;
            /// Output size in bytes
            pub const HASH_LEN: usize = $hash_len;
            /// Block size in bytes
            pub const BLOCK_LEN: usize = $block_len;
            /// Maximum HKDF-Expand output: 255 * HASH_LEN
            pub const MAX_OUTPUT_LEN: usize = hkdfkit_core::MAX_BLOCKS * $hash_len;
        }

        impl HashPrimitive for $name {
            fn name(&self) -> &'static str {
                Self::NAME
            }

            fn hash_len(&self) -> usize {
                Self::HASH_LEN
            }

            fn block_len(&self) -> usize {
                Self::BLOCK_LEN
            }

            fn compute(&self, key: &[u8], message_parts: &[&[u8]], out: &mut [u8]) {
                assert_eq!(
                    out.len(),
                    Self::HASH_LEN,
                    "{} output buffer must be {} bytes",
                    Self::NAME,
                    Self::HASH_LEN
                );

                let mut state = HmacState::<$digest, { $block_len }>::new();
                state.mac(key, message_parts, out);
            }
        }
    };
}

hmac_primitive!(
    /// HMAC-SHA1. Kept for interoperability with legacy HKDF deployments.
    Sha1,
    sha1::Sha1,
    "sha1",
    SHA1_HASH_LEN,
    BLOCK_LEN_64
);

hmac_primitive!(
    /// HMAC-SHA224
    Sha224,
    sha2::Sha224,
    "sha224",
    SHA224_HASH_LEN,
    BLOCK_LEN_64
);

hmac_primitive!(
    /// HMAC-SHA256
    Sha256,
    sha2::Sha256,
    "sha256",
    SHA256_HASH_LEN,
    BLOCK_LEN_64
);

hmac_primitive!(
    /// HMAC-SHA384
    Sha384,
    sha2::Sha384,
    "sha384",
    SHA384_HASH_LEN,
    BLOCK_LEN_128
);

hmac_primitive!(
    /// HMAC-SHA512
    Sha512,
    sha2::Sha512,
    "sha512",
    SHA512_HASH_LEN,
    BLOCK_LEN_128
);
