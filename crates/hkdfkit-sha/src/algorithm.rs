// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Runtime selection of a built-in primitive

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use hkdfkit_core::{HashPrimitive, HkdfError};

use crate::primitives;

/// Built-in HMAC primitive, selectable at runtime (e.g. from configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC-SHA1
    Sha1,
    /// HMAC-SHA224
    Sha224,
    /// HMAC-SHA256
    Sha256,
    /// HMAC-SHA384
    Sha384,
    /// HMAC-SHA512
    Sha512,
}

impl Algorithm {
    /// Every built-in primitive, ordered by output size
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Resolves a primitive by name.
    ///
    /// Matching ignores ASCII case, `-` and `_`, so `"sha256"`, `"SHA-256"` and
    /// `"Sha_256"` all select [`Algorithm::Sha256`].
    ///
    /// # Errors
    ///
    /// [`HkdfError::UnsupportedPrimitive`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, HkdfError> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| HkdfError::UnsupportedPrimitive {
                name: name.to_string(),
            })
    }

    fn primitive(&self) -> &'static dyn HashPrimitive {
        match self {
            Algorithm::Sha1 => &primitives::Sha1,
            Algorithm::Sha224 => &primitives::Sha224,
            Algorithm::Sha256 => &primitives::Sha256,
            Algorithm::Sha384 => &primitives::Sha384,
            Algorithm::Sha512 => &primitives::Sha512,
        }
    }
}

impl HashPrimitive for Algorithm {
    fn name(&self) -> &'static str {
        self.primitive().name()
    }

    fn hash_len(&self) -> usize {
        self.primitive().hash_len()
    }

    fn block_len(&self) -> usize {
        self.primitive().block_len()
    }

    fn compute(&self, key: &[u8], message_parts: &[&[u8]], out: &mut [u8]) {
        self.primitive().compute(key, message_parts, out)
    }
}

impl FromStr for Algorithm {
    type Err = HkdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
