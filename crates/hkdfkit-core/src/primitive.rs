// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keyed-hash capability consumed by HKDF-Extract and HKDF-Expand

use alloc::string::ToString;

use crate::consts::MAX_BLOCKS;
use crate::error::HkdfError;

/// A keyed hash (HMAC-style PRF) with a fixed output length.
///
/// Implementations must be deterministic and reentrant: `compute` takes `&self`
/// and may be called concurrently from several threads.
///
/// The trait is object safe, so `&dyn HashPrimitive` can be passed wherever a
/// primitive is expected.
pub trait HashPrimitive {
    /// Stable identifier, e.g. `"sha256"`
    fn name(&self) -> &'static str;

    /// Output size in bytes (HashLen)
    fn hash_len(&self) -> usize;

    /// Input block size of the underlying hash in bytes
    fn block_len(&self) -> usize;

    /// Computes `PRF(key, message_parts[0] || message_parts[1] || ...)` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != self.hash_len()`. The HKDF functions always pass
    /// a buffer of the right size.
    fn compute(&self, key: &[u8], message_parts: &[&[u8]], out: &mut [u8]);

    /// Maximum HKDF-Expand output for this primitive: 255 * HashLen,
    /// saturating at `usize::MAX`
    fn max_output_len(&self) -> usize {
        MAX_BLOCKS.saturating_mul(self.hash_len())
    }
}

impl<H: HashPrimitive + ?Sized> HashPrimitive for &H {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn hash_len(&self) -> usize {
        (**self).hash_len()
    }

    fn block_len(&self) -> usize {
        (**self).block_len()
    }

    fn compute(&self, key: &[u8], message_parts: &[&[u8]], out: &mut [u8]) {
        (**self).compute(key, message_parts, out)
    }
}

/// Checks that `hash` can drive HKDF and returns its HashLen.
///
/// Rejected primitives:
/// - empty output
/// - output that does not fit in its own input block
/// - output so wide that 255 * HashLen overflows `usize`
pub fn ensure_supported<H: HashPrimitive + ?Sized>(hash: &H) -> Result<usize, HkdfError> {
    let hash_len = hash.hash_len();
    if hash_len == 0
        || hash_len > hash.block_len()
        || MAX_BLOCKS.checked_mul(hash_len).is_none()
    {
        return Err(HkdfError::UnsupportedPrimitive {
            name: hash.name().to_string(),
        });
    }

    Ok(hash_len)
}
