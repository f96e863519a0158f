// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over the digest and its block size

use core::marker::PhantomData;

use sha2::Digest;
use zeroize::Zeroize;

/// HMAC state with all key-dependent buffers.
///
/// All sensitive data lives in this struct for guaranteed zeroization on drop.
pub(crate) struct HmacState<D: Digest, const BLOCK_LEN: usize> {
    /// K ⊕ ipad (0x36 repeated)
    k_ipad: [u8; BLOCK_LEN],
    /// K ⊕ opad (0x5c repeated)
    k_opad: [u8; BLOCK_LEN],
    /// Key zero-padded to BLOCK_LEN (hashed first when longer than BLOCK_LEN)
    key_block: [u8; BLOCK_LEN],

    _digest: PhantomData<D>,
}

impl<D: Digest, const BLOCK_LEN: usize> HmacState<D, BLOCK_LEN> {
    /// Create new HMAC state
    pub fn new() -> Self {
        Self {
            k_ipad: [0u8; BLOCK_LEN],
            k_opad: [0u8; BLOCK_LEN],
            key_block: [0u8; BLOCK_LEN],
            _digest: PhantomData,
        }
    }

    /// HMAC(key, message_parts[0] || message_parts[1] || ...) -> out
    ///
    /// `out` must be exactly the digest output size.
    pub fn mac(&mut self, key: &[u8], message_parts: &[&[u8]], out: &mut [u8]) {
        // Prevent stale-bytes window
        self.key_block.zeroize();

        let key_len = if key.len() > BLOCK_LEN {
            let mut hashed_key = D::digest(key);
            let hashed_len = hashed_key.len();
            self.key_block[..hashed_len].copy_from_slice(&hashed_key);
            hashed_key.as_mut_slice().zeroize();
            hashed_len
        } else {
            self.key_block[..key.len()].copy_from_slice(key);
            key.len()
        };

        self.k_ipad.fill(0x36);
        self.k_opad.fill(0x5c);
        for i in 0..key_len {
            self.k_ipad[i] ^= self.key_block[i];
            self.k_opad[i] ^= self.key_block[i];
        }

        // Inner hash: H(k_ipad || message)
        let mut inner = D::new();
        inner.update(&self.k_ipad[..]);
        for part in message_parts {
            inner.update(part);
        }
        let mut inner_hash = inner.finalize();

        // Outer hash: H(k_opad || inner_hash) -> out
        let mut outer = D::new();
        outer.update(&self.k_opad[..]);
        outer.update(&inner_hash[..]);
        let mut tag = outer.finalize();
        out.copy_from_slice(&tag);

        inner_hash.as_mut_slice().zeroize();
        tag.as_mut_slice().zeroize();
        self.zeroize();
    }
}

impl<D: Digest, const BLOCK_LEN: usize> Zeroize for HmacState<D, BLOCK_LEN> {
    fn zeroize(&mut self) {
        self.k_ipad.zeroize();
        self.k_opad.zeroize();
        self.key_block.zeroize();
    }
}

impl<D: Digest, const BLOCK_LEN: usize> Drop for HmacState<D, BLOCK_LEN> {
    fn drop(&mut self) {
        self.zeroize();
    }
}
