// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Extract-once session over a cached pseudorandom key

use hkdfkit_core::{DEFAULT_OKM_LEN, HashPrimitive, HkdfError, Okm, Prk};
use hkdfkit_sha::Algorithm;

use crate::config::SESSION_DEFAULT_HASH;
use crate::hkdf::{expand, expand_into, extract};

/// HKDF session: the PRK is extracted once at construction and reused by every
/// [`Hkdf::derive_key`] call.
///
/// The session is immutable after construction. The PRK is never exposed and is
/// zeroized when the session drops. A session can be shared across threads
/// whenever its primitive can.
#[derive(Debug, Clone)]
pub struct Hkdf<H: HashPrimitive = Algorithm> {
    prk: Prk,
    hash: H,
    default_okm_len: usize,
}

impl Hkdf<Algorithm> {
    /// Extracts with the session default primitive, [`SESSION_DEFAULT_HASH`] (SHA-256)
    pub fn new(salt: Option<&[u8]>, ikm: &[u8]) -> Result<Self, HkdfError> {
        Self::with_hash(salt, ikm, SESSION_DEFAULT_HASH)
    }
}

impl<H: HashPrimitive> Hkdf<H> {
    /// Extracts with an explicit primitive.
    ///
    /// # Errors
    ///
    /// [`HkdfError::UnsupportedPrimitive`] if `hash` cannot drive HKDF.
    pub fn with_hash(salt: Option<&[u8]>, ikm: &[u8], hash: H) -> Result<Self, HkdfError> {
        let prk = extract(salt, ikm, &hash)?;

        log::trace!(
            "hkdf session established: hash={}, prk_len={}",
            hash.name(),
            prk.len()
        );

        Ok(Self {
            prk,
            hash,
            default_okm_len: DEFAULT_OKM_LEN,
        })
    }

    pub(crate) fn with_default_okm_len(mut self, len: usize) -> Self {
        self.default_okm_len = len;
        self
    }

    /// Primitive the session was extracted with
    pub fn hash(&self) -> &H {
        &self.hash
    }

    /// Length used by [`Hkdf::derive_default_key`]
    pub fn default_okm_len(&self) -> usize {
        self.default_okm_len
    }

    /// Derives `length` bytes of OKM bound to `info`.
    ///
    /// # Errors
    ///
    /// [`HkdfError::LengthExceeded`] if `length > 255 * HashLen`.
    pub fn derive_key(&self, info: &[u8], length: usize) -> Result<Okm, HkdfError> {
        expand(&self.prk, info, length, &self.hash)
    }

    /// Fills `out` with OKM bound to `info`.
    ///
    /// # Errors
    ///
    /// [`HkdfError::LengthExceeded`] if `out.len() > 255 * HashLen`.
    pub fn derive_key_into(&self, info: &[u8], out: &mut [u8]) -> Result<(), HkdfError> {
        expand_into(&self.prk, info, out, &self.hash)
    }

    /// Derives [`Hkdf::default_okm_len`] bytes (32 unless configured otherwise)
    pub fn derive_default_key(&self, info: &[u8]) -> Result<Okm, HkdfError> {
        self.derive_key(info, self.default_okm_len)
    }
}
