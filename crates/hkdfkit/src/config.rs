// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Default primitives and output length for each entry point

use hkdfkit_core::{DEFAULT_OKM_LEN, HkdfError, Okm, Prk};
use hkdfkit_sha::Algorithm;

use crate::hkdf::{expand, extract};
use crate::session::Hkdf;

/// Primitive used by the functional interface when none is chosen
pub const FUNCTIONAL_DEFAULT_HASH: Algorithm = Algorithm::Sha512;

/// Primitive used by [`Hkdf::new`]
pub const SESSION_DEFAULT_HASH: Algorithm = Algorithm::Sha256;

/// Runtime defaults for the functional and session interfaces.
///
/// The two interfaces deliberately keep separate defaults (SHA-512 and SHA-256);
/// changing one never changes the other.
///
/// ```
/// use hkdfkit::{Algorithm, HkdfConfig};
///
/// let config = HkdfConfig::from_names("sha384", "sha256")?;
/// assert_eq!(config.functional_hash(), Algorithm::Sha384);
///
/// let prk = config.extract(None, b"ikm")?;
/// assert_eq!(prk.len(), 48);
/// # Ok::<(), hkdfkit::HkdfError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HkdfConfig {
    functional_hash: Algorithm,
    session_hash: Algorithm,
    default_okm_len: usize,
}

impl Default for HkdfConfig {
    fn default() -> Self {
        Self {
            functional_hash: FUNCTIONAL_DEFAULT_HASH,
            session_hash: SESSION_DEFAULT_HASH,
            default_okm_len: DEFAULT_OKM_LEN,
        }
    }
}

impl HkdfConfig {
    /// Builds a configuration from primitive names (see [`Algorithm::from_name`]).
    ///
    /// # Errors
    ///
    /// [`HkdfError::UnsupportedPrimitive`] if either name is unknown.
    pub fn from_names(functional: &str, session: &str) -> Result<Self, HkdfError> {
        Ok(Self::default()
            .with_functional_hash(Algorithm::from_name(functional)?)
            .with_session_hash(Algorithm::from_name(session)?))
    }

    /// Overrides the functional-interface primitive
    pub fn with_functional_hash(mut self, hash: Algorithm) -> Self {
        self.functional_hash = hash;
        self
    }

    /// Overrides the session primitive
    pub fn with_session_hash(mut self, hash: Algorithm) -> Self {
        self.session_hash = hash;
        self
    }

    /// Overrides the length used by [`HkdfConfig::derive_default_key`]
    pub fn with_default_okm_len(mut self, len: usize) -> Self {
        self.default_okm_len = len;
        self
    }

    /// Functional-interface primitive
    pub fn functional_hash(&self) -> Algorithm {
        self.functional_hash
    }

    /// Session primitive
    pub fn session_hash(&self) -> Algorithm {
        self.session_hash
    }

    /// Output length used when none is requested
    pub fn default_okm_len(&self) -> usize {
        self.default_okm_len
    }

    /// [`extract`] with the functional primitive
    pub fn extract(&self, salt: Option<&[u8]>, ikm: &[u8]) -> Result<Prk, HkdfError> {
        extract(salt, ikm, &self.functional_hash)
    }

    /// [`expand`] with the functional primitive
    pub fn expand<K: AsRef<[u8]> + ?Sized>(
        &self,
        prk: &K,
        info: &[u8],
        length: usize,
    ) -> Result<Okm, HkdfError> {
        expand(prk, info, length, &self.functional_hash)
    }

    /// One-shot extract-then-expand with the functional primitive
    pub fn derive(
        &self,
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Okm, HkdfError> {
        let prk = self.extract(salt, ikm)?;
        self.expand(&prk, info, length)
    }

    /// One-shot derivation of [`HkdfConfig::default_okm_len`] bytes
    pub fn derive_default_key(
        &self,
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: &[u8],
    ) -> Result<Okm, HkdfError> {
        self.derive(salt, ikm, info, self.default_okm_len)
    }

    /// Opens a session bound to the session primitive and default length
    pub fn session(&self, salt: Option<&[u8]>, ikm: &[u8]) -> Result<Hkdf<Algorithm>, HkdfError> {
        Ok(Hkdf::with_hash(salt, ikm, self.session_hash)?.with_default_okm_len(self.default_okm_len))
    }
}
