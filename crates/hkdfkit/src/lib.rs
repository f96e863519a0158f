// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF (HMAC-based Extract-and-Expand Key Derivation Function)
//!
//! Two interfaces over the same algorithm:
//!
//! - Functional: [`extract`] a pseudorandom key from a salt and input keying
//!   material, then [`expand`] it into as many keys as needed. The hash
//!   primitive is passed explicitly; [`HkdfConfig`] supplies the default
//!   ([`FUNCTIONAL_DEFAULT_HASH`], SHA-512) when the caller has no preference.
//! - Session: [`Hkdf`] extracts once at construction and serves repeated
//!   [`Hkdf::derive_key`] calls from the cached key. [`Hkdf::new`] uses
//!   [`SESSION_DEFAULT_HASH`] (SHA-256).
//!
//! ```
//! use hkdfkit::{Hkdf, Sha256, expand, extract};
//!
//! let salt: &[u8] = b"8e94ef805b93e683ff18";
//!
//! let prk = extract(Some(salt), b"asecretpassword", &Sha256)?;
//! let key = expand(&prk, b"context1", 16, &Sha256)?;
//!
//! let session = Hkdf::new(Some(salt), b"asecretpassword")?;
//! assert_eq!(session.derive_key(b"context1", 16)?, key);
//! # Ok::<(), hkdfkit::HkdfError>(())
//! ```
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod config;
mod hkdf;
mod session;

pub use config::{FUNCTIONAL_DEFAULT_HASH, HkdfConfig, SESSION_DEFAULT_HASH};
pub use hkdf::{expand, expand_into, extract, extract_into};
pub use hkdfkit_core::{DEFAULT_OKM_LEN, HashPrimitive, HkdfError, MAX_BLOCKS, Okm, Prk};
pub use hkdfkit_sha::{Algorithm, Sha1, Sha224, Sha256, Sha384, Sha512};
pub use session::Hkdf;
