// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC over SHA-1 and the SHA-2 family, exposed as [`HashPrimitive`]s
//!
//! The digests come from the RustCrypto `sha1` and `sha2` crates; the HMAC
//! construction (RFC 2104) lives here so every key block, pad and inner digest
//! is zeroized as soon as it has been consumed.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod consts;
mod hmac;
mod primitives;

pub use algorithm::Algorithm;
pub use hkdfkit_core::HashPrimitive;
pub use primitives::{Sha1, Sha224, Sha256, Sha384, Sha512};
