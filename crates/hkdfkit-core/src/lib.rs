// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core building blocks shared by the hkdfkit crates
//!
//! - [`HashPrimitive`]: the keyed-hash capability HKDF is built on
//! - [`HkdfError`]: the error taxonomy of extraction and expansion
//! - [`Prk`] / [`Okm`]: secret byte buffers, zeroized on drop and compared in constant time
//!
//! References:
//! - RFC 5869: HMAC-based Extract-and-Expand Key Derivation Function (HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc5869>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod primitive;
mod secret;

pub use consts::{DEFAULT_OKM_LEN, MAX_BLOCKS};
pub use error::HkdfError;
pub use primitive::{HashPrimitive, ensure_supported};
pub use secret::{Okm, Prk};
