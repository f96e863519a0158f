// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use thiserror::Error;

/// HKDF error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HkdfError {
    /// The requested hash primitive cannot be used for HKDF
    #[error("unsupported hash primitive: {name}")]
    UnsupportedPrimitive {
        /// Name of the rejected primitive
        name: String,
    },

    /// The pseudorandom key does not match the output length of the hash primitive
    #[error("invalid pseudorandom key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// HashLen of the selected primitive
        expected: usize,
        /// Length of the key that was supplied
        actual: usize,
    },

    /// Requested output length exceeds maximum (255 * HashLen)
    #[error("requested output length {requested} exceeds maximum {max} (255 * HashLen)")]
    LengthExceeded {
        /// Requested OKM length in bytes
        requested: usize,
        /// Maximum OKM length for the selected primitive
        max: usize,
    },
}
