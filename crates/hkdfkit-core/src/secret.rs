// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Secret byte buffers produced by HKDF

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

macro_rules! secret_bytes {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            bytes: Vec<u8>,
        }

        impl $name {
            /// Allocates `len` zero bytes to be filled in place
            pub fn zeroed(len: usize) -> Self {
                Self {
                    bytes: vec![0u8; len],
                }
            }

            /// Takes ownership of existing key material
            pub fn from_vec(bytes: Vec<u8>) -> Self {
                Self { bytes }
            }

            /// Copies key material out of a borrowed slice
            pub fn from_slice(bytes: &[u8]) -> Self {
                Self {
                    bytes: bytes.to_vec(),
                }
            }

            /// Borrows the raw bytes
            pub fn as_bytes(&self) -> &[u8] {
                &self.bytes
            }

            /// Mutable access for in-place derivation
            pub fn as_mut_bytes(&mut self) -> &mut [u8] {
                &mut self.bytes
            }

            /// Length in bytes
            pub fn len(&self) -> usize {
                self.bytes.len()
            }

            /// Returns `true` if the buffer holds no bytes
            pub fn is_empty(&self) -> bool {
                self.bytes.is_empty()
            }

            /// Moves the bytes out; they are still wiped when the guard drops
            pub fn into_zeroizing(mut self) -> Zeroizing<Vec<u8>> {
                Zeroizing::new(core::mem::take(&mut self.bytes))
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }

        impl ConstantTimeEq for $name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.bytes.as_slice().ct_eq(other.bytes.as_slice())
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.ct_eq(other).into()
            }
        }

        impl Eq for $name {}

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}([REDACTED; {}])", stringify!($name), self.bytes.len())
            }
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.bytes.zeroize();
            }
        }

        impl Drop for $name {
            fn drop(&mut self) {
                self.zeroize();
            }
        }

        impl ZeroizeOnDrop for $name {}
    };
}

secret_bytes!(
    /// Pseudorandom key produced by HKDF-Extract (HashLen bytes)
    Prk
);

secret_bytes!(
    /// Output keying material produced by HKDF-Expand
    Okm
);
