// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF-Extract and HKDF-Expand per RFC 5869 Section 2

use alloc::vec;

use hkdfkit_core::{HashPrimitive, HkdfError, Okm, Prk, ensure_supported};
use zeroize::Zeroizing;

/// Largest HashLen served by the stack-allocated default salt
const DEFAULT_SALT_LEN: usize = 128;

/// HKDF-Extract per RFC 5869 Section 2.2
///
/// PRK = HMAC-Hash(salt, IKM)
///
/// An absent or empty salt is replaced by HashLen zero bytes.
///
/// # Errors
///
/// [`HkdfError::UnsupportedPrimitive`] if `hash` cannot drive HKDF.
pub fn extract<H: HashPrimitive + ?Sized>(
    salt: Option<&[u8]>,
    ikm: &[u8],
    hash: &H,
) -> Result<Prk, HkdfError> {
    let hash_len = ensure_supported(hash)?;
    let mut prk = Prk::zeroed(hash_len);
    extract_into(salt, ikm, hash, prk.as_mut_bytes())?;
    Ok(prk)
}

/// HKDF-Extract into a caller-provided buffer of exactly HashLen bytes.
///
/// # Errors
///
/// - [`HkdfError::UnsupportedPrimitive`] if `hash` cannot drive HKDF
/// - [`HkdfError::InvalidKeyLength`] if `prk.len()` is not HashLen
pub fn extract_into<H: HashPrimitive + ?Sized>(
    salt: Option<&[u8]>,
    ikm: &[u8],
    hash: &H,
    prk: &mut [u8],
) -> Result<(), HkdfError> {
    let hash_len = ensure_supported(hash)?;
    if prk.len() != hash_len {
        return Err(HkdfError::InvalidKeyLength {
            expected: hash_len,
            actual: prk.len(),
        });
    }

    // Covers every built-in primitive; wider outputs fall back to the heap
    const DEFAULT_SALT: [u8; DEFAULT_SALT_LEN] = [0u8; DEFAULT_SALT_LEN];
    let heap_salt;
    let salt = match salt {
        Some(salt) if !salt.is_empty() => salt,
        _ if hash_len <= DEFAULT_SALT_LEN => &DEFAULT_SALT[..hash_len],
        _ => {
            heap_salt = vec![0u8; hash_len];
            &heap_salt[..]
        }
    };

    hash.compute(salt, &[ikm], prk);
    Ok(())
}

/// HKDF-Expand per RFC 5869 Section 2.3
///
/// N = ceil(L/HashLen)
/// T(0) = empty string
/// T(i) = HMAC-Hash(PRK, T(i-1) | info | i)
/// OKM = first L octets of T(1) | T(2) | ... | T(N)
///
/// # Errors
///
/// - [`HkdfError::UnsupportedPrimitive`] if `hash` cannot drive HKDF
/// - [`HkdfError::LengthExceeded`] if `length > 255 * HashLen`
/// - [`HkdfError::InvalidKeyLength`] if `prk` is not HashLen bytes, which usually
///   means it was extracted with a different primitive
pub fn expand<K, H>(prk: &K, info: &[u8], length: usize, hash: &H) -> Result<Okm, HkdfError>
where
    K: AsRef<[u8]> + ?Sized,
    H: HashPrimitive + ?Sized,
{
    let prk = prk.as_ref();
    let hash_len = check_expand(prk, length, hash)?;

    let mut okm = Okm::zeroed(length);
    expand_blocks(prk, info, okm.as_mut_bytes(), hash, hash_len);
    Ok(okm)
}

/// HKDF-Expand filling all of `out`.
///
/// # Errors
///
/// Same as [`expand`], with `out.len()` as the requested length.
pub fn expand_into<K, H>(prk: &K, info: &[u8], out: &mut [u8], hash: &H) -> Result<(), HkdfError>
where
    K: AsRef<[u8]> + ?Sized,
    H: HashPrimitive + ?Sized,
{
    let prk = prk.as_ref();
    let hash_len = check_expand(prk, out.len(), hash)?;

    expand_blocks(prk, info, out, hash, hash_len);
    Ok(())
}

/// Validates an expansion request before any output is allocated or written.
///
/// Order: primitive, then output length, then PRK length.
fn check_expand<H: HashPrimitive + ?Sized>(
    prk: &[u8],
    length: usize,
    hash: &H,
) -> Result<usize, HkdfError> {
    let hash_len = ensure_supported(hash)?;

    let max = hash.max_output_len();
    if length > max {
        return Err(HkdfError::LengthExceeded {
            requested: length,
            max,
        });
    }

    if prk.len() != hash_len {
        return Err(HkdfError::InvalidKeyLength {
            expected: hash_len,
            actual: prk.len(),
        });
    }

    Ok(hash_len)
}

/// T(1) | T(2) | ... into `out`; inputs already validated by [`check_expand`]
fn expand_blocks<H: HashPrimitive + ?Sized>(
    prk: &[u8],
    info: &[u8],
    out: &mut [u8],
    hash: &H,
    hash_len: usize,
) {
    // Zero-length output is valid, but a no-op
    if out.is_empty() {
        return;
    }

    log::trace!(
        "hkdf expand: hash={}, blocks={}, okm_len={}",
        hash.name(),
        out.len().div_ceil(hash_len),
        out.len()
    );

    let mut t_prev = Zeroizing::new(vec![0u8; hash_len]);
    let mut t_curr = Zeroizing::new(vec![0u8; hash_len]);
    // T(0) = empty
    let mut t_prev_len = 0;

    for (i, chunk) in out.chunks_mut(hash_len).enumerate() {
        // Bounded by 255 through check_expand
        let counter = [(i + 1) as u8];

        // T(i) = HMAC-Hash(PRK, T(i-1) || info || counter)
        hash.compute(prk, &[&t_prev[..t_prev_len], info, &counter], &mut t_curr);

        chunk.copy_from_slice(&t_curr[..chunk.len()]);

        // T(i-1) = T(i) for next iteration
        t_prev.copy_from_slice(&t_curr);
        t_prev_len = hash_len;
    }
}
