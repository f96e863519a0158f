// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// SHA-1 output size in bytes
pub const SHA1_HASH_LEN: usize = 20;

/// SHA-224 output size in bytes
pub const SHA224_HASH_LEN: usize = 28;

/// SHA-256 output size in bytes
pub const SHA256_HASH_LEN: usize = 32;

/// SHA-384 output size in bytes
pub const SHA384_HASH_LEN: usize = 48;

/// SHA-512 output size in bytes
pub const SHA512_HASH_LEN: usize = 64;

/// SHA-1 / SHA-224 / SHA-256 block size in bytes
pub const BLOCK_LEN_64: usize = 64;

/// SHA-384 / SHA-512 block size in bytes
pub const BLOCK_LEN_128: usize = 128;
