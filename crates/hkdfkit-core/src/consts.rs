// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Maximum number of expansion blocks: the block counter is a single octet (1..=255)
pub const MAX_BLOCKS: usize = 255;

/// Output length used when a caller does not ask for a specific one
pub const DEFAULT_OKM_LEN: usize = 32;
