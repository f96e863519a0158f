// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RFC 5869 Appendix A test vectors plus boundary vectors, and runners that
//! check any HKDF backend against them.
//!
//! Backends plug in through [`Backend`]; this crate does not depend on any of
//! them, so it can be a dev-dependency of every implementation crate.

#![warn(missing_docs)]

mod runner;
mod vectors;

pub use runner::{Backend, Derivation, run_all, run_case};
pub use vectors::{Flag, TestCase, TestResult, test_vectors};
