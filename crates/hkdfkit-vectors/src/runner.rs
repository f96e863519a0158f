// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use hkdfkit_core::HkdfError;

use crate::vectors::{Flag, TestCase, TestResult, test_vectors};

/// Output of one derivation under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivation {
    /// Extracted PRK, `None` when the backend keeps it private
    pub prk: Option<Vec<u8>>,
    /// Output keying material
    pub okm: Vec<u8>,
}

/// An HKDF implementation under test
pub trait Backend {
    /// Extract-then-expand with the primitive named `hash`
    fn derive(
        &self,
        hash: &str,
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Derivation, HkdfError>;
}

fn decode(tc: &TestCase, field: &str, hex_str: &str) -> Result<Vec<u8>, String> {
    hex::decode(hex_str).map_err(|e| format!("tc_id {}: invalid {} hex: {}", tc.tc_id, field, e))
}

/// Runs a single vector against `backend`
pub fn run_case<B: Backend + ?Sized>(backend: &B, tc: &TestCase) -> Result<(), String> {
    let ikm = decode(tc, "ikm", tc.ikm)?;
    let salt = tc.salt.map(|s| decode(tc, "salt", s)).transpose()?;
    let info = decode(tc, "info", tc.info)?;
    let expected_prk = decode(tc, "prk", tc.prk)?;
    let expected_okm = decode(tc, "okm", tc.okm)?;

    let result = backend.derive(tc.hash, salt.as_deref(), &ikm, &info, tc.size);

    match (tc.result, result) {
        (TestResult::Valid, Ok(derivation)) => {
            if derivation.okm.len() != tc.size {
                return Err(format!(
                    "tc_id {} ({}): okm length {} != {}",
                    tc.tc_id,
                    tc.comment,
                    derivation.okm.len(),
                    tc.size
                ));
            }

            if let Some(prk) = &derivation.prk {
                if !expected_prk.is_empty() && *prk != expected_prk {
                    return Err(format!(
                        "tc_id {} ({}): prk mismatch\n  expected: {}\n  got:      {}",
                        tc.tc_id,
                        tc.comment,
                        tc.prk,
                        hex::encode(prk)
                    ));
                }
            }

            if !expected_okm.is_empty() && derivation.okm != expected_okm {
                return Err(format!(
                    "tc_id {} ({}): okm mismatch\n  expected: {}\n  got:      {}",
                    tc.tc_id,
                    tc.comment,
                    tc.okm,
                    hex::encode(&derivation.okm)
                ));
            }

            Ok(())
        }
        (TestResult::Valid, Err(e)) => Err(format!(
            "tc_id {} ({}): expected valid but got error: {:?}",
            tc.tc_id, tc.comment, e
        )),
        (TestResult::Invalid, Ok(_)) => Err(format!(
            "tc_id {} ({}): expected invalid but derivation succeeded",
            tc.tc_id, tc.comment
        )),
        (TestResult::Invalid, Err(e)) => {
            if tc.flags.contains(&Flag::SizeTooLarge)
                && !matches!(e, HkdfError::LengthExceeded { requested, .. } if requested == tc.size)
            {
                return Err(format!(
                    "tc_id {} ({}): expected LengthExceeded, got {:?}",
                    tc.tc_id, tc.comment, e
                ));
            }

            Ok(())
        }
    }
}

/// Runs every vector selected by `filter`, collecting all failures
pub fn run_all<B, F>(backend: &B, filter: F) -> Result<usize, String>
where
    B: Backend + ?Sized,
    F: Fn(&TestCase) -> bool,
{
    let vectors: Vec<TestCase> = test_vectors().into_iter().filter(|tc| filter(tc)).collect();
    let failures: Vec<String> = vectors
        .iter()
        .filter_map(|tc| run_case(backend, tc).err())
        .collect();

    if failures.is_empty() {
        Ok(vectors.len())
    } else {
        Err(format!(
            "HKDF vector failures ({}/{}):\n{}",
            failures.len(),
            vectors.len(),
            failures.join("\n")
        ))
    }
}
