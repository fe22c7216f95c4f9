//! The verify use case: re-check a sealed artifact against current bytes.

use cuiguard_vault::{EvidenceStore, StoreError, VerifyResult};

pub fn run_verify(
    evidence: &dyn EvidenceStore,
    artifact_id: &str,
    current_bytes: &[u8],
) -> Result<VerifyResult, StoreError> {
    cuiguard_vault::verify(evidence, artifact_id, current_bytes)
}

/// Exit code for verification: 0 match, 2 mismatch, 3 not found.
///
/// Mismatch and not-found are distinct signals; callers decide whether
/// missing evidence counts as tamper.
pub fn verify_exit_code(result: &VerifyResult) -> i32 {
    match result {
        VerifyResult::Match => 0,
        VerifyResult::Mismatch { .. } => 2,
        VerifyResult::NotFound => 3,
    }
}
