//! Evidence integrity vault.
//!
//! Every generated artifact of a run is sealed: SHA-256 over the exact
//! bytes, stamped, and persisted through the store collaborator. `verify`
//! recomputes the digest and compares; it is the sole authority for
//! integrity claims and never mutates a stored record.

#![forbid(unsafe_code)]

use cuiguard_types::EvidenceRecord;
use sha2::{Digest, Sha256};
use thiserror::Error;
use time::OffsetDateTime;

mod store;

pub use store::{EvidenceStore, MemoryStore};

/// Store collaborator failure. The vault treats the backing store as a
/// synchronous dependency whose writes succeed or fail atomically per
/// record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("evidence store io failure")]
    Io(#[from] std::io::Error),

    #[error("evidence record corrupt: {reason}")]
    Corrupt { reason: String },
}

/// Outcome of a verification. `NotFound` and `Mismatch` are valid results,
/// not errors: the caller decides whether missing evidence is tamper or
/// merely absence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyResult {
    Match,
    Mismatch { expected: String, actual: String },
    NotFound,
}

/// Hex-encoded SHA-256 over exact bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Artifact id for one named artifact of a run. Distinct per (run, name),
/// so concurrent seals never contend on an existing record.
pub fn artifact_id(run_id: &str, artifact_name: &str) -> String {
    format!("{run_id}/{artifact_name}")
}

/// Seal an artifact: digest the exact bytes, stamp now, persist, return the
/// record.
pub fn seal(
    store: &mut dyn EvidenceStore,
    run_id: &str,
    artifact_name: &str,
    bytes: &[u8],
) -> Result<EvidenceRecord, StoreError> {
    let record = EvidenceRecord {
        artifact_id: artifact_id(run_id, artifact_name),
        run_id: run_id.to_string(),
        sha256_hex: sha256_hex(bytes),
        created_at: OffsetDateTime::now_utc(),
        byte_length: bytes.len() as u64,
    };
    store.put(&record)?;
    Ok(record)
}

/// Re-verify an artifact against its sealed digest.
pub fn verify(
    store: &dyn EvidenceStore,
    artifact_id: &str,
    current_bytes: &[u8],
) -> Result<VerifyResult, StoreError> {
    let Some(record) = store.get(artifact_id)? else {
        return Ok(VerifyResult::NotFound);
    };

    let actual = sha256_hex(current_bytes);
    if actual == record.sha256_hex {
        Ok(VerifyResult::Match)
    } else {
        Ok(VerifyResult::Mismatch {
            expected: record.sha256_hex,
            actual,
        })
    }
}
