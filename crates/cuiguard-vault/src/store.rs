//! The persistence collaborator contract for evidence records.

use crate::StoreError;
use cuiguard_types::EvidenceRecord;
use std::collections::BTreeMap;

/// Keyed record store. Writes are append-only per `artifact_id`; reads
/// return the most recently sealed value for an id.
pub trait EvidenceStore {
    fn put(&mut self, record: &EvidenceRecord) -> Result<(), StoreError>;
    fn get(&self, artifact_id: &str) -> Result<Option<EvidenceRecord>, StoreError>;
}

/// In-memory store for tests and library embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, EvidenceRecord>,
}

impl MemoryStore {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EvidenceStore for MemoryStore {
    fn put(&mut self, record: &EvidenceRecord) -> Result<(), StoreError> {
        self.records
            .insert(record.artifact_id.clone(), record.clone());
        Ok(())
    }

    fn get(&self, artifact_id: &str) -> Result<Option<EvidenceRecord>, StoreError> {
        Ok(self.records.get(artifact_id).cloned())
    }
}
