//! Storage collaborator adapters.
//!
//! The persistence contract is deliberately small: `put`/`get` keyed records
//! for findings (by run id) and evidence (by artifact id). `FileStore` is
//! the CLI's directory-backed adapter; `MemoryRunStore` backs tests and
//! library embedding.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use cuiguard_types::{EvidenceRecord, Findings};
use cuiguard_vault::{EvidenceStore, StoreError};
use std::collections::BTreeMap;

/// Findings persistence, keyed by run id.
pub trait FindingsStore {
    fn put(&mut self, findings: &Findings) -> anyhow::Result<()>;
    fn get(&self, run_id: &str) -> anyhow::Result<Option<Findings>>;
}

/// In-memory findings store.
#[derive(Clone, Debug, Default)]
pub struct MemoryRunStore {
    runs: BTreeMap<String, Findings>,
}

impl FindingsStore for MemoryRunStore {
    fn put(&mut self, findings: &Findings) -> anyhow::Result<()> {
        self.runs.insert(findings.run_id.clone(), findings.clone());
        Ok(())
    }

    fn get(&self, run_id: &str) -> anyhow::Result<Option<Findings>> {
        Ok(self.runs.get(run_id).cloned())
    }
}

/// Directory-backed store:
/// `<root>/findings/<run_id>.json` and `<root>/evidence/<artifact_id>.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: Utf8PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn findings_dir(&self) -> Utf8PathBuf {
        self.root.join("findings")
    }

    fn findings_path(&self, run_id: &str) -> anyhow::Result<Utf8PathBuf> {
        safe_key(run_id)
            .map_err(anyhow::Error::msg)
            .context("invalid run id")?;
        Ok(self.findings_dir().join(format!("{run_id}.json")))
    }

    fn evidence_dir(&self) -> Utf8PathBuf {
        self.root.join("evidence")
    }

    fn evidence_path(&self, artifact_id: &str) -> Result<Utf8PathBuf, StoreError> {
        safe_key(artifact_id).map_err(|reason| StoreError::Corrupt { reason })?;
        Ok(self.evidence_dir().join(format!("{artifact_id}.json")))
    }
}

/// Keys become file paths; refuse anything that could escape the store root.
fn safe_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("empty key".to_string());
    }
    if key.starts_with('/') || key.split('/').any(|seg| seg.is_empty() || seg == "..") {
        return Err(format!("unsafe storage key: {key}"));
    }
    Ok(())
}

impl FindingsStore for FileStore {
    fn put(&mut self, findings: &Findings) -> anyhow::Result<()> {
        let path = self.findings_path(&findings.run_id)?;
        let dir = self.findings_dir();
        std::fs::create_dir_all(&dir).with_context(|| format!("create directory: {dir}"))?;
        let json = serde_json::to_string_pretty(findings).context("serialize findings")?;
        std::fs::write(&path, json).with_context(|| format!("write findings: {path}"))?;
        Ok(())
    }

    fn get(&self, run_id: &str) -> anyhow::Result<Option<Findings>> {
        let path = self.findings_path(run_id)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("read findings: {path}")),
        };
        let findings =
            serde_json::from_str(&text).with_context(|| format!("parse findings: {path}"))?;
        Ok(Some(findings))
    }
}

impl EvidenceStore for FileStore {
    fn put(&mut self, record: &EvidenceRecord) -> Result<(), StoreError> {
        let path = self.evidence_path(&record.artifact_id)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record).map_err(|e| StoreError::Corrupt {
            reason: e.to_string(),
        })?;
        std::fs::write(&path, json)?;
        Ok(())
    }

    fn get(&self, artifact_id: &str) -> Result<Option<EvidenceRecord>, StoreError> {
        let path = self.evidence_path(artifact_id)?;
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record = serde_json::from_str(&text).map_err(|e| StoreError::Corrupt {
            reason: format!("{path}: {e}"),
        })?;
        Ok(Some(record))
    }
}
