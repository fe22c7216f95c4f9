//! Batch inspection over a directory of text documents.
//!
//! Analysis is pure and runs in parallel; persistence and sealing stay
//! sequential so the storage collaborators see one writer.

use crate::inspect::{InspectOutput, make_run_id, persist_and_package};
use crate::store::FindingsStore;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use cuiguard_engine::{AnalysisContext, AnalysisReport, Ruleset};
use cuiguard_settings::{Overrides, ResolvedConfig};
use cuiguard_vault::EvidenceStore;
use rayon::prelude::*;
use time::OffsetDateTime;

const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "text"];

/// Outcome for one document in a batch.
#[derive(Debug)]
pub struct BatchItem {
    pub path: Utf8PathBuf,
    pub outcome: anyhow::Result<InspectOutput>,
}

/// Inspect every eligible text file under `root`.
///
/// Files are discovered in sorted order for a deterministic report sequence;
/// a per-file failure is recorded in its `BatchItem` and does not abort the
/// rest of the batch.
pub fn inspect_dir(
    root: &Utf8Path,
    config_text: &str,
    overrides: Overrides,
    runs: &mut dyn FindingsStore,
    evidence: &mut dyn EvidenceStore,
) -> anyhow::Result<Vec<BatchItem>> {
    let cfg = if config_text.trim().is_empty() {
        cuiguard_settings::CuiguardConfigV1::default()
    } else {
        cuiguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    let resolved =
        cuiguard_settings::resolve_config(cfg, overrides).context("resolve config")?;
    let ruleset = Ruleset::load(resolved.effective.ruleset).context("load ruleset")?;

    let mut files: Vec<Utf8PathBuf> = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walk directory: {root}"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(path) = Utf8Path::from_path(entry.path()) else {
            continue;
        };
        if path
            .extension()
            .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext))
        {
            files.push(path.to_owned());
        }
    }

    // Parallel phase: read + analyze (pure per file).
    let analyzed: Vec<(Utf8PathBuf, anyhow::Result<(AnalysisReport, String, OffsetDateTime)>)> =
        files
            .into_par_iter()
            .map(|path| {
                let outcome = analyze_file(&path, &ruleset, &resolved);
                (path, outcome)
            })
            .collect();

    // Sequential phase: persist and seal in discovery order.
    let mut items = Vec::with_capacity(analyzed.len());
    for (path, outcome) in analyzed {
        let outcome = outcome.and_then(|(analysis, document_sha256, started_at)| {
            persist_and_package(
                analysis,
                document_sha256,
                resolved.clone(),
                started_at,
                runs,
                evidence,
            )
        });
        items.push(BatchItem { path, outcome });
    }

    Ok(items)
}

fn analyze_file(
    path: &Utf8Path,
    ruleset: &Ruleset,
    resolved: &ResolvedConfig,
) -> anyhow::Result<(AnalysisReport, String, OffsetDateTime)> {
    let document = std::fs::read(path).with_context(|| format!("read document: {path}"))?;
    let started_at = OffsetDateTime::now_utc();
    let document_sha256 = cuiguard_vault::sha256_hex(&document);
    let run_id = make_run_id(&document_sha256, started_at);

    let analysis = cuiguard_engine::analyze(
        &document,
        ruleset,
        &resolved.effective,
        AnalysisContext {
            run_id,
            document_ref: path.to_string(),
            created_at: started_at,
        },
    )
    .with_context(|| format!("analyze document: {path}"))?;

    Ok((analysis, document_sha256, started_at))
}
