//! The inspect use case: analyze one document and record the run.

use crate::artifacts::build_artifacts;
use crate::index::{IndexPayload, build_index_payload};
use crate::report::build_envelope;
use crate::store::FindingsStore;
use anyhow::Context;
use cuiguard_engine::{AnalysisContext, AnalysisReport, Ruleset};
use cuiguard_settings::{Overrides, ResolvedConfig};
use cuiguard_types::{EvidenceRecord, ReportEnvelope, RiskTier};
use cuiguard_vault::EvidenceStore;
use time::OffsetDateTime;

/// Input for the inspect use case.
#[derive(Clone, Debug)]
pub struct InspectInput<'a> {
    /// Raw document bytes (already extracted to plain text upstream).
    pub document: &'a [u8],
    /// Caller-facing document name recorded with the run.
    pub document_ref: String,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the inspect use case.
#[derive(Clone, Debug)]
pub struct InspectOutput {
    pub report: ReportEnvelope,
    /// One sealed record per generated artifact.
    pub evidence: Vec<EvidenceRecord>,
    /// What the search collaborator may index for this run.
    pub index: IndexPayload,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run one inspection: resolve config, analyze, persist the findings, seal
/// every artifact, and assemble the report.
///
/// A failed analysis aborts before anything is persisted, so a failed run is
/// never recorded as completed.
pub fn run_inspection(
    input: InspectInput<'_>,
    runs: &mut dyn FindingsStore,
    evidence: &mut dyn EvidenceStore,
) -> anyhow::Result<InspectOutput> {
    let started_at = OffsetDateTime::now_utc();

    let cfg = if input.config_text.trim().is_empty() {
        cuiguard_settings::CuiguardConfigV1::default()
    } else {
        cuiguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = cuiguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let ruleset =
        Ruleset::load(resolved.effective.ruleset).context("load ruleset")?;

    let document_sha256 = cuiguard_vault::sha256_hex(input.document);
    let run_id = make_run_id(&document_sha256, started_at);

    let analysis = cuiguard_engine::analyze(
        input.document,
        &ruleset,
        &resolved.effective,
        AnalysisContext {
            run_id,
            document_ref: input.document_ref.clone(),
            created_at: started_at,
        },
    )
    .context("analyze document")?;

    persist_and_package(
        analysis,
        document_sha256,
        resolved,
        started_at,
        runs,
        evidence,
    )
}

/// Persist findings, seal artifacts, and build the outgoing report.
/// Shared by the single-document and batch paths.
pub(crate) fn persist_and_package(
    analysis: AnalysisReport,
    document_sha256: String,
    resolved: ResolvedConfig,
    started_at: OffsetDateTime,
    runs: &mut dyn FindingsStore,
    evidence: &mut dyn EvidenceStore,
) -> anyhow::Result<InspectOutput> {
    let AnalysisReport { findings, data } = analysis;

    runs.put(&findings).context("persist findings")?;

    let artifacts = build_artifacts(&findings)?;
    let mut records = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let record =
            cuiguard_vault::seal(evidence, &findings.run_id, artifact.name, &artifact.bytes)
                .with_context(|| format!("seal artifact {}", artifact.name))?;
        records.push(record);
    }

    let index = build_index_payload(&findings, resolved.effective.store_excerpt);
    let finished_at = OffsetDateTime::now_utc();
    let report = build_envelope(
        findings,
        data,
        &resolved.effective.profile,
        document_sha256,
        started_at,
        finished_at,
    );

    Ok(InspectOutput {
        report,
        evidence: records,
        index,
        resolved_config: resolved,
    })
}

/// Run id: document digest prefix + start instant. Distinct per run without
/// any shared id-generator state.
pub(crate) fn make_run_id(document_sha256: &str, started_at: OffsetDateTime) -> String {
    format!(
        "{}-{}",
        &document_sha256[..12],
        started_at.unix_timestamp_nanos()
    )
}

/// Exit code for an inspection: 0 below the fail_on tier, 2 at or above it.
pub fn risk_exit_code(tier: RiskTier, fail_on: RiskTier) -> i32 {
    if tier >= fail_on { 2 } else { 0 }
}
