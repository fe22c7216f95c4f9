//! Report envelope assembly and (de)serialization.

use anyhow::Context;
use cuiguard_engine::ScanStats;
use cuiguard_types::{Findings, InspectionData, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta};
use time::OffsetDateTime;

pub(crate) fn build_envelope(
    findings: Findings,
    stats: ScanStats,
    profile: &str,
    document_sha256: String,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> ReportEnvelope {
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "cuiguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        findings,
        data: InspectionData {
            profile: profile.to_string(),
            document_sha256,
            bytes_scanned: stats.bytes_scanned,
            rules_applied: stats.rules_applied,
            hits_total: stats.hits_total,
            hits_emitted: stats.hits_emitted,
            truncated_reason: stats.truncated_reason,
        },
    }
}

/// Serialize a report to pretty JSON with a trailing newline.
pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

/// Parse a report back from JSON.
pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    serde_json::from_str(text).context("parse report json")
}
