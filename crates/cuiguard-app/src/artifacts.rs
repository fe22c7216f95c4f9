//! The per-run artifact set: what gets sealed and exported.

use anyhow::Context;
use cuiguard_render::render_recommendations;
use cuiguard_types::Findings;

pub const ARTIFACT_FINDINGS: &str = "findings.json";
pub const ARTIFACT_MAPPING: &str = "compliance_mapping.json";
pub const ARTIFACT_RECOMMENDATIONS: &str = "recommendations.txt";

/// One named artifact payload.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub name: &'static str,
    pub bytes: Vec<u8>,
}

/// Build the artifact set for a run: structured findings, the compliance
/// mapping on its own, and human-readable recommendations.
pub fn build_artifacts(findings: &Findings) -> anyhow::Result<Vec<Artifact>> {
    let findings_json =
        serde_json::to_vec_pretty(findings).context("serialize findings artifact")?;
    let mapping_json = serde_json::to_vec_pretty(&findings.compliance_guidance)
        .context("serialize compliance mapping artifact")?;
    let recommendations = render_recommendations(findings).into_bytes();

    Ok(vec![
        Artifact {
            name: ARTIFACT_FINDINGS,
            bytes: findings_json,
        },
        Artifact {
            name: ARTIFACT_MAPPING,
            bytes: mapping_json,
        },
        Artifact {
            name: ARTIFACT_RECOMMENDATIONS,
            bytes: recommendations,
        },
    ])
}
