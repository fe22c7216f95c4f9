use crate::CuiCategory;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifiers for cuiguard artifacts.
pub const SCHEMA_REPORT_V1: &str = "cuiguard.report.v1";
pub const SCHEMA_CONFIG_V1: &str = "cuiguard.config.v1";

/// Coarse severity bucket derived from the overall risk score.
///
/// The tier is a step function of the score only; thresholds live with the
/// scoring constants in the engine crate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
            RiskTier::Critical => "CRITICAL",
        }
    }

    pub fn parse(s: &str) -> Option<RiskTier> {
        match s {
            "LOW" | "low" => Some(RiskTier::Low),
            "MODERATE" | "moderate" => Some(RiskTier::Moderate),
            "HIGH" | "high" => Some(RiskTier::High),
            "CRITICAL" | "critical" => Some(RiskTier::Critical),
            _ => None,
        }
    }
}

/// Byte offsets of a match into the source text (half-open).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// One raw pattern match.
///
/// `matched_text` is populated only when excerpt storage is enabled for the
/// run; counts and spans are recorded either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PatternHit {
    pub rule_id: String,
    pub category: CuiCategory,
    pub span: Span,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_text: Option<String>,
}

/// Aggregated per-category result of one scan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryScore {
    pub category: CuiCategory,
    pub hit_count: u32,
    /// Saturating confidence in `[0.0, 1.0]` derived from weighted hits.
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_excerpt: Option<String>,
}

/// One framework control citation with remediation text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ControlCitation {
    pub framework: crate::Framework,
    pub control_id: String,
    pub recommendation: String,
}

/// Compliance guidance derived from category scores.
///
/// `by_category` keeps the per-category citation lists; `controls` is the
/// union across categories with duplicate `(framework, control_id)` pairs
/// collapsed, in ascending category order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceGuidance {
    pub by_category: BTreeMap<CuiCategory, Vec<ControlCitation>>,
    pub controls: Vec<ControlCitation>,
}

/// The structured output of one inspection run.
///
/// Immutable once produced; this is the unit that gets persisted, sealed,
/// and later diffed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Findings {
    pub run_id: String,
    pub document_ref: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// One entry per category with at least one hit, ascending by category.
    pub category_scores: Vec<CategoryScore>,
    pub overall_risk_score: f64,
    pub risk_tier: RiskTier,
    /// Ordered by ascending span start, ties broken by rule id. Empty when
    /// the run stored no excerpts and emitted hits were not requested.
    pub pattern_hits: Vec<PatternHit>,
    pub compliance_guidance: ComplianceGuidance,
}

/// Integrity record for one generated artifact.
///
/// Append-only: never mutated after creation, only re-hashed against during
/// verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvidenceRecord {
    pub artifact_id: String,
    pub run_id: String,
    pub sha256_hex: String,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub byte_length: u64,
}

/// Structural difference between two findings documents (base -> other).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RunDelta {
    pub base_run_id: String,
    pub compare_run_id: String,
    pub added_categories: Vec<CuiCategory>,
    pub removed_categories: Vec<CuiCategory>,
    /// `other.hit_count - base.hit_count` for every category present in
    /// either run (absent counts as zero).
    pub pattern_count_delta: BTreeMap<CuiCategory, i64>,
    pub risk_score_delta: f64,
}

impl RunDelta {
    /// True when the two runs are structurally identical.
    pub fn is_empty(&self) -> bool {
        self.added_categories.is_empty()
            && self.removed_categories.is_empty()
            && self.pattern_count_delta.values().all(|d| *d == 0)
            && self.risk_score_delta == 0.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Cuiguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct InspectionData {
    pub profile: String,
    pub document_sha256: String,

    pub bytes_scanned: u64,
    pub rules_applied: u32,

    pub hits_total: u32,
    pub hits_emitted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

/// The emitted report envelope: a stable outer shape around the findings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub findings: Findings,
    pub data: InspectionData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_tier_ordering() {
        assert!(RiskTier::Low < RiskTier::Moderate);
        assert!(RiskTier::Moderate < RiskTier::High);
        assert!(RiskTier::High < RiskTier::Critical);
    }

    #[test]
    fn risk_tier_parse_round_trip() {
        for tier in [
            RiskTier::Low,
            RiskTier::Moderate,
            RiskTier::High,
            RiskTier::Critical,
        ] {
            assert_eq!(RiskTier::parse(tier.as_str()), Some(tier));
        }
        assert_eq!(RiskTier::parse("SEVERE"), None);
    }

    #[test]
    fn empty_delta_is_empty() {
        let delta = RunDelta {
            base_run_id: "a".to_string(),
            compare_run_id: "a".to_string(),
            added_categories: Vec::new(),
            removed_categories: Vec::new(),
            pattern_count_delta: BTreeMap::new(),
            risk_score_delta: 0.0,
        };
        assert!(delta.is_empty());
    }

    #[test]
    fn findings_serde_round_trip() {
        let findings = Findings {
            run_id: "abc123-1".to_string(),
            document_ref: "report.txt".to_string(),
            created_at: time::macros::datetime!(2026-01-15 12:00:00 UTC),
            category_scores: vec![CategoryScore {
                category: CuiCategory::Ssn,
                hit_count: 2,
                confidence: 1.0,
                top_excerpt: None,
            }],
            overall_risk_score: 3.0,
            risk_tier: RiskTier::Moderate,
            pattern_hits: Vec::new(),
            compliance_guidance: ComplianceGuidance::default(),
        };

        let json = serde_json::to_string(&findings).expect("serialize");
        let back: Findings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, findings);
    }
}
