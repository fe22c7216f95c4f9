//! What the search/index collaborator is allowed to see for a run.
//!
//! Full hits are index-eligible only when the run stored excerpts;
//! metadata-only runs expose category scores and counts, never text.

use cuiguard_types::{CategoryScore, Findings, PatternHit, RiskTier};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IndexPayload {
    Full {
        run_id: String,
        document_ref: String,
        risk_tier: RiskTier,
        category_scores: Vec<CategoryScore>,
        pattern_hits: Vec<PatternHit>,
    },
    MetadataOnly {
        run_id: String,
        document_ref: String,
        risk_tier: RiskTier,
        category_scores: Vec<CategoryScore>,
    },
}

pub fn build_index_payload(findings: &Findings, store_excerpt: bool) -> IndexPayload {
    if store_excerpt {
        IndexPayload::Full {
            run_id: findings.run_id.clone(),
            document_ref: findings.document_ref.clone(),
            risk_tier: findings.risk_tier,
            category_scores: findings.category_scores.clone(),
            pattern_hits: findings.pattern_hits.clone(),
        }
    } else {
        IndexPayload::MetadataOnly {
            run_id: findings.run_id.clone(),
            document_ref: findings.document_ref.clone(),
            risk_tier: findings.risk_tier,
            category_scores: findings.category_scores.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuiguard_types::{ComplianceGuidance, CuiCategory, Span};
    use time::macros::datetime;

    fn findings() -> Findings {
        Findings {
            run_id: "r1".to_string(),
            document_ref: "doc.txt".to_string(),
            created_at: datetime!(2026-02-01 10:00:00 UTC),
            category_scores: vec![CategoryScore {
                category: CuiCategory::Ssn,
                hit_count: 1,
                confidence: 0.5,
                top_excerpt: None,
            }],
            overall_risk_score: 1.5,
            risk_tier: RiskTier::Low,
            pattern_hits: vec![PatternHit {
                rule_id: "pii.ssn".to_string(),
                category: CuiCategory::Ssn,
                span: Span { start: 0, end: 11 },
                matched_text: None,
            }],
            compliance_guidance: ComplianceGuidance::default(),
        }
    }

    #[test]
    fn excerpt_runs_are_fully_indexable() {
        match build_index_payload(&findings(), true) {
            IndexPayload::Full { pattern_hits, .. } => assert_eq!(pattern_hits.len(), 1),
            other => panic!("expected full payload, got {other:?}"),
        }
    }

    #[test]
    fn metadata_only_runs_expose_no_hits() {
        let payload = build_index_payload(&findings(), false);
        match payload {
            IndexPayload::MetadataOnly {
                category_scores, ..
            } => {
                assert_eq!(category_scores.len(), 1);
                assert_eq!(category_scores[0].hit_count, 1);
            }
            other => panic!("expected metadata-only payload, got {other:?}"),
        }
    }
}
