//! Fuzz target for run comparison.
//!
//! Goal: `compare` should **never panic** for any pair of findings
//! documents, and comparing a document to itself must yield an empty delta.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_compare
//! ```

#![no_main]

use arbitrary::Arbitrary;
use cuiguard_types::{CategoryScore, ComplianceGuidance, CuiCategory, Findings, RiskTier};
use libfuzzer_sys::fuzz_target;

/// Structured input: per-category hit counts for two runs.
#[derive(Arbitrary, Debug)]
struct CompareInput {
    base: Vec<(u8, u32)>,
    other: Vec<(u8, u32)>,
    base_score: u16,
    other_score: u16,
}

fn findings(run_id: &str, entries: &[(u8, u32)], score: u16) -> Findings {
    let mut category_scores: Vec<CategoryScore> = Vec::new();
    for (idx, hits) in entries {
        let category = CuiCategory::ALL[*idx as usize % CuiCategory::ALL.len()];
        if category_scores.iter().any(|s| s.category == category) {
            continue;
        }
        category_scores.push(CategoryScore {
            category,
            hit_count: hits.saturating_add(1),
            confidence: 1.0,
            top_excerpt: None,
        });
    }
    category_scores.sort_by_key(|s| s.category);

    Findings {
        run_id: run_id.to_string(),
        document_ref: "fuzz.txt".to_string(),
        created_at: time::OffsetDateTime::UNIX_EPOCH,
        category_scores,
        overall_risk_score: f64::from(score),
        risk_tier: RiskTier::Low,
        pattern_hits: Vec::new(),
        compliance_guidance: ComplianceGuidance::default(),
    }
}

fuzz_target!(|input: CompareInput| {
    if input.base.len() > 32 || input.other.len() > 32 {
        return;
    }

    let base = findings("base", &input.base, input.base_score);
    let other = findings("other", &input.other, input.other_score);

    let _ = cuiguard_engine::compare(&base, &other);

    let identity = cuiguard_engine::compare(&base, &base);
    assert!(identity.added_categories.is_empty());
    assert!(identity.removed_categories.is_empty());
    assert!(identity.pattern_count_delta.values().all(|d| *d == 0));
    assert_eq!(identity.risk_score_delta, 0.0);
});
