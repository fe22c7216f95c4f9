//! The analysis engine: raw hits → scored, classified findings.

use crate::error::AnalysisError;
use crate::mapper;
use crate::matcher;
use crate::policy::InspectionPolicy;
use crate::ruleset::{Ruleset, saturation, severity_multiplier};
use cuiguard_types::{CategoryScore, CuiCategory, Findings, PatternHit, RiskTier};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Risk tier thresholds: a step function of the overall score only.
/// Below `MODERATE` is `Low`.
const TIER_MODERATE: f64 = 2.0;
const TIER_HIGH: f64 = 5.0;
const TIER_CRITICAL: f64 = 9.0;

/// Caller-supplied identity for one run. The engine computes; the caller
/// names and stamps.
#[derive(Clone, Debug)]
pub struct AnalysisContext {
    pub run_id: String,
    pub document_ref: String,
    pub created_at: OffsetDateTime,
}

/// Scan statistics alongside the findings; the report envelope carries them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub bytes_scanned: u64,
    pub rules_applied: u32,
    pub hits_total: u32,
    pub hits_emitted: u32,
    pub truncated_reason: Option<String>,
}

/// Findings plus scan statistics for one run.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub findings: Findings,
    pub data: ScanStats,
}

/// Analyze one document.
///
/// Zero hits is a valid, non-error outcome: empty scores, score 0.0, tier
/// `Low`. Detection failures (encoding, mapper skew) propagate as errors and
/// are never downgraded to an empty result.
pub fn analyze(
    document: &[u8],
    ruleset: &Ruleset,
    policy: &InspectionPolicy,
    ctx: AnalysisContext,
) -> Result<AnalysisReport, AnalysisError> {
    let hits = matcher::scan(document, ruleset, policy.store_excerpt)?;
    let hits_total = hits.len() as u32;

    let category_scores = aggregate(&hits, ruleset, policy.store_excerpt);
    let overall_risk_score = risk_score(&category_scores);
    let risk_tier = risk_tier_for(overall_risk_score);
    let compliance_guidance = mapper::map_guidance(&category_scores)?;

    // Cap emitted hits; counts and scores above already reflect all matches.
    let mut pattern_hits = hits;
    let mut truncated_reason = None;
    if pattern_hits.len() > policy.max_hits {
        pattern_hits.truncate(policy.max_hits);
        truncated_reason = Some(format!(
            "pattern hits truncated to max_hits={}",
            policy.max_hits
        ));
    }
    let hits_emitted = pattern_hits.len() as u32;

    let findings = Findings {
        run_id: ctx.run_id,
        document_ref: ctx.document_ref,
        created_at: ctx.created_at,
        category_scores,
        overall_risk_score,
        risk_tier,
        pattern_hits,
        compliance_guidance,
    };

    Ok(AnalysisReport {
        findings,
        data: ScanStats {
            bytes_scanned: document.len() as u64,
            rules_applied: ruleset.len() as u32,
            hits_total,
            hits_emitted,
            truncated_reason,
        },
    })
}

/// Group hits per category into scores, ascending by category.
fn aggregate(hits: &[PatternHit], ruleset: &Ruleset, store_excerpt: bool) -> Vec<CategoryScore> {
    struct Bucket {
        hit_count: u32,
        weight_sum: f64,
        top_excerpt: Option<String>,
    }

    let mut buckets: BTreeMap<CuiCategory, Bucket> = BTreeMap::new();

    for hit in hits {
        // Hits always reference a rule in the active set; the matcher is the
        // only producer.
        let weight = ruleset.rule(&hit.rule_id).map(|r| r.weight).unwrap_or(0.0);
        let bucket = buckets.entry(hit.category).or_insert(Bucket {
            hit_count: 0,
            weight_sum: 0.0,
            top_excerpt: None,
        });
        bucket.hit_count += 1;
        bucket.weight_sum += weight;
        if store_excerpt && bucket.top_excerpt.is_none() {
            bucket.top_excerpt = hit.matched_text.clone();
        }
    }

    buckets
        .into_iter()
        .map(|(category, b)| CategoryScore {
            category,
            hit_count: b.hit_count,
            confidence: (b.weight_sum / saturation(category)).min(1.0),
            top_excerpt: b.top_excerpt,
        })
        .collect()
}

/// Recompute the overall risk score from category scores.
///
/// `scores` must be in ascending category order (as every produced Findings
/// stores them); summation order is part of the determinism contract, so
/// recomputing from a persisted document reproduces the stored value
/// exactly.
pub fn risk_score(scores: &[CategoryScore]) -> f64 {
    scores
        .iter()
        .map(|s| s.confidence * severity_multiplier(s.category))
        .sum()
}

/// Map a risk score onto its tier.
pub fn risk_tier_for(score: f64) -> RiskTier {
    if score >= TIER_CRITICAL {
        RiskTier::Critical
    } else if score >= TIER_HIGH {
        RiskTier::High
    } else if score >= TIER_MODERATE {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}
