//! The run comparator: two findings documents → a directional delta.

use cuiguard_types::{CuiCategory, Findings, RunDelta};
use std::collections::BTreeMap;

/// Compute the structural delta from `base` to `other`.
///
/// The delta is directional (base → other); comparing a run to itself yields
/// an empty delta.
pub fn compare(base: &Findings, other: &Findings) -> RunDelta {
    let base_counts = category_counts(base);
    let other_counts = category_counts(other);

    let added_categories: Vec<CuiCategory> = other_counts
        .keys()
        .filter(|c| !base_counts.contains_key(*c))
        .copied()
        .collect();
    let removed_categories: Vec<CuiCategory> = base_counts
        .keys()
        .filter(|c| !other_counts.contains_key(*c))
        .copied()
        .collect();

    let mut pattern_count_delta: BTreeMap<CuiCategory, i64> = BTreeMap::new();
    for category in base_counts.keys().chain(other_counts.keys()) {
        pattern_count_delta.entry(*category).or_insert_with(|| {
            let base_n = base_counts.get(category).copied().unwrap_or(0) as i64;
            let other_n = other_counts.get(category).copied().unwrap_or(0) as i64;
            other_n - base_n
        });
    }

    RunDelta {
        base_run_id: base.run_id.clone(),
        compare_run_id: other.run_id.clone(),
        added_categories,
        removed_categories,
        pattern_count_delta,
        risk_score_delta: other.overall_risk_score - base.overall_risk_score,
    }
}

fn category_counts(findings: &Findings) -> BTreeMap<CuiCategory, u32> {
    findings
        .category_scores
        .iter()
        .map(|s| (s.category, s.hit_count))
        .collect()
}
