//! The compare use case: load two persisted runs and diff them.

use crate::store::FindingsStore;
use anyhow::Context;
use cuiguard_types::RunDelta;

pub fn run_compare(
    runs: &dyn FindingsStore,
    base_run_id: &str,
    other_run_id: &str,
) -> anyhow::Result<RunDelta> {
    let base = runs
        .get(base_run_id)
        .context("load base run")?
        .with_context(|| format!("no findings recorded for run {base_run_id}"))?;
    let other = runs
        .get(other_run_id)
        .context("load compare run")?
        .with_context(|| format!("no findings recorded for run {other_run_id}"))?;

    Ok(cuiguard_engine::compare(&base, &other))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRunStore;
    use cuiguard_types::{CategoryScore, ComplianceGuidance, CuiCategory, Findings, RiskTier};
    use time::macros::datetime;

    fn findings(run_id: &str, ssn_hits: u32) -> Findings {
        Findings {
            run_id: run_id.to_string(),
            document_ref: "doc.txt".to_string(),
            created_at: datetime!(2026-02-01 10:00:00 UTC),
            category_scores: vec![CategoryScore {
                category: CuiCategory::Ssn,
                hit_count: ssn_hits,
                confidence: 1.0,
                top_excerpt: None,
            }],
            overall_risk_score: 3.0,
            risk_tier: RiskTier::Moderate,
            pattern_hits: Vec::new(),
            compliance_guidance: ComplianceGuidance::default(),
        }
    }

    #[test]
    fn compares_two_persisted_runs() {
        let mut runs = MemoryRunStore::default();
        runs.put(&findings("a", 2)).expect("put a");
        runs.put(&findings("b", 5)).expect("put b");

        let delta = run_compare(&runs, "a", "b").expect("compare");
        assert_eq!(delta.pattern_count_delta[&CuiCategory::Ssn], 3);
    }

    #[test]
    fn missing_run_is_an_error() {
        let mut runs = MemoryRunStore::default();
        runs.put(&findings("a", 1)).expect("put a");

        let err = run_compare(&runs, "a", "ghost").expect_err("missing run");
        assert!(format!("{err:#}").contains("ghost"));
    }
}
