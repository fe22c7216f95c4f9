//! Property-based tests for the engine crate.
//!
//! These verify the documented laws:
//! - scan ordering determinism
//! - risk-score recomputation (round-trip) from category scores
//! - excerpt policy never changes counts or scores
//! - run-comparison identity and antisymmetry

use crate::analysis::{AnalysisContext, analyze, risk_score, risk_tier_for};
use crate::compare::compare;
use crate::matcher::scan_text;
use crate::policy::{InspectionPolicy, RulesetProfile};
use crate::ruleset::Ruleset;
use cuiguard_types::{CategoryScore, ComplianceGuidance, CuiCategory, Findings};
use proptest::prelude::*;
use time::macros::datetime;

/// Text fragments that exercise every rule group, mixed with noise.
fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("123-45-6789".to_string()),
        Just("987-65-4321".to_string()),
        Just("1234567890".to_string()),
        Just("alice@example.gov".to_string()),
        Just("(555) 867-5309".to_string()),
        Just("ITAR".to_string()),
        Just("EAR".to_string()),
        Just("CUI//SP-PRIV".to_string()),
        Just("for official use only".to_string()),
        Just("do not distribute".to_string()),
        Just("proprietary".to_string()),
        Just("trade secret".to_string()),
        "[a-z ]{0,40}",
    ]
}

fn arb_document() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_fragment(), 0..12).prop_map(|parts| parts.join(" "))
}

fn arb_category() -> impl Strategy<Value = CuiCategory> {
    prop::sample::select(CuiCategory::ALL.to_vec())
}

fn arb_category_scores() -> impl Strategy<Value = Vec<CategoryScore>> {
    prop::collection::btree_map(arb_category(), (1u32..20, 0.0f64..=1.0), 0..6).prop_map(|m| {
        m.into_iter()
            .map(|(category, (hit_count, confidence))| CategoryScore {
                category,
                hit_count,
                confidence,
                top_excerpt: None,
            })
            .collect()
    })
}

fn arb_findings() -> impl Strategy<Value = Findings> {
    ("[a-z0-9]{6}", arb_category_scores()).prop_map(|(run_id, category_scores)| {
        let overall_risk_score = risk_score(&category_scores);
        Findings {
            run_id,
            document_ref: "doc.txt".to_string(),
            created_at: datetime!(2026-02-01 10:00:00 UTC),
            overall_risk_score,
            risk_tier: risk_tier_for(overall_risk_score),
            category_scores,
            pattern_hits: Vec::new(),
            compliance_guidance: ComplianceGuidance::default(),
        }
    })
}

fn standard() -> Ruleset {
    Ruleset::load(RulesetProfile::Standard).expect("load standard ruleset")
}

fn ctx() -> AnalysisContext {
    AnalysisContext {
        run_id: "prop-run".to_string(),
        document_ref: "doc.txt".to_string(),
        created_at: datetime!(2026-02-01 10:00:00 UTC),
    }
}

proptest! {
    /// Scanning the same text twice yields byte-identical hit sequences in
    /// ascending (span.start, rule_id) order.
    #[test]
    fn scan_is_deterministic_and_ordered(doc in arb_document()) {
        let ruleset = standard();
        let first = scan_text(&doc, &ruleset, true);
        let second = scan_text(&doc, &ruleset, true);
        prop_assert_eq!(&first, &second);

        for pair in first.windows(2) {
            let ordered = pair[0].span.start < pair[1].span.start
                || (pair[0].span.start == pair[1].span.start
                    && pair[0].rule_id <= pair[1].rule_id);
            prop_assert!(ordered, "hits out of order: {:?}", pair);
        }
    }

    /// Recomputing the overall score from category scores reproduces the
    /// stored value exactly, for any analyzed document.
    #[test]
    fn risk_score_round_trips(doc in arb_document()) {
        let report = analyze(doc.as_bytes(), &standard(), &InspectionPolicy::standard(), ctx())
            .expect("analyze");
        let f = &report.findings;
        prop_assert_eq!(risk_score(&f.category_scores), f.overall_risk_score);
        prop_assert_eq!(risk_tier_for(f.overall_risk_score), f.risk_tier);
    }

    /// The excerpt flag changes stored text only: counts, confidences, and
    /// the overall score are identical either way.
    #[test]
    fn excerpt_policy_never_changes_scores(doc in arb_document()) {
        let ruleset = standard();
        let mut with = InspectionPolicy::standard();
        with.store_excerpt = true;
        let mut without = InspectionPolicy::standard();
        without.store_excerpt = false;

        let a = analyze(doc.as_bytes(), &ruleset, &with, ctx()).expect("analyze with excerpts");
        let b = analyze(doc.as_bytes(), &ruleset, &without, ctx()).expect("analyze metadata-only");

        prop_assert_eq!(a.findings.overall_risk_score, b.findings.overall_risk_score);
        prop_assert_eq!(a.findings.category_scores.len(), b.findings.category_scores.len());
        for (x, y) in a.findings.category_scores.iter().zip(&b.findings.category_scores) {
            prop_assert_eq!(x.category, y.category);
            prop_assert_eq!(x.hit_count, y.hit_count);
            prop_assert_eq!(x.confidence, y.confidence);
        }
        prop_assert!(b.findings.pattern_hits.iter().all(|h| h.matched_text.is_none()));
    }

    /// Comparing any findings document to itself yields an empty delta.
    #[test]
    fn self_comparison_is_identity(f in arb_findings()) {
        let delta = compare(&f, &f);
        prop_assert!(delta.added_categories.is_empty());
        prop_assert!(delta.removed_categories.is_empty());
        prop_assert!(delta.pattern_count_delta.values().all(|d| *d == 0));
        prop_assert_eq!(delta.risk_score_delta, 0.0);
    }

    /// Per-category count deltas are antisymmetric under direction reversal.
    #[test]
    fn comparison_counts_are_antisymmetric(a in arb_findings(), b in arb_findings()) {
        let forward = compare(&a, &b);
        let backward = compare(&b, &a);

        prop_assert_eq!(forward.pattern_count_delta.len(), backward.pattern_count_delta.len());
        for (category, delta) in &forward.pattern_count_delta {
            prop_assert_eq!(*delta, -backward.pattern_count_delta[category]);
        }
        prop_assert_eq!(forward.added_categories, backward.removed_categories);
        prop_assert_eq!(forward.removed_categories, backward.added_categories);
    }

    /// Category scores in analyzed findings are strictly ascending, and every
    /// hit references a rule in the active set.
    #[test]
    fn analyzed_findings_are_well_formed(doc in arb_document()) {
        let ruleset = standard();
        let report = analyze(doc.as_bytes(), &ruleset, &InspectionPolicy::standard(), ctx())
            .expect("analyze");
        let f = &report.findings;

        for pair in f.category_scores.windows(2) {
            prop_assert!(pair[0].category < pair[1].category);
        }
        for score in &f.category_scores {
            prop_assert!(score.hit_count >= 1);
            prop_assert!(score.confidence > 0.0 && score.confidence <= 1.0);
        }
        for hit in &f.pattern_hits {
            prop_assert!(ruleset.rule(&hit.rule_id).is_some());
        }
    }
}
