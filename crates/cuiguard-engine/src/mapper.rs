//! The compliance mapper: category scores → framework control guidance.

use crate::error::UnmappedCategoryError;
use cuiguard_types::{
    CategoryScore, ComplianceGuidance, ControlCitation, control_mappings,
};
use std::collections::BTreeSet;

/// Build guidance for every category present in `scores`.
///
/// Pure lookup over the static registry. The per-category lists are kept
/// verbatim; the union list collapses duplicate `(framework, control_id)`
/// pairs, first occurrence (in ascending category order) wins. An empty
/// registry entry is version skew and is surfaced, never defaulted to empty
/// guidance.
pub fn map_guidance(scores: &[CategoryScore]) -> Result<ComplianceGuidance, UnmappedCategoryError> {
    let mut guidance = ComplianceGuidance::default();
    let mut seen: BTreeSet<(cuiguard_types::Framework, &'static str)> = BTreeSet::new();

    for score in scores {
        let mappings = control_mappings(score.category);
        if mappings.is_empty() {
            return Err(UnmappedCategoryError {
                category: score.category,
            });
        }

        let entries: Vec<ControlCitation> = mappings
            .iter()
            .map(|m| ControlCitation {
                framework: m.framework,
                control_id: m.control_id.to_string(),
                recommendation: m.recommendation.to_string(),
            })
            .collect();

        for m in mappings {
            if seen.insert((m.framework, m.control_id)) {
                guidance.controls.push(ControlCitation {
                    framework: m.framework,
                    control_id: m.control_id.to_string(),
                    recommendation: m.recommendation.to_string(),
                });
            }
        }

        guidance.by_category.insert(score.category, entries);
    }

    Ok(guidance)
}
