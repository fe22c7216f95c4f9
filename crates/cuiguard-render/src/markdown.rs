use cuiguard_types::{ReportEnvelope, RunDelta};

pub fn render_markdown(report: &ReportEnvelope) -> String {
    let mut out = String::new();
    let f = &report.findings;

    out.push_str("# Cuiguard inspection report\n\n");
    out.push_str(&format!(
        "- Document: `{}`\n- Risk: **{}** (score {:.2})\n- Hits: {} (emitted) / {} (total)\n\n",
        f.document_ref,
        f.risk_tier.as_str(),
        f.overall_risk_score,
        report.data.hits_emitted,
        report.data.hits_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if f.category_scores.is_empty() {
        out.push_str("No CUI indicators detected.\n");
        return out;
    }

    out.push_str("## Categories\n\n");
    for score in &f.category_scores {
        out.push_str(&format!(
            "- `{}` — {} hit(s), confidence {:.2}\n",
            score.category.as_str(),
            score.hit_count,
            score.confidence
        ));
        if let Some(excerpt) = &score.top_excerpt {
            out.push_str(&format!("  - excerpt: `{}`\n", excerpt));
        }
    }

    out.push_str("\n## Compliance guidance\n\n");
    for citation in &f.compliance_guidance.controls {
        out.push_str(&format!(
            "- [{}] `{}` — {}\n",
            citation.framework.as_str(),
            citation.control_id,
            citation.recommendation
        ));
    }

    out
}

pub fn render_delta_markdown(delta: &RunDelta) -> String {
    let mut out = String::new();

    out.push_str("# Cuiguard run comparison\n\n");
    out.push_str(&format!(
        "- Base: `{}`\n- Compare: `{}`\n- Risk score delta: {:+.2}\n\n",
        delta.base_run_id, delta.compare_run_id, delta.risk_score_delta
    ));

    if delta.is_empty() {
        out.push_str("No structural differences.\n");
        return out;
    }

    if !delta.added_categories.is_empty() {
        out.push_str("## Added categories\n\n");
        for cat in &delta.added_categories {
            out.push_str(&format!("- `{}`\n", cat.as_str()));
        }
        out.push('\n');
    }

    if !delta.removed_categories.is_empty() {
        out.push_str("## Removed categories\n\n");
        for cat in &delta.removed_categories {
            out.push_str(&format!("- `{}`\n", cat.as_str()));
        }
        out.push('\n');
    }

    out.push_str("## Pattern count deltas\n\n");
    for (cat, d) in &delta.pattern_count_delta {
        out.push_str(&format!("- `{}`: {:+}\n", cat.as_str(), d));
    }

    out
}
