use cuiguard_types::{Findings, RiskTier};

/// Render the plain-text recommendations artifact for a run.
///
/// A numbered action list: tier-driven handling steps first, then the
/// deduplicated control recommendations.
pub fn render_recommendations(findings: &Findings) -> String {
    let mut lines: Vec<String> = vec![
        "Cuiguard Recommendations".to_string(),
        "========================".to_string(),
        String::new(),
    ];

    let mut items: Vec<String> = Vec::new();

    if findings.category_scores.is_empty() {
        items.push(
            "No strong CUI indicators detected. Apply standard information handling and validate classification."
                .to_string(),
        );
    } else {
        if findings.risk_tier >= RiskTier::High {
            items.push(
                "Treat as high-risk CUI exposure: quarantine distribution and initiate incident review."
                    .to_string(),
            );
        }
        items.push(
            "Apply appropriate CUI markings per the NARA CUI Registry and the organizational marking standard."
                .to_string(),
        );
        items.push(
            "Document handling scope, boundary, and controls in the SSP; update data flow diagrams."
                .to_string(),
        );
        for citation in &findings.compliance_guidance.controls {
            items.push(format!(
                "[{} {}] {}",
                citation.framework.as_str(),
                citation.control_id,
                citation.recommendation
            ));
        }
    }

    for (i, item) in items.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, item));
    }
    lines.push(String::new());

    lines.join("\n")
}
