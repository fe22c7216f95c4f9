//! The explain use case: describe a category and its control citations.

use cuiguard_types::{CategoryExplanation, CuiCategory, explain_category};

pub enum ExplainOutput {
    Found(CategoryExplanation),
    NotFound {
        identifier: String,
        available: Vec<&'static str>,
    },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    match CuiCategory::parse(identifier) {
        Some(category) => ExplainOutput::Found(explain_category(category)),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available: CuiCategory::ALL.iter().map(|c| c.as_str()).collect(),
        },
    }
}

pub fn format_explanation(exp: &CategoryExplanation) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", exp.title, "=".repeat(exp.title.len())));
    out.push_str(exp.description);
    out.push_str("\n\nControls:\n");
    for mapping in exp.controls {
        out.push_str(&format!(
            "  [{}] {} — {}\n",
            mapping.framework.as_str(),
            mapping.control_id,
            mapping.recommendation
        ));
    }
    out
}

pub fn format_not_found(identifier: &str, available: &[&str]) -> String {
    let mut out = format!("unknown category: {identifier}\n\nKnown categories:\n");
    for name in available {
        out.push_str(&format!("  {name}\n"));
    }
    out
}
