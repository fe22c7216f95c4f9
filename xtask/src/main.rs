//! Developer tasks (schema generation and conformance checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            std::env::current_dir().expect("Cannot determine current directory")
        });

    if manifest_dir.ends_with("xtask") {
        manifest_dir
            .parent()
            .expect("xtask has no parent")
            .to_path_buf()
    } else {
        manifest_dir
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(cuiguard_types::ReportEnvelope)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(cuiguard_settings::CuiguardConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "cuiguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "cuiguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();

    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut all_match = true;
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);

        if !path.exists() {
            missing.push(spec.filename);
            all_match = false;
            continue;
        }

        let schema = (spec.generate)();
        let expected = serialize_schema(&schema)?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        if expected != actual {
            mismatched.push(spec.filename);
            all_match = false;
        }
    }

    if all_match {
        println!("All schemas are up to date.");
        Ok(())
    } else {
        if !missing.is_empty() {
            eprintln!("Missing schemas:");
            for name in &missing {
                eprintln!("  - {}", name);
            }
        }
        if !mismatched.is_empty() {
            eprintln!("Schemas out of date:");
            for name in &mismatched {
                eprintln!("  - {}", name);
            }
        }
        eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
        bail!("Schema validation failed")
    }
}

/// Build a representative report instance for conformance checks.
fn sample_report() -> cuiguard_types::ReportEnvelope {
    use cuiguard_types::{
        CategoryScore, ComplianceGuidance, CuiCategory, Findings, InspectionData, PatternHit,
        ReportEnvelope, RiskTier, SCHEMA_REPORT_V1, Span, ToolMeta,
    };

    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "cuiguard".to_string(),
            version: "0.0.0".to_string(),
        },
        started_at: time::macros::datetime!(2026-01-01 00:00:00 UTC),
        finished_at: time::macros::datetime!(2026-01-01 00:00:01 UTC),
        findings: Findings {
            run_id: "sample-1".to_string(),
            document_ref: "sample.txt".to_string(),
            created_at: time::macros::datetime!(2026-01-01 00:00:00 UTC),
            category_scores: vec![CategoryScore {
                category: CuiCategory::Ssn,
                hit_count: 1,
                confidence: 0.5,
                top_excerpt: Some("123-45-6789".to_string()),
            }],
            overall_risk_score: 1.5,
            risk_tier: RiskTier::Low,
            pattern_hits: vec![PatternHit {
                rule_id: "pii.ssn".to_string(),
                category: CuiCategory::Ssn,
                span: Span { start: 0, end: 11 },
                matched_text: Some("123-45-6789".to_string()),
            }],
            compliance_guidance: ComplianceGuidance::default(),
        },
        data: InspectionData {
            profile: "standard".to_string(),
            document_sha256: "0".repeat(64),
            bytes_scanned: 11,
            rules_applied: 10,
            hits_total: 1,
            hits_emitted: 1,
            truncated_reason: None,
        },
    }
}

/// Validate a generated sample report against the generated report schema.
fn conform() -> anyhow::Result<()> {
    let schema_value =
        serde_json::to_value(generate_report_schema()).context("serialize schema")?;
    let validator = jsonschema::validator_for(&schema_value).context("compile schema")?;

    let instance = serde_json::to_value(sample_report()).context("serialize sample report")?;
    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| format!("{}: {}", e.instance_path(), e))
        .collect();

    if errors.is_empty() {
        println!("Sample report conforms to cuiguard.report.v1.");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Report conformance failed")
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  conform           Validate a sample report against the report schema");
}

fn main() -> anyhow::Result<()> {
    let cmd = std::env::args().nth(1).unwrap_or_else(|| "help".to_string());

    match cmd.as_str() {
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("unknown xtask command: {other}\n");
            print_help();
            bail!("unknown command")
        }
    }
}
