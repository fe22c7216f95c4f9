//! End-to-end CLI integration tests against the fixture documents in
//! `tests/fixtures/` at the repo root: inspect, verify, compare, batch.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn cuiguard_cmd() -> Command {
    Command::cargo_bin("cuiguard").expect("cuiguard binary not found - run `cargo build` first")
}

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("cuiguard-cli crate should have a parent directory")
        .parent()
        .expect("crates directory should have a parent (repo root)")
        .join("tests")
        .join("fixtures")
}

struct InspectRun {
    tmp: TempDir,
    report: Value,
}

impl InspectRun {
    fn data_dir(&self) -> PathBuf {
        self.tmp.path().join("data")
    }

    fn run_id(&self) -> String {
        self.report["findings"]["run_id"]
            .as_str()
            .expect("run_id in report")
            .to_string()
    }

    fn findings_file(&self) -> PathBuf {
        self.data_dir()
            .join("findings")
            .join(format!("{}.json", self.run_id()))
    }
}

/// Inspect a fixture into a fresh temp data dir, expecting `code`.
fn inspect_fixture(fixture: &str, extra_args: &[&str], code: i32) -> InspectRun {
    let tmp = TempDir::new().expect("create temp dir");
    let report_out = tmp.path().join("report.json");

    let mut cmd = cuiguard_cmd();
    cmd.arg("--data-dir")
        .arg(tmp.path().join("data"))
        .args(extra_args)
        .arg("inspect")
        .arg(fixtures_dir().join(fixture))
        .arg("--report-out")
        .arg(&report_out);
    cmd.assert().code(code);

    let text = std::fs::read_to_string(&report_out).expect("read report");
    let report: Value = serde_json::from_str(&text).expect("parse report");
    InspectRun { tmp, report }
}

fn inspect_into(run: &InspectRun, fixture: &str) -> Value {
    let report_out = run.tmp.path().join("report2.json");
    cuiguard_cmd()
        .arg("--data-dir")
        .arg(run.data_dir())
        .arg("inspect")
        .arg(fixtures_dir().join(fixture))
        .arg("--report-out")
        .arg(&report_out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&report_out).expect("read report");
    serde_json::from_str(&text).expect("parse report")
}

fn data_dir_arg(dir: &Path) -> String {
    dir.to_string_lossy().into_owned()
}

#[test]
fn clean_document_passes_with_empty_findings() {
    let run = inspect_fixture("clean.txt", &[], 0);
    assert_eq!(run.report["schema"], "cuiguard.report.v1");
    assert_eq!(run.report["findings"]["risk_tier"], "LOW");
    assert_eq!(run.report["findings"]["overall_risk_score"], 0.0);
    assert_eq!(
        run.report["findings"]["category_scores"]
            .as_array()
            .expect("category_scores array")
            .len(),
        0
    );
}

#[test]
fn ssn_and_itar_are_both_detected() {
    let run = inspect_fixture("ssn_itar.txt", &[], 0);
    let scores = run.report["findings"]["category_scores"]
        .as_array()
        .expect("category_scores array");
    let cats: Vec<&str> = scores
        .iter()
        .map(|s| s["category"].as_str().expect("category"))
        .collect();
    assert_eq!(cats, vec!["SSN", "EXPORT_CONTROL"]);
    for score in scores {
        assert_eq!(score["hit_count"], 1);
    }
    // Guidance present for both categories.
    for cat in ["SSN", "EXPORT_CONTROL"] {
        let entries = &run.report["findings"]["compliance_guidance"]["by_category"][cat];
        assert!(
            !entries.as_array().expect("guidance entries").is_empty(),
            "guidance missing for {cat}"
        );
    }
}

#[test]
fn fail_on_threshold_drives_exit_code() {
    // Moderate-tier document: passes by default, fails with --fail-on moderate.
    inspect_fixture("marked_cui.txt", &[], 0);
    inspect_fixture("marked_cui.txt", &["--fail-on", "moderate"], 2);
}

#[test]
fn defense_profile_detects_contract_data() {
    let standard = inspect_fixture("defense_contract.txt", &[], 0);
    assert_eq!(
        standard.report["findings"]["category_scores"]
            .as_array()
            .expect("scores")
            .len(),
        0,
        "standard profile should not match contract identifiers"
    );

    let defense = inspect_fixture("defense_contract.txt", &["--profile", "defense"], 0);
    let cats: Vec<&str> = defense.report["findings"]["category_scores"]
        .as_array()
        .expect("scores")
        .iter()
        .map(|s| s["category"].as_str().expect("category"))
        .collect();
    assert!(cats.contains(&"CONTRACT_NUMBER"));
    assert!(cats.contains(&"CYBER_THREAT"));
}

#[test]
fn metadata_only_mode_emits_no_excerpts() {
    let run = inspect_fixture("ssn_itar.txt", &["--store-excerpts", "false"], 0);
    let hits = run.report["findings"]["pattern_hits"]
        .as_array()
        .expect("pattern_hits array");
    assert_eq!(hits.len(), 2);
    for hit in hits {
        assert!(
            hit.get("matched_text").is_none(),
            "matched_text should be absent in metadata-only mode"
        );
    }
    // Counts are not suppressed by the excerpt flag.
    assert_eq!(run.report["findings"]["category_scores"][0]["hit_count"], 1);
}

#[test]
fn sealed_findings_artifact_verifies_and_detects_tamper() {
    let run = inspect_fixture("ssn_itar.txt", &[], 0);
    let artifact_id = format!("{}/findings.json", run.run_id());
    let findings_file = run.findings_file();

    cuiguard_cmd()
        .args(["--data-dir", &data_dir_arg(&run.data_dir())])
        .arg("verify")
        .arg(&artifact_id)
        .arg(&findings_file)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("MATCH"));

    // Flip one byte and verify again.
    let mut bytes = std::fs::read(&findings_file).expect("read findings file");
    bytes[0] ^= 0x01;
    let tampered = run.tmp.path().join("tampered.json");
    std::fs::write(&tampered, &bytes).expect("write tampered file");

    cuiguard_cmd()
        .args(["--data-dir", &data_dir_arg(&run.data_dir())])
        .arg("verify")
        .arg(&artifact_id)
        .arg(&tampered)
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("MISMATCH"));

    cuiguard_cmd()
        .args(["--data-dir", &data_dir_arg(&run.data_dir())])
        .arg("verify")
        .arg("ghost-run/findings.json")
        .arg(&findings_file)
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("NOT_FOUND"));
}

#[test]
fn compare_reports_added_categories_and_identity() {
    let base = inspect_fixture("clean.txt", &[], 0);
    let other = inspect_into(&base, "ssn_itar.txt");
    let other_run_id = other["findings"]["run_id"].as_str().expect("run id");

    let output = cuiguard_cmd()
        .args(["--data-dir", &data_dir_arg(&base.data_dir())])
        .args(["compare", &base.run_id(), other_run_id, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let delta: Value = serde_json::from_slice(&output).expect("parse delta");
    let added: Vec<&str> = delta["added_categories"]
        .as_array()
        .expect("added array")
        .iter()
        .map(|v| v.as_str().expect("category"))
        .collect();
    assert_eq!(added, vec!["SSN", "EXPORT_CONTROL"]);
    assert!(delta["risk_score_delta"].as_f64().expect("delta") > 0.0);

    // A run compared with itself renders as no differences.
    cuiguard_cmd()
        .args(["--data-dir", &data_dir_arg(&base.data_dir())])
        .args(["compare", &base.run_id(), &base.run_id()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No structural differences"));
}

#[test]
fn compare_unknown_run_fails() {
    let base = inspect_fixture("clean.txt", &[], 0);
    cuiguard_cmd()
        .args(["--data-dir", &data_dir_arg(&base.data_dir())])
        .args(["compare", &base.run_id(), "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn repeat_inspections_normalize_to_identical_reports() {
    let first = inspect_fixture("ssn_itar.txt", &[], 0);
    let second = inspect_into(&first, "ssn_itar.txt");

    let norm_a = cuiguard_test_util::normalize_report(first.report.clone());
    let norm_b = cuiguard_test_util::normalize_report(second);
    assert_eq!(norm_a, norm_b);
    assert_eq!(
        norm_a["findings"]["run_id"],
        cuiguard_test_util::RUN_ID_PLACEHOLDER
    );
}

#[test]
fn batch_mode_lists_each_document() {
    let tmp = TempDir::new().expect("create temp dir");
    cuiguard_cmd()
        .arg("--data-dir")
        .arg(tmp.path().join("data"))
        .arg("inspect")
        .arg("--dir")
        .arg(fixtures_dir().join("batch"))
        .assert()
        .code(0)
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("b.md"));
}
