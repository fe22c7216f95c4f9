//! CLI entry point for cuiguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `cuiguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use cuiguard_app::{
    ExplainOutput, FileStore, InspectInput, inspect_dir, render_delta_markdown, render_markdown,
    risk_exit_code, run_compare, run_explain, run_inspection, run_verify, serialize_report,
    verify_exit_code,
};
use cuiguard_settings::Overrides;

#[derive(Parser, Debug)]
#[command(
    name = "cuiguard",
    version,
    about = "CUI content inspection with compliance mapping and evidence sealing"
)]
struct Cli {
    /// Path to the cuiguard config TOML.
    #[arg(long, default_value = "cuiguard.toml")]
    config: Utf8PathBuf,

    /// Directory holding persisted findings and evidence records.
    #[arg(long, default_value = ".cuiguard")]
    data_dir: Utf8PathBuf,

    /// Override profile (standard|defense or custom).
    #[arg(long)]
    profile: Option<String>,

    /// Override excerpt storage (true|false).
    #[arg(long)]
    store_excerpts: Option<bool>,

    /// Override maximum pattern hits to emit.
    #[arg(long)]
    max_hits: Option<u32>,

    /// Override failing risk tier (moderate|high|critical).
    #[arg(long)]
    fail_on: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inspect a document (or a directory of documents) and record the run.
    Inspect {
        /// Document to inspect (plain text).
        path: Option<Utf8PathBuf>,

        /// Inspect every eligible text file under this directory instead.
        #[arg(long, conflicts_with = "path")]
        dir: Option<Utf8PathBuf>,

        /// Where to write the JSON report (single-document mode).
        #[arg(long, default_value = "artifacts/cuiguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/cuiguard/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Compare two recorded runs (base -> other).
    Compare {
        base_run_id: String,
        other_run_id: String,

        /// Emit the delta as JSON instead of Markdown.
        #[arg(long)]
        json: bool,
    },

    /// Re-verify a sealed artifact against a file's current bytes.
    Verify {
        /// Artifact id (`<run_id>/<artifact_name>`).
        artifact_id: String,
        /// File holding the artifact bytes to check.
        path: Utf8PathBuf,
    },

    /// Explain a CUI category with its control citations.
    Explain {
        /// The category name (e.g. "SSN" or "EXPORT_CONTROL").
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Inspect {
            ref path,
            ref dir,
            ref report_out,
            write_markdown,
            ref markdown_out,
        } => cmd_inspect(
            &cli,
            path.clone(),
            dir.clone(),
            report_out.clone(),
            write_markdown,
            markdown_out.clone(),
        ),
        Commands::Compare {
            ref base_run_id,
            ref other_run_id,
            json,
        } => cmd_compare(&cli, base_run_id, other_run_id, json),
        Commands::Verify {
            ref artifact_id,
            ref path,
        } => cmd_verify(&cli, artifact_id, path),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn overrides(cli: &Cli) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        store_excerpt: cli.store_excerpts,
        max_hits: cli.max_hits,
        fail_on: cli.fail_on.clone(),
    }
}

/// Load config if present; a missing file is allowed (defaults apply).
fn config_text(cli: &Cli) -> String {
    std::fs::read_to_string(&cli.config).unwrap_or_default()
}

fn cmd_inspect(
    cli: &Cli,
    path: Option<Utf8PathBuf>,
    dir: Option<Utf8PathBuf>,
    report_out: Utf8PathBuf,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = config_text(cli);
        let mut runs = FileStore::new(cli.data_dir.clone());
        let mut evidence = FileStore::new(cli.data_dir.clone());

        if let Some(dir) = dir {
            return cmd_inspect_dir(cli, &dir, &cfg_text, &mut runs, &mut evidence);
        }

        let path = path.context("inspect requires a document path or --dir")?;
        let document =
            std::fs::read(&path).with_context(|| format!("read document: {path}"))?;

        let output = run_inspection(
            InspectInput {
                document: &document,
                document_ref: path.to_string(),
                config_text: &cfg_text,
                overrides: overrides(cli),
            },
            &mut runs,
            &mut evidence,
        )?;

        write_text_file(&report_out, &serialize_report(&output.report)?)
            .context("write report json")?;
        if write_markdown {
            write_text_file(&markdown_out, &render_markdown(&output.report))
                .context("write markdown")?;
        }

        eprintln!(
            "cuiguard: run {} recorded, risk {} (score {:.2})",
            output.report.findings.run_id,
            output.report.findings.risk_tier.as_str(),
            output.report.findings.overall_risk_score
        );

        Ok(risk_exit_code(
            output.report.findings.risk_tier,
            output.resolved_config.effective.fail_on,
        ))
    })();

    finish(result)
}

fn cmd_inspect_dir(
    cli: &Cli,
    dir: &Utf8Path,
    cfg_text: &str,
    runs: &mut FileStore,
    evidence: &mut FileStore,
) -> anyhow::Result<i32> {
    let items = inspect_dir(dir, cfg_text, overrides(cli), runs, evidence)?;
    if items.is_empty() {
        eprintln!("cuiguard: no eligible text documents under {dir}");
        return Ok(0);
    }

    let mut failed = false;
    let mut exit = 0;
    for item in &items {
        match &item.outcome {
            Ok(output) => {
                let findings = &output.report.findings;
                println!(
                    "{}\t{}\t{:.2}\t{}",
                    item.path,
                    findings.risk_tier.as_str(),
                    findings.overall_risk_score,
                    findings.run_id
                );
                exit = exit.max(risk_exit_code(
                    findings.risk_tier,
                    output.resolved_config.effective.fail_on,
                ));
            }
            Err(err) => {
                failed = true;
                eprintln!("cuiguard error: {}: {err:#}", item.path);
            }
        }
    }

    Ok(if failed { 1 } else { exit })
}

fn cmd_compare(cli: &Cli, base_run_id: &str, other_run_id: &str, json: bool) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let runs = FileStore::new(cli.data_dir.clone());
        let delta = run_compare(&runs, base_run_id, other_run_id)?;

        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&delta).context("serialize delta")?
            );
        } else {
            print!("{}", render_delta_markdown(&delta));
        }
        Ok(0)
    })();

    finish(result)
}

fn cmd_verify(cli: &Cli, artifact_id: &str, path: &Utf8Path) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let evidence = FileStore::new(cli.data_dir.clone());
        let bytes = std::fs::read(path).with_context(|| format!("read artifact: {path}"))?;

        let outcome = run_verify(&evidence, artifact_id, &bytes).context("verify artifact")?;
        match &outcome {
            cuiguard_app::VerifyResult::Match => println!("MATCH {artifact_id}"),
            cuiguard_app::VerifyResult::Mismatch { expected, actual } => {
                println!("MISMATCH {artifact_id} expected={expected} actual={actual}")
            }
            cuiguard_app::VerifyResult::NotFound => println!("NOT_FOUND {artifact_id}"),
        }
        Ok(verify_exit_code(&outcome))
    })();

    finish(result)
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", cuiguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available,
        } => {
            eprint!("{}", cuiguard_app::format_not_found(&identifier, &available));
            std::process::exit(1);
        }
    }
}

/// Common tail: map the inner exit code or runtime error onto the process.
fn finish(result: anyhow::Result<i32>) -> anyhow::Result<()> {
    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("cuiguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {path}"))?;
    Ok(())
}
