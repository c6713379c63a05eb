//! # Validate Subcommand
//!
//! Loads contract documents, runs the validator on each, and prints a
//! per-file result plus a summary. Directories are scanned recursively for
//! `*.yaml`, `*.yml` and `*.json` files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use autobots_contract::{is_contract_file, load_contract, ContractValidator, Violation};

use crate::config::CliConfig;
use crate::{EXIT_INVALID, EXIT_OK, EXIT_USAGE};

/// Arguments for the `autobots validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Validate every contract under the configured contracts directory.
    #[arg(long)]
    pub all: bool,

    /// Emit a JSON report on stdout instead of text.
    #[arg(long)]
    pub json: bool,

    /// Contract files or directories to validate.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Outcome for one contract file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub violations: Vec<Violation>,
}

/// Outcome for a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<FileReport>,
}

impl ValidationReport {
    fn from_results(results: Vec<FileReport>) -> Self {
        let passed = results.iter().filter(|r| r.valid).count();
        let failed = results.len() - passed;
        Self {
            valid: failed == 0,
            total: results.len(),
            passed,
            failed,
            results,
        }
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 on success, 1 on validation failure, 2 on usage error.
pub fn run_validate(args: &ValidateArgs, config: &CliConfig) -> Result<u8> {
    if !args.all && args.paths.is_empty() {
        eprintln!("Usage: autobots validate [--all] [--json] [PATH...]");
        return Ok(EXIT_USAGE);
    }
    if args.all && !config.contracts_dir.is_dir() {
        tracing::error!(
            dir = %config.contracts_dir.display(),
            "contracts directory not found; check contracts_dir in the config file"
        );
        return Ok(EXIT_USAGE);
    }

    let files = collect_targets(args, config);
    tracing::info!(files = files.len(), "validating contracts");

    let validator = ContractValidator::new();
    let results: Vec<FileReport> = files
        .iter()
        .map(|path| validate_file(&validator, path, config))
        .collect();
    let report = ValidationReport::from_results(results);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&report);
    }

    Ok(if report.valid { EXIT_OK } else { EXIT_INVALID })
}

/// Expand the requested paths into a sorted, de-duplicated file list.
fn collect_targets(args: &ValidateArgs, config: &CliConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if args.all {
        files.extend(find_contract_files(&config.contracts_dir));
    }

    for path in &args.paths {
        if path.is_dir() {
            files.extend(find_contract_files(path));
        } else {
            // Missing files are kept so they surface as load failures.
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    files
}

fn validate_file(validator: &ContractValidator, path: &Path, config: &CliConfig) -> FileReport {
    let shown = path.display().to_string();

    let contract = match load_contract(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!(path = %shown, error = %e, "failed to load contract");
            return FileReport {
                path: shown,
                valid: false,
                error: Some(e.to_string()),
                violations: Vec::new(),
            };
        }
    };

    if let Err(e) = validator.validate(&contract) {
        let violations = e
            .violations()
            .map(|v| v.violations().to_vec())
            .unwrap_or_default();
        return FileReport {
            path: shown,
            valid: false,
            error: Some(e.to_string()),
            violations,
        };
    }

    if config.fail_on_draft && contract.is_draft() {
        return FileReport {
            path: shown,
            valid: false,
            error: Some("contract is marked as draft (fail_on_draft is set)".to_string()),
            violations: Vec::new(),
        };
    }

    FileReport {
        path: shown,
        valid: true,
        error: None,
        violations: Vec::new(),
    }
}

fn print_text_report(report: &ValidationReport) {
    for result in &report.results {
        if result.valid {
            println!("OK: {}", result.path);
            continue;
        }
        println!("FAIL: {}", result.path);
        if let Some(error) = &result.error {
            for line in error.lines() {
                println!("  {line}");
            }
        }
    }

    println!("Contracts: {}/{} passed", report.passed, report.total);
    if report.failed > 0 {
        println!(
            "\n{} contract(s) failed validation out of {} total.",
            report.failed, report.total
        );
    }
}

/// Recursively find contract documents under a directory, sorted.
pub fn find_contract_files(dir: &Path) -> Vec<PathBuf> {
    let mut results = Vec::new();
    walk_for_contracts(dir, &mut results);
    results.sort();
    results
}

fn walk_for_contracts(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during contract walk"
            );
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        // Symlinked directories are not followed, so link cycles cannot recurse.
        let is_dir = match entry.file_type() {
            Ok(ft) => ft.is_dir(),
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "failed to stat entry");
                continue;
            }
        };
        let path = entry.path();
        if is_dir {
            walk_for_contracts(&path, acc);
        } else if is_contract_file(&path) {
            acc.push(path);
        }
    }
}
