// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # Shamir Recover
//!
//! Entry point for the `shamir-recover` binary. Parses CLI arguments,
//! initializes logging, then reconstructs one secret per test-case file.
//!
//! Files are processed independently: a file that fails to load or
//! reconstruct is logged to stderr and the rest still run. Stdout carries
//! only recovered secrets.

mod cli;
mod logging;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use shamir_recovery::input::TestCase;
use shamir_recovery::{Mode, Reconstructor, Secret};

use cli::RecoverCli;

fn main() -> Result<ExitCode> {
    let cli = RecoverCli::parse();
    logging::init_logging("shamir_cli=info,shamir_recovery=info", cli.log_format);

    let reconstructor = Reconstructor::new().prime_margin(cli.prime_margin);
    tracing::debug!(mode = ?cli.mode(), prime_margin = cli.prime_margin, "starting shamir-recover");

    let failures = run(&cli, &reconstructor, &mut std::io::stdout().lock())?;
    if failures > 0 {
        tracing::warn!(failures, "some inputs could not be reconstructed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Reconstructs every input file, writing one line per recovered secret to
/// `out`. Failures go to the log only. Returns the number of failed files.
fn run(cli: &RecoverCli, reconstructor: &Reconstructor, out: &mut impl Write) -> Result<usize> {
    let mode = cli.mode();
    let mut failures = 0usize;

    for file in cli.input_files() {
        match recover_file(reconstructor, &file, &mode) {
            Ok(secret) => writeln!(out, "{}", render(&file, &secret, cli.json)?)
                .context("failed to write output")?,
            Err(e) => {
                failures += 1;
                tracing::error!(file = %file.display(), error = %format!("{:#}", e), "reconstruction failed");
            }
        }
    }
    Ok(failures)
}

/// Loads one test case and reconstructs its secret.
fn recover_file(reconstructor: &Reconstructor, path: &Path, mode: &Mode) -> Result<Secret> {
    let test_case = TestCase::load(path)
        .with_context(|| format!("failed to load test case {}", path.display()))?;

    let secret = reconstructor
        .reconstruct(&test_case.request(mode.clone()))
        .with_context(|| format!("failed to reconstruct secret for {}", path.display()))?;

    tracing::info!(
        file = %path.display(),
        k = test_case.k,
        shares = test_case.points.len(),
        "secret reconstructed"
    );
    Ok(secret)
}

/// One line of `--json` output. Big integers are rendered as decimal strings
/// so no JSON consumer can round them.
#[derive(Debug, Serialize)]
struct Report {
    file: String,
    secret: String,
    prime: Option<String>,
}

/// Formats a reconstructed secret for stdout.
fn render(file: &Path, secret: &Secret, json: bool) -> Result<String> {
    if json {
        let report = Report {
            file: file.display().to_string(),
            secret: secret.value.to_string(),
            prime: secret.modulus.as_ref().map(ToString::to_string),
        };
        return serde_json::to_string(&report).context("failed to serialize report");
    }

    Ok(match &secret.modulus {
        Some(p) => format!(
            "Secret (mod p) for {}: {}  where p={}",
            file.display(),
            secret.value,
            p
        ),
        None => format!("Secret for {}: {}", file.display(), secret.value),
    })
}
