//! `facets-conformance` — Validates the facet vocabulary and its built artifacts.
//!
//! Runs the inventory and lookup checks against the in-memory vocabulary,
//! then the JSON-LD, Turtle, and N-Triples checks against the artifacts
//! directory.
//!
//! **Usage:**
//! ```text
//! facets-conformance [--artifacts <path>] [-v]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use owl_facets_conformance::{run_all, ArtifactPaths, Severity};

/// Run the OWL facet conformance suite.
#[derive(Parser)]
#[command(
    name = "facets-conformance",
    version,
    about = "Validate the OWL facet vocabulary and its artifacts"
)]
struct Args {
    /// Path to the built artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    owl_facets_clients::init_tracing(args.verbose);

    let report = run_all(&ArtifactPaths {
        artifacts: args.artifacts,
    })?;

    println!("OWL Facets Conformance Report");
    println!("=============================");
    println!();
    for result in &report.results {
        println!("{result}");
    }

    let failed = report.count(Severity::Failure);
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
