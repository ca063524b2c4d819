//! Conformance suite for the OWL facet vocabulary.
//!
//! Checks the in-memory facet table and the RDF artifacts built from it.
//!
//! # Conformance Scope
//!
//! | Target | Standard |
//! |--------|----------|
//! | Facet table | 11 OWL 2 facets, unique keys, derived URIs |
//! | Lookup | exact-match by every key, not-found for anything else |
//! | JSON-LD artifact | JSON-LD 1.1 structure |
//! | Turtle / N-Triples artifacts | RDF 1.1, Turtle 1.1 structure |
//!
//! # Entry Point
//!
//! ```no_run
//! use owl_facets_conformance::{run_all, ArtifactPaths};
//! use std::path::PathBuf;
//!
//! let paths = ArtifactPaths {
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use owl_facets::FacetVocabulary;

pub use report::{ConformanceReport, Severity, TestResult};

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    /// Directory containing `owl-facets.json`, `owl-facets.ttl`, and `owl-facets.nt`.
    pub artifacts: std::path::PathBuf,
}

/// Runs all validators against the standard vocabulary and returns the
/// aggregated report.
///
/// Validators run in this order:
/// 1. Vocabulary inventory
/// 2. Lookup behaviour
/// 3. JSON-LD artifact
/// 4. Turtle and N-Triples artifacts
///
/// # Errors
///
/// Returns an error only if an artifact exists but cannot be read or parsed.
pub fn run_all(paths: &ArtifactPaths) -> anyhow::Result<ConformanceReport> {
    let vocabulary = FacetVocabulary::standard();
    let mut report = ConformanceReport::new();

    tracing::info!(artifacts = %paths.artifacts.display(), "running conformance suite");

    report.extend(validators::vocabulary::inventory::validate(vocabulary));
    report.extend(validators::vocabulary::lookup::validate(vocabulary));
    report.extend(validators::artifacts::jsonld::validate(&paths.artifacts, vocabulary)?);
    report.extend(validators::artifacts::rdf::validate(&paths.artifacts, vocabulary)?);

    tracing::info!(
        checks = report.results.len(),
        failures = report.failure_count(),
        "conformance suite finished"
    );
    Ok(report)
}
