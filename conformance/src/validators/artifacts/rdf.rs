//! RDF 1.1 / Turtle 1.1 artifact validator.
//!
//! Structural checks on the Turtle and N-Triples artifacts:
//! - Turtle declares the `xsd:` and `rdf:` prefixes and every facet subject
//! - every N-Triples line ends with ` .`
//! - every facet URI is typed `rdf:Property` in N-Triples
//! - both files carry the same number of triples

use std::path::Path;

use anyhow::{Context, Result};
use owl_facets::model::iris;
use owl_facets::{FacetVocabulary, Namespace};

use super::{NTRIPLES_FILE, TURTLE_FILE};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts/rdf";

/// Validates the Turtle and N-Triples artifacts in `artifacts`.
///
/// # Errors
///
/// Returns an error if an artifact exists but cannot be read.
pub fn validate(artifacts: &Path, vocabulary: &FacetVocabulary) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let turtle = read_artifact(artifacts, TURTLE_FILE, &mut report)?;
    if let Some(content) = &turtle {
        validate_turtle(content, vocabulary, &mut report);
    }
    let ntriples = read_artifact(artifacts, NTRIPLES_FILE, &mut report)?;
    if let Some(content) = &ntriples {
        validate_ntriples(content, vocabulary, &mut report);
    }
    if let (Some(turtle), Some(ntriples)) = (&turtle, &ntriples) {
        let counts = (turtle_statement_count(turtle), ntriples_line_count(ntriples));
        check_triple_counts(counts.0, counts.1, &mut report);
    }

    Ok(report)
}

fn read_artifact(
    artifacts: &Path,
    name: &str,
    report: &mut ConformanceReport,
) -> Result<Option<String>> {
    let path = artifacts.join(name);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{name} not found in artifacts directory"),
        ));
        return Ok(None);
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(content))
}

fn validate_turtle(content: &str, vocabulary: &FacetVocabulary, report: &mut ConformanceReport) {
    let mut issues = Vec::new();
    if content.trim().is_empty() {
        issues.push("File is empty".to_owned());
    }
    for ns in Namespace::ALL {
        let decl = format!("@prefix {}:  <{}> .", ns.prefix(), ns.iri());
        if !content.contains(&decl) {
            issues.push(format!("Missing prefix declaration: {decl}"));
        }
    }
    for facet in vocabulary.facets() {
        let subject = format!("{}:{}\n", facet.namespace().prefix(), facet.short_name());
        if !content.contains(&subject) {
            issues.push(format!("No subject for {}", facet.uri()));
        }
    }

    if issues.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{TURTLE_FILE} declares all {} facets ({} bytes)", vocabulary.len(), content.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{TURTLE_FILE} has structural issues"),
            issues,
        ));
    }
}

fn validate_ntriples(content: &str, vocabulary: &FacetVocabulary, report: &mut ConformanceReport) {
    let malformed_lines = content.lines().enumerate().filter(|(_, line)| {
        let trimmed = line.trim();
        !trimmed.is_empty() && !trimmed.starts_with('#') && !trimmed.ends_with(" .")
    });
    let mut malformed: Vec<String> = malformed_lines
        .map(|(i, _)| format!("line {}: does not end with \" .\"", i + 1))
        .collect();
    let triple_count = ntriples_line_count(content);

    if !content.trim().is_empty() && malformed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{NTRIPLES_FILE} is valid N-Triples ({triple_count} triples)"),
        ));
    } else {
        if content.trim().is_empty() {
            malformed.insert(0, "File is empty".to_owned());
        }
        malformed.truncate(10);
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{NTRIPLES_FILE} has malformed lines"),
            malformed,
        ));
    }

    let untyped: Vec<String> = vocabulary
        .facets()
        .iter()
        .filter(|f| {
            let typed = format!("<{}> <{}> <{}> .", f.uri(), iris::RDF_TYPE, iris::RDF_PROPERTY);
            !content.contains(&typed)
        })
        .map(|f| f.uri().to_owned())
        .collect();

    if untyped.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Every facet is typed rdf:Property in N-Triples",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Facets without an rdf:type rdf:Property triple",
            untyped,
        ));
    }
}

/// Counts the predicate-object statements of a Turtle document written in the
/// one-statement-per-indented-line layout the serializer emits.
fn turtle_statement_count(content: &str) -> usize {
    content
        .lines()
        .filter(|line| line.starts_with(char::is_whitespace))
        .map(str::trim_end)
        .filter(|line| line.ends_with(" ;") || line.ends_with(" ."))
        .count()
}

fn ntriples_line_count(content: &str) -> usize {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#') && line.ends_with(" ."))
        .count()
}

fn check_triple_counts(turtle: usize, ntriples: usize, report: &mut ConformanceReport) {
    if turtle == ntriples {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{TURTLE_FILE} and {NTRIPLES_FILE} both carry {ntriples} triples"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{TURTLE_FILE} has {turtle} triples but {NTRIPLES_FILE} has {ntriples}"),
        ));
    }
}
