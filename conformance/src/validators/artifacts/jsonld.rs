//! JSON-LD 1.1 artifact validator.
//!
//! Verifies that `owl-facets.json` is well-formed:
//! - `@context` declares the standard prefixes
//! - `@graph` is an array and every node has an `@id`
//! - every facet URI appears as a node with the right label and symbolic form

use std::path::Path;

use anyhow::{Context, Result};
use owl_facets::FacetVocabulary;
use serde_json::Value;

use super::JSON_LD_FILE;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts/jsonld";

/// Prefixes the `@context` must declare.
const REQUIRED_PREFIXES: &[&str] = &["owl", "rdf", "rdfs", "xsd", "facets"];

/// Validates the JSON-LD artifact in `artifacts` against `vocabulary`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn validate(artifacts: &Path, vocabulary: &FacetVocabulary) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let json_path = artifacts.join(JSON_LD_FILE);
    if !json_path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{JSON_LD_FILE} not found in artifacts directory"),
        ));
        return Ok(report);
    }

    let content = std::fs::read_to_string(&json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", json_path.display()))?;

    check_context(&value, &mut report);
    if let Some(graph) = check_graph(&value, &mut report) {
        check_facet_nodes(graph, vocabulary, &mut report);
    }

    Ok(report)
}

fn check_context(value: &Value, report: &mut ConformanceReport) {
    let Some(context) = value.get("@context") else {
        report.push(TestResult::fail(VALIDATOR, "JSON-LD document missing @context"));
        return;
    };

    let missing: Vec<String> = REQUIRED_PREFIXES
        .iter()
        .filter(|p| context.get(**p).is_none())
        .map(|p| (*p).to_owned())
        .collect();

    if missing.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "All required prefixes present in @context"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Missing prefixes in @context",
            missing,
        ));
    }
}

fn check_graph<'a>(value: &'a Value, report: &mut ConformanceReport) -> Option<&'a [Value]> {
    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(VALIDATOR, "JSON-LD document missing @graph array"));
        return None;
    };

    let missing_id = graph.iter().filter(|node| node.get("@id").is_none()).count();
    if missing_id == 0 {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("@graph has {} nodes, all with @id", graph.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{missing_id} nodes in @graph are missing @id"),
        ));
    }
    Some(graph)
}

fn check_facet_nodes(graph: &[Value], vocabulary: &FacetVocabulary, report: &mut ConformanceReport) {
    let mut problems = Vec::new();
    for facet in vocabulary.facets() {
        let Some(node) = graph.iter().find(|n| n["@id"] == facet.uri()) else {
            problems.push(format!("{}: no node", facet.uri()));
            continue;
        };
        if node["rdfs:label"] != facet.short_name() {
            problems.push(format!("{}: label is {}", facet.uri(), node["rdfs:label"]));
        }
        if node["facets:symbolicForm"] != facet.symbolic_form() {
            problems.push(format!(
                "{}: symbolic form is {}",
                facet.uri(),
                node["facets:symbolicForm"]
            ));
        }
    }

    if problems.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("All {} facets present with label and symbolic form", vocabulary.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Facet nodes missing or inconsistent",
            problems,
        ));
    }
}
