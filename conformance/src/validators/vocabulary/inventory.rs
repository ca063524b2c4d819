//! Vocabulary inventory validator.
//!
//! Verifies the shape of the facet table:
//! - 11 facets (10 XSD / 1 RDF)
//! - URIs, short names, and symbolic forms each unique
//! - the URI set equals the URIs of the listed facets
//! - every URI is its namespace IRI followed by its short name

use std::collections::{BTreeSet, HashMap};

use owl_facets::{Facet, FacetVocabulary, Namespace};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocabulary/inventory";

/// Expected facet counts.
const EXPECTED_FACETS: usize = 11;
const EXPECTED_XSD_FACETS: usize = 10;
const EXPECTED_RDF_FACETS: usize = 1;

/// Validates the inventory of `vocabulary`.
#[must_use]
pub fn validate(vocabulary: &FacetVocabulary) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    check_count(&mut report, "facets", vocabulary.len(), EXPECTED_FACETS);
    check_count(
        &mut report,
        "XSD facets",
        vocabulary.facets_in(Namespace::Xsd).count(),
        EXPECTED_XSD_FACETS,
    );
    check_count(
        &mut report,
        "RDF facets",
        vocabulary.facets_in(Namespace::Rdf).count(),
        EXPECTED_RDF_FACETS,
    );

    check_unique(&mut report, "URI", vocabulary.facets(), Facet::uri);
    check_unique(&mut report, "short name", vocabulary.facets(), Facet::short_name);
    check_unique(&mut report, "symbolic form", vocabulary.facets(), Facet::symbolic_form);

    check_uri_set(&mut report, vocabulary);
    check_uri_derivation(&mut report, vocabulary);

    report
}

fn check_count(report: &mut ConformanceReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}

fn check_unique(
    report: &mut ConformanceReport,
    label: &str,
    facets: &[Facet],
    key: fn(Facet) -> &'static str,
) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for &facet in facets {
        *seen.entry(key(facet)).or_default() += 1;
    }
    let mut duplicates: Vec<String> = seen
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(k, n)| format!("{k} ({n} facets)"))
        .collect();
    duplicates.sort();

    if duplicates.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Every facet {label} is unique"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("Duplicate facet {label}s"),
            duplicates,
        ));
    }
}

fn check_uri_set(report: &mut ConformanceReport, vocabulary: &FacetVocabulary) {
    let listed: BTreeSet<&str> = vocabulary.facets().iter().map(|f| f.uri()).collect();
    if &listed == vocabulary.facet_uris() {
        report.push(TestResult::pass(
            VALIDATOR,
            "URI set matches the listed facets",
        ));
    } else {
        let details = listed
            .symmetric_difference(vocabulary.facet_uris())
            .map(|uri| (*uri).to_owned())
            .collect();
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "URI set differs from the listed facets",
            details,
        ));
    }
}

fn check_uri_derivation(report: &mut ConformanceReport, vocabulary: &FacetVocabulary) {
    let mismatched: Vec<String> = vocabulary
        .facets()
        .iter()
        .filter(|f| {
            let rebuilt = format!("{}{}", f.namespace().iri(), f.short_name());
            f.uri() != rebuilt
        })
        .map(|f| f.uri().to_owned())
        .collect();

    if mismatched.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Every facet URI is namespace IRI + short name",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Facet URIs not derived from namespace and short name",
            mismatched,
        ));
    }
}
