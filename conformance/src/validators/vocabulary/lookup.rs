//! Lookup validator.
//!
//! Every facet must be found by each of its three keys, and probe strings
//! that are not keys must come back as not-found.

use owl_facets::{Facet, FacetVocabulary};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocabulary/lookup";

/// Strings that must never resolve to a facet.
const PROBES: &[&str] = &[
    "",
    "bogus",
    "MINLENGTH",
    "minlength",
    "xsd:length",
    "length ",
    "=<",
    "http://www.w3.org/2001/XMLSchema#",
    "http://www.w3.org/2001/XMLSchema#langPattern",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#length",
];

/// Validates lookups against `vocabulary`.
#[must_use]
pub fn validate(vocabulary: &FacetVocabulary) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    check_round_trips(&mut report, vocabulary);
    check_probes(&mut report, vocabulary);
    check_display(&mut report, vocabulary);
    report
}

fn check_round_trips(report: &mut ConformanceReport, vocabulary: &FacetVocabulary) {
    let mut broken = Vec::new();
    for &facet in vocabulary.facets() {
        let keys: [(&str, &str, Option<Facet>); 3] = [
            ("uri", facet.uri(), vocabulary.facet_by_uri(facet.uri())),
            (
                "short name",
                facet.short_name(),
                vocabulary.facet_by_short_name(facet.short_name()),
            ),
            (
                "symbolic form",
                facet.symbolic_form(),
                vocabulary.facet_by_symbolic_form(facet.symbolic_form()),
            ),
        ];
        for (kind, key, found) in keys {
            if found != Some(facet) {
                broken.push(format!("{kind} {key:?} -> {found:?}, expected {facet:?}"));
            }
        }
    }

    if broken.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "All {} facets resolve by URI, short name, and symbolic form",
                vocabulary.len()
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Lookup round trips failed",
            broken,
        ));
    }
}

fn check_probes(report: &mut ConformanceReport, vocabulary: &FacetVocabulary) {
    let resolved: Vec<String> = PROBES
        .iter()
        .filter_map(|probe| vocabulary.lookup(probe).map(|f| format!("{probe:?} -> {f:?}")))
        .collect();

    if resolved.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} non-key probes are not found", PROBES.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Non-key probes resolved to facets",
            resolved,
        ));
    }
}

fn check_display(report: &mut ConformanceReport, vocabulary: &FacetVocabulary) {
    let wrong: Vec<String> = vocabulary
        .facets()
        .iter()
        .filter(|f| f.to_string() != f.short_name())
        .map(|f| format!("{f:?} displays as {f}"))
        .collect();

    if wrong.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "Display form is the short name"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Display form differs from short name",
            wrong,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_vocabulary_passes() {
        let report = validate(FacetVocabulary::standard());
        assert!(report.all_passed(), "{:#?}", report.results);
        assert_eq!(report.results.len(), 3);
    }
}
