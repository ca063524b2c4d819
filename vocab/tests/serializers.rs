//! The three artifact formats describe the same graph.

#![cfg(feature = "serializers")]

use owl_facets::serializer::{jsonld::to_json_ld, ntriples::to_ntriples, turtle::to_turtle};
use owl_facets::{FacetVocabulary, ONTOLOGY_COMMENT, SYMBOLIC_FORM_COMMENT};

// 4 ontology + 4 annotation property + 11 facets * 5
const EXPECTED_TRIPLES: usize = 8 + 11 * 5;

/// Predicate-object lines of a block are indented; subjects and prefixes are not.
fn turtle_triples(turtle: &str) -> usize {
    turtle.lines().filter(|l| l.starts_with("  ")).count()
}

fn ntriples_triples(nt: &str) -> usize {
    nt.lines().filter(|l| l.ends_with(" .")).count()
}

/// Every key except `@id` is one triple; all values are single-valued.
fn json_ld_triples(doc: &serde_json::Value) -> usize {
    doc["@graph"]
        .as_array()
        .expect("@graph must be array")
        .iter()
        .map(|node| {
            node.as_object()
                .expect("node must be object")
                .keys()
                .filter(|k| k.as_str() != "@id")
                .count()
        })
        .sum()
}

#[test]
fn formats_emit_the_same_number_of_triples() {
    let vocab = FacetVocabulary::standard();
    let turtle = turtle_triples(&to_turtle(vocab));
    let nt = ntriples_triples(&to_ntriples(vocab));
    let json = json_ld_triples(&to_json_ld(vocab));

    assert_eq!(nt, EXPECTED_TRIPLES);
    assert_eq!(turtle, nt, "Turtle and N-Triples disagree");
    assert_eq!(json, nt, "JSON-LD and N-Triples disagree");
}

#[test]
fn header_comments_appear_in_every_format() {
    let vocab = FacetVocabulary::standard();
    let turtle = to_turtle(vocab);
    let nt = to_ntriples(vocab);
    let json = serde_json::to_string(&to_json_ld(vocab)).expect("serialize");

    for comment in [ONTOLOGY_COMMENT, SYMBOLIC_FORM_COMMENT] {
        assert!(turtle.contains(comment), "Turtle lacks {comment:?}");
        assert!(nt.contains(comment), "N-Triples lacks {comment:?}");
        assert!(json.contains(comment), "JSON-LD lacks {comment:?}");
    }
}
