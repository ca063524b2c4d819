//! Lookup behaviour of the standard facet vocabulary.

use owl_facets::{Facet, FacetVocabulary, Namespace};

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

#[test]
fn every_key_finds_its_facet() {
    let vocab = FacetVocabulary::standard();
    for &facet in vocab.facets() {
        assert_eq!(vocab.facet_by_uri(facet.uri()), Some(facet));
        assert_eq!(vocab.facet_by_short_name(facet.short_name()), Some(facet));
        assert_eq!(vocab.facet_by_symbolic_form(facet.symbolic_form()), Some(facet));
    }
}

#[test]
fn uri_set_matches_reference_strings() {
    let expected = [
        format!("{XSD}length"),
        format!("{XSD}minLength"),
        format!("{XSD}maxLength"),
        format!("{XSD}pattern"),
        format!("{XSD}minInclusive"),
        format!("{XSD}minExclusive"),
        format!("{XSD}maxInclusive"),
        format!("{XSD}maxExclusive"),
        format!("{XSD}totalDigits"),
        format!("{XSD}fractionDigits"),
        format!("{RDF}langPattern"),
    ];
    let uris = owl_facets::facet_uris();
    assert_eq!(uris.len(), expected.len());
    for uri in &expected {
        assert!(uris.contains(uri.as_str()), "Missing URI {uri}");
    }
}

#[test]
fn unknown_keys_are_not_found() {
    for probe in ["bogus", "", " length", "length ", "=>", "xsd:length", "LENGTH"] {
        assert_eq!(owl_facets::facet_by_uri(probe), None, "uri probe {probe:?}");
        assert_eq!(owl_facets::facet_by_short_name(probe), None, "name probe {probe:?}");
        assert_eq!(
            owl_facets::facet_by_symbolic_form(probe),
            None,
            "symbol probe {probe:?}"
        );
    }
}

#[test]
fn greater_or_equal_is_min_inclusive() {
    let facet = owl_facets::facet_by_symbolic_form(">=").expect("'>=' is a facet");
    assert_eq!(facet.short_name(), "minInclusive");
}

#[test]
fn lang_pattern_lives_in_rdf() {
    let facet = owl_facets::facet_by_short_name("langPattern").expect("langPattern is a facet");
    assert_eq!(facet.namespace(), Namespace::Rdf);
    assert!(facet.uri().starts_with(RDF));
    assert!(!facet.uri().starts_with(XSD));
}

#[test]
fn symbolic_forms_include_pattern_and_exclusive_bounds() {
    let forms = owl_facets::symbolic_forms();
    assert!(forms.contains("pattern"));
    assert!(forms.contains(">"));
    assert!(forms.contains("<"));
    assert_eq!(owl_facets::facet_by_symbolic_form(">"), Some(Facet::MinExclusive));
    assert_eq!(owl_facets::facet_by_symbolic_form("<"), Some(Facet::MaxExclusive));
}

#[test]
fn display_string_is_short_name() {
    for facet in Facet::ALL {
        assert_eq!(format!("{facet}"), facet.short_name());
    }
}

#[test]
fn uri_round_trip() {
    for facet in Facet::ALL {
        let rebuilt = format!("{}{}", facet.namespace().iri(), facet.short_name());
        assert_eq!(owl_facets::facet_by_uri(&rebuilt), Some(facet));
    }
}

#[test]
fn shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let vocab = FacetVocabulary::standard();
                vocab
                    .facets()
                    .iter()
                    .all(|f| vocab.facet_by_uri(f.uri()) == Some(*f))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("lookup thread panicked"));
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_uri() {
    let json = serde_json::to_string(&Facet::MaxInclusive).expect("serialize");
    assert_eq!(json, format!("\"{XSD}maxInclusive\""));
    let back: Facet = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Facet::MaxInclusive);
    let by_symbol: Facet = serde_json::from_str("\"<=\"").expect("deserialize symbol");
    assert_eq!(by_symbol, Facet::MaxInclusive);
    assert!(serde_json::from_str::<Facet>("\"bogus\"").is_err());
}

#[cfg(feature = "serde")]
#[test]
fn namespace_round_trips_through_its_prefix() {
    for ns in Namespace::ALL {
        let json = serde_json::to_string(&ns).expect("serialize");
        assert_eq!(json, format!("\"{}\"", ns.prefix()));
        let back: Namespace = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, ns);
    }
    assert!(serde_json::from_str::<Namespace>(&format!("\"{XSD}\"")).is_err());
    assert!(serde_json::from_str::<Namespace>("\"owl\"").is_err());
}
