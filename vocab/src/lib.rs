//! OWL 2 datatype restriction facets encoded as typed Rust data.
//!
//! The `owl-facets` crate provides the closed set of eleven facets usable in
//! an OWL 2 `DatatypeRestriction` (`xsd:length` through `xsd:fractionDigits`,
//! plus `rdf:langPattern`). Each [`Facet`] carries a URI, a short name, and a
//! symbolic form, and [`FacetVocabulary`] looks facets up by any of the three.
//! Serializers render the vocabulary as JSON-LD, Turtle, and N-Triples.
//!
//! # Entry Point
//!
//! ```
//! use owl_facets::{Facet, FacetVocabulary};
//!
//! let vocab = FacetVocabulary::standard();
//! assert_eq!(vocab.len(), 11);
//! assert_eq!(vocab.facet_by_symbolic_form(">="), Some(Facet::MinInclusive));
//! assert_eq!(vocab.facet_by_short_name("bogus"), None);
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocab = owl_facets::FacetVocabulary::standard();
//! let turtle = owl_facets::serializer::turtle::to_turtle(vocab);
//! assert!(turtle.contains("xsd:minInclusive"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
pub mod serializer;
pub mod vocabulary;

use std::collections::BTreeSet;

pub use error::VocabularyError;
pub use model::{Facet, Namespace};
pub use vocabulary::FacetVocabulary;

/// Vocabulary version recorded in `owl:versionInfo` of the serialized artifacts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// IRI of the ontology document produced by the serializers.
pub const ONTOLOGY_IRI: &str = "https://w3id.org/owl-facets/";

/// `rdfs:label` of the ontology document.
pub const ONTOLOGY_LABEL: &str = "OWL Facets";

/// `rdfs:comment` of the ontology document.
pub const ONTOLOGY_COMMENT: &str = "Datatype restriction facets usable in OWL 2 \
                                    DatatypeRestriction axioms, with their short names \
                                    and symbolic forms.";

/// `rdfs:comment` of the `facets:symbolicForm` annotation property.
pub const SYMBOLIC_FORM_COMMENT: &str = "Operator-like alias of a datatype restriction facet.";

/// Returns the set of all facet URIs.
#[must_use]
pub fn facet_uris() -> &'static BTreeSet<&'static str> {
    FacetVocabulary::standard().facet_uris()
}

/// Returns the set of all facet symbolic forms.
#[must_use]
pub fn symbolic_forms() -> BTreeSet<&'static str> {
    FacetVocabulary::standard().symbolic_forms()
}

/// Looks up a standard facet by its full URI.
#[must_use]
pub fn facet_by_uri(uri: &str) -> Option<Facet> {
    FacetVocabulary::standard().facet_by_uri(uri)
}

/// Looks up a standard facet by its short name.
#[must_use]
pub fn facet_by_short_name(short_name: &str) -> Option<Facet> {
    FacetVocabulary::standard().facet_by_short_name(short_name)
}

/// Looks up a standard facet by its symbolic form.
#[must_use]
pub fn facet_by_symbolic_form(symbolic_form: &str) -> Option<Facet> {
    FacetVocabulary::standard().facet_by_symbolic_form(symbolic_form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_count() {
        assert_eq!(facet_uris().len(), 11);
    }

    #[test]
    fn all_uris_unique() {
        let mut uris = std::collections::HashSet::new();
        for facet in Facet::ALL {
            assert!(uris.insert(facet.uri()), "Duplicate facet URI: {}", facet.uri());
        }
    }

    #[test]
    fn all_short_names_unique() {
        let mut names = std::collections::HashSet::new();
        for facet in Facet::ALL {
            assert!(
                names.insert(facet.short_name()),
                "Duplicate short name: {}",
                facet.short_name()
            );
        }
    }

    #[test]
    fn all_symbolic_forms_unique() {
        let mut symbols = std::collections::HashSet::new();
        for facet in Facet::ALL {
            assert!(
                symbols.insert(facet.symbolic_form()),
                "Duplicate symbolic form: {}",
                facet.symbolic_form()
            );
        }
    }

    #[test]
    fn uri_set_is_derived_from_facets() {
        let derived: BTreeSet<_> = Facet::ALL.iter().map(|f| f.uri()).collect();
        assert_eq!(facet_uris(), &derived);
    }
}
