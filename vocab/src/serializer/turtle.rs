//! Turtle 1.1 serializer for the facet vocabulary.
//!
//! Produces a Turtle document declaring the ontology, the
//! `facets:symbolicForm` annotation property, and one `rdf:Property`
//! resource per facet.

use super::escape_literal;
use crate::model::{iris, Namespace};
use crate::{
    FacetVocabulary, ONTOLOGY_COMMENT, ONTOLOGY_IRI, ONTOLOGY_LABEL, SYMBOLIC_FORM_COMMENT,
    VERSION,
};

/// Serializes the vocabulary to a Turtle string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid Turtle string.
#[must_use]
pub fn to_turtle(vocabulary: &FacetVocabulary) -> String {
    let mut out = String::with_capacity(4 * 1024);

    out.push_str(&format!("@prefix owl:  <{}> .\n", iris::OWL));
    out.push_str(&format!("@prefix rdfs: <{}> .\n", iris::RDFS));
    for ns in Namespace::ALL {
        out.push_str(&format!("@prefix {}:  <{}> .\n", ns.prefix(), ns.iri()));
    }
    out.push_str(&format!("@prefix facets: <{}> .\n", iris::FACETS));
    out.push('\n');

    out.push_str(&format!(
        "<{}>\n  a owl:Ontology ;\n  rdfs:label {} ;\n  rdfs:comment {} ;\n  \
         owl:versionInfo {} .\n\n",
        ONTOLOGY_IRI,
        turtle_string(ONTOLOGY_LABEL),
        turtle_string(ONTOLOGY_COMMENT),
        turtle_string(VERSION)
    ));

    out.push_str(&format!(
        "facets:symbolicForm\n  a owl:AnnotationProperty ;\n  rdfs:label {} ;\n  \
         rdfs:comment {} ;\n  rdfs:range xsd:string .\n\n",
        turtle_string("symbolicForm"),
        turtle_string(SYMBOLIC_FORM_COMMENT)
    ));

    for facet in vocabulary.facets() {
        out.push_str(&format!(
            "{}:{}\n  a rdf:Property ;\n  rdfs:label {} ;\n  rdfs:comment {} ;\n  \
             facets:symbolicForm {} ;\n  rdfs:isDefinedBy <{}> .\n\n",
            facet.namespace().prefix(),
            facet.short_name(),
            turtle_string(facet.short_name()),
            turtle_string(facet.comment()),
            turtle_string(facet.symbolic_form()),
            ONTOLOGY_IRI
        ));
    }

    out
}

fn turtle_string(s: &str) -> String {
    format!("\"{}\"", escape_literal(s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Facet;

    #[test]
    fn produces_non_empty_turtle() {
        let turtle = to_turtle(FacetVocabulary::standard());
        assert!(!turtle.is_empty());
        assert!(turtle.contains("@prefix owl:"));
        assert!(turtle.contains("owl:Ontology"));
    }

    #[test]
    fn declares_every_namespace_prefix() {
        let turtle = to_turtle(FacetVocabulary::standard());
        for ns in Namespace::ALL {
            assert!(
                turtle.contains(&format!("@prefix {}:", ns.prefix())),
                "Missing prefix declaration for '{}'",
                ns.prefix()
            );
        }
    }

    #[test]
    fn declares_every_facet() {
        let turtle = to_turtle(FacetVocabulary::standard());
        for facet in Facet::ALL {
            let subject = format!("{}:{}\n", facet.namespace().prefix(), facet.short_name());
            assert!(turtle.contains(&subject), "Missing facet {subject}");
        }
        assert!(turtle.contains("rdf:langPattern\n"));
    }

    #[test]
    fn symbolic_forms_are_literals() {
        let turtle = to_turtle(FacetVocabulary::standard());
        assert!(turtle.contains("facets:symbolicForm \">=\" ;"));
        assert!(turtle.contains("facets:symbolicForm \"<\" ;"));
    }

    #[test]
    fn line_breaks_stay_inside_one_literal() {
        assert_eq!(turtle_string("first\nsecond"), "\"first\\nsecond\"");
        assert_eq!(turtle_string("a\r\nb"), "\"a\\r\\nb\"");
    }

    #[test]
    fn ontology_carries_label_and_comment() {
        let turtle = to_turtle(FacetVocabulary::standard());
        assert!(turtle.contains(&format!("rdfs:label \"{ONTOLOGY_LABEL}\" ;")));
        assert!(turtle.contains(&format!("rdfs:comment \"{ONTOLOGY_COMMENT}\" ;")));
    }
}
