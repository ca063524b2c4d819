//! N-Triples serializer for the facet vocabulary.
//!
//! One triple per line, absolute IRIs only.

use crate::model::iris::{
    FACETS_SYMBOLIC_FORM, OWL_ANNOTATION_PROPERTY, OWL_ONTOLOGY, OWL_VERSION_INFO, RDFS_COMMENT,
    RDFS_IS_DEFINED_BY, RDFS_LABEL, RDFS_RANGE, RDF_PROPERTY, RDF_TYPE, XSD_STRING,
};
use super::escape_literal;
use crate::{
    FacetVocabulary, ONTOLOGY_COMMENT, ONTOLOGY_IRI, ONTOLOGY_LABEL, SYMBOLIC_FORM_COMMENT,
    VERSION,
};

/// Serializes the vocabulary to an N-Triples string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid N-Triples string.
#[must_use]
pub fn to_ntriples(vocabulary: &FacetVocabulary) -> String {
    let mut out = String::with_capacity(8 * 1024);

    triple(&mut out, ONTOLOGY_IRI, RDF_TYPE, &iri(OWL_ONTOLOGY));
    triple(&mut out, ONTOLOGY_IRI, RDFS_LABEL, &lit(ONTOLOGY_LABEL, XSD_STRING));
    triple(&mut out, ONTOLOGY_IRI, RDFS_COMMENT, &lit(ONTOLOGY_COMMENT, XSD_STRING));
    triple(&mut out, ONTOLOGY_IRI, OWL_VERSION_INFO, &lit(VERSION, XSD_STRING));

    triple(&mut out, FACETS_SYMBOLIC_FORM, RDF_TYPE, &iri(OWL_ANNOTATION_PROPERTY));
    triple(&mut out, FACETS_SYMBOLIC_FORM, RDFS_LABEL, &lit("symbolicForm", XSD_STRING));
    triple(
        &mut out,
        FACETS_SYMBOLIC_FORM,
        RDFS_COMMENT,
        &lit(SYMBOLIC_FORM_COMMENT, XSD_STRING),
    );
    triple(&mut out, FACETS_SYMBOLIC_FORM, RDFS_RANGE, &iri(XSD_STRING));

    for facet in vocabulary.facets() {
        let id = facet.uri();
        triple(&mut out, id, RDF_TYPE, &iri(RDF_PROPERTY));
        triple(&mut out, id, RDFS_LABEL, &lit(facet.short_name(), XSD_STRING));
        triple(&mut out, id, RDFS_COMMENT, &lit(facet.comment(), XSD_STRING));
        triple(&mut out, id, FACETS_SYMBOLIC_FORM, &lit(facet.symbolic_form(), XSD_STRING));
        triple(&mut out, id, RDFS_IS_DEFINED_BY, &iri(ONTOLOGY_IRI));
    }

    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str, datatype: &str) -> String {
    format!("\"{}\"^^<{}>", escape_literal(s), datatype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Facet;

    #[test]
    fn every_line_ends_with_period() {
        let nt = to_ntriples(FacetVocabulary::standard());
        for line in nt.lines() {
            if !line.is_empty() {
                assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
            }
        }
    }

    #[test]
    fn five_triples_per_facet() {
        let nt = to_ntriples(FacetVocabulary::standard());
        // 4 ontology + 4 annotation property + 11 facets * 5
        assert_eq!(nt.lines().count(), 8 + 11 * 5);
    }

    #[test]
    fn facet_subjects_are_full_uris() {
        let nt = to_ntriples(FacetVocabulary::standard());
        for facet in Facet::ALL {
            let expected = format!(
                "<{}> <{}> <{}> .",
                facet.uri(),
                RDF_TYPE,
                RDF_PROPERTY
            );
            assert!(nt.contains(&expected), "Missing type triple for {facet}");
        }
    }

    #[test]
    fn carriage_returns_are_escaped() {
        assert_eq!(
            lit("a\r\nb", XSD_STRING),
            format!("\"a\\r\\nb\"^^<{XSD_STRING}>")
        );
    }
}
