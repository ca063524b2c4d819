//! JSON-LD 1.1 serializer for the facet vocabulary.
//!
//! Produces a single JSON-LD document with an `@context` carrying the
//! standard prefixes and an `@graph` with one node per facet.

use serde_json::{json, Map, Value};

use crate::model::{iris, Facet, Namespace};
use crate::{
    FacetVocabulary, ONTOLOGY_COMMENT, ONTOLOGY_IRI, ONTOLOGY_LABEL, SYMBOLIC_FORM_COMMENT,
    VERSION,
};

/// Serializes the vocabulary to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
///
/// # Errors
///
/// This function is infallible; it always returns a valid JSON-LD `Value`.
#[must_use]
pub fn to_json_ld(vocabulary: &FacetVocabulary) -> Value {
    json!({
        "@context": build_context(),
        "@graph": build_graph(vocabulary)
    })
}

fn build_context() -> Value {
    let mut ctx = Map::new();
    ctx.insert("owl".to_owned(), json!(iris::OWL));
    ctx.insert("rdfs".to_owned(), json!(iris::RDFS));
    for ns in Namespace::ALL {
        ctx.insert(ns.prefix().to_owned(), json!(ns.iri()));
    }
    ctx.insert("facets".to_owned(), json!(iris::FACETS));
    Value::Object(ctx)
}

fn build_graph(vocabulary: &FacetVocabulary) -> Value {
    let mut nodes: Vec<Value> = Vec::with_capacity(vocabulary.len() + 2);

    nodes.push(json!({
        "@id": ONTOLOGY_IRI,
        "@type": "owl:Ontology",
        "rdfs:label": ONTOLOGY_LABEL,
        "rdfs:comment": ONTOLOGY_COMMENT,
        "owl:versionInfo": VERSION
    }));

    nodes.push(json!({
        "@id": iris::FACETS_SYMBOLIC_FORM,
        "@type": "owl:AnnotationProperty",
        "rdfs:label": "symbolicForm",
        "rdfs:comment": SYMBOLIC_FORM_COMMENT,
        "rdfs:range": { "@id": iris::XSD_STRING }
    }));

    nodes.extend(vocabulary.facets().iter().map(|f| facet_to_json(*f)));

    Value::Array(nodes)
}

fn facet_to_json(facet: Facet) -> Value {
    json!({
        "@id": facet.uri(),
        "@type": "rdf:Property",
        "rdfs:label": facet.short_name(),
        "rdfs:comment": facet.comment(),
        "facets:symbolicForm": facet.symbolic_form(),
        "rdfs:isDefinedBy": { "@id": ONTOLOGY_IRI }
    })
}
