//! Validators for the built artifacts (JSON-LD, Turtle, N-Triples).

pub mod jsonld;
pub mod rdf;

pub use owl_facets::serializer::{JSON_LD_FILE, NTRIPLES_FILE, TURTLE_FILE};
