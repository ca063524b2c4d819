//! Serializers for the facet vocabulary.
//!
//! Three serialization formats are supported:
//! - **JSON-LD** ([`jsonld`]) — output to [`JSON_LD_FILE`] (feature `serializers`)
//! - **Turtle** ([`turtle`]) — output to [`TURTLE_FILE`]
//! - **N-Triples** ([`ntriples`]) — output to [`NTRIPLES_FILE`]
//!
//! All three emit the same graph.

#[cfg(feature = "serializers")]
pub mod jsonld;
pub mod ntriples;
pub mod turtle;

/// JSON-LD artifact file name.
pub const JSON_LD_FILE: &str = "owl-facets.json";
/// Turtle artifact file name.
pub const TURTLE_FILE: &str = "owl-facets.ttl";
/// N-Triples artifact file name.
pub const NTRIPLES_FILE: &str = "owl-facets.nt";

/// Escapes a string for use inside a double-quoted Turtle or N-Triples literal.
fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}
