//! Prints the facet table and a Turtle preview.
//!
//! Run with: `cargo run --example dump_facets -p owl-facets`

fn main() {
    let vocab = owl_facets::FacetVocabulary::standard();

    println!("OWL facet vocabulary v{}", owl_facets::VERSION);
    println!("  Facets:     {}", vocab.len());
    println!("  Namespaces: {}", vocab.namespaces().len());
    println!();

    for facet in vocab.facets() {
        println!(
            "  {:16} {:16} {:5} {}",
            facet.short_name(),
            facet.symbolic_form(),
            facet.namespace().prefix(),
            facet.uri(),
        );
    }

    println!();

    let turtle = owl_facets::serializer::turtle::to_turtle(vocab);
    println!("Turtle output ({} bytes):", turtle.len());
    for line in turtle.lines().take(12) {
        println!("  {line}");
    }
    println!("  ...");
}
