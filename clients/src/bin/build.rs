//! `facets-build` — Writes the facet vocabulary artifacts to the output directory.
//!
//! **Outputs:**
//! - `<out>/owl-facets.json` — JSON-LD 1.1
//! - `<out>/owl-facets.ttl` — Turtle 1.1
//! - `<out>/owl-facets.nt` — N-Triples
//!
//! **Usage:**
//! ```text
//! facets-build [--out <path>] [-v]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use owl_facets::serializer::{jsonld, ntriples, turtle, JSON_LD_FILE, NTRIPLES_FILE, TURTLE_FILE};
use owl_facets::{FacetVocabulary, Namespace};

/// Build the OWL facet vocabulary artifacts.
#[derive(Parser)]
#[command(name = "facets-build", version, about = "Build OWL facet vocabulary artifacts")]
struct Args {
    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    owl_facets_clients::init_tracing(args.verbose);
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let vocabulary = FacetVocabulary::standard();
    println!(
        "OWL facet vocabulary v{}: {} facets ({} xsd, {} rdf)",
        owl_facets::VERSION,
        vocabulary.len(),
        vocabulary.facets_in(Namespace::Xsd).count(),
        vocabulary.facets_in(Namespace::Rdf).count(),
    );

    let json_str = serde_json::to_string_pretty(&jsonld::to_json_ld(vocabulary))
        .context("Failed to serialize vocabulary to JSON-LD")?;
    write_artifact(&out.join(JSON_LD_FILE), &json_str)?;
    write_artifact(&out.join(TURTLE_FILE), &turtle::to_turtle(vocabulary))?;
    write_artifact(&out.join(NTRIPLES_FILE), &ntriples::to_ntriples(vocabulary))?;

    println!("Build complete.");
    Ok(())
}

fn write_artifact(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote artifact");
    println!("  Written: {}", path.display());
    Ok(())
}
