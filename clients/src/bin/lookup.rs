//! `facets-lookup` — Resolves a URI, short name, or symbolic form to a facet.
//!
//! **Usage:**
//! ```text
//! facets-lookup <KEY> [--by any|uri|name|symbol] [--json]
//! facets-lookup --list [--json]
//! ```
//!
//! Exits with status 1 when the key matches no facet.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owl_facets::{Facet, FacetVocabulary, Namespace};
use serde::Serialize;

/// Which key the lookup matches against.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeyKind {
    /// URI, then short name, then symbolic form.
    Any,
    /// Full facet URI.
    Uri,
    /// Short name, e.g. `minInclusive`.
    Name,
    /// Symbolic form, e.g. `>=`.
    Symbol,
}

/// Look up OWL datatype restriction facets.
#[derive(Parser)]
#[command(name = "facets-lookup", version, about = "Look up OWL datatype restriction facets")]
struct Args {
    /// URI, short name, or symbolic form to resolve.
    #[arg(required_unless_present = "list")]
    key: Option<String>,

    /// Restrict the lookup to one kind of key.
    #[arg(long, value_enum, default_value_t = KeyKind::Any)]
    by: KeyKind,

    /// List every facet instead of resolving a key.
    #[arg(long, conflicts_with = "key")]
    list: bool,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct FacetRecord {
    uri: &'static str,
    short_name: &'static str,
    symbolic_form: &'static str,
    namespace: Namespace,
}

impl From<Facet> for FacetRecord {
    fn from(facet: Facet) -> Self {
        Self {
            uri: facet.uri(),
            short_name: facet.short_name(),
            symbolic_form: facet.symbolic_form(),
            namespace: facet.namespace(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    owl_facets_clients::init_tracing(args.verbose);
    let vocabulary = FacetVocabulary::standard();

    if args.list {
        return print_facets(vocabulary.facets(), args.json);
    }

    let key = args.key.unwrap_or_default();
    let found = match args.by {
        KeyKind::Any => vocabulary.lookup(&key),
        KeyKind::Uri => vocabulary.facet_by_uri(&key),
        KeyKind::Name => vocabulary.facet_by_short_name(&key),
        KeyKind::Symbol => vocabulary.facet_by_symbolic_form(&key),
    };
    tracing::debug!(key = %key, by = ?args.by, found = ?found, "facet lookup");

    match found {
        Some(facet) => print_facets(&[facet], args.json),
        None => {
            eprintln!("No facet matches {key:?}");
            process::exit(1);
        }
    }
}

fn print_facets(facets: &[Facet], json: bool) -> Result<()> {
    if json {
        let records: Vec<FacetRecord> = facets.iter().map(|f| FacetRecord::from(*f)).collect();
        let out = if let [single] = records.as_slice() {
            serde_json::to_string_pretty(single)
        } else {
            serde_json::to_string_pretty(&records)
        }
        .context("Failed to serialize facets to JSON")?;
        println!("{out}");
        return Ok(());
    }

    for facet in facets {
        println!(
            "{:16} {:16} {}",
            facet.short_name(),
            facet.symbolic_form(),
            facet.uri()
        );
    }
    Ok(())
}
