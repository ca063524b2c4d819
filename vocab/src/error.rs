//! Error types for vocabulary construction and facet parsing.

use thiserror::Error;

/// Errors raised when building a [`FacetVocabulary`](crate::FacetVocabulary)
/// or parsing a [`Facet`](crate::Facet) from text.
///
/// Lookups never produce an error: an unmatched key is `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VocabularyError {
    /// Two facets share a URI.
    #[error("duplicate facet URI: {0}")]
    DuplicateUri(&'static str),

    /// Two facets share a short name.
    #[error("duplicate facet short name: {0}")]
    DuplicateShortName(&'static str),

    /// Two facets share a symbolic form.
    #[error("duplicate facet symbolic form: {0}")]
    DuplicateSymbolicForm(&'static str),

    /// The text is not the URI, short name, or symbolic form of any facet.
    #[error("unknown facet: {0:?}")]
    UnknownFacet(String),
}
