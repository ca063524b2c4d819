//! The indexed facet lookup table.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use crate::error::VocabularyError;
use crate::model::{Facet, Namespace};

/// An immutable table of facets indexed by URI, short name, and symbolic form.
///
/// The table for the standard OWL 2 facets is built once and shared; see
/// [`FacetVocabulary::standard`]. All lookups are exact, case-sensitive
/// matches. An empty or unmatched key yields `None`.
#[derive(Debug, Clone)]
pub struct FacetVocabulary {
    facets: Vec<Facet>,
    by_uri: HashMap<&'static str, Facet>,
    by_short_name: HashMap<&'static str, Facet>,
    by_symbolic_form: HashMap<&'static str, Facet>,
    uris: BTreeSet<&'static str>,
}

impl FacetVocabulary {
    /// Returns the vocabulary of all eleven OWL 2 facets.
    #[must_use]
    pub fn standard() -> &'static FacetVocabulary {
        static VOCABULARY: std::sync::OnceLock<FacetVocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| {
            Self::from_facets(&Facet::ALL).unwrap_or_else(|err| {
                tracing::error!(%err, "standard facet table failed validation");
                Self::index(&Facet::ALL)
            })
        })
    }

    /// Builds a vocabulary from `facets`, rejecting any repeated key.
    ///
    /// # Errors
    ///
    /// Returns [`VocabularyError::DuplicateUri`],
    /// [`VocabularyError::DuplicateShortName`], or
    /// [`VocabularyError::DuplicateSymbolicForm`] for the first key that
    /// occurs twice.
    pub fn from_facets(facets: &[Facet]) -> Result<Self, VocabularyError> {
        let mut by_uri = HashMap::with_capacity(facets.len());
        let mut by_short_name = HashMap::with_capacity(facets.len());
        let mut by_symbolic_form = HashMap::with_capacity(facets.len());

        for &facet in facets {
            insert_unique(&mut by_uri, facet.uri(), facet)
                .map_err(VocabularyError::DuplicateUri)?;
            insert_unique(&mut by_short_name, facet.short_name(), facet)
                .map_err(VocabularyError::DuplicateShortName)?;
            insert_unique(&mut by_symbolic_form, facet.symbolic_form(), facet)
                .map_err(VocabularyError::DuplicateSymbolicForm)?;
        }

        let vocabulary = Self {
            facets: facets.to_vec(),
            uris: by_uri.keys().copied().collect(),
            by_uri,
            by_short_name,
            by_symbolic_form,
        };
        tracing::debug!(
            facets = vocabulary.len(),
            namespaces = vocabulary.namespaces().len(),
            "built facet vocabulary"
        );
        Ok(vocabulary)
    }

    /// Builds the indexes without checking for repeated keys; a later facet
    /// shadows an earlier one with the same key.
    fn index(facets: &[Facet]) -> Self {
        let by_uri: HashMap<_, _> = facets.iter().map(|f| (f.uri(), *f)).collect();
        Self {
            facets: facets.to_vec(),
            uris: by_uri.keys().copied().collect(),
            by_uri,
            by_short_name: facets.iter().map(|f| (f.short_name(), *f)).collect(),
            by_symbolic_form: facets.iter().map(|f| (f.symbolic_form(), *f)).collect(),
        }
    }

    /// Returns the facets in construction order.
    #[must_use]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Returns the number of facets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Returns `true` if the vocabulary holds no facets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Returns the set of all facet URIs.
    #[must_use]
    pub fn facet_uris(&self) -> &BTreeSet<&'static str> {
        &self.uris
    }

    /// Returns the set of all symbolic forms.
    #[must_use]
    pub fn symbolic_forms(&self) -> BTreeSet<&'static str> {
        self.by_symbolic_form.keys().copied().collect()
    }

    /// Looks up a facet by its full URI.
    #[must_use]
    pub fn facet_by_uri(&self, uri: &str) -> Option<Facet> {
        self.by_uri.get(uri).copied()
    }

    /// Looks up a facet by its short name (e.g., `"minLength"`).
    #[must_use]
    pub fn facet_by_short_name(&self, short_name: &str) -> Option<Facet> {
        self.by_short_name.get(short_name).copied()
    }

    /// Looks up a facet by its symbolic form (e.g., `">="`).
    #[must_use]
    pub fn facet_by_symbolic_form(&self, symbolic_form: &str) -> Option<Facet> {
        self.by_symbolic_form.get(symbolic_form).copied()
    }

    /// Looks up a facet by URI, then short name, then symbolic form.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Facet> {
        self.facet_by_uri(key)
            .or_else(|| self.facet_by_short_name(key))
            .or_else(|| self.facet_by_symbolic_form(key))
    }

    /// Returns the facets whose URI lies in `namespace`, in construction order.
    pub fn facets_in(&self, namespace: Namespace) -> impl Iterator<Item = Facet> + '_ {
        self.facets
            .iter()
            .copied()
            .filter(move |f| f.namespace() == namespace)
    }

    /// Returns the distinct namespaces used by this vocabulary.
    #[must_use]
    pub fn namespaces(&self) -> BTreeSet<Namespace> {
        self.facets.iter().map(|f| f.namespace()).collect()
    }
}

fn insert_unique(
    index: &mut HashMap<&'static str, Facet>,
    key: &'static str,
    facet: Facet,
) -> Result<(), &'static str> {
    match index.entry(key) {
        Entry::Occupied(_) => Err(key),
        Entry::Vacant(slot) => {
            slot.insert(facet);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_has_eleven_facets() {
        let vocab = FacetVocabulary::standard();
        assert_eq!(vocab.len(), 11);
        assert_eq!(vocab.facet_uris().len(), 11);
        assert_eq!(vocab.symbolic_forms().len(), 11);
    }

    #[test]
    fn standard_passes_validation() {
        assert!(FacetVocabulary::from_facets(&Facet::ALL).is_ok());
    }

    #[test]
    fn standard_is_shared() {
        assert!(std::ptr::eq(
            FacetVocabulary::standard(),
            FacetVocabulary::standard()
        ));
    }

    #[test]
    fn repeated_facet_is_rejected() {
        let err = FacetVocabulary::from_facets(&[Facet::Length, Facet::Pattern, Facet::Length])
            .unwrap_err();
        assert_eq!(
            err,
            VocabularyError::DuplicateUri("http://www.w3.org/2001/XMLSchema#length")
        );
    }

    #[test]
    fn empty_vocabulary() {
        let vocab = FacetVocabulary::from_facets(&[]).unwrap();
        assert!(vocab.is_empty());
        assert!(vocab.facet_uris().is_empty());
        assert_eq!(vocab.lookup("length"), None);
    }

    #[test]
    fn subset_only_indexes_its_facets() {
        let vocab = FacetVocabulary::from_facets(&[Facet::MinInclusive]).unwrap();
        assert_eq!(vocab.facet_by_symbolic_form(">="), Some(Facet::MinInclusive));
        assert_eq!(vocab.facet_by_symbolic_form("<="), None);
    }

    #[test]
    fn empty_key_is_not_found() {
        let vocab = FacetVocabulary::standard();
        assert_eq!(vocab.facet_by_uri(""), None);
        assert_eq!(vocab.facet_by_short_name(""), None);
        assert_eq!(vocab.facet_by_symbolic_form(""), None);
        assert_eq!(vocab.lookup(""), None);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let vocab = FacetVocabulary::standard();
        assert_eq!(vocab.facet_by_short_name("minlength"), None);
        assert_eq!(vocab.facet_by_short_name("MINLENGTH"), None);
        assert_eq!(
            vocab.facet_by_uri("http://www.w3.org/2001/XMLSchema#MinLength"),
            None
        );
    }

    #[test]
    fn uri_lookup_needs_full_uri() {
        let vocab = FacetVocabulary::standard();
        assert_eq!(vocab.facet_by_uri("length"), None);
        assert_eq!(vocab.facet_by_uri("xsd:length"), None);
    }

    #[test]
    fn facets_in_namespace() {
        let vocab = FacetVocabulary::standard();
        assert_eq!(vocab.facets_in(Namespace::Xsd).count(), 10);
        assert_eq!(
            vocab.facets_in(Namespace::Rdf).collect::<Vec<_>>(),
            vec![Facet::LangPattern]
        );
        assert_eq!(vocab.namespaces().len(), 2);
    }
}
