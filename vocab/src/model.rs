//! Core vocabulary model types.
//!
//! These types represent the OWL 2 datatype restriction facets as typed Rust
//! data. Every facet is a `Copy` enum variant whose URI, short name and
//! symbolic form are `&'static str`. The indexed lookup table lives in
//! [`FacetVocabulary`](crate::FacetVocabulary).

use std::fmt;
use std::str::FromStr;

use crate::error::VocabularyError;

/// Expands to the namespace IRI literal for a [`Namespace`] variant name.
macro_rules! namespace_iri {
    (Xsd) => {
        "http://www.w3.org/2001/XMLSchema#"
    };
    (Rdf) => {
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    };
}

/// The namespace a facet URI belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// XML Schema datatypes: `http://www.w3.org/2001/XMLSchema#`.
    Xsd,
    /// RDF: `http://www.w3.org/1999/02/22-rdf-syntax-ns#`.
    Rdf,
}

impl Namespace {
    /// Every namespace used by the facet vocabulary.
    pub const ALL: [Namespace; 2] = [Namespace::Xsd, Namespace::Rdf];

    /// Returns the canonical namespace IRI, including the trailing `#`.
    #[must_use]
    pub const fn iri(self) -> &'static str {
        match self {
            Namespace::Xsd => namespace_iri!(Xsd),
            Namespace::Rdf => namespace_iri!(Rdf),
        }
    }

    /// Returns the conventional prefix (e.g., `"xsd"`).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Namespace::Xsd => "xsd",
            Namespace::Rdf => "rdf",
        }
    }

    /// Resolves a conventional prefix back to its namespace.
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Namespace> {
        Namespace::ALL.into_iter().find(|ns| ns.prefix() == prefix)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iri())
    }
}

/// Declares the `Facet` enum together with its per-variant data table.
///
/// The URI is assembled with `concat!` so it stays a `&'static str` while
/// remaining derived from the namespace and short name.
macro_rules! facets {
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => { 1usize + facets!(@count $($tail)*) };
    ($(
        $(#[$doc:meta])*
        $variant:ident => ($ns:ident, $short:literal, $symbol:literal)
    ),+ $(,)?) => {
        /// A datatype restriction facet (`owlFacet` in OWL 2 `DatatypeRestriction`).
        ///
        /// The set is closed: eleven facets, ten from XML Schema and
        /// `rdf:langPattern` from the `rdf:PlainLiteral` datatype.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Facet {
            $(
                $(#[$doc])*
                $variant,
            )+
        }

        impl Facet {
            /// All facets in declaration order.
            pub const ALL: [Facet; facets!(@count $($variant)+)] = [$(Facet::$variant),+];

            /// Returns the namespace the facet URI belongs to.
            #[must_use]
            pub const fn namespace(self) -> Namespace {
                match self {
                    $(Facet::$variant => Namespace::$ns,)+
                }
            }

            /// Returns the local name of the facet within its namespace.
            #[must_use]
            pub const fn short_name(self) -> &'static str {
                match self {
                    $(Facet::$variant => $short,)+
                }
            }

            /// Returns the operator-like alias (e.g., `">="` for `minInclusive`).
            ///
            /// For the length, pattern and digit facets this equals the short name.
            #[must_use]
            pub const fn symbolic_form(self) -> &'static str {
                match self {
                    $(Facet::$variant => $symbol,)+
                }
            }

            /// Returns the full facet URI: namespace IRI followed by the short name.
            #[must_use]
            pub const fn uri(self) -> &'static str {
                match self {
                    $(Facet::$variant => concat!(namespace_iri!($ns), $short),)+
                }
            }
        }
    };
}

facets! {
    /// `xsd:length`: exact number of units of length.
    Length => (Xsd, "length", "length"),
    /// `xsd:minLength`: minimum number of units of length.
    MinLength => (Xsd, "minLength", "minLength"),
    /// `xsd:maxLength`: maximum number of units of length.
    MaxLength => (Xsd, "maxLength", "maxLength"),
    /// `xsd:pattern`: regular expression constraint on the lexical space.
    Pattern => (Xsd, "pattern", "pattern"),
    /// `xsd:minInclusive`: inclusive lower bound.
    MinInclusive => (Xsd, "minInclusive", ">="),
    /// `xsd:minExclusive`: exclusive lower bound.
    MinExclusive => (Xsd, "minExclusive", ">"),
    /// `xsd:maxInclusive`: inclusive upper bound.
    MaxInclusive => (Xsd, "maxInclusive", "<="),
    /// `xsd:maxExclusive`: exclusive upper bound.
    MaxExclusive => (Xsd, "maxExclusive", "<"),
    /// `xsd:totalDigits`: maximum number of decimal digits.
    TotalDigits => (Xsd, "totalDigits", "totalDigits"),
    /// `xsd:fractionDigits`: maximum number of digits after the decimal point.
    FractionDigits => (Xsd, "fractionDigits", "fractionDigits"),
    /// `rdf:langPattern`: language-tag pattern for `rdf:PlainLiteral`.
    LangPattern => (Rdf, "langPattern", "langPattern"),
}

impl Facet {
    /// Returns a human-readable description used in `rdfs:comment`.
    #[must_use]
    pub const fn comment(self) -> &'static str {
        match self {
            Facet::Length => "Restricts the exact length of a value, in units of length.",
            Facet::MinLength => "Restricts the minimum length of a value, in units of length.",
            Facet::MaxLength => "Restricts the maximum length of a value, in units of length.",
            Facet::Pattern => "Restricts the lexical space to literals matching a regular expression.",
            Facet::MinInclusive => "Inclusive lower bound on the value space.",
            Facet::MinExclusive => "Exclusive lower bound on the value space.",
            Facet::MaxInclusive => "Inclusive upper bound on the value space.",
            Facet::MaxExclusive => "Exclusive upper bound on the value space.",
            Facet::TotalDigits => "Maximum number of decimal digits in a value.",
            Facet::FractionDigits => "Maximum number of digits in the fractional part of a value.",
            Facet::LangPattern => "Restricts the language tag of a plain literal to a pattern.",
        }
    }

    /// Returns `true` for the four numeric range bounds.
    #[must_use]
    pub const fn is_bound(self) -> bool {
        matches!(
            self,
            Facet::MinInclusive | Facet::MinExclusive | Facet::MaxInclusive | Facet::MaxExclusive
        )
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Facet {
    type Err = VocabularyError;

    /// Parses a facet from its URI, short name, or symbolic form, tried in
    /// that order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::FacetVocabulary::standard()
            .lookup(s)
            .ok_or_else(|| VocabularyError::UnknownFacet(s.to_owned()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Facet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.uri())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Facet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Namespace {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.prefix())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Namespace {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        const PREFIXES: &[&str] = &["xsd", "rdf"];
        let s = <std::borrow::Cow<'de, str> as serde::Deserialize<'de>>::deserialize(deserializer)?;
        Namespace::from_prefix(&s).ok_or_else(|| serde::de::Error::unknown_variant(&s, PREFIXES))
    }
}

/// Standard IRI constants used by the vocabulary and its serializers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Namespace for the annotations this crate adds (e.g., `symbolicForm`).
    pub const FACETS: &str = "https://w3id.org/owl-facets/";
    /// `facets:symbolicForm` annotation property.
    pub const FACETS_SYMBOLIC_FORM: &str = "https://w3id.org/owl-facets/symbolicForm";

    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `owl:AnnotationProperty`.
    pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:versionInfo`.
    pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `rdfs:isDefinedBy`.
    pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}
