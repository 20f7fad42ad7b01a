//! Core ontology model types.
//!
//! These types hold an ontology document as owned Rust data: every class and
//! property with its localized labels and comments, inheritance, domains,
//! ranges and supersession markers. A document is built once (by a loader or
//! by hand) and is read-only afterwards.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A literal tagged with a language (e.g. `"Person"@en`).
///
/// Untagged literals carry the empty tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LangText {
    /// BCP 47 language tag, or `""` for an untagged literal.
    pub lang: String,
    /// The literal text.
    pub text: String,
}

impl LangText {
    /// Creates a new language-tagged literal.
    pub fn new(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            text: text.into(),
        }
    }
}

/// Iterates the texts of `texts` tagged with `lang`, in document order.
pub fn texts_in<'a, 'l>(
    texts: &'a [LangText],
    lang: &'l str,
) -> impl Iterator<Item = &'a str> + use<'a, 'l> {
    texts
        .iter()
        .filter(move |t| t.lang == lang)
        .map(|t| t.text.as_str())
}

/// An OWL or RDFS class definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OntologyClass {
    /// Full IRI (e.g., `"https://schema.org/Person"`).
    pub id: String,
    /// Labels (`rdfs:label`), one per language.
    pub labels: Vec<LangText>,
    /// Descriptions (`rdfs:comment`).
    pub comments: Vec<LangText>,
    /// Full IRIs of declared parent classes (`rdfs:subClassOf`), in declared order.
    pub subclass_of: Vec<String>,
    /// The resource that defines this class (`rdfs:isDefinedBy`).
    pub is_defined_by: Option<String>,
}

impl OntologyClass {
    /// Creates a class with no labels, comments or parents.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the first label in `lang`, if any.
    #[must_use]
    pub fn label(&self, lang: &str) -> Option<&str> {
        texts_in(&self.labels, lang).next()
    }

    /// Returns the defining resource, falling back to the class IRI itself.
    #[must_use]
    pub fn defining_resource(&self) -> &str {
        self.is_defined_by.as_deref().unwrap_or(&self.id)
    }
}

/// An ontology property definition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OntologyProperty {
    /// Full IRI.
    pub id: String,
    /// Labels (`rdfs:label`).
    pub labels: Vec<LangText>,
    /// Descriptions (`rdfs:comment`).
    pub comments: Vec<LangText>,
    /// Classes this property may be attached to. May be empty.
    pub domain: Vec<String>,
    /// Classes this property's value may take, in declared order. May be empty.
    pub range: Vec<String>,
    /// Resources that nominally replace this property (`schema:supersededBy`).
    pub superseded_by: Vec<String>,
    /// The resource that defines this property (`rdfs:isDefinedBy`).
    pub is_defined_by: Option<String>,
}

impl OntologyProperty {
    /// Creates a property with empty domain and range.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the first label in `lang`, if any.
    #[must_use]
    pub fn label(&self, lang: &str) -> Option<&str> {
        texts_in(&self.labels, lang).next()
    }

    /// Returns true if `class_id` is in this property's domain.
    #[must_use]
    pub fn applies_to(&self, class_id: &str) -> bool {
        self.domain.iter().any(|d| d == class_id)
    }
}

/// A complete ontology document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OntologyDocument {
    /// Base IRI of the document (e.g., `"https://schema.org/"`), if declared.
    pub base_iri: Option<String>,
    /// All classes. Ids are unique.
    pub classes: Vec<OntologyClass>,
    /// All properties. Ids are unique.
    pub properties: Vec<OntologyProperty>,
}

impl OntologyDocument {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&OntologyClass> {
        self.classes.iter().find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&OntologyProperty> {
        self.properties.iter().find(|p| p.id == iri)
    }

    /// Returns the properties whose domain includes `class_id`, in document order.
    pub fn properties_with_domain<'a>(
        &'a self,
        class_id: &'a str,
    ) -> impl Iterator<Item = &'a OntologyProperty> + 'a {
        self.properties.iter().filter(move |p| p.applies_to(class_id))
    }

    /// Returns the total number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the total number of properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }
}

/// Standard IRI constants used by the loaders.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// Schema.org namespace (https form).
    pub const SCHEMA: &str = "https://schema.org/";
    /// Schema.org namespace (legacy http form).
    pub const SCHEMA_HTTP: &str = "http://schema.org/";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:isDefinedBy`.
    pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:unionOf`.
    pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";

    /// Local names of the schema.org vocabulary terms the loader understands.
    pub const SCHEMA_DOMAIN_INCLUDES: &str = "domainIncludes";
    /// See [`SCHEMA_DOMAIN_INCLUDES`].
    pub const SCHEMA_RANGE_INCLUDES: &str = "rangeIncludes";
    /// See [`SCHEMA_DOMAIN_INCLUDES`].
    pub const SCHEMA_SUPERSEDED_BY: &str = "supersededBy";

    /// Returns true if `iri` is the schema.org term `local` under either scheme.
    #[must_use]
    pub fn is_schema_term(iri: &str, local: &str) -> bool {
        [SCHEMA, SCHEMA_HTTP]
            .iter()
            .any(|ns| iri.strip_prefix(ns) == Some(local))
    }
}
