//! Ontology documents as typed Rust data.
//!
//! The `owlgen-ontology` crate holds an OWL / RDFS vocabulary (classes,
//! properties, inheritance, domains and ranges) as owned Rust data, and
//! loads it from Turtle, RDF/XML or its own JSON form.
//!
//! # Entry Point
//!
//! ```no_run
//! let doc = owlgen_ontology::OntologyDocument::load("schemaorg.ttl".as_ref())?;
//! println!("{} classes", doc.class_count());
//! # Ok::<(), owlgen_ontology::LoadError>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod model;
#[cfg(any(feature = "turtle", feature = "rdfxml"))]
mod rdf;
#[cfg(feature = "rdfxml")]
pub mod rdfxml;
#[cfg(feature = "turtle")]
pub mod turtle;

use std::path::Path;

pub use error::LoadError;
pub use model::{
    texts_in, LangText, OntologyClass, OntologyDocument, OntologyProperty,
};

impl OntologyDocument {
    /// Parses a Turtle document.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Turtle`] if the input is not valid Turtle.
    #[cfg(feature = "turtle")]
    pub fn from_turtle(source: &str) -> Result<Self, LoadError> {
        turtle::parse(source)
    }

    /// Parses an RDF/XML document (e.g. `schemaorg.owl`).
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::RdfXml`] if the input is not valid RDF/XML.
    #[cfg(feature = "rdfxml")]
    pub fn from_rdf_xml(source: &str) -> Result<Self, LoadError> {
        rdfxml::parse(source)
    }

    /// Deserializes the JSON form produced by [`OntologyDocument::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if the input does not match the model.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serializes the document to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Json`] if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a document from disk, choosing the loader by file extension
    /// (`.ttl` for Turtle, `.owl` or `.rdf` for RDF/XML, `.json` for the
    /// JSON form).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, its format is not
    /// supported, or its content does not parse.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let read = || {
            std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })
        };
        match ext.as_str() {
            #[cfg(feature = "turtle")]
            "ttl" => Self::from_turtle(&read()?),
            #[cfg(feature = "rdfxml")]
            "owl" | "rdf" => Self::from_rdf_xml(&read()?),
            #[cfg(feature = "serde")]
            "json" => Self::from_json(&read()?),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> OntologyDocument {
        let mut person = OntologyClass::new("https://schema.org/Person");
        person.labels = vec![LangText::new("en", "Person")];
        person.subclass_of = vec!["https://schema.org/Thing".to_string()];
        let mut name = OntologyProperty::new("https://schema.org/name");
        name.domain = vec!["https://schema.org/Person".to_string()];
        name.range = vec!["https://schema.org/Text".to_string()];
        OntologyDocument {
            base_iri: Some("https://schema.org/".to_string()),
            classes: vec![person, OntologyClass::new("https://schema.org/Thing")],
            properties: vec![name],
        }
    }

    #[test]
    fn json_form_is_lossless() {
        let doc = sample();
        let json = doc.to_json().unwrap();
        assert_eq!(OntologyDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn json_fields_default_when_missing() {
        let doc = OntologyDocument::from_json(
            r#"{ "classes": [ { "id": "https://example.com/NoLang" } ] }"#,
        )
        .unwrap();
        assert_eq!(doc.class_count(), 1);
        assert!(doc.properties.is_empty());
        assert!(doc.classes[0].labels.is_empty());
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let err = OntologyDocument::load(Path::new("schema.n3")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "n3"));
    }

    #[test]
    fn load_reads_owl_files_as_rdf_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schemaorg.OWL");
        std::fs::write(
            &path,
            r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:owl="http://www.w3.org/2002/07/owl#">
  <owl:Class rdf:about="https://schema.org/Thing"/>
</rdf:RDF>"#,
        )
        .unwrap();
        let doc = OntologyDocument::load(&path).unwrap();
        assert!(doc.find_class("https://schema.org/Thing").is_some());
    }

    #[test]
    fn all_class_iris_unique() {
        let doc = sample();
        let mut iris = std::collections::HashSet::new();
        for class in &doc.classes {
            assert!(iris.insert(class.id.as_str()), "Duplicate class IRI: {}", class.id);
        }
    }
}
