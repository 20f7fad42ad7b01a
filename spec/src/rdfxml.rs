//! RDF/XML loader.
//!
//! Reads OWL documents such as `schemaorg.owl`, where multi-class domains
//! and ranges are anonymous classes with an `owl:unionOf` collection.

use sophia_xml::parser;

use crate::error::LoadError;
use crate::model::OntologyDocument;
use crate::rdf::read_document;

/// Parses an RDF/XML document into an [`OntologyDocument`].
///
/// # Errors
///
/// Returns [`LoadError::RdfXml`] if the input is not valid RDF/XML.
pub fn parse(source: &str) -> Result<OntologyDocument, LoadError> {
    read_document(parser::parse_str(source)).map_err(LoadError::RdfXml)
}
