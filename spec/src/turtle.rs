//! Turtle loader.
//!
//! Reads an OWL or RDFS vocabulary serialized as Turtle 1.1 and builds an
//! [`OntologyDocument`].

use sophia_turtle::parser::turtle;

use crate::error::LoadError;
use crate::model::OntologyDocument;
use crate::rdf::read_document;

/// Parses a Turtle document into an [`OntologyDocument`].
///
/// # Errors
///
/// Returns [`LoadError::Turtle`] if the input is not valid Turtle.
pub fn parse(source: &str) -> Result<OntologyDocument, LoadError> {
    read_document(turtle::parse_str(source)).map_err(LoadError::Turtle)
}
