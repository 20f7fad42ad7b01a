//! Errors raised while loading an ontology document.

use std::path::PathBuf;

/// Failure to produce an [`OntologyDocument`](crate::OntologyDocument) from a source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The Turtle parser rejected the input.
    #[error("invalid Turtle: {0}")]
    Turtle(String),

    /// The RDF/XML parser rejected the input.
    #[error("invalid RDF/XML: {0}")]
    RdfXml(String),

    /// The JSON form could not be deserialized.
    #[cfg(feature = "serde")]
    #[error("invalid ontology JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension maps to no enabled loader.
    #[error("unsupported ontology format `{0}` (expected .ttl, .owl, .rdf or .json)")]
    UnsupportedFormat(String),
}
