//! owlgen code generator.
//!
//! Resolves the closure of classes needed for a set of desired ontology
//! classes, maps their properties onto single-inheritance Java classes and
//! writes one source file per class:
//!
//! 1. [`resolver::ClassResolver`] computes the class closure.
//! 2. [`mapping::TypeMapper`] picks field types, names and superclasses.
//! 3. [`java::render_class`] renders each [`model::ResolvedClass`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod emit;
pub mod java;
pub mod mapping;
pub mod model;
pub mod naming;
pub mod resolver;

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use owlgen_ontology::OntologyDocument;

pub use config::{ConfigError, GeneratorConfig};
pub use model::ResolvedClassModel;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of classes written.
    pub class_count: usize,
    /// Number of fields across all written classes.
    pub field_count: usize,
    /// Files written, relative to the output directory.
    pub files: Vec<String>,
}

/// Resolves `config.desired_classes` against `document` into the classes to emit.
#[must_use]
pub fn resolve_model(document: &OntologyDocument, config: &GeneratorConfig) -> ResolvedClassModel {
    let resolver = resolver::ClassResolver::new(document, config);
    let classes = resolver.resolve(&config.desired_classes);
    resolver.build_model(&classes)
}

/// Returns the path of a class's source file relative to the output directory.
#[must_use]
pub fn source_path(class: &model::ResolvedClass) -> PathBuf {
    let mut path: PathBuf = class.package.split('.').filter(|p| !p.is_empty()).collect();
    path.push(format!("{}.java", class.name));
    path
}

/// Generates Java sources for `document` into `out_dir`.
///
/// # Errors
///
/// Returns an error if any file cannot be written.
pub fn generate(
    document: &OntologyDocument,
    config: &GeneratorConfig,
    out_dir: &Path,
) -> Result<GenerationReport> {
    let model = resolve_model(document, config);
    let mut report = GenerationReport::default();

    for class in model.iter() {
        let relative = source_path(class);
        emit::write_file(&out_dir.join(&relative), &java::render_class(class))?;
        report.class_count += 1;
        report.field_count += class.fields.len();
        report.files.push(relative.to_string_lossy().replace('\\', "/"));
    }

    info!(
        "wrote {} classes with {} fields to {}",
        report.class_count,
        report.field_count,
        out_dir.display()
    );
    Ok(report)
}
