//! `owlgen` — Generates Java classes from an OWL/RDFS ontology.
//!
//! Loads a Turtle (`.ttl`), RDF/XML (`.owl`, `.rdf`) or JSON (`.json`)
//! ontology, resolves the classes needed for the desired class list and
//! writes one `.java` file per class under `<out>/<package dirs>/`.
//!
//! **Usage:**
//! ```
//! owlgen --src <file> [--out <path>] [--config <toml>] [--schema-org]
//!        [--package <name>] [--lang <tag>] [--class <iri>]... [--dry-run] [-v]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use owlgen_codegen::GeneratorConfig;
use owlgen_ontology::OntologyDocument;

/// Generate single-inheritance Java classes from an ontology.
#[derive(Parser)]
#[command(name = "owlgen", about = "Generate Java classes from an OWL/RDFS ontology")]
struct Args {
    /// Ontology file (`.ttl`, `.owl`, `.rdf` or `.json`).
    #[arg(long)]
    src: PathBuf,

    /// Output directory for generated source files.
    #[arg(long, default_value = "generated")]
    out: PathBuf,

    /// TOML generator configuration.
    #[arg(long, conflicts_with = "schema_org")]
    config: Option<PathBuf>,

    /// Start from the schema.org preset instead of an empty configuration.
    #[arg(long)]
    schema_org: bool,

    /// Base package (overrides the configuration).
    #[arg(long)]
    package: Option<String>,

    /// Language tag for labels and comments (overrides the configuration).
    #[arg(long)]
    lang: Option<String>,

    /// Desired class IRI; repeatable (overrides the configuration).
    #[arg(long = "class")]
    classes: Vec<String>,

    /// Resolve and report without writing files.
    #[arg(long)]
    dry_run: bool,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn generator_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None if self.schema_org => GeneratorConfig::schema_org(),
            None => GeneratorConfig::default(),
        };
        if let Some(package) = &self.package {
            config.base_package.clone_from(package);
        }
        if let Some(lang) = &self.lang {
            config.language.clone_from(lang);
        }
        if !self.classes.is_empty() {
            config.desired_classes.clone_from(&self.classes);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.generator_config()?;
    let document = OntologyDocument::load(&args.src)
        .with_context(|| format!("Failed to load ontology {}", args.src.display()))?;

    println!(
        "Loaded {}: {} classes, {} properties",
        args.src.display(),
        document.class_count(),
        document.property_count()
    );

    if args.dry_run {
        let model = owlgen_codegen::resolve_model(&document, &config);
        println!(
            "Resolved {} classes with {} fields",
            model.len(),
            model.field_count()
        );
        for class in model.iter() {
            println!("  {}", class.qualified_name());
        }
        return Ok(());
    }

    let report = owlgen_codegen::generate(&document, &config, &args.out)?;

    println!(
        "Generated {} classes with {} fields",
        report.class_count, report.field_count
    );
    println!("Files written ({}):", report.files.len());
    for file in &report.files {
        println!("  {}", file);
    }

    println!("Generation complete.");
    Ok(())
}
