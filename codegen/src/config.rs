//! Generator configuration.
//!
//! Everything the resolver and type mapper consult besides the ontology
//! itself. Configurations are plain data; they can be built in code, taken
//! from the [`GeneratorConfig::schema_org`] preset, or read from TOML:
//!
//! ```toml
//! base_package = "uk.co.polycode"
//! language = "en"
//! desired_classes = ["https://schema.org/Person"]
//! pruned_property_types = ["https://schema.org/Text", "https://schema.org/URL"]
//!
//! [primitive_types]
//! "https://schema.org/Text" = "java.lang.String"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Failure to read or parse a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or does not match [`GeneratorConfig`].
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Inputs that steer resolution and mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Package prefixed to every host-derived package (may be empty).
    pub base_package: String,
    /// Language tag selecting labels and comments.
    pub language: String,
    /// Text appended to every class's documentation.
    pub licence_text: String,
    /// Class ids seeding resolution. Empty means every class in the document.
    pub desired_classes: Vec<String>,
    /// Class id → target primitive type name (e.g. `java.lang.String`).
    pub primitive_types: BTreeMap<String, String>,
    /// Class ids never used as a field type.
    pub ignored_property_types: Vec<String>,
    /// Class ids used as a field type only when nothing better exists.
    /// Order matters: the first entry is the last-resort fallback.
    pub pruned_property_types: Vec<String>,
    /// Class ids never used as a superclass.
    pub ignored_superclasses: Vec<String>,
    /// Resolution pass limit. Unset means one more than the document's
    /// class count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_passes: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_package: String::new(),
            language: "en".to_string(),
            licence_text: String::new(),
            desired_classes: Vec::new(),
            primitive_types: BTreeMap::new(),
            ignored_property_types: Vec::new(),
            pruned_property_types: Vec::new(),
            ignored_superclasses: Vec::new(),
            max_passes: None,
        }
    }
}

const SCHEMA_ORG_LICENCE: &str = "\
This file was generated by owlgen as a transformation of the Schema.org schema.
Schema.org is released under the Creative Commons Attribution-ShareAlike License (version 3.0).
The Schema.org license is applicable to the generated source files and the license is available from
https://creativecommons.org/licenses/by-sa/3.0/";

impl GeneratorConfig {
    /// Preset for generating Java classes from the schema.org vocabulary.
    #[must_use]
    pub fn schema_org() -> Self {
        let primitives = [
            ("DataType", "java.lang.Object"),
            ("Text", "java.lang.String"),
            ("Time", "java.time.ZonedDateTime"),
            ("DateTime", "java.time.ZonedDateTime"),
            ("Date", "java.time.ZonedDateTime"),
            ("URL", "java.net.URL"),
            ("Integer", "java.math.BigInteger"),
            ("Float", "java.math.BigDecimal"),
            ("Number", "java.math.BigDecimal"),
            ("Boolean", "java.lang.Boolean"),
        ];
        Self {
            base_package: "uk.co.polycode".to_string(),
            language: "en".to_string(),
            licence_text: SCHEMA_ORG_LICENCE.to_string(),
            desired_classes: Vec::new(),
            primitive_types: primitives
                .iter()
                .map(|(local, java)| (format!("https://schema.org/{local}"), java.to_string()))
                .collect(),
            ignored_property_types: vec!["https://schema.org/Role".to_string()],
            pruned_property_types: vec![
                "https://schema.org/Text".to_string(),
                "https://schema.org/URL".to_string(),
            ],
            ignored_superclasses: vec!["http://www.w3.org/2000/01/rdf-schema#Class".to_string()],
            max_passes: None,
        }
    }

    /// Parses a TOML configuration. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] on malformed TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Returns the primitive type name configured for `class_id`, if any.
    #[must_use]
    pub fn primitive(&self, class_id: &str) -> Option<&str> {
        self.primitive_types.get(class_id).map(String::as_str)
    }

    /// Returns true if `class_id` maps to a primitive type.
    #[must_use]
    pub fn is_primitive(&self, class_id: &str) -> bool {
        self.primitive_types.contains_key(class_id)
    }

    /// Returns true if `class_id` is excluded from field types.
    #[must_use]
    pub fn is_ignored_type(&self, class_id: &str) -> bool {
        self.ignored_property_types.iter().any(|c| c == class_id)
    }

    /// Returns true if `class_id` is deprioritized as a field type.
    #[must_use]
    pub fn is_pruned(&self, class_id: &str) -> bool {
        self.pruned_property_types.iter().any(|c| c == class_id)
    }

    /// Returns true if `class_id` is in the desired list.
    #[must_use]
    pub fn is_desired(&self, class_id: &str) -> bool {
        self.desired_classes.iter().any(|c| c == class_id)
    }

    /// Returns true if `class_id` is excluded from superclasses.
    #[must_use]
    pub fn is_ignored_superclass(&self, class_id: &str) -> bool {
        self.ignored_superclasses.iter().any(|c| c == class_id)
    }
}
