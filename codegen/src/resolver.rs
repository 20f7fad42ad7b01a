//! Class closure resolution.
//!
//! Starting from the desired classes, repeatedly pulls in declared
//! superclasses and the range classes of every applicable property until a
//! pass discovers nothing new. The result maps each resolved class to the
//! properties that become its fields.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use owlgen_ontology::{OntologyClass, OntologyDocument, OntologyProperty};

use crate::config::GeneratorConfig;
use crate::mapping::TypeMapper;
use crate::model::{ClassRef, ResolvedClass, ResolvedClassModel};
use crate::naming::{class_name_for_iri, package_for_iri};

/// A property attached to a class, with the classes its fields are typed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProperty<'a> {
    /// The ontology property.
    pub property: &'a OntologyProperty,
    /// Candidate range classes, in range order.
    pub field_types: Vec<ClassRef<'a>>,
}

/// One resolved class and its applicable properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEntry<'a> {
    /// The class definition.
    pub class: &'a OntologyClass,
    /// Properties whose domain includes the class, in document order.
    pub properties: Vec<ResolvedProperty<'a>>,
}

/// Resolution output keyed by class id, in discovery order.
pub type ClassMap<'a> = IndexMap<&'a str, ResolvedEntry<'a>>;

type Accumulator<'a> = IndexMap<&'a str, &'a OntologyClass>;

/// Computes the class closure of a set of desired classes.
pub struct ClassResolver<'a> {
    document: &'a OntologyDocument,
    mapper: TypeMapper<'a>,
    by_domain: HashMap<&'a str, Vec<&'a OntologyProperty>>,
}

impl<'a> ClassResolver<'a> {
    /// Creates a resolver over `document`.
    pub fn new(document: &'a OntologyDocument, config: &'a GeneratorConfig) -> Self {
        let mut by_domain: HashMap<&'a str, Vec<&'a OntologyProperty>> = HashMap::new();
        for property in &document.properties {
            for class_id in &property.domain {
                by_domain.entry(class_id.as_str()).or_default().push(property);
            }
        }
        Self {
            document,
            mapper: TypeMapper::new(document, config),
            by_domain,
        }
    }

    /// Resolves `desired` (every document class when empty) to its closure.
    ///
    /// Each pass adds the declared superclasses (minus ignored ones) and the
    /// field range classes of everything accumulated so far. The loop stops
    /// when a pass adds nothing, or at the configured pass limit (by default
    /// one pass more than the document has classes).
    #[must_use]
    pub fn resolve(&self, desired: &[String]) -> ClassMap<'a> {
        let seeds: Vec<&'a OntologyClass> = if desired.is_empty() {
            self.document.classes.iter().collect()
        } else {
            desired
                .iter()
                .filter_map(|id| {
                    let class = self.document.find_class(id);
                    if class.is_none() {
                        debug!("desired class {id} is not defined in the document; skipping");
                    }
                    class
                })
                .collect()
        };

        let ceiling = self
            .mapper
            .config()
            .max_passes
            .unwrap_or(self.document.class_count() + 1);
        let mut accumulator = Accumulator::new();
        let mut frontier = seeds;
        let mut pass = 0;
        while !frontier.is_empty() {
            if pass == ceiling {
                warn!(
                    "resolution did not converge after {ceiling} passes; {} classes pending",
                    frontier.len()
                );
                break;
            }
            pass += 1;
            accumulator.extend(frontier.into_iter().map(|c| (c.id.as_str(), c)));
            frontier = self.expand(&accumulator);
            debug!(pass, resolved = accumulator.len(), added = frontier.len(), "resolution pass");
        }
        info!("resolved {} classes in {pass} passes", accumulator.len());

        accumulator
            .values()
            .map(|&class| {
                let entry = ResolvedEntry {
                    class,
                    properties: self.attach(class, &accumulator),
                };
                (class.id.as_str(), entry)
            })
            .collect()
    }

    /// Returns the classes one pass adds to `accumulator`.
    fn expand(&self, accumulator: &Accumulator<'a>) -> Vec<&'a OntologyClass> {
        let mut found: IndexSet<&'a str> = IndexSet::new();
        let config = self.mapper.config();

        for &class in accumulator.values() {
            let superclasses = class
                .subclass_of
                .iter()
                .map(String::as_str)
                .filter(|id| !config.is_ignored_superclass(id));
            found.extend(superclasses);

            for property in self.applicable(class, accumulator) {
                found.extend(self.mapper.candidate_types(property));
            }
        }

        found
            .into_iter()
            .filter(|id| !accumulator.contains_key(*id))
            .filter_map(|id| self.document.find_class(id))
            .collect()
    }

    /// Properties whose domain includes `class` and that survive the
    /// superseded-by check against `accumulator`.
    fn applicable<'s>(
        &'s self,
        class: &OntologyClass,
        accumulator: &'s Accumulator<'a>,
    ) -> impl Iterator<Item = &'a OntologyProperty> + 's {
        self.by_domain
            .get(class.id.as_str())
            .into_iter()
            .flatten()
            .copied()
            .filter(move |p| keeps_superseded(p, accumulator))
    }

    fn attach(
        &self,
        class: &OntologyClass,
        accumulator: &Accumulator<'a>,
    ) -> Vec<ResolvedProperty<'a>> {
        self.applicable(class, accumulator)
            .map(|property| ResolvedProperty {
                property,
                field_types: self
                    .mapper
                    .candidate_types(property)
                    .into_iter()
                    .map(|id| match accumulator.get(id) {
                        Some(&class) => ClassRef::Resolved(class),
                        None => ClassRef::Unresolved(id),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Maps a resolution result to the classes to emit.
    ///
    /// Classes configured as primitives are left out.
    #[must_use]
    pub fn build_model(&self, classes: &ClassMap<'a>) -> ResolvedClassModel {
        let config = self.mapper.config();
        let classes = classes
            .values()
            .filter(|entry| !config.is_primitive(&entry.class.id))
            .map(|entry| {
                let class = entry.class;
                let (superclass, fields) = self.mapper.class_fields(class, &entry.properties);
                let resolved = ResolvedClass {
                    id: class.id.clone(),
                    package: package_for_iri(&config.base_package, &class.id),
                    name: class_name_for_iri(&class.id),
                    doc: self.mapper.class_doc(class),
                    superclass,
                    fields,
                };
                (class.id.clone(), resolved)
            })
            .collect();
        ResolvedClassModel { classes }
    }
}

/// Keeps a property with no superseded-by ids, or one whose every
/// superseded-by id is already resolved.
fn keeps_superseded(property: &OntologyProperty, accumulator: &Accumulator<'_>) -> bool {
    property
        .superseded_by
        .iter()
        .all(|id| accumulator.contains_key(id.as_str()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn class(id: &str, parents: &[&str]) -> OntologyClass {
        let mut c = OntologyClass::new(id);
        c.subclass_of = parents.iter().map(|p| p.to_string()).collect();
        c
    }

    fn property(id: &str, domain: &[&str], range: &[&str]) -> OntologyProperty {
        let mut p = OntologyProperty::new(id);
        p.domain = domain.iter().map(|d| d.to_string()).collect();
        p.range = range.iter().map(|r| r.to_string()).collect();
        p
    }

    fn ids<'a>(map: &ClassMap<'a>) -> Vec<&'a str> {
        map.keys().copied().collect()
    }

    fn chain() -> OntologyDocument {
        OntologyDocument {
            base_iri: None,
            classes: vec![
                class("http://ex.org/A", &["http://ex.org/B"]),
                class("http://ex.org/B", &["http://ex.org/C"]),
                class("http://ex.org/C", &[]),
                class("http://ex.org/D", &[]),
                class("http://ex.org/E", &[]),
            ],
            properties: vec![
                property("http://ex.org/friend", &["http://ex.org/C"], &["http://ex.org/D"]),
                property("http://ex.org/other", &["http://ex.org/E"], &["http://ex.org/A"]),
            ],
        }
    }

    #[test]
    fn superclass_chain_is_closed() {
        let doc = chain();
        let config = GeneratorConfig::default();
        let resolver = ClassResolver::new(&doc, &config);
        let map = resolver.resolve(&["http://ex.org/A".to_string()]);
        assert_eq!(
            ids(&map),
            vec!["http://ex.org/A", "http://ex.org/B", "http://ex.org/C", "http://ex.org/D"]
        );
    }

    #[test]
    fn range_classes_are_pulled_in() {
        let doc = chain();
        let config = GeneratorConfig::default();
        let resolver = ClassResolver::new(&doc, &config);
        let map = resolver.resolve(&["http://ex.org/C".to_string()]);
        assert!(map.contains_key("http://ex.org/D"));
        let friend = &map["http://ex.org/C"].properties[0];
        assert_eq!(friend.property.id, "http://ex.org/friend");
        assert!(friend.field_types.iter().all(ClassRef::is_resolved));
    }

    #[test]
    fn empty_desired_means_everything() {
        let doc = chain();
        let config = GeneratorConfig::default();
        let resolver = ClassResolver::new(&doc, &config);
        assert_eq!(resolver.resolve(&[]).len(), doc.class_count());
    }

    #[test]
    fn unknown_desired_ids_are_skipped() {
        let doc = chain();
        let config = GeneratorConfig::default();
        let resolver = ClassResolver::new(&doc, &config);
        let map = resolver.resolve(&["http://ex.org/Nope".to_string(), "http://ex.org/D".to_string()]);
        assert_eq!(ids(&map), vec!["http://ex.org/D"]);
    }

    #[test]
    fn ignored_superclasses_are_not_followed() {
        let doc = chain();
        let config = GeneratorConfig {
            ignored_superclasses: vec!["http://ex.org/B".to_string()],
            ..GeneratorConfig::default()
        };
        let resolver = ClassResolver::new(&doc, &config);
        let map = resolver.resolve(&["http://ex.org/A".to_string()]);
        assert_eq!(ids(&map), vec!["http://ex.org/A"]);
    }

    #[test]
    fn superseded_properties_need_resolved_successors() {
        let mut doc = chain();
        let mut old = property("http://ex.org/old", &["http://ex.org/D"], &[]);
        old.superseded_by = vec!["http://ex.org/E".to_string()];
        doc.properties.push(old);
        let config = GeneratorConfig::default();
        let resolver = ClassResolver::new(&doc, &config);

        let map = resolver.resolve(&["http://ex.org/D".to_string()]);
        assert!(map["http://ex.org/D"].properties.is_empty());

        let map = resolver.resolve(&["http://ex.org/D".to_string(), "http://ex.org/E".to_string()]);
        assert_eq!(map["http://ex.org/D"].properties.len(), 1);
    }

    #[test]
    fn cycles_terminate() {
        let doc = OntologyDocument {
            base_iri: None,
            classes: vec![
                class("http://ex.org/P", &["http://ex.org/Q"]),
                class("http://ex.org/Q", &["http://ex.org/P"]),
            ],
            properties: vec![],
        };
        let config = GeneratorConfig::default();
        let resolver = ClassResolver::new(&doc, &config);
        assert_eq!(resolver.resolve(&["http://ex.org/P".to_string()]).len(), 2);
    }

    #[test]
    fn pass_limit_stops_resolution_early() {
        let doc = chain();
        let config = GeneratorConfig {
            max_passes: Some(1),
            ..GeneratorConfig::default()
        };
        let resolver = ClassResolver::new(&doc, &config);
        let map = resolver.resolve(&["http://ex.org/A".to_string()]);
        assert_eq!(ids(&map), vec!["http://ex.org/A"]);

        let config = GeneratorConfig {
            max_passes: Some(2),
            ..GeneratorConfig::default()
        };
        let resolver = ClassResolver::new(&doc, &config);
        let map = resolver.resolve(&["http://ex.org/A".to_string()]);
        assert_eq!(ids(&map), vec!["http://ex.org/A", "http://ex.org/B"]);
    }

    #[test]
    fn primitive_classes_are_not_emitted() {
        let doc = chain();
        let mut config = GeneratorConfig::default();
        config
            .primitive_types
            .insert("http://ex.org/D".to_string(), "java.lang.String".to_string());
        let resolver = ClassResolver::new(&doc, &config);
        let map = resolver.resolve(&["http://ex.org/C".to_string()]);
        assert!(map.contains_key("http://ex.org/D"));

        let model = resolver.build_model(&map);
        assert!(model.get("http://ex.org/D").is_none());
        let c = model.get("http://ex.org/C").unwrap();
        assert_eq!(
            c.field("friend").map(|f| f.type_ref.qualified_name()),
            Some("java.lang.String".to_string())
        );
    }
}
