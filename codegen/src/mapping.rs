//! Ontology → Java type mapping.
//!
//! Flattens the ontology's multi-valued semantics into the shape a
//! single-inheritance language can hold: one superclass per class and one
//! type per field. Extra range types and extra superclasses are demoted to
//! additional fields instead of being dropped.

use std::collections::HashSet;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::{debug, warn};

use owlgen_ontology::{texts_in, OntologyClass, OntologyDocument, OntologyProperty};

use crate::config::GeneratorConfig;
use crate::model::{ClassRef, Field, TypeRef, STRING_TYPE};
use crate::naming::{
    class_name_for_iri, field_name, field_name_for_property, lower_first, package_for_iri,
    qualified_name,
};
use crate::resolver::ResolvedProperty;

/// Name of the marker field carrying the class's defining resource.
pub const DEFINED_BY_FIELD: &str = "isDefinedBy";

/// Name of the field standing in for a primitive superclass.
pub const VALUE_FIELD: &str = "value";

const DEFINED_BY_DOC: &str =
    "Where to find the definition of the OWL Class used to generate this Java class.";

const VALUE_DOC: &str = "The value of what would have been a primitive supertype.";

/// How a class's declared superclasses map onto single inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuperclassMapping {
    /// The chosen superclass, unless none was declared or the choice is a primitive.
    pub superclass: Option<TypeRef>,
    /// `value` for a primitive choice, plus one field per demoted superclass.
    pub fields: Vec<Field>,
}

/// Field type and naming policy over one document and configuration.
pub struct TypeMapper<'a> {
    config: &'a GeneratorConfig,
    class_ids: HashSet<&'a str>,
}

impl<'a> TypeMapper<'a> {
    /// Creates a mapper over `document` using `config`.
    pub fn new(document: &'a OntologyDocument, config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            class_ids: document.classes.iter().map(|c| c.id.as_str()).collect(),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &'a GeneratorConfig {
        self.config
    }

    /// Returns the range classes that may become fields of `property`.
    ///
    /// Ignored types and ids the document does not define are removed. If
    /// any non-pruned candidate remains only those are returned; otherwise
    /// the pruned fallback picks candidates whose id ends with the last
    /// three characters of the field name, then the first configured pruned
    /// type, then gives up and returns every candidate.
    #[must_use]
    pub fn candidate_types<'p>(&self, property: &'p OntologyProperty) -> Vec<&'p str> {
        let candidates: Vec<&'p str> = property
            .range
            .iter()
            .map(String::as_str)
            .filter(|id| !self.config.is_ignored_type(id))
            .filter(|id| self.class_ids.contains(*id))
            .collect();

        let preferred: Vec<&'p str> = candidates
            .iter()
            .copied()
            .filter(|id| !self.config.is_pruned(id))
            .collect();
        if !preferred.is_empty() {
            return preferred;
        }

        let name = field_name_for_property(&property.id);
        let suffix = last_chars(&name, 3).to_lowercase();
        let by_suffix: Vec<&'p str> = candidates
            .iter()
            .copied()
            .filter(|id| id.to_lowercase().ends_with(&suffix))
            .collect();
        if !by_suffix.is_empty() {
            return by_suffix;
        }

        if let Some(first) = self.config.pruned_property_types.first() {
            if let Some(id) = candidates.iter().copied().find(|id| *id == first.as_str()) {
                return vec![id];
            }
        }

        candidates
    }

    /// Picks the primary type: the first desired candidate, else the first
    /// non-pruned one, else the first.
    #[must_use]
    pub fn select_type<'s>(&self, candidates: &[&'s str]) -> Option<&'s str> {
        candidates
            .iter()
            .copied()
            .find(|id| self.config.is_desired(id))
            .or_else(|| {
                candidates
                    .iter()
                    .copied()
                    .find(|id| !self.config.is_pruned(id))
            })
            .or_else(|| candidates.first().copied())
    }

    /// Picks the superclass among `superclasses` (already stripped of ignored
    /// ones): the first desired, else the first.
    #[must_use]
    pub fn select_superclass<'s>(&self, superclasses: &[&'s str]) -> Option<&'s str> {
        superclasses
            .iter()
            .copied()
            .find(|id| self.config.is_desired(id))
            .or_else(|| superclasses.first().copied())
    }

    /// Maps a class id to a primitive or generated class type.
    #[must_use]
    pub fn type_ref(&self, id: &str) -> TypeRef {
        match self.config.primitive(id) {
            Some(primitive) => TypeRef::Primitive(primitive.to_string()),
            None => TypeRef::Class {
                id: id.to_string(),
                package: package_for_iri(&self.config.base_package, id),
                name: class_name_for_iri(id),
            },
        }
    }

    /// Maps a possibly unresolved reference; unresolved class ids pass
    /// through under their derived name.
    #[must_use]
    pub fn type_ref_for(&self, class_ref: &ClassRef<'_>) -> TypeRef {
        match class_ref {
            ClassRef::Resolved(class) => self.type_ref(&class.id),
            ClassRef::Unresolved(id) => match self.type_ref(id) {
                TypeRef::Class { package, name, .. } => {
                    warn!("class {id} never resolved; emitting best-effort type name");
                    TypeRef::Unresolved {
                        id: id.to_string(),
                        qualified: qualified_name(&package, &name),
                    }
                }
                primitive => primitive,
            },
        }
    }

    /// Documentation for a class: label and comments in the configured
    /// language, then the licence text. Only the licence when there is no
    /// text in that language.
    #[must_use]
    pub fn class_doc(&self, class: &OntologyClass) -> String {
        let lang = self.config.language.as_str();
        let label = class.label(lang).unwrap_or_default();
        let comments: String = texts_in(&class.comments, lang).collect();
        let text = format!("{label}\n\n{comments}");
        if text.trim().is_empty() {
            self.config.licence_text.clone()
        } else if self.config.licence_text.is_empty() {
            text.trim_end().to_string()
        } else {
            format!("{}\n\n{}", text.trim_end(), self.config.licence_text)
        }
    }

    /// Documentation for a property's fields: its comments in the configured language.
    #[must_use]
    pub fn property_doc(&self, property: &OntologyProperty) -> String {
        texts_in(&property.comments, &self.config.language).collect()
    }

    /// Builds the primary field for a property plus one additional field per
    /// extra candidate type (`creator` + `creatorOrganization`).
    #[must_use]
    pub fn property_fields(&self, resolved: &ResolvedProperty<'_>) -> Vec<Field> {
        let property = resolved.property;
        let name = field_name_for_property(&property.id);
        let doc = self.property_doc(property);

        let ids: Vec<&str> = resolved.field_types.iter().map(|r| r.id()).collect();
        let Some(primary) = self.select_type(&ids) else {
            warn!(
                "property {} has no usable range; typing field `{name}` as Object",
                property.id
            );
            return vec![Field::new(name, TypeRef::Object, doc)];
        };

        let mut fields = Vec::with_capacity(resolved.field_types.len());
        for class_ref in &resolved.field_types {
            let type_ref = self.type_ref_for(class_ref);
            if class_ref.id() == primary {
                fields.insert(0, Field::new(name.clone(), type_ref, doc.clone()));
            } else {
                let additional = format!("{name}{}", type_ref.simple_name());
                fields.push(Field::new(additional, type_ref, doc.clone()));
            }
        }
        fields
    }

    /// Chooses the single superclass of `class` and demotes the others to fields.
    ///
    /// A primitive choice emits no superclass but a `value` field of that
    /// primitive type. Every other declared superclass becomes a field named
    /// after its simple type name with a lower-case first letter, suffixed
    /// when that collides with a Java keyword.
    #[must_use]
    pub fn superclass_mapping(&self, class: &OntologyClass) -> SuperclassMapping {
        let superclasses: Vec<&str> = class
            .subclass_of
            .iter()
            .map(String::as_str)
            .filter(|id| !self.config.is_ignored_superclass(id))
            .collect();
        let Some(selected) = self.select_superclass(&superclasses) else {
            return SuperclassMapping::default();
        };

        let mut mapping = SuperclassMapping::default();
        match self.config.primitive(selected) {
            Some(primitive) => mapping.fields.push(Field::new(
                VALUE_FIELD,
                TypeRef::Primitive(primitive.to_string()),
                VALUE_DOC,
            )),
            None => mapping.superclass = Some(self.superclass_type(selected)),
        }

        for other in superclasses.iter().copied().filter(|id| *id != selected) {
            let type_ref = self.superclass_type(other);
            let name = field_name(&lower_first(type_ref.simple_name()));
            mapping.fields.push(Field::new(name, type_ref, ""));
        }
        mapping
    }

    /// Types a superclass reference; ids the document does not define
    /// become [`TypeRef::Unresolved`].
    fn superclass_type(&self, id: &str) -> TypeRef {
        if self.class_ids.contains(id) {
            self.type_ref(id)
        } else {
            self.type_ref_for(&ClassRef::Unresolved(id))
        }
    }

    /// The `isDefinedBy` marker field, initialized to the defining resource.
    #[must_use]
    pub fn defined_by_field(&self, class: &OntologyClass) -> Field {
        Field::new(
            DEFINED_BY_FIELD,
            TypeRef::Primitive(STRING_TYPE.to_string()),
            DEFINED_BY_DOC,
        )
        .initialized(class.defining_resource())
    }

    /// Assembles the superclass and full field list of a class.
    ///
    /// Property fields come first, then `isDefinedBy`, then the
    /// superclass-derived fields. Duplicate names keep their first occurrence.
    #[must_use]
    pub fn class_fields(
        &self,
        class: &OntologyClass,
        properties: &[ResolvedProperty<'_>],
    ) -> (Option<TypeRef>, Vec<Field>) {
        let SuperclassMapping { superclass, fields } = self.superclass_mapping(class);

        let all = properties
            .iter()
            .flat_map(|p| self.property_fields(p))
            .chain(std::iter::once(self.defined_by_field(class)))
            .chain(fields);

        let mut unique: IndexMap<String, Field> = IndexMap::new();
        for field in all {
            match unique.entry(field.name.clone()) {
                Entry::Occupied(_) => {
                    debug!("{}: dropping duplicate field `{}`", class.id, field.name);
                }
                Entry::Vacant(slot) => {
                    slot.insert(field);
                }
            }
        }
        (superclass, unique.into_values().collect())
    }
}

/// Returns the last `n` characters of `s` (all of it when shorter).
fn last_chars(s: &str, n: usize) -> &str {
    let start = s
        .char_indices()
        .rev()
        .nth(n.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    if n == 0 {
        ""
    } else {
        &s[start..]
    }
}
