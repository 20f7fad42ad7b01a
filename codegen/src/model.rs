//! The resolved class model handed to the emitter.

use indexmap::IndexMap;

use owlgen_ontology::OntologyClass;

use crate::naming::{qualified_name, simple_name};

/// Fully-qualified name of the generic object type.
pub const OBJECT_TYPE: &str = "java.lang.Object";

/// Fully-qualified name of the string type.
pub const STRING_TYPE: &str = "java.lang.String";

/// A reference to an ontology class, possibly not (yet) matched to a
/// definition in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassRef<'a> {
    /// Only the id is known.
    Unresolved(&'a str),
    /// The id names a class in the resolved set.
    Resolved(&'a OntologyClass),
}

impl<'a> ClassRef<'a> {
    /// Returns the referenced class id.
    #[must_use]
    pub fn id(&self) -> &'a str {
        match self {
            ClassRef::Unresolved(id) => id,
            ClassRef::Resolved(class) => &class.id,
        }
    }

    /// Returns true once the reference points at a class definition.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, ClassRef::Resolved(_))
    }
}

/// The type of an emitted field or superclass.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A configured primitive, by its target type name (e.g. `java.lang.String`).
    Primitive(String),
    /// A generated class.
    Class {
        /// Ontology id of the class.
        id: String,
        /// Target package.
        package: String,
        /// Simple class name.
        name: String,
    },
    /// The generic object type, used when a property has no usable range.
    Object,
    /// A class id that never resolved; emitted under its derived name.
    Unresolved {
        /// Raw ontology id.
        id: String,
        /// Best-effort fully-qualified name.
        qualified: String,
    },
}

impl TypeRef {
    /// Returns the fully-qualified type name.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match self {
            TypeRef::Primitive(name) => name.clone(),
            TypeRef::Class { package, name, .. } => qualified_name(package, name),
            TypeRef::Object => OBJECT_TYPE.to_string(),
            TypeRef::Unresolved { qualified, .. } => qualified.clone(),
        }
    }

    /// Returns the type name after the last `.`.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        match self {
            TypeRef::Primitive(name) => simple_name(name),
            TypeRef::Class { name, .. } => name,
            TypeRef::Object => simple_name(OBJECT_TYPE),
            TypeRef::Unresolved { qualified, .. } => simple_name(qualified),
        }
    }

    /// Returns the ontology class id behind this type, if it is class-backed.
    #[must_use]
    pub fn class_id(&self) -> Option<&str> {
        match self {
            TypeRef::Class { id, .. } | TypeRef::Unresolved { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// One emitted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Java field name, unique within its class.
    pub name: String,
    /// Field type.
    pub type_ref: TypeRef,
    /// Documentation text (may be empty).
    pub doc: String,
    /// String literal the field is initialized with, if pre-initialized.
    pub initializer: Option<String>,
}

impl Field {
    /// Creates an uninitialized field.
    pub fn new(name: impl Into<String>, type_ref: TypeRef, doc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref,
            doc: doc.into(),
            initializer: None,
        }
    }

    /// Sets the string literal this field is initialized with.
    #[must_use]
    pub fn initialized(mut self, literal: impl Into<String>) -> Self {
        self.initializer = Some(literal.into());
        self
    }
}

/// One class ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClass {
    /// Ontology id.
    pub id: String,
    /// Target package.
    pub package: String,
    /// Simple class name.
    pub name: String,
    /// Documentation text (may be empty).
    pub doc: String,
    /// The single chosen superclass, if any.
    pub superclass: Option<TypeRef>,
    /// Fields in emission order, deduplicated by name.
    pub fields: Vec<Field>,
}

impl ResolvedClass {
    /// Returns `package.Name`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.package, &self.name)
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Output of resolution: every class to emit, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedClassModel {
    /// Classes keyed by ontology id.
    pub classes: IndexMap<String, ResolvedClass>,
}

impl ResolvedClassModel {
    /// Looks up a class by ontology id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ResolvedClass> {
        self.classes.get(id)
    }

    /// Number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no class was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates classes in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedClass> {
        self.classes.values()
    }

    /// Total number of fields across all classes.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.iter().map(|c| c.fields.len()).sum()
    }
}
