//! Renders a [`ResolvedClass`] as a Java compilation unit.

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use crate::emit::{escape_string_literal, is_javadoc_safe, JavaFile};
use crate::model::{ResolvedClass, TypeRef};
use crate::naming::simple_name;

/// Decides how each referenced type is spelled inside one file.
///
/// The first type to claim a simple name gets to use it; later types with
/// the same simple name are written fully qualified.
#[derive(Debug)]
pub struct Imports {
    package: String,
    claimed: HashMap<String, String>,
    imports: BTreeSet<String>,
}

impl Imports {
    /// Starts an import set for a class, reserving the class's own simple name.
    #[must_use]
    pub fn new(class: &ResolvedClass) -> Self {
        let mut claimed = HashMap::new();
        claimed.insert(class.name.clone(), class.qualified_name());
        Self {
            package: class.package.clone(),
            claimed,
            imports: BTreeSet::new(),
        }
    }

    /// Returns the spelling of `type_ref`, importing it if needed.
    pub fn spell(&mut self, type_ref: &TypeRef) -> String {
        let qualified = type_ref.qualified_name();
        let simple = simple_name(&qualified).to_string();
        match self.claimed.get(&simple) {
            Some(owner) if *owner == qualified => simple,
            Some(_) => qualified,
            None => {
                if needs_import(&self.package, &qualified) {
                    self.imports.insert(qualified.clone());
                }
                self.claimed.insert(simple.clone(), qualified);
                simple
            }
        }
    }

    /// Sorted import list.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }
}

fn package_of(qualified: &str) -> &str {
    qualified.rsplit_once('.').map_or("", |(package, _)| package)
}

fn needs_import(own_package: &str, qualified: &str) -> bool {
    let package = package_of(qualified);
    !package.is_empty() && package != "java.lang" && package != own_package
}

fn checked_doc<'d>(owner: &str, doc: &'d str) -> Option<&'d str> {
    if doc.trim().is_empty() {
        None
    } else if is_javadoc_safe(doc) {
        Some(doc)
    } else {
        warn!("documentation of {owner} contains `*/`; emitting it without Javadoc");
        None
    }
}

/// Renders `class` as Java source.
#[must_use]
pub fn render_class(class: &ResolvedClass) -> String {
    let mut imports = Imports::new(class);
    let superclass = class.superclass.as_ref().map(|s| imports.spell(s));
    let fields: Vec<String> = class
        .fields
        .iter()
        .map(|field| {
            let ty = imports.spell(&field.type_ref);
            match &field.initializer {
                Some(literal) => format!(
                    "public {ty} {} = \"{}\";",
                    field.name,
                    escape_string_literal(literal)
                ),
                None => format!("public {ty} {};", field.name),
            }
        })
        .collect();

    let mut f = JavaFile::new(&class.package);
    let mut any_import = false;
    for import in imports.iter() {
        f.line(&format!("import {import};"));
        any_import = true;
    }
    if any_import {
        f.blank();
    }

    if let Some(doc) = checked_doc(&class.id, &class.doc) {
        f.doc_comment(doc);
    }
    match superclass {
        Some(superclass) => f.line(&format!("public class {} extends {superclass} {{", class.name)),
        None => f.line(&format!("public class {} {{", class.name)),
    }

    for (field, declaration) in class.fields.iter().zip(&fields) {
        f.blank();
        let owner = format!("{}#{}", class.id, field.name);
        if let Some(doc) = checked_doc(&owner, &field.doc) {
            f.indented_doc_comment(doc);
        }
        f.indented(declaration);
    }
    f.line("}");
    f.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, STRING_TYPE};

    fn class_type(package: &str, name: &str) -> TypeRef {
        TypeRef::Class {
            id: format!("https://schema.org/{name}"),
            package: package.to_string(),
            name: name.to_string(),
        }
    }

    fn person() -> ResolvedClass {
        ResolvedClass {
            id: "https://schema.org/Person".to_string(),
            package: "org.schema".to_string(),
            name: "Person".to_string(),
            doc: "Person\n\nA person.".to_string(),
            superclass: Some(class_type("org.schema", "Thing")),
            fields: vec![
                Field::new(
                    "url",
                    TypeRef::Primitive("java.net.URL".to_string()),
                    "URL of the item.",
                ),
                Field::new("knows", class_type("org.schema", "Person"), ""),
                Field::new(DEFINED, TypeRef::Primitive(STRING_TYPE.to_string()), "")
                    .initialized("https://schema.org/"),
            ],
        }
    }

    const DEFINED: &str = "isDefinedBy";

    #[test]
    fn renders_a_class() {
        let expected = "\
package org.schema;

import java.net.URL;

/**
 * Person
 *
 * A person.
 */
public class Person extends Thing {

  /**
   * URL of the item.
   */
  public URL url;

  public Person knows;

  public String isDefinedBy = \"https://schema.org/\";
}
";
        assert_eq!(render_class(&person()), expected);
    }

    #[test]
    fn clashing_simple_names_are_qualified() {
        let mut class = person();
        class.fields = vec![
            Field::new("a", class_type("com.other", "Thing"), ""),
            Field::new("b", class_type("com.third", "Person"), ""),
        ];
        let source = render_class(&class);
        assert!(source.contains("public class Person extends Thing {"));
        assert!(source.contains("public com.other.Thing a;"));
        assert!(source.contains("public com.third.Person b;"));
        assert!(!source.contains("import com."));
    }

    #[test]
    fn unsafe_docs_are_dropped() {
        let mut class = person();
        class.doc = "Ends a comment */ early".to_string();
        let source = render_class(&class);
        assert!(!source.contains("early"));
        assert!(source.contains("public class Person extends Thing {"));
    }

    #[test]
    fn no_superclass_and_object_fields() {
        let mut class = person();
        class.superclass = None;
        class.doc = String::new();
        class.fields = vec![Field::new("odd", TypeRef::Object, "")];
        assert_eq!(
            render_class(&class),
            "package org.schema;\n\npublic class Person {\n\n  public Object odd;\n}\n"
        );
    }
}
