//! Ontology IRI → Java identifier rules.
//!
//! Deterministic mappings from class and property IRIs to Java class names,
//! packages and field names.

use percent_encoding::percent_decode_str;
use url::Url;

/// Words Java reserves; a field with one of these names gets [`RESERVED_SUFFIX`].
pub const JAVA_RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "var", "void", "volatile", "while",
];

/// Appended to a field name that collides with [`JAVA_RESERVED`].
pub const RESERVED_SUFFIX: &str = "Field";

const DIGIT_WORDS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

/// Upper-cases the first character and lower-cases the rest (`"model"` → `"Model"`).
pub fn title_case(segment: &str) -> String {
    let lower = segment.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-cases the first character only (`"CreativeWork"` → `"creativeWork"`).
pub fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Replaces a leading digit with its English word (`"3DModel"` → `"ThreeDModel"`).
pub fn spell_leading_digit(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next().and_then(|c| c.to_digit(10)) {
        Some(d) => format!("{}{}", DIGIT_WORDS[d as usize], chars.as_str()),
        None => name.to_string(),
    }
}

/// Builds a class name from a URI path.
///
/// Empty segments are dropped and the rest percent-decoded; the first
/// segment is kept as written and every later one is title-cased before
/// concatenation. Returns `None` for a path with no segments.
pub fn class_name_for_path(path: &str) -> Option<String> {
    let mut segments = path
        .split('/')
        .filter(|s| !s.trim().is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy());
    let first = segments.next()?.into_owned();
    let name = segments.fold(first, |mut name, segment| {
        name.push_str(&title_case(&segment));
        name
    });
    Some(spell_leading_digit(&name))
}

/// Builds the simple class name for a class IRI.
///
/// IRIs without a usable path (`https://schema.org/`) fall back to the first
/// host label, and non-URL ids to their text after the last `/` or `:`.
pub fn class_name_for_iri(iri: &str) -> String {
    match Url::parse(iri) {
        Ok(url) => class_name_for_path(url.path())
            .or_else(|| {
                url.host_str()
                    .and_then(|h| h.split('.').next())
                    .map(title_case)
            })
            .unwrap_or_default(),
        Err(_) => {
            let tail = iri.rsplit(['/', ':']).next().unwrap_or(iri);
            spell_leading_digit(tail)
        }
    }
}

/// Reverses a host name into a package (`"schema.org"` → `"org.schema"`)
/// under `base_package`.
pub fn package_for_host(base_package: &str, host: &str) -> String {
    let reversed: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).rev().collect();
    join_package(base_package, &reversed.join("."))
}

/// Returns the package for a class IRI, or `base_package` if it has no host.
pub fn package_for_iri(base_package: &str, iri: &str) -> String {
    match Url::parse(iri).ok().as_ref().and_then(Url::host_str) {
        Some(host) => package_for_host(base_package, host),
        None => base_package.to_string(),
    }
}

fn join_package(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{base}.{rest}"),
    }
}

/// Returns `"{package}.{name}"`, or `name` alone for the default package.
pub fn qualified_name(package: &str, name: &str) -> String {
    join_package(package, name)
}

/// Returns the part of a dotted name after the last `.`.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Appends [`RESERVED_SUFFIX`] to `name` when Java reserves it.
pub fn field_name(name: &str) -> String {
    if JAVA_RESERVED.contains(&name) {
        format!("{name}{RESERVED_SUFFIX}")
    } else {
        name.to_string()
    }
}

/// Builds a field name from a property IRI: the text after the last `/`,
/// passed through [`field_name`].
pub fn field_name_for_property(id: &str) -> String {
    field_name(id.rsplit('/').next().unwrap_or(id))
}
