//! Java source text builder and file output.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

/// Indentation unit inside a class body.
pub const INDENT: &str = "  ";

/// Accumulates the text of one Java compilation unit.
#[derive(Debug, Default)]
pub struct JavaFile {
    /// Source text written so far.
    pub buf: String,
}

impl JavaFile {
    /// Starts a file with its `package` declaration (omitted for the default package).
    #[must_use]
    pub fn new(package: &str) -> Self {
        let mut f = Self::default();
        if !package.is_empty() {
            f.line(&format!("package {package};"));
            f.blank();
        }
        f
    }

    /// Appends one line.
    pub fn line(&mut self, s: &str) {
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    /// Appends one line indented by one level.
    pub fn indented(&mut self, s: &str) {
        self.buf.push_str(INDENT);
        self.line(s);
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends a Javadoc block at column zero.
    pub fn doc_comment(&mut self, text: &str) {
        self.javadoc("", text);
    }

    /// Appends a Javadoc block indented by one level.
    pub fn indented_doc_comment(&mut self, text: &str) {
        self.javadoc(INDENT, text);
    }

    fn javadoc(&mut self, indent: &str, text: &str) {
        let _ = writeln!(self.buf, "{indent}/**");
        for line in normalize_comment(text).lines() {
            if line.is_empty() {
                let _ = writeln!(self.buf, "{indent} *");
            } else {
                let _ = writeln!(self.buf, "{indent} * {line}");
            }
        }
        let _ = writeln!(self.buf, "{indent} */");
    }

    /// Returns the finished source text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Trims trailing whitespace per line, collapses runs of blank lines and
/// drops leading and trailing blank lines.
#[must_use]
pub fn normalize_comment(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// Returns true if `text` can sit inside a `/** ... */` block.
#[must_use]
pub fn is_javadoc_safe(text: &str) -> bool {
    !text.contains("*/")
}

/// Escapes `text` for a Java string literal body.
#[must_use]
pub fn escape_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Writes `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn javadoc_blocks() {
        let mut f = JavaFile::new("org.schema");
        f.doc_comment("Person\n\n\n\nA person.  \n");
        f.indented_doc_comment("Name.");
        assert_eq!(
            f.finish(),
            "package org.schema;\n\n/**\n * Person\n *\n * A person.\n */\n  /**\n   * Name.\n   */\n"
        );
    }

    #[test]
    fn default_package_has_no_declaration() {
        assert_eq!(JavaFile::new("").finish(), "");
    }

    #[test]
    fn literal_escaping() {
        assert_eq!(escape_string_literal(r#"a"b\c"#), r#"a\"b\\c"#);
        assert_eq!(escape_string_literal("https://schema.org/"), "https://schema.org/");
    }

    #[test]
    fn comment_terminator_is_unsafe() {
        assert!(is_javadoc_safe("A person."));
        assert!(!is_javadoc_safe("see /*/ and */ here"));
    }

    #[test]
    fn write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("org/schema/Person.java");
        write_file(&path, "class Person {}\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "class Person {}\n");
    }
}
