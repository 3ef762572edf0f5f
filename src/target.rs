//! Static read targets reported by [`Node::query_targets`](crate::Node::query_targets).

use std::fmt;

/// The namespace a target lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// A field of the scoped value or message document
    Value,
    /// A metadata key of the current message
    Metadata,
    /// A named variable
    Variable,
}

/// A field, metadata key or variable an expression may read.
///
/// Produced fresh on every analysis call; never interned or deduplicated.
///
/// # Examples
///
/// - `this.foo.bar` → `TargetPath { kind: Value, path: ["foo", "bar"] }`
/// - `meta("topic")` → `TargetPath { kind: Metadata, path: ["topic"] }`
/// - `this` → `TargetPath { kind: Value, path: [] }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath {
    pub kind: TargetKind,
    pub path: Vec<String>,
}

impl TargetPath {
    pub fn new<I, S>(kind: TargetKind, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TargetPath {
            kind,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Prepends `prefix` to the path.
    pub fn prefixed(mut self, prefix: &[String]) -> Self {
        if !prefix.is_empty() {
            self.path.splice(0..0, prefix.iter().cloned());
        }
        self
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TargetKind::Value => "value",
            TargetKind::Metadata => "metadata",
            TargetKind::Variable => "variable",
        };
        if self.path.is_empty() {
            return f.write_str(kind);
        }
        write!(f, "{} {}", kind, self.path.join("."))
    }
}

/// Splits a dot-separated path. The empty string yields the empty path.
pub fn split_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split('.').map(str::to_string).collect()
}
