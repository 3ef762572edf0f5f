//! Leaf nodes that read from the execution context.
//!
//! Each accessor reports exactly one [`TargetPath`].

use crate::{
    context::ExecContext,
    error::EvalError,
    node::Node,
    target::{TargetKind, TargetPath, split_path},
    value::Value,
};

/// Reads a path relative to the scoped value (`this.foo.bar`).
///
/// Without a scoped value the path is resolved against the document of the
/// current message. An empty path returns the whole scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    path: Vec<String>,
}

impl Field {
    /// Creates a field accessor from a dot-separated path.
    pub fn new(path: &str) -> Self {
        Field {
            path: split_path(path),
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }
}

impl Node for Field {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        match ctx.value {
            Some(scope) => scope
                .get_path(&self.path)
                .cloned()
                .ok_or_else(|| EvalError::UndefinedField(self.path.join("."))),
            None => ctx.batch.document(ctx.index, &self.path),
        }
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        vec![TargetPath::new(TargetKind::Value, self.path.iter().cloned())]
    }

    fn scope_path(&self) -> Option<&[String]> {
        Some(&self.path)
    }
}

/// Reads a path from the document of the current message, ignoring any
/// scoped value (`json("foo.bar")`).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: Vec<String>,
}

impl Document {
    pub fn new(path: &str) -> Self {
        Document {
            path: split_path(path),
        }
    }
}

impl Node for Document {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        ctx.batch.document(ctx.index, &self.path)
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        vec![TargetPath::new(TargetKind::Value, self.path.iter().cloned())]
    }

    fn scope_path(&self) -> Option<&[String]> {
        Some(&self.path)
    }
}

/// Reads a metadata value of the current message (`meta("key")`).
///
/// An empty key returns all metadata as an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    key: String,
}

impl Metadata {
    pub fn new(key: impl Into<String>) -> Self {
        Metadata { key: key.into() }
    }
}

impl Node for Metadata {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        ctx.batch.metadata(ctx.index, &self.key)
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        let path = if self.key.is_empty() {
            Vec::new()
        } else {
            vec![self.key.clone()]
        };
        vec![TargetPath::new(TargetKind::Metadata, path)]
    }
}

/// Reads a named variable (`var("name")`).
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

impl Node for Variable {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        ctx.vars
            .get(&self.name)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedVariable(self.name.clone()))
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        vec![TargetPath::new(TargetKind::Variable, [self.name.clone()])]
    }
}
