//! An in-memory message batch.
//!
//! Each [`Part`] holds raw content plus string metadata. The content is
//! parsed as JSON on first structured access and cached, so a batch can be
//! shared by concurrent evaluations.

use std::sync::OnceLock;

use indexmap::IndexMap;
use tracing::debug;

use crate::{context::MessageBatch, convert::from_json, error::EvalError, value::Value};

/// A single message: raw content and metadata.
#[derive(Debug, Clone, Default)]
pub struct Part {
    content: Vec<u8>,
    metadata: IndexMap<String, String>,
    document: OnceLock<Result<Value, String>>,
}

impl Part {
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        Part {
            content: content.into(),
            ..Default::default()
        }
    }

    /// Adds a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn metadata(&self) -> &IndexMap<String, String> {
        &self.metadata
    }

    /// The content parsed as a JSON document.
    pub fn document(&self) -> Result<&Value, EvalError> {
        self.document
            .get_or_init(|| {
                serde_json::from_slice(&self.content)
                    .map(from_json)
                    .map_err(|e| {
                        debug!(error = %e, "message content is not valid JSON");
                        e.to_string()
                    })
            })
            .as_ref()
            .map_err(|e| EvalError::InvalidDocument(e.clone()))
    }
}

/// An ordered collection of [`Part`]s.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    parts: Vec<Part>,
}

impl Batch {
    pub fn new(parts: Vec<Part>) -> Self {
        Batch { parts }
    }

    pub fn push(&mut self, part: Part) {
        self.parts.push(part);
    }

    pub fn get(&self, index: usize) -> Option<&Part> {
        self.parts.get(index)
    }

    fn part(&self, index: usize) -> Result<&Part, EvalError> {
        self.parts
            .get(index)
            .ok_or(EvalError::UndefinedMessage(index))
    }
}

impl FromIterator<Part> for Batch {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Batch {
            parts: iter.into_iter().collect(),
        }
    }
}

impl MessageBatch for Batch {
    fn len(&self) -> usize {
        self.parts.len()
    }

    fn document(&self, index: usize, path: &[String]) -> Result<Value, EvalError> {
        self.part(index)?
            .document()?
            .get_path(path)
            .cloned()
            .ok_or_else(|| EvalError::UndefinedField(path.join(".")))
    }

    fn metadata(&self, index: usize, key: &str) -> Result<Value, EvalError> {
        let metadata = self.part(index)?.metadata();
        if key.is_empty() {
            return Ok(Value::Object(
                metadata
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                    .collect(),
            ));
        }
        metadata
            .get(key)
            .map(|v| Value::String(v.clone()))
            .ok_or_else(|| EvalError::UndefinedMetadata(key.to_string()))
    }
}
