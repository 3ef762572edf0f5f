use std::{collections::HashMap, sync::LazyLock};

use crate::{error::EvalError, node::NodeRef, value::Value};

/// Named sub-expressions reachable through [`Apply`](crate::expr::Apply).
pub type Maps = HashMap<String, NodeRef>;

/// Named variables reachable through [`Variable`](crate::expr::Variable).
pub type Vars = HashMap<String, Value>;

static EMPTY_MAPS: LazyLock<Maps> = LazyLock::new(HashMap::new);
static EMPTY_VARS: LazyLock<Vars> = LazyLock::new(HashMap::new);

/// Access to the messages of the batch being processed.
///
/// Implemented by the surrounding pipeline; [`crate::message::Batch`] is an
/// in-memory implementation.
pub trait MessageBatch: Send + Sync {
    /// Number of messages in the batch.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves `path` against the structured document of message `index`.
    fn document(&self, index: usize, path: &[String]) -> Result<Value, EvalError>;

    /// Reads metadata `key` of message `index`. An empty key returns every
    /// metadata entry as an object.
    fn metadata(&self, index: usize, key: &str) -> Result<Value, EvalError>;
}

/// The per-call bundle threaded through every [`Node::exec`](crate::Node::exec).
///
/// A context is never mutated. Nested evaluation that needs a different
/// scoped value gets a child context from [`ExecContext::with_value`], which
/// reuses every other field.
#[derive(Clone, Copy)]
pub struct ExecContext<'a> {
    /// The scoped value. `None` means relative lookups fall back to the
    /// message document; `Some(&Value::Null)` is an explicit null scope.
    pub value: Option<&'a Value>,
    pub maps: &'a Maps,
    pub vars: &'a Vars,
    pub index: usize,
    pub batch: &'a dyn MessageBatch,
    /// How many named maps are currently being applied.
    pub(crate) apply_depth: usize,
}

impl<'a> ExecContext<'a> {
    /// Creates a context for message `index` with no scoped value, maps or
    /// variables.
    pub fn new(batch: &'a dyn MessageBatch, index: usize) -> Self {
        ExecContext {
            value: None,
            maps: &EMPTY_MAPS,
            vars: &EMPTY_VARS,
            index,
            batch,
            apply_depth: 0,
        }
    }

    pub fn with_maps(self, maps: &'a Maps) -> Self {
        ExecContext { maps, ..self }
    }

    pub fn with_vars(self, vars: &'a Vars) -> Self {
        ExecContext { vars, ..self }
    }

    /// Returns a child context scoped to `value`.
    pub fn with_value<'b>(&self, value: &'b Value) -> ExecContext<'b>
    where
        'a: 'b,
    {
        ExecContext {
            value: Some(value),
            maps: self.maps,
            vars: self.vars,
            index: self.index,
            batch: self.batch,
            apply_depth: self.apply_depth,
        }
    }
}

impl std::fmt::Debug for ExecContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecContext")
            .field("value", &self.value)
            .field("maps", &self.maps.keys().collect::<Vec<_>>())
            .field("vars", &self.vars)
            .field("index", &self.index)
            .field("batch_len", &self.batch.len())
            .finish()
    }
}
