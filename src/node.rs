use std::fmt::Debug;

use crate::{context::ExecContext, error::EvalError, target::TargetPath, value::Value};

/// An element of an expression tree.
///
/// Every node can be executed against a context and analysed for the
/// targets it reads. Nodes are immutable once built and can be shared across
/// threads, so one tree may serve many concurrent evaluations.
pub trait Node: Debug + Send + Sync {
    /// Evaluates the node.
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError>;

    /// Returns every target this node could read, in tree order, without
    /// executing anything. Duplicates are kept.
    fn query_targets(&self) -> Vec<TargetPath>;

    /// The path this node scopes nested reads to when it is used as the
    /// context of a `Match`. Only value-path accessors have one.
    fn scope_path(&self) -> Option<&[String]> {
        None
    }
}

/// Owned, type-erased node.
pub type NodeRef = Box<dyn Node>;
