use crate::{
    context::ExecContext, error::EvalError, node::Node, target::TargetPath, value::Value,
};

/// A node that always returns the same value.
///
/// Literals may hold the sentinels, which is how `deleted()` and
/// `nothing()` style constants reach the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    value: Value,
}

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Literal { value: value.into() }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl Node for Literal {
    fn exec(&self, _ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        Ok(self.value.clone())
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        Vec::new()
    }
}
