use crate::{
    coerce,
    context::ExecContext,
    error::EvalError,
    node::{Node, NodeRef},
    target::TargetPath,
    value::Value,
};

/// Boolean negation (`!operand`).
#[derive(Debug)]
pub struct Not {
    operand: NodeRef,
}

impl Not {
    pub fn new(operand: NodeRef) -> Self {
        Not { operand }
    }
}

impl Node for Not {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        let value = self.operand.exec(ctx)?;
        Ok(Value::Boolean(!coerce::expect_bool(&value)?))
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        self.operand.query_targets()
    }
}
