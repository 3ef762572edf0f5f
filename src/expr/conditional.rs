use tracing::trace;

use crate::{
    coerce,
    context::ExecContext,
    error::EvalError,
    node::{Node, NodeRef},
    target::TargetPath,
    value::Value,
};

/// `if condition { then } else { otherwise }`
///
/// A false condition without an else branch yields [`Value::Absent`].
#[derive(Debug)]
pub struct If {
    condition: NodeRef,
    then: NodeRef,
    otherwise: Option<NodeRef>,
}

impl If {
    pub fn new(condition: NodeRef, then: NodeRef, otherwise: Option<NodeRef>) -> Self {
        If {
            condition,
            then,
            otherwise,
        }
    }
}

impl Node for If {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        let passed = self
            .condition
            .exec(ctx)
            .and_then(|v| coerce::expect_bool(&v))
            .map_err(|e| EvalError::IfCondition(Box::new(e)))?;

        trace!(passed, "if condition checked");
        if passed {
            return self.then.exec(ctx);
        }
        match &self.otherwise {
            Some(otherwise) => otherwise.exec(ctx),
            None => Ok(Value::Absent),
        }
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        let mut targets = self.condition.query_targets();
        targets.extend(self.then.query_targets());
        if let Some(otherwise) = &self.otherwise {
            targets.extend(otherwise.query_targets());
        }
        targets
    }
}
