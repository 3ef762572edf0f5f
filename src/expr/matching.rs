use tracing::trace;

use crate::{
    coerce,
    context::ExecContext,
    error::EvalError,
    node::{Node, NodeRef},
    target::{TargetKind, TargetPath},
    value::Value,
};

/// One arm of a [`Match`].
#[derive(Debug)]
pub struct MatchCase {
    /// Boolean predicate evaluated against the match context
    pub query: NodeRef,
    /// Value produced when `query` is true
    pub result: NodeRef,
}

impl MatchCase {
    pub fn new(query: NodeRef, result: NodeRef) -> Self {
        MatchCase { query, result }
    }
}

/// `match context { query => result, ... }`
///
/// The value of `context` (or the ambient scoped value when there is no
/// context) becomes the scoped value for every case. Cases are tried in
/// order; the first whose query is true produces the result and later cases
/// are never evaluated. No match yields [`Value::Absent`].
///
/// # Targets
///
/// Case targets are reported first (query then result, case by case). When
/// the context is a value-path accessor such as `this.foo.bar`, value
/// targets found in the cases are prefixed with its path; metadata and
/// variable targets are global and stay as they are. The context's own
/// targets come last.
#[derive(Debug)]
pub struct Match {
    context: Option<NodeRef>,
    cases: Vec<MatchCase>,
}

impl Match {
    pub fn new(context: Option<NodeRef>, cases: Vec<MatchCase>) -> Self {
        Match { context, cases }
    }

    fn exec_cases(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        for (index, case) in self.cases.iter().enumerate() {
            let matched = case
                .query
                .exec(ctx)
                .and_then(|v| coerce::expect_bool(&v))
                .map_err(|e| EvalError::MatchCase {
                    index,
                    cause: Box::new(e),
                })?;
            if matched {
                trace!(case = index, "match case selected");
                return case.result.exec(ctx);
            }
        }
        Ok(Value::Absent)
    }
}

impl Node for Match {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        match &self.context {
            Some(context) => {
                let scoped = context.exec(ctx)?;
                self.exec_cases(&ctx.with_value(&scoped))
            }
            None => self.exec_cases(ctx),
        }
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        let mut targets = Vec::new();
        for case in &self.cases {
            targets.extend(case.query.query_targets());
            targets.extend(case.result.query_targets());
        }

        let Some(context) = &self.context else {
            return targets;
        };

        if let Some(prefix) = context.scope_path() {
            targets = targets
                .into_iter()
                .map(|t| match t.kind {
                    TargetKind::Value => t.prefixed(prefix),
                    _ => t,
                })
                .collect();
        }
        targets.extend(context.query_targets());
        targets
    }
}
