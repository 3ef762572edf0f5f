use crate::{
    context::ExecContext, error::EvalError, node::Node, target::TargetPath, value::Value,
};

/// Upper bound on nested map applications within one evaluation.
pub const MAX_APPLY_DEPTH: usize = 64;

/// Executes a named sub-expression from the context's maps.
///
/// The map runs with the caller's context, so it sees the same scoped value.
/// Which map a name refers to is only known at run time, so no targets are
/// reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Apply {
    name: String,
}

impl Apply {
    pub fn new(name: impl Into<String>) -> Self {
        Apply { name: name.into() }
    }
}

impl Node for Apply {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        let map = ctx
            .maps
            .get(&self.name)
            .ok_or_else(|| EvalError::UndefinedMap(self.name.clone()))?;
        if ctx.apply_depth >= MAX_APPLY_DEPTH {
            return Err(EvalError::RecursionLimit(self.name.clone()));
        }
        map.exec(&ExecContext {
            apply_depth: ctx.apply_depth + 1,
            ..*ctx
        })
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        Vec::new()
    }
}
