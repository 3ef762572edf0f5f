use std::mem;

use tracing::trace;

use crate::{
    coerce,
    context::ExecContext,
    error::{BuildError, EvalError},
    expr::operators::ArithmeticOperator,
    node::{Node, NodeRef},
    target::TargetPath,
    value::Value,
};

/// A flat chain of operands joined by binary operators.
///
/// Construction resolves operator precedence once (see
/// [`PRECEDENCE`](crate::expr::PRECEDENCE)): the chain is split at its loosest
/// operators, each piece is split again at the next tier, and so on. Every
/// level becomes one [`Chain`] holding all operands of that tier, so
/// `2 + 3 * 2 + 1 * 3` evaluates to `11` and the nesting never exceeds the
/// number of tiers, however long the chain is.
///
/// Operands are evaluated lazily, so `&&`, `||` and `|` never execute an
/// operand whose result can no longer matter.
#[derive(Debug)]
pub struct Arithmetic {
    root: NodeRef,
}

impl Arithmetic {
    /// Builds an expression from `operands` and the `operators` between them.
    ///
    /// There must be exactly one operator fewer than operands.
    pub fn new(
        operands: Vec<NodeRef>,
        operators: Vec<ArithmeticOperator>,
    ) -> Result<Self, BuildError> {
        if operands.is_empty() {
            return Err(BuildError::NoOperands);
        }
        if operands.len() != operators.len() + 1 {
            return Err(BuildError::OperatorMismatch {
                operands: operands.len(),
                operators: operators.len(),
            });
        }
        Ok(Arithmetic {
            root: group(operands, operators)?,
        })
    }
}

/// Splits `operands` at the loosest tier present in `operators` and groups
/// each piece with the remaining, tighter tiers.
fn group(
    operands: Vec<NodeRef>,
    operators: Vec<ArithmeticOperator>,
) -> Result<NodeRef, BuildError> {
    let Some(tier) = operators.iter().map(|op| op.tier()).max() else {
        return operands.into_iter().next().ok_or(BuildError::NoOperands);
    };

    let mut grouped = Vec::new();
    let mut joins = Vec::new();
    let mut piece_operands = Vec::new();
    let mut piece_operators = Vec::new();

    let mut operands = operands.into_iter();
    piece_operands.extend(operands.next());
    for (op, operand) in operators.into_iter().zip(operands) {
        if op.tier() == tier {
            grouped.push(group(
                mem::take(&mut piece_operands),
                mem::take(&mut piece_operators),
            )?);
            joins.push(op);
        } else {
            piece_operators.push(op);
        }
        piece_operands.push(operand);
    }
    grouped.push(group(piece_operands, piece_operators)?);

    Ok(Box::new(Chain {
        operands: grouped,
        operators: joins,
    }))
}

impl Node for Arithmetic {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        self.root.exec(ctx)
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        self.root.query_targets()
    }
}

/// Operands joined by operators of a single precedence tier, applied left to
/// right.
#[derive(Debug)]
pub struct Chain {
    operands: Vec<NodeRef>,
    operators: Vec<ArithmeticOperator>,
}

impl Chain {
    fn coalesce(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        let last = self.operands.len() - 1;
        for operand in &self.operands[..last] {
            match operand.exec(ctx) {
                Ok(Value::Null | Value::Absent | Value::Delete) => {
                    trace!("coalesce: operand empty, falling back");
                }
                Ok(value) => return Ok(value),
                Err(err) => {
                    trace!(error = %err, "coalesce: operand failed, falling back");
                }
            }
        }
        self.operands[last].exec(ctx)
    }

    /// `&&` and `||`: stops at the first operand equal to `decisive`.
    fn logic(&self, ctx: &ExecContext<'_>, decisive: bool) -> Result<Value, EvalError> {
        for operand in &self.operands {
            if coerce::expect_bool(&operand.exec(ctx)?)? == decisive {
                return Ok(Value::Boolean(decisive));
            }
        }
        Ok(Value::Boolean(!decisive))
    }

    fn fold(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        use ArithmeticOperator::*;

        let mut acc = self.operands[0].exec(ctx)?;
        for (op, operand) in self.operators.iter().zip(&self.operands[1..]) {
            let right = operand.exec(ctx)?;
            acc = match op {
                Eq => Value::Boolean(coerce::equals(&acc, &right)),
                Neq => Value::Boolean(!coerce::equals(&acc, &right)),
                Gt | Gte | Lt | Lte => Value::Boolean(coerce::compare(*op, &acc, &right)?),
                _ => coerce::arithmetic(*op, &acc, &right)?,
            };
        }
        Ok(acc)
    }
}

impl Node for Chain {
    fn exec(&self, ctx: &ExecContext<'_>) -> Result<Value, EvalError> {
        match self.operators.first() {
            Some(ArithmeticOperator::Pipe) => self.coalesce(ctx),
            Some(ArithmeticOperator::And) => self.logic(ctx, false),
            Some(ArithmeticOperator::Or) => self.logic(ctx, true),
            _ => self.fold(ctx),
        }
    }

    fn query_targets(&self) -> Vec<TargetPath> {
        self.operands
            .iter()
            .flat_map(|operand| operand.query_targets())
            .collect()
    }
}
