use std::fmt;

use serde::Deserialize;

/// Binary operators joining the operands of an arithmetic expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ArithmeticOperator {
    // Arithmetic
    /// Addition or string concatenation (`+`)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (`-`)
    #[serde(rename = "-")]
    Sub,
    /// Multiplication (`*`)
    #[serde(rename = "*")]
    Mul,
    /// Division (`/`)
    #[serde(rename = "/")]
    Div,
    /// Modulo (`%`)
    #[serde(rename = "%")]
    Mod,

    // Comparison
    /// Equal (`==`)
    #[serde(rename = "==")]
    Eq,
    /// Not equal (`!=`)
    #[serde(rename = "!=")]
    Neq,
    /// Greater than (`>`)
    #[serde(rename = ">")]
    Gt,
    /// Greater than or equal (`>=`)
    #[serde(rename = ">=")]
    Gte,
    /// Less than (`<`)
    #[serde(rename = "<")]
    Lt,
    /// Less than or equal (`<=`)
    #[serde(rename = "<=")]
    Lte,

    // Logical
    /// Logical AND (`&&`)
    #[serde(rename = "&&")]
    And,
    /// Logical OR (`||`)
    #[serde(rename = "||")]
    Or,

    // Coalescing
    /// Coalesce (`|`)
    #[serde(rename = "|")]
    Pipe,
}

/// Operator tiers, tightest binding first.
pub const PRECEDENCE: [&[ArithmeticOperator]; 6] = [
    &[ArithmeticOperator::Mul, ArithmeticOperator::Div, ArithmeticOperator::Mod],
    &[ArithmeticOperator::Add, ArithmeticOperator::Sub],
    &[
        ArithmeticOperator::Eq,
        ArithmeticOperator::Neq,
        ArithmeticOperator::Gt,
        ArithmeticOperator::Gte,
        ArithmeticOperator::Lt,
        ArithmeticOperator::Lte,
    ],
    &[ArithmeticOperator::And],
    &[ArithmeticOperator::Or],
    &[ArithmeticOperator::Pipe],
];

impl ArithmeticOperator {
    /// Position of the operator's tier in [`PRECEDENCE`]; higher binds looser.
    pub fn tier(self) -> usize {
        PRECEDENCE
            .iter()
            .position(|tier| tier.contains(&self))
            .unwrap_or(PRECEDENCE.len())
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Sub => "-",
            ArithmeticOperator::Mul => "*",
            ArithmeticOperator::Div => "/",
            ArithmeticOperator::Mod => "%",
            ArithmeticOperator::Eq => "==",
            ArithmeticOperator::Neq => "!=",
            ArithmeticOperator::Gt => ">",
            ArithmeticOperator::Gte => ">=",
            ArithmeticOperator::Lt => "<",
            ArithmeticOperator::Lte => "<=",
            ArithmeticOperator::And => "&&",
            ArithmeticOperator::Or => "||",
            ArithmeticOperator::Pipe => "|",
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
