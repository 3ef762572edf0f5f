use thiserror::Error;

use crate::Value;

/// Errors that can occur while executing an expression tree.
///
/// Leaf and operator errors propagate unchanged. Only two places wrap: the
/// condition of an `If` ([`EvalError::IfCondition`]) and the query of a
/// `Match` case ([`EvalError::MatchCase`]).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A field path could not be resolved against the scoped value or document
    #[error("field '{0}' was undefined")]
    UndefinedField(String),

    /// The current message carries no metadata under this key
    #[error("metadata value '{0}' was undefined")]
    UndefinedMetadata(String),

    /// No variable of this name exists in the context
    #[error("variable '{0}' was undefined")]
    UndefinedVariable(String),

    /// No named sub-expression of this name exists in the context
    #[error("map '{0}' was not found")]
    UndefinedMap(String),

    /// Named maps applied each other deeper than the recursion limit
    #[error("map '{0}' exceeded the maximum recursion depth")]
    RecursionLimit(String),

    /// The context points at a message the batch does not have
    #[error("message index {0} was out of bounds")]
    UndefinedMessage(usize),

    /// The message content could not be read as a structured document
    #[error("failed to parse message as JSON: {0}")]
    InvalidDocument(String),

    /// An operator or condition received a value of the wrong category
    #[error("expected {expected} value, found {found}: {value}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
        value: String,
    },

    /// Division or modulo by a zero-valued number
    #[error("attempted to divide by zero")]
    DivideByZero,

    /// The condition of an `If` failed or did not produce a boolean
    #[error("failed to check if condition: {0}")]
    IfCondition(#[source] Box<EvalError>),

    /// A `Match` case query failed or did not produce a boolean
    #[error("failed to check match case {index}: {cause}")]
    MatchCase {
        index: usize,
        #[source]
        cause: Box<EvalError>,
    },
}

impl EvalError {
    /// Builds a [`EvalError::TypeMismatch`] describing `found`.
    pub fn mismatch(expected: &'static str, found: &Value) -> Self {
        EvalError::TypeMismatch {
            expected,
            found: found.kind(),
            value: found.to_string(),
        }
    }
}

/// Errors raised while constructing an expression tree.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("arithmetic expression requires at least one operand")]
    NoOperands,

    #[error("mismatch of arithmetic operators to operands: {operators} operators, {operands} operands")]
    OperatorMismatch { operands: usize, operators: usize },

    #[error("expression tree exceeds the maximum depth of {0}")]
    TooDeep(usize),

    #[error("invalid expression definition: {0}")]
    Definition(#[from] serde_json::Error),
}
