//! Operand coercion for arithmetic, comparison and equality operators.
//!
//! # Numeric lattice
//!
//! | operands                         | result    |
//! |----------------------------------|-----------|
//! | any `Float`                      | `Float`   |
//! | `Unsigned` with negative `Integer` | `Float` |
//! | `Unsigned` with `Unsigned`/non-negative `Integer` | `Unsigned` |
//! | `Integer` with `Integer`         | `Integer` |
//!
//! Integer results that overflow their subtype fall back to `Float`.
//! Unsigned subtraction that goes below zero yields an `Integer`. Float
//! results are plain IEEE 754 doubles.

use std::cmp::Ordering;

use crate::{error::EvalError, expr::ArithmeticOperator, value::Value};

/// A pair of numeric operands promoted to a common subtype.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Operands {
    Ints(i64, i64),
    Uints(u64, u64),
    Floats(f64, f64),
}

fn to_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Integer(n) => Some(*n as f64),
        Value::Unsigned(n) => Some(*n as f64),
        Value::Float(n) => Some(*n),
        _ => None,
    }
}

fn promote(left: &Value, right: &Value) -> Option<Operands> {
    use Value::*;
    let operands = match (left, right) {
        (Integer(a), Integer(b)) => Operands::Ints(*a, *b),
        (Unsigned(a), Unsigned(b)) => Operands::Uints(*a, *b),
        (Integer(a), Unsigned(b)) => match u64::try_from(*a) {
            Ok(a) => Operands::Uints(a, *b),
            Err(_) => Operands::Floats(*a as f64, *b as f64),
        },
        (Unsigned(a), Integer(b)) => match u64::try_from(*b) {
            Ok(b) => Operands::Uints(*a, b),
            Err(_) => Operands::Floats(*a as f64, *b as f64),
        },
        (l, r) => Operands::Floats(to_f64(l)?, to_f64(r)?),
    };
    Some(operands)
}

/// The error reported when `left` and `right` cannot be combined.
///
/// The left operand decides which category was expected.
fn mismatch(left: &Value, right: &Value) -> EvalError {
    match left {
        Value::String(_) => EvalError::mismatch("string", right),
        l if l.is_number() => EvalError::mismatch("number", right),
        l => EvalError::mismatch("number", l),
    }
}

/// Applies `+ - * / %` to two values.
pub fn arithmetic(op: ArithmeticOperator, left: &Value, right: &Value) -> Result<Value, EvalError> {
    if op == ArithmeticOperator::Add
        && let (Value::String(a), Value::String(b)) = (left, right)
    {
        return Ok(Value::String(format!("{}{}", a, b)));
    }

    let operands = promote(left, right).ok_or_else(|| mismatch(left, right))?;

    if matches!(op, ArithmeticOperator::Div | ArithmeticOperator::Mod) {
        let zero = match operands {
            Operands::Ints(_, b) => b == 0,
            Operands::Uints(_, b) => b == 0,
            Operands::Floats(_, b) => b == 0.0,
        };
        if zero {
            return Err(EvalError::DivideByZero);
        }
    }

    let result = match operands {
        Operands::Ints(a, b) => int_op(op, a, b).map(Value::Integer),
        Operands::Uints(a, b) => uint_op(op, a, b),
        Operands::Floats(a, b) => Some(Value::Float(float_op(op, a, b))),
    };

    // Overflowing integer results degrade to floats.
    Ok(result.unwrap_or_else(|| {
        let (a, b) = match operands {
            Operands::Ints(a, b) => (a as f64, b as f64),
            Operands::Uints(a, b) => (a as f64, b as f64),
            Operands::Floats(a, b) => (a, b),
        };
        Value::Float(float_op(op, a, b))
    }))
}

fn int_op(op: ArithmeticOperator, a: i64, b: i64) -> Option<i64> {
    match op {
        ArithmeticOperator::Add => a.checked_add(b),
        ArithmeticOperator::Sub => a.checked_sub(b),
        ArithmeticOperator::Mul => a.checked_mul(b),
        ArithmeticOperator::Div => a.checked_div(b),
        ArithmeticOperator::Mod => a.checked_rem(b),
        _ => None,
    }
}

fn uint_op(op: ArithmeticOperator, a: u64, b: u64) -> Option<Value> {
    let n = match op {
        ArithmeticOperator::Add => a.checked_add(b),
        ArithmeticOperator::Sub if a < b => {
            return i64::try_from(a as i128 - b as i128).ok().map(Value::Integer);
        }
        ArithmeticOperator::Sub => a.checked_sub(b),
        ArithmeticOperator::Mul => a.checked_mul(b),
        ArithmeticOperator::Div => a.checked_div(b),
        ArithmeticOperator::Mod => a.checked_rem(b),
        _ => None,
    };
    n.map(Value::Unsigned)
}

/// IEEE 754 double arithmetic.
fn float_op(op: ArithmeticOperator, a: f64, b: f64) -> f64 {
    match op {
        ArithmeticOperator::Add => a + b,
        ArithmeticOperator::Sub => a - b,
        ArithmeticOperator::Mul => a * b,
        ArithmeticOperator::Div => a / b,
        ArithmeticOperator::Mod => a % b,
        _ => f64::NAN,
    }
}

/// Orders two numbers of any subtype. Integer subtypes compare exactly;
/// anything involving a float compares as `f64`. `None` for NaN.
fn number_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
        (Value::Unsigned(a), Value::Unsigned(b)) => Some(a.cmp(b)),
        (Value::Integer(a), Value::Unsigned(b)) => Some((*a as i128).cmp(&(*b as i128))),
        (Value::Unsigned(a), Value::Integer(b)) => Some((*a as i128).cmp(&(*b as i128))),
        (l, r) => to_f64(l)?.partial_cmp(&to_f64(r)?),
    }
}

/// Applies `> >= < <=`. Numbers compare with numbers and strings with
/// strings; any other pairing is a type mismatch.
pub fn compare(op: ArithmeticOperator, left: &Value, right: &Value) -> Result<bool, EvalError> {
    let ordering = match (left, right) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (l, r) if l.is_number() && r.is_number() => number_cmp(l, r),
        _ => return Err(mismatch(left, right)),
    };
    let Some(ordering) = ordering else {
        return Ok(false);
    };
    Ok(match op {
        ArithmeticOperator::Gt => ordering == Ordering::Greater,
        ArithmeticOperator::Gte => ordering != Ordering::Less,
        ArithmeticOperator::Lt => ordering == Ordering::Less,
        ArithmeticOperator::Lte => ordering != Ordering::Greater,
        _ => false,
    })
}

/// Structural equality used by `==` and `!=`.
///
/// Numbers are equal across subtypes when numerically equal, arrays and
/// objects compare deeply (object key order is ignored), and values of
/// different categories are simply unequal.
pub fn equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(k, v)| b.get(k).is_some_and(|w| equals(v, w)))
        }
        (l, r) if l.is_number() && r.is_number() => number_cmp(l, r) == Some(Ordering::Equal),
        (l, r) => l == r,
    }
}

/// Reads a boolean operand for `&&`, `||`, `!` and conditions.
pub fn expect_bool(value: &Value) -> Result<bool, EvalError> {
    value.as_bool().ok_or_else(|| EvalError::mismatch("bool", value))
}
