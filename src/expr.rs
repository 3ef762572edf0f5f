//! # Expression nodes
//!
//! Every construct of the mapping language compiles down to a tree of the
//! nodes defined here. Each implements [`Node`](crate::Node):
//!
//! - **[literal]** - fixed values, including the sentinels
//! - **[accessor]** - field, document, metadata and variable lookups
//! - **[arithmetic]** - operator chains with precedence resolution
//! - **[conditional]** - `if` / `else`
//! - **[matching]** - `match` with re-scoped cases
//! - **[logical]** - boolean negation
//! - **[apply]** - named sub-expressions
//!
//! ## Example
//!
//! ```
//! use mapexpr::expr::{Arithmetic, ArithmeticOperator, Literal};
//! use mapexpr::{Batch, ExecContext, Node, Value};
//!
//! let expr = Arithmetic::new(
//!     vec![
//!         Box::new(Literal::new(2i64)),
//!         Box::new(Literal::new(3i64)),
//!         Box::new(Literal::new(4i64)),
//!     ],
//!     vec![ArithmeticOperator::Add, ArithmeticOperator::Mul],
//! )
//! .unwrap();
//!
//! let batch = Batch::default();
//! let result = expr.exec(&ExecContext::new(&batch, 0)).unwrap();
//! assert_eq!(result, Value::Integer(14));
//! assert!(expr.query_targets().is_empty());
//! ```
pub mod accessor;
pub mod apply;
pub mod arithmetic;
pub mod conditional;
pub mod literal;
pub mod logical;
pub mod matching;
pub mod operators;

pub use accessor::{Document, Field, Metadata, Variable};
pub use apply::Apply;
pub use arithmetic::{Arithmetic, Chain};
pub use conditional::If;
pub use literal::Literal;
pub use logical::Not;
pub use matching::{Match, MatchCase};
pub use operators::{ArithmeticOperator, PRECEDENCE};
