//! JSON definitions of expression trees.
//!
//! The mapping language's own parser lives elsewhere; this module gives the
//! already-parsed tree a plain serde encoding so trees can be stored, shipped
//! to the CLI, or written by hand in tests.
//!
//! # Format
//!
//! Each node is an object tagged by `"type"`:
//!
//! ```json
//! {
//!   "type": "match",
//!   "context": { "type": "field", "path": "user" },
//!   "cases": [
//!     {
//!       "query": {
//!         "type": "arithmetic",
//!         "operands": [{ "type": "field", "path": "age" }, { "type": "literal", "value": 18 }],
//!         "operators": [">="]
//!       },
//!       "result": { "type": "literal", "value": "adult" }
//!     }
//!   ]
//! }
//! ```
//!
//! A mapping adds named maps for `apply` nodes:
//! `{ "maps": { "name": <node> }, "expr": <node> }`.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{
    context::{ExecContext, Maps, MessageBatch, Vars},
    convert::from_json,
    error::{BuildError, EvalError},
    expr::{
        Apply, Arithmetic, ArithmeticOperator, Document, Field, If, Literal, Match, MatchCase,
        Metadata, Not, Variable,
    },
    node::{Node, NodeRef},
    target::TargetPath,
    value::Value,
};

/// Deepest node nesting accepted by [`NodeDef::build`].
pub const MAX_DEPTH: usize = 256;

/// Serializable description of a node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeDef {
    Literal {
        value: serde_json::Value,
    },
    Absent,
    Delete,
    Field {
        #[serde(default)]
        path: String,
    },
    Document {
        #[serde(default)]
        path: String,
    },
    Meta {
        #[serde(default)]
        key: String,
    },
    Var {
        name: String,
    },
    Arithmetic {
        operands: Vec<NodeDef>,
        operators: Vec<ArithmeticOperator>,
    },
    If {
        condition: Box<NodeDef>,
        then: Box<NodeDef>,
        #[serde(default, rename = "else")]
        otherwise: Option<Box<NodeDef>>,
    },
    Match {
        #[serde(default)]
        context: Option<Box<NodeDef>>,
        cases: Vec<CaseDef>,
    },
    Not {
        operand: Box<NodeDef>,
    },
    Apply {
        name: String,
    },
}

/// Serializable description of a [`MatchCase`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseDef {
    pub query: NodeDef,
    pub result: NodeDef,
}

impl NodeDef {
    /// Builds the node tree this definition describes.
    pub fn build(&self) -> Result<NodeRef, BuildError> {
        self.build_at(0)
    }

    fn build_at(&self, depth: usize) -> Result<NodeRef, BuildError> {
        if depth > MAX_DEPTH {
            return Err(BuildError::TooDeep(MAX_DEPTH));
        }
        let next = depth + 1;

        let node: NodeRef = match self {
            NodeDef::Literal { value } => Box::new(Literal::new(from_json(value.clone()))),
            NodeDef::Absent => Box::new(Literal::new(Value::Absent)),
            NodeDef::Delete => Box::new(Literal::new(Value::Delete)),
            NodeDef::Field { path } => Box::new(Field::new(path)),
            NodeDef::Document { path } => Box::new(Document::new(path)),
            NodeDef::Meta { key } => Box::new(Metadata::new(key.as_str())),
            NodeDef::Var { name } => Box::new(Variable::new(name.as_str())),
            NodeDef::Arithmetic {
                operands,
                operators,
            } => {
                let operands = operands
                    .iter()
                    .map(|o| o.build_at(next))
                    .collect::<Result<Vec<_>, _>>()?;
                Box::new(Arithmetic::new(operands, operators.clone())?)
            }
            NodeDef::If {
                condition,
                then,
                otherwise,
            } => Box::new(If::new(
                condition.build_at(next)?,
                then.build_at(next)?,
                otherwise.as_ref().map(|o| o.build_at(next)).transpose()?,
            )),
            NodeDef::Match { context, cases } => {
                let context = context.as_ref().map(|c| c.build_at(next)).transpose()?;
                let cases = cases
                    .iter()
                    .map(|c| Ok(MatchCase::new(c.query.build_at(next)?, c.result.build_at(next)?)))
                    .collect::<Result<Vec<_>, BuildError>>()?;
                Box::new(Match::new(context, cases))
            }
            NodeDef::Not { operand } => Box::new(Not::new(operand.build_at(next)?)),
            NodeDef::Apply { name } => Box::new(Apply::new(name.as_str())),
        };
        Ok(node)
    }
}

/// Serializable description of a [`Mapping`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MappingDef {
    #[serde(default)]
    pub maps: HashMap<String, NodeDef>,
    pub expr: NodeDef,
}

impl MappingDef {
    pub fn compile(&self) -> Result<Mapping, BuildError> {
        let maps = self
            .maps
            .iter()
            .map(|(name, def)| Ok((name.clone(), def.build()?)))
            .collect::<Result<Maps, BuildError>>()?;
        Ok(Mapping {
            maps,
            root: self.expr.build()?,
        })
    }
}

/// A compiled root expression together with the maps it may apply.
#[derive(Debug)]
pub struct Mapping {
    pub maps: Maps,
    pub root: NodeRef,
}

impl Mapping {
    /// Parses a mapping from JSON.
    ///
    /// Accepts either a full mapping (`{"maps": ..., "expr": ...}`) or a bare
    /// node definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapexpr::definition::Mapping;
    /// use mapexpr::{Batch, Part, Value};
    ///
    /// let mapping = Mapping::from_json(r#"{"type": "field", "path": "name"}"#).unwrap();
    /// let batch = Batch::new(vec![Part::new(r#"{"name": "Alice"}"#)]);
    ///
    /// let result = mapping.exec(&batch, 0, &Default::default()).unwrap();
    /// assert_eq!(result, Value::from("Alice"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        if raw.get("expr").is_some() {
            serde_json::from_value::<MappingDef>(raw)?.compile()
        } else {
            let root = serde_json::from_value::<NodeDef>(raw)?.build()?;
            Ok(Mapping {
                maps: Maps::new(),
                root,
            })
        }
    }

    /// Executes the root expression against message `index` of `batch`.
    pub fn exec(
        &self,
        batch: &dyn MessageBatch,
        index: usize,
        vars: &Vars,
    ) -> Result<Value, EvalError> {
        let ctx = ExecContext::new(batch, index)
            .with_maps(&self.maps)
            .with_vars(vars);
        self.root.exec(&ctx)
    }

    pub fn query_targets(&self) -> Vec<TargetPath> {
        self.root.query_targets()
    }
}
