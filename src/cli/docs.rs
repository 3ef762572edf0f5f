//! Documentation content for the mapexpr CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Nodes,
    Operators,
    Targets,
}

impl DocCategory {
    /// Parse category name from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nodes" | "node" => Some(Self::Nodes),
            "operators" | "ops" => Some(Self::Operators),
            "targets" | "target" => Some(Self::Targets),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"MAPEXPR DOCUMENTATION

mapexpr evaluates mapping expression trees against a message and reports
which fields, metadata keys and variables a tree reads. Trees are written as
JSON objects tagged by "type".

DOCUMENTATION CATEGORIES

  nodes        Node types and their fields
  operators    Arithmetic operators, precedence and coercion
  targets      Static target analysis

Run 'mapexpr doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::parse(name) {
        Some(DocCategory::Nodes) => Ok(NODES_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Targets) => Ok(TARGETS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const NODES_DOC: &str = r#"NODES

  {"type": "literal", "value": <json>}        fixed value
  {"type": "absent"}                          nothing to assign
  {"type": "delete"}                          delete the target
  {"type": "field", "path": "a.b"}            path in the scoped value
                                              (message document when unscoped)
  {"type": "document", "path": "a.b"}         path in the message document
  {"type": "meta", "key": "k"}                metadata value (all when empty)
  {"type": "var", "name": "v"}                variable
  {"type": "arithmetic",
   "operands": [...], "operators": [...]}     operator chain
  {"type": "if", "condition": ...,
   "then": ..., "else": ...}                  else is optional
  {"type": "match", "context": ...,
   "cases": [{"query": ..., "result": ...}]}  context is optional
  {"type": "not", "operand": ...}             boolean negation
  {"type": "apply", "name": "m"}              run a named map

A mapping file may wrap the root node with named maps:

  {"maps": {"m": <node>}, "expr": <node>}
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

Precedence, tightest first:

  *  /  %
  +  -
  ==  !=  >  >=  <  <=
  &&
  ||
  |            coalesce

NUMBERS

  Any float operand gives a float. Otherwise an unsigned operand gives an
  unsigned result, unless a negative integer is involved (float). Two
  integers give an integer. Dividing by zero is an error.

COMPARISON

  > >= < <= compare numbers with numbers and strings with strings.
  == != compare any values structurally and never fail.

LOGIC

  && and || take booleans and skip the right side when the left side
  decides the result.

COALESCE

  a | b returns a unless it is null, absent, delete or fails.
"#;

const TARGETS_DOC: &str = r#"TARGETS

'mapexpr targets' lists every read a mapping may perform, without running
it:

  value a.b        field of the scoped value or document
  metadata k       metadata key
  variable v       variable

Inside a match whose context is a field path, value reads of the cases
are reported relative to the document (prefixed with the context path).
The context's own read is listed last.
"#;
