use mapexpr::{
    Batch, BuildError, Mapping, NodeDef, Part, TargetKind, TargetPath, Value, Vars,
    definition::MAX_DEPTH,
};
use serde_json::json;

// ============================================================================
// Helpers
// ============================================================================

fn mapping(def: serde_json::Value) -> Mapping {
    Mapping::from_json(&def.to_string()).unwrap()
}

fn run(def: serde_json::Value, content: &str) -> Result<Value, String> {
    let batch = Batch::new(vec![Part::new(content)]);
    mapping(def)
        .exec(&batch, 0, &Vars::new())
        .map_err(|e| e.to_string())
}

fn lit(value: serde_json::Value) -> serde_json::Value {
    json!({"type": "literal", "value": value})
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_bare_node() {
    let result = run(json!({"type": "field", "path": "a.b"}), r#"{"a":{"b":true}}"#);
    assert_eq!(result.unwrap(), Value::Boolean(true));
}

#[test]
fn test_literal_number_subtypes() {
    assert_eq!(run(lit(json!(-3)), "").unwrap(), Value::Integer(-3));
    assert_eq!(run(lit(json!(u64::MAX)), "").unwrap(), Value::Unsigned(u64::MAX));
    assert_eq!(run(lit(json!(2.5)), "").unwrap(), Value::Float(2.5));
}

#[test]
fn test_sentinel_nodes() {
    assert_eq!(run(json!({"type": "absent"}), "").unwrap(), Value::Absent);
    assert_eq!(run(json!({"type": "delete"}), "").unwrap(), Value::Delete);
}

#[test]
fn test_arithmetic_definition() {
    let def = json!({
        "type": "arithmetic",
        "operands": [lit(json!(2)), lit(json!(3)), lit(json!(4))],
        "operators": ["+", "*"]
    });
    assert_eq!(run(def, "").unwrap(), Value::Integer(14));
}

#[test]
fn test_all_operator_symbols_parse() {
    for symbol in ["+", "-", "*", "/", "%", "==", "!=", ">", ">=", "<", "<=", "&&", "||", "|"] {
        let def = json!({
            "type": "arithmetic",
            "operands": [lit(json!(true)), lit(json!(true))],
            "operators": [symbol]
        });
        assert!(Mapping::from_json(&def.to_string()).is_ok(), "{}", symbol);
    }
}

#[test]
fn test_unknown_operator() {
    let def = json!({
        "type": "arithmetic",
        "operands": [lit(json!(1)), lit(json!(1))],
        "operators": ["^"]
    });
    let err = Mapping::from_json(&def.to_string()).unwrap_err();
    assert!(matches!(err, BuildError::Definition(_)));
}

#[test]
fn test_unknown_node_type() {
    let err = Mapping::from_json(r#"{"type": "lambda"}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid expression definition"), "{}", err);
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        Mapping::from_json("{not json").unwrap_err(),
        BuildError::Definition(_)
    ));
}

#[test]
fn test_operator_mismatch_definition() {
    let def = json!({
        "type": "arithmetic",
        "operands": [lit(json!(1))],
        "operators": ["+"]
    });
    let err = Mapping::from_json(&def.to_string()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "mismatch of arithmetic operators to operands: 1 operators, 1 operands"
    );
}

#[test]
fn test_if_definition_with_else_keyword() {
    let def = json!({
        "type": "if",
        "condition": lit(json!(false)),
        "then": lit(json!("yes")),
        "else": lit(json!("no"))
    });
    assert_eq!(run(def, "").unwrap(), Value::from("no"));
}

#[test]
fn test_match_definition() {
    let def = json!({
        "type": "match",
        "context": {"type": "field", "path": "user"},
        "cases": [
            {
                "query": {
                    "type": "arithmetic",
                    "operands": [{"type": "field", "path": "age"}, lit(json!(18))],
                    "operators": [">="]
                },
                "result": lit(json!("adult"))
            },
            {"query": lit(json!(true)), "result": lit(json!("minor"))}
        ]
    });
    assert_eq!(run(def.clone(), r#"{"user":{"age":30}}"#).unwrap(), Value::from("adult"));
    assert_eq!(run(def, r#"{"user":{"age":3}}"#).unwrap(), Value::from("minor"));
}

#[test]
fn test_not_definition() {
    let def = json!({"type": "not", "operand": lit(json!(true))});
    assert_eq!(run(def, "").unwrap(), Value::Boolean(false));
}

#[test]
fn test_node_def_deserializes() {
    let def: NodeDef = serde_json::from_value(json!({"type": "meta"})).unwrap();
    assert_eq!(def, NodeDef::Meta { key: String::new() });
}

#[test]
fn test_long_operand_list_definition() {
    let n = 100_000;
    let def = json!({
        "type": "arithmetic",
        "operands": vec![lit(json!(1)); n],
        "operators": vec!["+"; n - 1]
    });
    assert_eq!(run(def, "").unwrap(), Value::Integer(n as i64));
}

// ============================================================================
// Mappings
// ============================================================================

#[test]
fn test_mapping_with_maps() {
    let def = json!({
        "maps": {
            "greet": {
                "type": "arithmetic",
                "operands": [lit(json!("hello ")), {"type": "field", "path": "name"}],
                "operators": ["+"]
            }
        },
        "expr": {"type": "apply", "name": "greet"}
    });
    assert_eq!(run(def, r#"{"name":"world"}"#).unwrap(), Value::from("hello world"));
}

#[test]
fn test_mapping_with_vars() {
    let mapping = mapping(json!({"type": "var", "name": "env"}));
    let mut vars = Vars::new();
    vars.insert("env".to_string(), Value::from("prod"));
    let result = mapping.exec(&Batch::new(vec![Part::new("")]), 0, &vars).unwrap();
    assert_eq!(result, Value::from("prod"));
}

#[test]
fn test_mapping_over_batch_index() {
    let mapping = mapping(json!({"type": "document", "path": "id"}));
    let batch: Batch = ["1", "2", "3"]
        .iter()
        .map(|id| Part::new(format!(r#"{{"id":{}}}"#, id)))
        .collect();
    let ids: Vec<Value> = (0..3)
        .map(|i| mapping.exec(&batch, i, &Vars::new()).unwrap())
        .collect();
    assert_eq!(ids, vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
}

#[test]
fn test_mapping_targets() {
    let mapping = mapping(json!({
        "type": "match",
        "context": {"type": "field", "path": "doc"},
        "cases": [{
            "query": {"type": "meta", "key": "topic"},
            "result": {"type": "field", "path": "body"}
        }]
    }));
    assert_eq!(
        mapping.query_targets(),
        vec![
            TargetPath::new(TargetKind::Metadata, ["topic"]),
            TargetPath::new(TargetKind::Value, ["doc", "body"]),
            TargetPath::new(TargetKind::Value, ["doc"]),
        ]
    );
}

// ============================================================================
// Depth limit
// ============================================================================

fn nested_not(depth: usize) -> NodeDef {
    let mut def = NodeDef::Literal { value: json!(true) };
    for _ in 0..depth {
        def = NodeDef::Not {
            operand: Box::new(def),
        };
    }
    def
}

#[test]
fn test_depth_within_limit() {
    assert!(nested_not(MAX_DEPTH).build().is_ok());
}

#[test]
fn test_depth_limit_exceeded() {
    let err = nested_not(MAX_DEPTH + 1).build().unwrap_err();
    assert!(matches!(err, BuildError::TooDeep(MAX_DEPTH)));
}
