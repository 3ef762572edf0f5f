use indexmap::IndexMap;
use mapexpr::{
    TargetKind, TargetPath, Value,
    convert::{from_json, to_json},
};
use serde_json::json;

// ============================================================================
// Value
// ============================================================================

#[test]
fn test_kind_names() {
    assert_eq!(Value::Null.kind(), "null");
    assert_eq!(Value::Boolean(true).kind(), "bool");
    assert_eq!(Value::Integer(1).kind(), "number");
    assert_eq!(Value::Unsigned(1).kind(), "number");
    assert_eq!(Value::Float(1.0).kind(), "number");
    assert_eq!(Value::from("s").kind(), "string");
    assert_eq!(Value::Array(vec![]).kind(), "array");
    assert_eq!(Value::Object(IndexMap::new()).kind(), "object");
}

#[test]
fn test_sentinels_are_distinct() {
    assert!(!Value::Absent.is_domain());
    assert!(!Value::Delete.is_domain());
    assert!(Value::Null.is_domain());
    assert_ne!(Value::Absent, Value::Null);
    assert_ne!(Value::Delete, Value::Null);
    assert_ne!(Value::Absent, Value::Delete);
}

#[test]
fn test_display() {
    assert_eq!(Value::from("plain").to_string(), "plain");
    assert_eq!(Value::Integer(-2).to_string(), "-2");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(
        from_json(json!({"a": [1, "x"]})).to_string(),
        r#"{"a":[1,"x"]}"#
    );
}

#[test]
fn test_as_str() {
    assert_eq!(Value::from("text").as_str(), Some("text"));
    assert_eq!(Value::Integer(1).as_str(), None);
}

#[test]
fn test_get_path() {
    let value = from_json(json!({"a": {"b": [10, {"c": "deep"}]}}));
    assert_eq!(value.get_path(&["a", "b", "1", "c"]), Some(&Value::from("deep")));
    assert_eq!(value.get_path(&["a", "b", "0"]), Some(&Value::Integer(10)));
    assert_eq!(value.get_path(&["a", "b", "x"]), None);
    assert_eq!(value.get_path(&["a", "missing"]), None);
    assert_eq!(value.get_path::<&str>(&[]), Some(&value));
}

#[test]
fn test_object_equality_ignores_order() {
    let left = from_json(json!({"a": 1, "b": 2}));
    let right = from_json(json!({"b": 2, "a": 1}));
    assert_eq!(left, right);
}

// ============================================================================
// JSON conversion
// ============================================================================

#[test]
fn test_from_json_numbers() {
    assert_eq!(from_json(json!(7)), Value::Integer(7));
    assert_eq!(from_json(json!(-7)), Value::Integer(-7));
    assert_eq!(from_json(json!(u64::MAX)), Value::Unsigned(u64::MAX));
    assert_eq!(from_json(json!(0.5)), Value::Float(0.5));
}

#[test]
fn test_from_json_preserves_key_order() {
    let value = from_json(json!({"z": 1, "a": 2}));
    let Value::Object(map) = value else {
        panic!("expected object");
    };
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
}

#[test]
fn test_to_json_sentinels() {
    assert_eq!(to_json(&Value::Absent), None);
    assert_eq!(to_json(&Value::Delete), None);

    let mut map = IndexMap::new();
    map.insert("keep".to_string(), Value::Integer(1));
    map.insert("drop".to_string(), Value::Absent);
    let nested = Value::Object(map);
    assert_eq!(to_json(&nested), Some(json!({"keep": 1})));

    let array = Value::Array(vec![Value::Delete, Value::from("x")]);
    assert_eq!(to_json(&array), Some(json!(["x"])));
}

#[test]
fn test_to_json_non_finite_float() {
    assert_eq!(to_json(&Value::Float(f64::NAN)), Some(serde_json::Value::Null));
}

// ============================================================================
// Targets
// ============================================================================

#[test]
fn test_target_display() {
    assert_eq!(
        TargetPath::new(TargetKind::Value, ["foo", "bar"]).to_string(),
        "value foo.bar"
    );
    assert_eq!(
        TargetPath::new(TargetKind::Metadata, ["topic"]).to_string(),
        "metadata topic"
    );
    assert_eq!(
        TargetPath::new(TargetKind::Value, Vec::<String>::new()).to_string(),
        "value"
    );
}

#[test]
fn test_target_prefixed() {
    let prefix = vec!["a".to_string(), "b".to_string()];
    assert_eq!(
        TargetPath::new(TargetKind::Value, ["c"]).prefixed(&prefix),
        TargetPath::new(TargetKind::Value, ["a", "b", "c"])
    );
}
