use std::fmt;

use indexmap::IndexMap;

use crate::convert::to_json;

/// A dynamically typed value produced and consumed by expression nodes.
///
/// Numbers keep the subtype they were created with (`Integer`, `Unsigned`,
/// `Float`); arithmetic promotes between them following a fixed lattice
/// (see [`crate::coerce`]).
///
/// Two sentinel variants sit outside the domain of ordinary values:
///
/// - [`Value::Absent`] means "no assignment should happen"
/// - [`Value::Delete`] means "the target should be removed"
///
/// Sentinels are never equal to a domain value, including `Null`.
///
/// # Examples
///
/// ```
/// use mapexpr::Value;
/// use indexmap::IndexMap;
///
/// let null = Value::Null;
/// let int = Value::Integer(-3);
/// let uint = Value::Unsigned(3);
/// let float = Value::Float(2.5);
/// let string = Value::from("hello");
///
/// let mut obj = IndexMap::new();
/// obj.insert("key".to_string(), Value::from("value"));
/// let object = Value::Object(obj);
///
/// assert!(!Value::Absent.is_domain());
/// assert_ne!(Value::Absent, Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON null
    Null,

    /// Boolean
    Boolean(bool),

    /// Signed 64-bit integer
    Integer(i64),

    /// Unsigned 64-bit integer
    Unsigned(u64),

    /// 64-bit float
    Float(f64),

    /// UTF-8 string
    String(String),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Mapping with insertion-ordered iteration. Equality ignores order.
    Object(IndexMap<String, Value>),

    /// Sentinel: nothing should be assigned.
    Absent,

    /// Sentinel: the target should be deleted.
    Delete,
}

impl Value {
    /// True for every value except the two sentinels.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Value::Absent | Value::Delete)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Unsigned(_) | Value::Float(_))
    }

    /// The broad category name used in error messages.
    ///
    /// All three numeric subtypes report `"number"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "bool",
            Value::Integer(_) | Value::Unsigned(_) | Value::Float(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Absent => "absent",
            Value::Delete => "delete",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Walks a path of object keys and array indices.
    ///
    /// An empty path returns `self`. Returns `None` as soon as a segment
    /// cannot be resolved.
    pub fn get_path<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        let mut current = self;
        for segment in path {
            let segment = segment.as_ref();
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }
}

impl fmt::Display for Value {
    /// Scalars print bare (strings unquoted); containers print as compact JSON.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Unsigned(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Array(_) | Value::Object(_) => match to_json(self) {
                Some(json) => write!(f, "{}", json),
                None => f.write_str("null"),
            },
            Value::Absent => f.write_str("<absent>"),
            Value::Delete => f.write_str("<delete>"),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Unsigned(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}
