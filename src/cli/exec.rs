//! Execute a mapping against a single message

use tracing::debug;

use super::{CliError, parse_pair};
use crate::{
    Batch, Mapping, Part, Value, Vars,
    convert::{from_json, to_json},
};

/// Options for the exec command
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// The mapping definition (JSON)
    pub mapping: String,
    /// Raw message content
    pub input: Option<String>,
    /// Metadata entries as `key=value`
    pub metadata: Vec<String>,
    /// Variables as `name=json`. Values that are not valid JSON are taken as
    /// plain strings.
    pub vars: Vec<String>,
}

/// Result of an exec operation
#[derive(Debug, Clone, PartialEq)]
pub enum ExecOutcome {
    /// The mapping produced a value
    Value(serde_json::Value),
    /// The mapping produced nothing to assign
    Absent,
    /// The mapping asked for the target to be deleted
    Delete,
}

/// Execute a mapping
pub fn execute_exec(options: &ExecOptions) -> Result<ExecOutcome, CliError> {
    let mapping = Mapping::from_json(&options.mapping)?;

    let mut part = Part::new(options.input.clone().unwrap_or_default());
    for entry in &options.metadata {
        let (key, value) = parse_pair(entry)?;
        part = part.with_metadata(key, value);
    }
    let batch = Batch::new(vec![part]);

    let mut vars = Vars::new();
    for entry in &options.vars {
        let (name, raw) = parse_pair(entry)?;
        let value = match serde_json::from_str(&raw) {
            Ok(json) => from_json(json),
            Err(_) => Value::String(raw),
        };
        vars.insert(name, value);
    }

    debug!(vars = vars.len(), metadata = options.metadata.len(), "executing mapping");
    let result = mapping.exec(&batch, 0, &vars)?;

    Ok(match result {
        Value::Absent => ExecOutcome::Absent,
        Value::Delete => ExecOutcome::Delete,
        other => ExecOutcome::Value(to_json(&other).unwrap_or(serde_json::Value::Null)),
    })
}
