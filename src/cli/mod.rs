//! CLI support for mapexpr
//!
//! Provides programmatic access to the `mapexpr` commands so they can be
//! embedded in other tools and tested without spawning the binary.

mod docs;
mod exec;
mod targets;

pub use docs::{DocCategory, get_doc_category, get_docs_overview};
pub use exec::{ExecOptions, ExecOutcome, execute_exec};
pub use targets::{TargetsOptions, execute_targets};

use std::{fs, io, path::Path};

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The mapping definition could not be built
    #[error("Invalid mapping: {0}")]
    Build(#[from] crate::BuildError),

    /// Evaluation failed
    #[error("Evaluation error: {0}")]
    Eval(#[from] crate::EvalError),

    /// JSON parsing error
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A `key=value` argument without `=`
    #[error("Invalid key=value pair: '{0}'")]
    InvalidPair(String),

    /// Neither an inline mapping nor a mapping file was given
    #[error("No mapping given: pass --expr or --file")]
    MissingMapping,

    /// Unknown documentation category
    #[error("Unknown category: '{0}'\nRun 'mapexpr docs' to see available categories.")]
    UnknownCategory(String),
}

/// Splits a `key=value` argument at the first `=`.
pub fn parse_pair(arg: &str) -> Result<(String, String), CliError> {
    arg.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| CliError::InvalidPair(arg.to_string()))
}

/// Resolves the mapping text from an inline definition or a file path.
/// The inline definition wins when both are present.
pub fn load_mapping(expr: Option<String>, file: Option<&Path>) -> Result<String, CliError> {
    match (expr, file) {
        (Some(expr), _) => Ok(expr),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(CliError::MissingMapping),
    }
}
