//! Report the static read targets of a mapping

use super::CliError;
use crate::{Mapping, TargetPath};

/// Options for the targets command
#[derive(Debug, Clone, Default)]
pub struct TargetsOptions {
    /// The mapping definition (JSON)
    pub mapping: String,
}

/// Build a mapping and list the targets its root expression reads
pub fn execute_targets(options: &TargetsOptions) -> Result<Vec<TargetPath>, CliError> {
    let mapping = Mapping::from_json(&options.mapping)?;
    Ok(mapping.query_targets())
}
