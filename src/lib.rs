pub mod cli;
pub mod coerce;
pub mod context;
pub mod convert;
pub mod definition;
pub mod error;
pub mod expr;
pub mod message;
pub mod node;
pub mod target;
pub mod value;

pub use context::{ExecContext, Maps, MessageBatch, Vars};
pub use definition::{Mapping, MappingDef, NodeDef};
pub use error::{BuildError, EvalError};
pub use message::{Batch, Part};
pub use node::{Node, NodeRef};
pub use target::{TargetKind, TargetPath};
pub use value::Value;
