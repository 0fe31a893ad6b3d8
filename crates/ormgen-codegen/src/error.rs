//! Error types for code emission.

use thiserror::Error;

/// Code emission errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// A table without a primary key cannot be read back or upserted.
    #[error("table '{table}' in '{file}' has no primary key")]
    MissingPrimaryKey { file: String, table: String },
}
