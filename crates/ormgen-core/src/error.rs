//! Core error types.

use crate::catalog::LogicalType;
use thiserror::Error;

/// Catalog and type mapping errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Column type keyword outside the supported vocabulary.
    #[error("unknown field type '{token}'")]
    UnknownType {
        /// The offending type token.
        token: String,
    },

    /// `UNSIGNED` applied to a type that is not an integer.
    #[error("UNSIGNED is not valid for type {ty}")]
    UnsignedNonInteger {
        /// The type the modifier was applied to.
        ty: LogicalType,
    },

    /// A table name was declared more than once in the catalog.
    #[error("table '{name}' redefined")]
    DuplicateTable {
        /// The table name.
        name: String,
    },

    /// A field name was declared more than once in a table.
    #[error("field '{field}' redefined in table '{table}'")]
    DuplicateField {
        /// The table name.
        table: String,
        /// The field name.
        field: String,
    },

    /// The primary key references a field the table does not declare.
    #[error("primary key of table '{table}' references unknown field '{field}'")]
    UnknownPrimaryKeyField {
        /// The table name.
        table: String,
        /// The referenced field name.
        field: String,
    },

    /// The primary key lists the same field twice.
    #[error("primary key of table '{table}' lists field '{field}' twice")]
    DuplicatePrimaryKeyField {
        /// The table name.
        table: String,
        /// The field name.
        field: String,
    },

    /// Two schema files share a base name.
    #[error("schema file '{name}' defined more than once")]
    DuplicateSchemaFile {
        /// The file base name.
        name: String,
    },
}
