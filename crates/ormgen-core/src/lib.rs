//! ormgen Core - schema catalog model and type mapping.
//!
//! This crate holds the data model shared by the DDL parser, the code emitter
//! and the catalog builder.

pub mod catalog;
pub mod error;
pub mod mapping;

pub use catalog::{
    FieldDefinition, LogicalType, SchemaCatalog, SchemaFile, TableDefinition, TableNames,
};
pub use error::Error;
pub use mapping::{logical_type, representation_type, unsigned_of};
