//! Schema catalog for ormgen.
//!
//! The catalog stores every table parsed from the schema sources of one
//! generation run, grouped by the file that declared it.

mod catalog;
mod field;
mod names;
mod table;
mod types;

pub use catalog::{SchemaCatalog, SchemaFile};
pub use field::FieldDefinition;
pub use names::TableNames;
pub use table::TableDefinition;
pub use types::LogicalType;
