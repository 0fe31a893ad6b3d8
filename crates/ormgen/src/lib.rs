//! ormgen - C++ data-access classes from CREATE TABLE sources.
//!
//! A run walks a source tree for schema files, parses every `CREATE TABLE`
//! block into one catalog, writes a JSON description of the catalog and emits
//! one C++ header per schema file.
//!
//! # Example
//!
//! ```rust,no_run
//! use ormgen::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("sql", "generated", "generated/schema.json");
//! let summary = generate(config)?;
//! println!("{} tables in {} files", summary.tables, summary.files);
//! # Ok::<(), ormgen::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod describe;
pub mod error;
pub mod generator;

pub use builder::CatalogBuilder;
pub use config::{GeneratorConfig, DEFAULT_SCHEMA_EXTENSION};
pub use describe::{describe, write_description};
pub use error::{Error, Result};
pub use generator::{generate, Generator, RunSummary};

pub use ormgen_codegen::{EmitError, EmitOptions, GeneratedUnit};
pub use ormgen_core::{
    FieldDefinition, LogicalType, SchemaCatalog, SchemaFile, TableDefinition, TableNames,
};
pub use ormgen_lang::{ParseError, ParseErrorKind};
