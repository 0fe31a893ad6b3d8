//! Schema catalog - every table of one generation run.

use super::names::TableNames;
use super::table::TableDefinition;
use crate::error::Error;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;

/// The tables declared by one schema source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaFile {
    /// File base name without extension.
    pub name: String,
    /// Path of the source file.
    pub path: PathBuf,
    /// Tables in declaration order.
    pub tables: Vec<TableDefinition>,
}

impl SchemaFile {
    /// Create a schema file.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        tables: Vec<TableDefinition>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            tables,
        }
    }

    /// Get a table by name.
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// All schema files of a run, keyed by base name in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    files: IndexMap<String, SchemaFile>,
    names: TableNames,
}

impl SchemaCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a schema file.
    ///
    /// Fails if the base name is taken or any of its tables is already
    /// declared by a file in the catalog; the catalog is unchanged on failure.
    pub fn insert_file(&mut self, file: SchemaFile) -> Result<(), Error> {
        if self.files.contains_key(&file.name) {
            return Err(Error::DuplicateSchemaFile { name: file.name });
        }

        let mut names = self.names.clone();
        for table in &file.tables {
            names.claim(&table.name)?;
        }

        self.names = names;
        self.files.insert(file.name.clone(), file);
        Ok(())
    }

    /// Get a schema file by base name.
    pub fn file(&self, name: &str) -> Option<&SchemaFile> {
        self.files.get(name)
    }

    /// Iterate schema files in insertion order.
    pub fn files(&self) -> impl Iterator<Item = &SchemaFile> {
        self.files.values()
    }

    /// Iterate every table of every file.
    pub fn tables(&self) -> impl Iterator<Item = &TableDefinition> {
        self.files.values().flat_map(|f| f.tables.iter())
    }

    /// Find a table by name.
    pub fn table(&self, name: &str) -> Option<&TableDefinition> {
        self.tables().find(|t| t.name == name)
    }

    /// Number of schema files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the catalog has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of tables across all files.
    pub fn table_count(&self) -> usize {
        self.names.len()
    }
}
