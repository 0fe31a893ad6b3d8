//! Catalog construction from a source tree.

use crate::config::DEFAULT_SCHEMA_EXTENSION;
use crate::error::{Error, Result};
use ormgen_core::{SchemaCatalog, TableNames};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Builds a [`SchemaCatalog`] from every schema source under a root.
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    extension: String,
}

impl CatalogBuilder {
    /// Create a builder for `.sql` sources.
    pub fn new() -> Self {
        Self {
            extension: DEFAULT_SCHEMA_EXTENSION.to_string(),
        }
    }

    /// Set the schema source extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Walk `root` in file name order, parse every schema source and collect
    /// the results. Table names are unique across all sources.
    pub fn build(&self, root: &Path) -> Result<SchemaCatalog> {
        if !root.is_dir() {
            return Err(Error::MissingSourceRoot {
                path: root.to_path_buf(),
            });
        }

        let mut catalog = SchemaCatalog::new();
        let mut names = TableNames::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_schema(path) {
                continue;
            }

            let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let relative = path.strip_prefix(root).unwrap_or(path);

            let file = ormgen_lang::parse_schema_file(&name, relative, &text, &mut names)
                .map_err(|e| Error::parse(path, &text, e))?;

            tracing::info!(
                path = %relative.display(),
                tables = file.tables.len(),
                "loaded schema file"
            );
            for table in &file.tables {
                tracing::debug!(
                    table = %table.name,
                    fields = table.fields.len(),
                    "parsed table"
                );
            }

            catalog.insert_file(file)?;
        }

        Ok(catalog)
    }

    fn is_schema(&self, path: &Path) -> bool {
        path.extension().and_then(OsStr::to_str) == Some(self.extension.as_str())
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
