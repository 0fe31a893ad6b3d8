//! Generator configuration.

use ormgen_codegen::EmitOptions;
use std::path::PathBuf;

/// Default schema source extension.
pub const DEFAULT_SCHEMA_EXTENSION: &str = "sql";

/// Configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory searched recursively for schema sources.
    pub source_root: PathBuf,

    /// Directory generated units are written to.
    pub output_dir: PathBuf,

    /// Path of the description document.
    pub description_path: PathBuf,

    /// Extension of schema sources, without the dot.
    pub schema_extension: String,

    /// Code emission options.
    pub emit: EmitOptions,
}

impl GeneratorConfig {
    /// Create a configuration with default options.
    pub fn new(
        source_root: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        description_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_root: source_root.into(),
            output_dir: output_dir.into(),
            description_path: description_path.into(),
            schema_extension: DEFAULT_SCHEMA_EXTENSION.to_string(),
            emit: EmitOptions::default(),
        }
    }

    /// Set the schema source extension.
    pub fn with_schema_extension(mut self, extension: impl Into<String>) -> Self {
        self.schema_extension = extension.into().trim_start_matches('.').to_string();
        self
    }

    /// Set the code emission options.
    pub fn with_emit_options(mut self, options: EmitOptions) -> Self {
        self.emit = options;
        self
    }
}
