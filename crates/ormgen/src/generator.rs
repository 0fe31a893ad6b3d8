//! End-to-end generation run.

use crate::builder::CatalogBuilder;
use crate::config::GeneratorConfig;
use crate::describe::write_description;
use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Schema files loaded.
    pub files: usize,
    /// Tables across all files.
    pub tables: usize,
    /// Paths of the generated units, in catalog order.
    pub units: Vec<PathBuf>,
}

/// Runs the generator for one configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The run configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parse every source, validate the catalog, then write the description
    /// and one unit per source. Nothing is written unless every source parses
    /// and every table can be emitted.
    pub fn run(&self) -> Result<RunSummary> {
        let config = &self.config;
        tracing::info!(
            source_root = %config.source_root.display(),
            output_dir = %config.output_dir.display(),
            description = %config.description_path.display(),
            "starting generation"
        );

        let catalog = CatalogBuilder::new()
            .with_extension(config.schema_extension.as_str())
            .build(&config.source_root)?;
        tracing::info!(
            files = catalog.len(),
            tables = catalog.table_count(),
            "catalog built"
        );

        let units = ormgen_codegen::emit(&catalog, &config.emit)?;

        write_description(&config.description_path, &catalog)?;

        fs::create_dir_all(&config.output_dir)
            .map_err(|e| Error::io(&config.output_dir, e))?;

        let mut written = Vec::with_capacity(units.len());
        for unit in units {
            let path = config.output_dir.join(&unit.file_name);
            fs::write(&path, &unit.contents).map_err(|e| Error::io(&path, e))?;
            tracing::debug!(
                path = %path.display(),
                source = %unit.source_path.display(),
                classes = unit.class_count,
                "wrote unit"
            );
            written.push(path);
        }

        tracing::info!(units = written.len(), "generation complete");

        Ok(RunSummary {
            files: catalog.len(),
            tables: catalog.table_count(),
            units: written,
        })
    }
}

/// Run the generator once with `config`.
pub fn generate(config: GeneratorConfig) -> Result<RunSummary> {
    Generator::new(config).run()
}
