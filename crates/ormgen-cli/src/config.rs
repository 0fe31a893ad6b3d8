//! Command-line configuration.

use clap::Parser;
use ormgen::{GeneratorConfig, DEFAULT_SCHEMA_EXTENSION};
use ormgen_codegen::{
    EmitOptions, DEFAULT_BASE_CLASS, DEFAULT_INCLUDE, DEFAULT_NAMESPACE, DEFAULT_OUTPUT_EXTENSION,
};
use std::path::PathBuf;

/// Command-line arguments for the generator.
#[derive(Parser, Debug)]
#[command(name = "ormgen")]
#[command(
    version,
    about = "Generate C++ data-access classes from CREATE TABLE sources",
    long_about = None
)]
pub struct Args {
    /// Directory searched recursively for schema sources.
    pub source_root: PathBuf,

    /// Directory generated headers are written to.
    pub output_dir: PathBuf,

    /// Path of the JSON description of all tables.
    pub description_path: PathBuf,

    /// Extension of schema sources.
    #[arg(long, default_value = DEFAULT_SCHEMA_EXTENSION)]
    pub extension: String,

    /// Namespace wrapping generated classes.
    #[arg(long, default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Prefix prepended to class names.
    #[arg(long, default_value = "")]
    pub class_prefix: String,

    /// Header providing the table interface.
    #[arg(long, default_value = DEFAULT_INCLUDE)]
    pub include: String,

    /// Base class of generated classes.
    #[arg(long, default_value = DEFAULT_BASE_CLASS)]
    pub base_class: String,

    /// Extension of generated headers.
    #[arg(long, default_value = DEFAULT_OUTPUT_EXTENSION)]
    pub output_extension: String,
}

impl Args {
    /// Convert command-line arguments to a generator configuration.
    pub fn into_config(self) -> GeneratorConfig {
        let emit = EmitOptions::new()
            .with_namespace(self.namespace)
            .with_class_prefix(self.class_prefix)
            .with_include(self.include)
            .with_base_class(self.base_class)
            .with_extension(self.output_extension);

        GeneratorConfig::new(self.source_root, self.output_dir, self.description_path)
            .with_schema_extension(self.extension)
            .with_emit_options(emit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_arguments() {
        let args = Args::try_parse_from(["ormgen", "sql", "out", "out/schema.json"]).unwrap();
        let config = args.into_config();
        assert_eq!(config.source_root, PathBuf::from("sql"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.description_path, PathBuf::from("out/schema.json"));
        assert_eq!(config.schema_extension, "sql");
        assert_eq!(config.emit, EmitOptions::default());
    }

    #[test]
    fn test_options() {
        let args = Args::try_parse_from([
            "ormgen",
            "sql",
            "out",
            "schema.json",
            "--extension",
            "ddl",
            "--namespace",
            "game::db",
            "--class-prefix",
            "UTable_",
            "--include",
            "db/table.hpp",
            "--base-class",
            "TableBase",
            "--output-extension",
            "hpp",
        ])
        .unwrap();
        let config = args.into_config();
        assert_eq!(config.schema_extension, "ddl");
        assert_eq!(config.emit.namespace, "game::db");
        assert_eq!(config.emit.class_prefix, "UTable_");
        assert_eq!(config.emit.include, "db/table.hpp");
        assert_eq!(config.emit.base_class, "TableBase");
        assert_eq!(config.emit.extension, "hpp");
    }

    #[test]
    fn test_missing_positional_argument() {
        assert!(Args::try_parse_from(["ormgen", "sql", "out"]).is_err());
    }
}
