//! Machine-readable catalog description.

use crate::error::{Error, Result};
use ormgen_core::SchemaCatalog;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Describe the catalog as `{ <file>: [ <table>, ... ] }`, preserving file and
/// table declaration order.
pub fn describe(catalog: &SchemaCatalog) -> Result<Value> {
    let mut document = Map::new();
    for file in catalog.files() {
        document.insert(file.name.clone(), serde_json::to_value(&file.tables)?);
    }
    Ok(Value::Object(document))
}

/// Write the pretty-printed description to `path`, creating parent
/// directories.
pub fn write_description(path: &Path, catalog: &SchemaCatalog) -> Result<()> {
    let text = serde_json::to_string_pretty(&describe(catalog)?)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| Error::io(path, e))?;

    tracing::info!(path = %path.display(), "wrote description");
    Ok(())
}
