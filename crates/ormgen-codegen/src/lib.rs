//! ormgen Code Emitter
//!
//! Turns a [`SchemaCatalog`] into C++ data-access classes, one header per
//! schema file. Emission happens in two steps: [`lower`] builds class
//! descriptors ([`ir`]) and [`render`] formats them.
//!
//! # Usage
//!
//! ```rust
//! use ormgen_codegen::{emit, EmitOptions};
//! use ormgen_core::{FieldDefinition, LogicalType, SchemaCatalog, SchemaFile, TableDefinition};
//!
//! let table = TableDefinition::new("user_profile")
//!     .with_field(FieldDefinition::new("id", LogicalType::Int32))
//!     .and_then(|t| t.with_primary_key(["id"]))
//!     .unwrap();
//! let mut catalog = SchemaCatalog::new();
//! catalog.insert_file(SchemaFile::new("user", "user.sql", vec![table])).unwrap();
//!
//! let units = emit(&catalog, &EmitOptions::default()).unwrap();
//! assert_eq!(units[0].file_name, "user.orm.h");
//! assert!(units[0].contents.contains("class UserProfile final : public ITable"));
//! ```

pub mod error;
pub mod ir;
pub mod lower;
pub mod naming;
pub mod render;

use ormgen_core::{SchemaCatalog, SchemaFile};
use std::path::PathBuf;

pub use error::EmitError;
pub use naming::upper_camel_case;

/// Default namespace wrapping generated classes.
pub const DEFAULT_NAMESPACE: &str = "orm";
/// Default header providing the runtime table interface.
pub const DEFAULT_INCLUDE: &str = "system/database/table.h";
/// Default base class of generated classes.
pub const DEFAULT_BASE_CLASS: &str = "ITable";
/// Default generated file extension.
pub const DEFAULT_OUTPUT_EXTENSION: &str = "h";
/// Generator name written to unit headers.
pub const GENERATOR_NAME: &str = "ormgen";
/// Generator version written to unit headers.
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Code emission options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Namespace wrapping every class.
    pub namespace: String,
    /// Header included by every unit.
    pub include: String,
    /// Base class of every class.
    pub base_class: String,
    /// Prefix prepended to class names.
    pub class_prefix: String,
    /// Extension of generated files, without the dot.
    pub extension: String,
    /// Generator name for unit headers.
    pub generator: String,
    /// Generator version for unit headers.
    pub version: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            include: DEFAULT_INCLUDE.to_string(),
            base_class: DEFAULT_BASE_CLASS.to_string(),
            class_prefix: String::new(),
            extension: DEFAULT_OUTPUT_EXTENSION.to_string(),
            generator: GENERATOR_NAME.to_string(),
            version: GENERATOR_VERSION.to_string(),
        }
    }
}

impl EmitOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set the included header.
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = include.into();
        self
    }

    /// Set the base class.
    pub fn with_base_class(mut self, base_class: impl Into<String>) -> Self {
        self.base_class = base_class.into();
        self
    }

    /// Set the class name prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the generated file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the generator version written to headers.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Output file name for a schema file base name.
    pub fn file_name(&self, base: &str) -> String {
        format!("{}.orm.{}", base, self.extension.trim_start_matches('.'))
    }
}

/// Generated source for one schema file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Output file name, relative to the output directory.
    pub file_name: String,
    /// Schema file the unit was generated from.
    pub source_path: PathBuf,
    /// Number of classes in the unit.
    pub class_count: usize,
    /// Rendered source text.
    pub contents: String,
}

/// Emit one unit per schema file in the catalog, in catalog order.
///
/// Fails before rendering anything if any table lacks a primary key.
pub fn emit(
    catalog: &SchemaCatalog,
    options: &EmitOptions,
) -> Result<Vec<GeneratedUnit>, EmitError> {
    let units = catalog
        .files()
        .map(|file| lower::lower_unit(file, options).map(|unit| (file, unit)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(units
        .into_iter()
        .map(|(file, unit)| GeneratedUnit {
            contents: render::render_unit(&unit),
            class_count: unit.classes.len(),
            file_name: unit.file_name,
            source_path: file.path.clone(),
        })
        .collect())
}

/// Emit the unit for a single schema file.
pub fn emit_file(file: &SchemaFile, options: &EmitOptions) -> Result<GeneratedUnit, EmitError> {
    let unit = lower::lower_unit(file, options)?;
    Ok(GeneratedUnit {
        contents: render::render_unit(&unit),
        class_count: unit.classes.len(),
        file_name: unit.file_name,
        source_path: file.path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormgen_core::{FieldDefinition, LogicalType, TableDefinition};
    use pretty_assertions::assert_eq;

    fn user_file() -> SchemaFile {
        let table = TableDefinition::new("user_profile")
            .with_field(
                FieldDefinition::new("id", LogicalType::Int32)
                    .not_null()
                    .with_comment("user id"),
            )
            .and_then(|t| t.with_field(FieldDefinition::new("nickname", LogicalType::String)))
            .and_then(|t| t.with_primary_key(["id"]))
            .unwrap()
            .with_comment("user profile");
        SchemaFile::new("user", "user.sql", vec![table])
    }

    #[test]
    fn test_user_profile_unit() {
        let unit = emit_file(&user_file(), &EmitOptions::new().with_version("0.1.0")).unwrap();
        assert_eq!(unit.file_name, "user.orm.h");
        assert_eq!(unit.class_count, 1);

        let expected = r#"/**
 * Object Relational Mapping class definitions
 * This file is generated by ormgen. Do not edit!
 * Generator version: v0.1.0
 * Source file: user.sql
 */

#pragma once

#include "system/database/table.h"

namespace orm {

    // table: user_profile
    // user profile
    class UserProfile final : public ITable {
    public:
        int32_t id = 0; // user id
        std::string nickname;

        UserProfile() = default;

        UserProfile(
            const int32_t id,
            std::string nickname
        ) : id(id),
            nickname(std::move(nickname)) {}

        [[nodiscard]] constexpr const char* getTableName() const override {
            return "user_profile";
        }

        [[nodiscard]] bool comparePrimaryKey(mysqlx::Row &row) const override {
            return id == row[0].get<int32_t>();
        }

        mysqlx::RowResult query(mysqlx::Table &table) override {
            return table.select()
                .where("id = :id").bind("id", id)
                .execute();
        }

        void read(mysqlx::Row &row) override {
            if (row.isNull())
                return;

            id = row[0].get<int32_t>();
            nickname = row[1].get<std::string>();
        }

        void write(mysqlx::Table &table) override {
            mysqlx::RowResult result = query(table);

            if (const mysqlx::Row row = result.fetchOne(); !row.isNull()) {
                table.update()
                    .set("nickname", nickname)
                    .where("id = :id").bind("id", id)
                    .execute();
            } else {
                table.insert("id", "nickname")
                    .values(id, nickname)
                    .execute();
            }
        }

        void remove(mysqlx::Table &table) override {
            table.remove()
                .where("id = :id").bind("id", id)
                .execute();
        }
    }; // UserProfile

} // namespace orm
"#;
        assert_eq!(unit.contents, expected);
    }

    #[test]
    fn test_unsigned_tinyint_member() {
        let table = TableDefinition::new("hero")
            .with_field(FieldDefinition::new("id", LogicalType::Int64))
            .and_then(|t| t.with_field(FieldDefinition::new("lv", LogicalType::UInt8)))
            .and_then(|t| t.with_primary_key(["id"]))
            .unwrap();
        let file = SchemaFile::new("hero", "hero.sql", vec![table]);
        let unit = emit_file(&file, &EmitOptions::default()).unwrap();

        assert!(unit.contents.contains("uint8_t lv = 0;"));
        assert!(unit
            .contents
            .contains("lv = static_cast<uint8_t>(row[1].get<uint32_t>());"));
    }

    #[test]
    fn test_all_key_table_only_inserts() {
        let table = TableDefinition::new("friend_link")
            .with_field(FieldDefinition::new("a", LogicalType::Int64))
            .and_then(|t| t.with_field(FieldDefinition::new("b", LogicalType::Int64)))
            .and_then(|t| t.with_primary_key(["a", "b"]))
            .unwrap();
        let file = SchemaFile::new("social", "social.sql", vec![table]);
        let unit = emit_file(&file, &EmitOptions::default()).unwrap();

        let expected_write = r#"        void write(mysqlx::Table &table) override {
            table.insert("a", "b")
                .values(a, b)
                .execute();
        }
"#;
        assert!(unit.contents.contains(expected_write));
        assert!(!unit.contents.contains("table.update()"));
        assert!(unit
            .contents
            .contains("return a == row[0].get<int64_t>() && b == row[1].get<int64_t>();"));
    }

    #[test]
    fn test_blob_round_trip_calls() {
        let table = TableDefinition::new("mail")
            .with_field(FieldDefinition::new("id", LogicalType::Int64))
            .and_then(|t| t.with_field(FieldDefinition::new("attachment", LogicalType::Blob)))
            .and_then(|t| t.with_primary_key(["id"]))
            .unwrap();
        let file = SchemaFile::new("mail", "mail.sql", vec![table]);
        let unit = emit_file(&file, &EmitOptions::default()).unwrap();

        assert!(unit.contents.contains("FByteArray attachment;"));
        assert!(unit.contents.contains("FByteArray attachment\n"));
        assert!(unit
            .contents
            .contains("attachment(std::move(attachment)) {}"));
        assert!(unit.contents.contains("DB_CAST_FROM_BLOB(attachment, row[1]);"));
        assert!(unit
            .contents
            .contains(".set(\"attachment\", DB_CAST_TO_BLOB(attachment))"));
        assert!(unit
            .contents
            .contains(".values(id, DB_CAST_TO_BLOB(attachment))"));
    }

    #[test]
    fn test_options() {
        let options = EmitOptions::new()
            .with_namespace("game::db")
            .with_include("db/table.hpp")
            .with_base_class("TableBase")
            .with_class_prefix("UTable_")
            .with_extension("hpp");
        let unit = emit_file(&user_file(), &options).unwrap();

        assert_eq!(unit.file_name, "user.orm.hpp");
        assert!(unit.contents.contains("#include \"db/table.hpp\""));
        assert!(unit.contents.contains("namespace game::db {"));
        assert!(unit
            .contents
            .contains("class UTable_UserProfile final : public TableBase {"));
        assert!(unit.contents.contains("UTable_UserProfile() = default;"));
    }

    #[test]
    fn test_emit_fails_on_missing_primary_key() {
        let keyless = TableDefinition::new("audit")
            .with_field(FieldDefinition::new("at", LogicalType::Int64))
            .unwrap();
        let mut catalog = SchemaCatalog::new();
        catalog.insert_file(user_file()).unwrap();
        catalog
            .insert_file(SchemaFile::new("audit", "audit.sql", vec![keyless]))
            .unwrap();

        let err = emit(&catalog, &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, EmitError::MissingPrimaryKey { ref table, .. } if table == "audit"));
        assert_eq!(err.to_string(), "table 'audit' in 'audit' has no primary key");
    }

    #[test]
    fn test_emit_in_catalog_order() {
        let mut catalog = SchemaCatalog::new();
        let table = TableDefinition::new("zone")
            .with_field(FieldDefinition::new("id", LogicalType::Int32))
            .and_then(|t| t.with_primary_key(["id"]))
            .unwrap();
        catalog
            .insert_file(SchemaFile::new("zone", "zone.sql", vec![table]))
            .unwrap();
        catalog.insert_file(user_file()).unwrap();

        let units = emit(&catalog, &EmitOptions::default()).unwrap();
        let names: Vec<_> = units.iter().map(|u| u.file_name.as_str()).collect();
        assert_eq!(names, ["zone.orm.h", "user.orm.h"]);
    }
}
