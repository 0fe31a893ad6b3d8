//! ormgen Schema Language
//!
//! This crate parses the CREATE TABLE dialect ormgen reads from `.sql`
//! sources into [`TableDefinition`]s.
//!
//! # Syntax
//!
//! ```text
//! CREATE TABLE `player` (
//!   `id` BIGINT NOT NULL COMMENT 'player id',
//!   `level` TINYINT UNSIGNED DEFAULT 1,
//!   `name` VARCHAR(255) NOT NULL DEFAULT '',
//!   PRIMARY KEY (`id`)
//! ) ENGINE=InnoDB COMMENT='player base data';
//! ```
//!
//! One statement fragment per line: a `CREATE TABLE` header, one line per
//! field, a `PRIMARY KEY` line and a closing line. Other lines are ignored.
//!
//! # Usage
//!
//! ```rust
//! use ormgen_lang::parse;
//!
//! let tables = parse("CREATE TABLE `t` (\n`id` INT,\nPRIMARY KEY (`id`)\n);").unwrap();
//! assert_eq!(tables[0].primary_key, ["id"]);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

use ormgen_core::{SchemaFile, TableDefinition, TableNames};
use std::path::Path;

pub use error::{ParseError, ParseErrorKind};
pub use parser::Parser;
pub use span::Span;

/// Parse a source, claiming table names in a fresh registry.
///
/// # Example
///
/// ```rust
/// use ormgen_lang::parse;
///
/// let tables = parse("CREATE TABLE `a` (\n`id` INT\n);").unwrap();
/// assert_eq!(tables.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Vec<TableDefinition>, ParseError> {
    parser::parse(source)
}

/// Parse a source, claiming table names in `names`.
pub fn parse_schema(
    source: &str,
    names: &mut TableNames,
) -> Result<Vec<TableDefinition>, ParseError> {
    Parser::new(source, names).parse_tables()
}

/// Parse a source file's contents into a [`SchemaFile`] named `name`.
pub fn parse_schema_file(
    name: &str,
    path: &Path,
    source: &str,
    names: &mut TableNames,
) -> Result<SchemaFile, ParseError> {
    let tables = parse_schema(source, names)?;
    Ok(SchemaFile::new(name, path, tables))
}

/// Tokenize one line (for debugging/testing).
///
/// # Example
///
/// ```rust
/// use ormgen_lang::tokenize;
///
/// let tokens = tokenize("`id` INT NOT NULL").unwrap();
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<lexer::SpannedToken>, Span> {
    lexer::tokenize(line)
}
