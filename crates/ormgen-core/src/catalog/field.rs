//! Field definitions for tables.

use super::types::LogicalType;
use serde::{Deserialize, Serialize};

/// A column definition within a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Logical column type.
    #[serde(rename = "type")]
    pub ty: LogicalType,
    /// Whether the column accepts NULL. Only an explicit `NOT NULL` clears it.
    pub nullable: bool,
    /// Raw default token as written in the source (`0`, `'abc'`, `TRUE`).
    pub default: Option<String>,
    /// Column comment with its quotes removed.
    pub comment: Option<String>,
    /// Whether the column is part of the primary key.
    pub primary_key: bool,
    /// Zero-based declaration position; row values are decoded by it.
    pub ordinal: usize,
}

impl FieldDefinition {
    /// Create a nullable field with no default or comment.
    pub fn new(name: impl Into<String>, ty: LogicalType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: true,
            default: None,
            comment: None,
            primary_key: false,
            ordinal: 0,
        }
    }

    /// Clear the nullable flag.
    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Set the raw default token.
    pub fn with_default(mut self, token: impl Into<String>) -> Self {
        self.default = Some(token.into());
        self
    }

    /// Set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Check if this field has a default token.
    pub fn has_default(&self) -> bool {
        self.default.as_deref().is_some_and(|d| !d.is_empty())
    }
}
