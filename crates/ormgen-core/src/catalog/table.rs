//! Table definitions.

use super::field::FieldDefinition;
use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A table definition parsed from a `CREATE TABLE` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Table name (unique across the catalog).
    pub name: String,
    /// Fields keyed by name, in declaration order.
    pub fields: IndexMap<String, FieldDefinition>,
    /// Primary key field names, in the order of the key clause.
    pub primary_key: Vec<String>,
    /// Table comment.
    pub comment: Option<String>,
    /// Source lines of the table block, joined with newlines.
    pub source: String,
}

impl TableDefinition {
    /// Create an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            primary_key: Vec::new(),
            comment: None,
            source: String::new(),
        }
    }

    /// Append a field, assigning its declaration ordinal.
    pub fn add_field(&mut self, mut field: FieldDefinition) -> Result<(), Error> {
        if self.fields.contains_key(&field.name) {
            return Err(Error::DuplicateField {
                table: self.name.clone(),
                field: field.name,
            });
        }
        field.ordinal = self.fields.len();
        self.fields.insert(field.name.clone(), field);
        Ok(())
    }

    /// Append a field (builder style).
    pub fn with_field(mut self, field: FieldDefinition) -> Result<Self, Error> {
        self.add_field(field)?;
        Ok(self)
    }

    /// Append a field to the primary key and flag it.
    pub fn mark_primary_key(&mut self, name: &str) -> Result<(), Error> {
        if self.primary_key.iter().any(|k| k == name) {
            return Err(Error::DuplicatePrimaryKeyField {
                table: self.name.clone(),
                field: name.to_string(),
            });
        }
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| Error::UnknownPrimaryKeyField {
                table: self.name.clone(),
                field: name.to_string(),
            })?;
        field.primary_key = true;
        self.primary_key.push(name.to_string());
        Ok(())
    }

    /// Set the primary key (builder style).
    pub fn with_primary_key<'a>(
        mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, Error> {
        for name in names {
            self.mark_primary_key(name)?;
        }
        Ok(self)
    }

    /// Set the table comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Get a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Iterate fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    /// Iterate primary key fields in key order.
    pub fn key_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.primary_key.iter().filter_map(|k| self.fields.get(k))
    }

    /// Iterate non-key fields in declaration order.
    pub fn value_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values().filter(|f| !f.primary_key)
    }

    /// Check if the table declares a primary key.
    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }
}
