//! Registry of table names claimed during a generation run.

use crate::error::Error;
use std::collections::HashSet;

/// Table names seen so far.
///
/// One registry is threaded through every file parsed in a run so a name
/// declared twice, in the same file or in different files, is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableNames {
    seen: HashSet<String>,
}

impl TableNames {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a table name.
    pub fn claim(&mut self, name: &str) -> Result<(), Error> {
        if !self.seen.insert(name.to_string()) {
            return Err(Error::DuplicateTable {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    /// Check if a name has been claimed.
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Number of claimed names.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no name has been claimed.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
