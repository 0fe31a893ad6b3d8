//! Intermediate representation of generated code.
//!
//! Lowering decides *what* each class contains; rendering only decides how it
//! is spelled. Type names are already resolved to the target representation.

/// One generated file.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// Output file name (`<base>.orm.<ext>`).
    pub file_name: String,
    /// Provenance written at the top of the file.
    pub header: Header,
    /// Header providing the table interface.
    pub include: String,
    /// Namespace wrapping every class.
    pub namespace: String,
    /// One class per table, in declaration order.
    pub classes: Vec<Class>,
}

/// Provenance header.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Generator name.
    pub generator: String,
    /// Generator version.
    pub version: String,
    /// Source file the unit was generated from.
    pub source: String,
}

/// A data-access class for one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    /// Class name.
    pub name: String,
    /// Base class name.
    pub base: String,
    /// Table the class maps.
    pub table: String,
    /// Table comment.
    pub comment: Option<String>,
    /// Members in field declaration order.
    pub members: Vec<Member>,
    /// Parameterised constructor; `None` for a table without fields.
    pub constructor: Option<Constructor>,
    /// Methods in emission order.
    pub methods: Vec<Method>,
}

/// A member variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub name: String,
    pub ty: String,
    /// Initialiser expression; `None` leaves the member default-constructed.
    pub init: Option<String>,
    pub comment: Option<String>,
}

/// Constructor taking every member in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Constructor {
    pub params: Vec<Param>,
}

/// Constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub pass: Pass,
}

/// How a constructor argument reaches its member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Taken as `const T` and copied.
    Copy,
    /// Taken by value and moved into the member.
    Move,
}

/// A positional row value decoded into a member.
#[derive(Debug, Clone, PartialEq)]
pub struct RowValue {
    pub member: String,
    /// Column position in the row.
    pub column: usize,
    pub decode: Decode,
}

/// How a row value is decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum Decode {
    /// Read directly as the given type.
    Direct { ty: String },
    /// Read as the `wide` carrier type and narrowed to `narrow`.
    Narrow { wide: String, narrow: String },
    /// Converted by the blob conversion routine.
    Blob,
}

/// Conjunction of `field = :field` over the primary key, in key order, each
/// bound by name to the member of the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPredicate {
    pub fields: Vec<String>,
}

/// A column value written by an update or insert.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub column: String,
    pub value: ValueExpr,
}

/// Value written for a column.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueExpr {
    /// The member itself.
    Member(String),
    /// The member passed through the blob conversion routine.
    Blob(String),
}

/// Methods every data-access class provides.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    /// Returns the literal table name.
    TableName { table: String },
    /// Compares members to a row over the primary key.
    ComparePrimaryKey { terms: Vec<RowValue> },
    /// Selects rows matching the key predicate.
    Query { predicate: KeyPredicate },
    /// Populates members from a row; a null row is ignored.
    Read { values: Vec<RowValue> },
    /// Updates non-key columns when the key exists, else inserts every column.
    Upsert {
        predicate: KeyPredicate,
        updates: Vec<Binding>,
        inserts: Vec<Binding>,
    },
    /// Deletes rows matching the key predicate.
    Remove { predicate: KeyPredicate },
}

#[cfg(test)]
impl Class {
    /// Find the upsert method.
    pub fn upsert(&self) -> Option<(&KeyPredicate, &[Binding], &[Binding])> {
        self.methods.iter().find_map(|m| match m {
            Method::Upsert {
                predicate,
                updates,
                inserts,
            } => Some((predicate, updates.as_slice(), inserts.as_slice())),
            _ => None,
        })
    }

    /// Find the key comparison terms.
    pub fn compare_terms(&self) -> Option<&[RowValue]> {
        self.methods.iter().find_map(|m| match m {
            Method::ComparePrimaryKey { terms } => Some(terms.as_slice()),
            _ => None,
        })
    }

    /// Find the row decoding values.
    pub fn read_values(&self) -> Option<&[RowValue]> {
        self.methods.iter().find_map(|m| match m {
            Method::Read { values } => Some(values.as_slice()),
            _ => None,
        })
    }
}

#[cfg(test)]
impl Binding {
    /// Column names of a binding list.
    pub fn columns(bindings: &[Binding]) -> Vec<&str> {
        bindings.iter().map(|b| b.column.as_str()).collect()
    }
}
