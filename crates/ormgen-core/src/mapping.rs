//! Type mapping between schema type keywords, logical types and the types
//! generated code declares.
//!
//! Both the parser (to validate column declarations) and the emitter (to pick
//! member and decode types) go through these functions.

use crate::catalog::LogicalType;
use crate::error::Error;

/// Column type keywords and the logical type each resolves to.
///
/// Only the literal `VARCHAR(255)` is recognised for the bounded character
/// type; other lengths are rejected.
const SQL_TYPES: &[(&str, LogicalType)] = &[
    ("BIGINT", LogicalType::Int64),
    ("INT", LogicalType::Int32),
    ("SMALLINT", LogicalType::Int16),
    ("TINYINT", LogicalType::Int8),
    ("DOUBLE", LogicalType::Double),
    ("FLOAT", LogicalType::Float),
    ("BOOLEAN", LogicalType::Bool),
    ("VARCHAR(255)", LogicalType::String),
    ("TEXT", LogicalType::Text),
    ("BLOB", LogicalType::Blob),
];

/// Name of the buffer type blob members are declared with.
pub const BLOB_TYPE: &str = "FByteArray";

/// Resolve a column type keyword, ignoring case.
pub fn logical_type(token: &str) -> Result<LogicalType, Error> {
    SQL_TYPES
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(token))
        .map(|(_, ty)| *ty)
        .ok_or_else(|| Error::UnknownType {
            token: token.to_string(),
        })
}

/// Promote an integer type to its unsigned counterpart.
pub fn unsigned_of(ty: LogicalType) -> Result<LogicalType, Error> {
    match ty {
        LogicalType::Int8 | LogicalType::UInt8 => Ok(LogicalType::UInt8),
        LogicalType::Int16 | LogicalType::UInt16 => Ok(LogicalType::UInt16),
        LogicalType::Int32 | LogicalType::UInt32 => Ok(LogicalType::UInt32),
        LogicalType::Int64 | LogicalType::UInt64 => Ok(LogicalType::UInt64),
        other => Err(Error::UnsignedNonInteger { ty: other }),
    }
}

/// The C++ type a member of the given logical type is declared with.
pub fn representation_type(ty: LogicalType) -> &'static str {
    match ty {
        LogicalType::Int8 => "int8_t",
        LogicalType::Int16 => "int16_t",
        LogicalType::Int32 => "int32_t",
        LogicalType::Int64 => "int64_t",
        LogicalType::UInt8 => "uint8_t",
        LogicalType::UInt16 => "uint16_t",
        LogicalType::UInt32 => "uint32_t",
        LogicalType::UInt64 => "uint64_t",
        LogicalType::Float => "float",
        LogicalType::Double => "double",
        LogicalType::Bool => "bool",
        LogicalType::String | LogicalType::Text => "std::string",
        LogicalType::Blob => BLOB_TYPE,
    }
}
