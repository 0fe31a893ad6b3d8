//! Core type definitions for the catalog.

use serde::{Deserialize, Serialize};

/// Scalar kinds a table column can hold.
///
/// The set is closed: every column type keyword in a schema source resolves to
/// exactly one of these, independent of the language code is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Boolean value.
    Bool,
    /// Bounded character string.
    String,
    /// Unbounded character string.
    Text,
    /// Binary data.
    Blob,
}

impl LogicalType {
    /// All logical types, in declaration order.
    pub const ALL: [LogicalType; 14] = [
        LogicalType::Int8,
        LogicalType::Int16,
        LogicalType::Int32,
        LogicalType::Int64,
        LogicalType::UInt8,
        LogicalType::UInt16,
        LogicalType::UInt32,
        LogicalType::UInt64,
        LogicalType::Float,
        LogicalType::Double,
        LogicalType::Bool,
        LogicalType::String,
        LogicalType::Text,
        LogicalType::Blob,
    ];

    /// Stable lowercase name, as written to the catalog description.
    pub fn name(self) -> &'static str {
        match self {
            LogicalType::Int8 => "int8",
            LogicalType::Int16 => "int16",
            LogicalType::Int32 => "int32",
            LogicalType::Int64 => "int64",
            LogicalType::UInt8 => "uint8",
            LogicalType::UInt16 => "uint16",
            LogicalType::UInt32 => "uint32",
            LogicalType::UInt64 => "uint64",
            LogicalType::Float => "float",
            LogicalType::Double => "double",
            LogicalType::Bool => "bool",
            LogicalType::String => "string",
            LogicalType::Text => "text",
            LogicalType::Blob => "blob",
        }
    }

    /// Check if this type is an integer of any width or signedness.
    pub fn is_integer(self) -> bool {
        self.is_signed_integer() || self.is_unsigned_integer()
    }

    /// Check if this type is a signed integer.
    pub fn is_signed_integer(self) -> bool {
        matches!(
            self,
            LogicalType::Int8 | LogicalType::Int16 | LogicalType::Int32 | LogicalType::Int64
        )
    }

    /// Check if this type is an unsigned integer.
    pub fn is_unsigned_integer(self) -> bool {
        matches!(
            self,
            LogicalType::UInt8 | LogicalType::UInt16 | LogicalType::UInt32 | LogicalType::UInt64
        )
    }

    /// Check if this type is numeric (integer or floating point).
    pub fn is_numeric(self) -> bool {
        self.is_integer() || matches!(self, LogicalType::Float | LogicalType::Double)
    }

    /// Check if this is an integer narrower than 32 bits.
    ///
    /// Row decoders only yield integers of 32 bits or wider, so these kinds
    /// travel through [`LogicalType::decode_type`] and are narrowed afterwards.
    pub fn is_narrow(self) -> bool {
        matches!(
            self,
            LogicalType::Int8 | LogicalType::Int16 | LogicalType::UInt8 | LogicalType::UInt16
        )
    }

    /// The type a row decoder yields for this type.
    pub fn decode_type(self) -> LogicalType {
        match self {
            LogicalType::Int8 | LogicalType::Int16 => LogicalType::Int32,
            LogicalType::UInt8 | LogicalType::UInt16 => LogicalType::UInt32,
            other => other,
        }
    }

    /// Check if values of this type own a heap buffer (moved, not copied).
    pub fn is_buffer(self) -> bool {
        matches!(
            self,
            LogicalType::String | LogicalType::Text | LogicalType::Blob
        )
    }

    /// Check if this type is character data.
    pub fn is_character(self) -> bool {
        matches!(self, LogicalType::String | LogicalType::Text)
    }
}

impl std::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
