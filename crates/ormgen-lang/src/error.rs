//! Error types for schema parsing.

use crate::span::{offset_to_line_col, Span};
use ormgen_core::Error as CoreError;
use thiserror::Error;

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Table name declared twice in the catalog.
    DuplicateTableName,
    /// Column type keyword outside the supported vocabulary.
    UnknownFieldType,
    /// `UNSIGNED` on a non-integer column.
    UnsignedNonInteger,
    /// Field line missing its type or otherwise not understood.
    MalformedFieldLine,
    /// Field name declared twice in a table.
    DuplicateField,
    /// `CREATE TABLE` line without a table name.
    MalformedTableHeader,
    /// `PRIMARY KEY` clause not understood.
    MalformedPrimaryKey,
    /// Primary key references a field the table does not declare.
    UnknownPrimaryKeyField,
    /// A significant line contains characters the lexer does not accept.
    MalformedLine,
}

/// Error during lexing/parsing. Every parse error aborts the run.
#[derive(Debug, Error)]
pub struct ParseError {
    /// Error kind for programmatic handling.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// Source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to the error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Wrap a catalog error raised while parsing the given span.
    pub fn from_core(err: CoreError, span: Span) -> Self {
        let kind = match &err {
            CoreError::UnknownType { .. } => ParseErrorKind::UnknownFieldType,
            CoreError::UnsignedNonInteger { .. } => ParseErrorKind::UnsignedNonInteger,
            CoreError::DuplicateTable { .. } | CoreError::DuplicateSchemaFile { .. } => {
                ParseErrorKind::DuplicateTableName
            }
            CoreError::DuplicateField { .. } => ParseErrorKind::DuplicateField,
            CoreError::UnknownPrimaryKeyField { .. } => ParseErrorKind::UnknownPrimaryKeyField,
            CoreError::DuplicatePrimaryKeyField { .. } => ParseErrorKind::MalformedPrimaryKey,
        };
        Self::new(kind, err.to_string(), span)
    }

    /// Line and column (1-based) of the error in the source.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        offset_to_line_col(source, self.span.start)
    }

    /// Format the error with source context.
    pub fn format_with_source(&self, source: &str) -> String {
        let (line, col) = self.line_col(source);
        let mut result = format!("error[{:?}]: {}\n", self.kind, self.message);
        result.push_str(&format!("  --> line {}:{}\n", line, col));

        // Show the source line
        if let Some(source_line) = source.lines().nth(line - 1) {
            result.push_str(&format!("   |\n{:3}| {}\n   |", line, source_line));

            // Add caret pointing to the error position
            for _ in 0..col {
                result.push(' ');
            }
            result.push('^');

            // Underline the span if it's on one line
            let span_len = self.span.end.saturating_sub(self.span.start);
            if span_len > 1 {
                let room = (source_line.len() + 1).saturating_sub(col);
                for _ in 1..span_len.min(room) {
                    result.push('~');
                }
            }
            result.push('\n');
        }

        if let Some(hint) = &self.hint {
            result.push_str(&format!("   = hint: {}\n", hint));
        }

        result
    }
}
