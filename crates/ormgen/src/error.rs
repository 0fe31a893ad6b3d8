//! Generator error types.

use ormgen_codegen::EmitError;
use ormgen_lang::ParseError;
use std::path::PathBuf;
use thiserror::Error;

/// Generator errors. Every error aborts the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Source root missing or not a directory.
    #[error("source root '{}' is not a directory", path.display())]
    MissingSourceRoot { path: PathBuf },

    /// Reading or writing a file failed.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Walking the source tree failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A schema source failed to parse.
    #[error("{}:{line}:{column}: {source}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        source: ParseError,
        /// The error rendered against the source text.
        context: String,
    },

    /// The catalog rejected a schema file.
    #[error("catalog error: {0}")]
    Catalog(#[from] ormgen_core::Error),

    /// Code emission failed.
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),

    /// The description document could not be serialized.
    #[error("description error: {0}")]
    Describe(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an io error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a parse error, resolving its position in `text`.
    pub fn parse(path: impl Into<PathBuf>, text: &str, source: ParseError) -> Self {
        let (line, column) = source.line_col(text);
        let context = source.format_with_source(text);
        Error::Parse {
            path: path.into(),
            line,
            column,
            source,
            context,
        }
    }

    /// Source context for display, when the error has one.
    pub fn context(&self) -> Option<&str> {
        match self {
            Error::Parse { context, .. } => Some(context),
            _ => None,
        }
    }
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
