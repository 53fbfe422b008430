//! Error types for renderer profile translation.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, TranslateError>;

/// Errors raised while translating a renderer profile.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A non-blank, non-comment line has no `=`.
    #[error("line {line}: expected `key = value`, found {text:?}")]
    MissingSeparator { line: usize, text: String },

    /// A `Supported` sub-token has no `:`.
    #[error("line {line}: malformed Supported sub-field {token:?}, expected `key:value`")]
    MalformedSubField { line: usize, token: String },

    /// Reading the source or writing the destination failed.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TranslateError {
    /// Creates an I/O error bound to `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns the 1-based input line the error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingSeparator { line, .. } | Self::MalformedSubField { line, .. } => {
                Some(*line)
            }
            Self::Io { .. } => None,
        }
    }
}
