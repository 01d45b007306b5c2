// Configuration error module
// Errors raised while building a config store, and per-entry parse diagnostics

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a [`Store`](crate::config::Store) from being built.
///
/// Syntax problems inside an otherwise readable file are not errors: they are
/// collected as [`Diagnostic`]s on the store and parsing continues.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be opened or read in full
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input buffer (or file) holds no bytes at all
    #[error("config input is empty")]
    EmptyInput,

    /// A buffer could not grow to the requested capacity
    #[error("out of memory while growing config buffer")]
    OutOfMemory,

    /// The scanner hit a byte sequence it cannot tokenize
    #[error("line {line}: {message}")]
    Lexical { line: usize, message: String },
}

impl From<std::collections::TryReserveError> for ConfigError {
    fn from(_: std::collections::TryReserveError) -> Self {
        ConfigError::OutOfMemory
    }
}

/// A recoverable problem found while parsing one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-indexed line of the offending token
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}
