//! Error types for the tree and the command tooling around it.

use std::path::PathBuf;

use thiserror::Error;

use crate::{Bounds, Rectangle};

/// Result type alias for script and preload operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the tree itself. The rejected rectangle is handed
/// back so the caller still owns it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuadtreeError {
    #[error("leaf node at capacity ({capacity}), cannot store {rectangle}")]
    CapacityExceeded {
        capacity: usize,
        rectangle: Rectangle,
    },

    #[error("origin of {rectangle} lies outside node bounds {bounds}")]
    OutOfBounds { rectangle: Rectangle, bounds: Bounds },
}

impl QuadtreeError {
    pub fn rectangle(&self) -> Rectangle {
        match self {
            QuadtreeError::CapacityExceeded { rectangle, .. }
            | QuadtreeError::OutOfBounds { rectangle, .. } => *rectangle,
        }
    }
}

/// Errors from parsing a single command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid {command} command format: expected {expected} integer arguments in '{line}'")]
    InvalidArguments {
        command: &'static str,
        expected: usize,
        line: String,
    },
}

/// Top-level error for everything outside the tree core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error(transparent)]
    Tree(#[from] QuadtreeError),

    #[error("invalid WKT on line {line}: {message}")]
    Wkt { line: usize, message: String },
}
