//! Error types shared by the grid, the automaton and the file codecs

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by coordinate access and shape operations on a grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("invalid crop window [{x0}, {x1}) x [{y0}, {y1}) for {width}x{height} grid")]
    InvalidCrop {
        x0: usize,
        y0: usize,
        x1: usize,
        y1: usize,
        width: usize,
        height: usize,
    },
    #[error(
        "{other_width}x{other_height} grid placed at ({x0}, {y0}) does not fit within {width}x{height} grid"
    )]
    MergeOutOfBounds {
        x0: usize,
        y0: usize,
        other_width: usize,
        other_height: usize,
        width: usize,
        height: usize,
    },
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}

/// Malformed content found while decoding a grid file
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("file is not valid text")]
    NotText,
    #[error("invalid header: {0}")]
    BadHeader(String),
    #[error("row {row} has length {found}, expected {expected}")]
    RowLength {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("invalid character {ch:?} at ({x}, {y}), only '#' and ' ' are allowed")]
    InvalidCharacter { x: usize, y: usize, ch: char },
    #[error("row {row} is not terminated by a newline")]
    MissingNewline { row: usize },
    #[error("unexpected data after the last row")]
    TrailingData,
    #[error("truncated input: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge { width: u64, height: u64 },
}

/// Errors raised by loading or saving grid files
#[derive(Debug, Error)]
pub enum ZooError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed grid file {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("unrecognised grid file extension: {}", path.display())]
    UnknownFormat { path: PathBuf },
}

impl ZooError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ZooError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        ZooError::Format {
            path: path.into(),
            source,
        }
    }
}
