//! Grid file formats and preset patterns

pub mod ascii;
pub mod binary;
pub mod patterns;

pub use ascii::{decode_ascii, encode_ascii, load_ascii, save_ascii};
pub use binary::{decode_binary, encode_binary, load_binary, save_binary};

use crate::error::ZooError;
use crate::game_of_life::Grid;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk grid encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FileFormat {
    /// `.gol` text
    Ascii,
    /// `.bgol` packed bits
    Binary,
}

impl FileFormat {
    /// Pick a format from the file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        match path.as_ref().extension()?.to_str()? {
            "gol" | "txt" => Some(FileFormat::Ascii),
            "bgol" | "bin" => Some(FileFormat::Binary),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Ascii => "gol",
            FileFormat::Binary => "bgol",
        }
    }

    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<Grid, ZooError> {
        match self {
            FileFormat::Ascii => load_ascii(path),
            FileFormat::Binary => load_binary(path),
        }
    }

    pub fn save<P: AsRef<Path>>(self, path: P, grid: &Grid) -> Result<(), ZooError> {
        match self {
            FileFormat::Ascii => save_ascii(path, grid),
            FileFormat::Binary => save_binary(path, grid),
        }
    }
}

fn detect(path: &Path) -> Result<FileFormat, ZooError> {
    FileFormat::from_path(path).ok_or_else(|| ZooError::UnknownFormat {
        path: path.to_path_buf(),
    })
}

/// Load a grid, choosing the codec from the file extension
pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid, ZooError> {
    let path = path.as_ref();
    detect(path)?.load(path)
}

/// Save a grid, choosing the codec from the file extension
pub fn save<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), ZooError> {
    let path = path.as_ref();
    detect(path)?.save(path, grid)
}
