//! Plain-text grid format.
//!
//! A header line `"<width> <height>\n"` followed by exactly `height` rows of
//! `width` characters, `#` for alive and space for dead, each ending in `\n`.

use crate::error::{FormatError, ZooError};
use crate::game_of_life::{Cell, Grid};
use std::path::Path;
use tracing::debug;

/// Load a grid from a text file
pub fn load_ascii<P: AsRef<Path>>(path: P) -> Result<Grid, ZooError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| ZooError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|_| ZooError::format(path, FormatError::NotText))?;

    let grid = decode_ascii(&content).map_err(|e| ZooError::format(path, e))?;
    debug!(path = %path.display(), width = grid.width(), height = grid.height(), "loaded ascii grid");
    Ok(grid)
}

/// Save a grid to a text file
pub fn save_ascii<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), ZooError> {
    let path = path.as_ref();
    std::fs::write(path, encode_ascii(grid)).map_err(|e| ZooError::io(path, e))?;
    debug!(path = %path.display(), width = grid.width(), height = grid.height(), "saved ascii grid");
    Ok(())
}

/// Parse the text format. Nothing is returned unless the whole input is well formed.
pub fn decode_ascii(content: &str) -> Result<Grid, FormatError> {
    let (header, mut rest) = content
        .split_once('\n')
        .ok_or_else(|| FormatError::BadHeader("missing header line".to_string()))?;
    let (width, height) = parse_header(header)?;

    width
        .checked_mul(height)
        .ok_or(FormatError::TooLarge { width: width as u64, height: height as u64 })?;

    // Bound the allocation by what the input can actually hold.
    let mut cells = Vec::with_capacity(content.len().min(width * height));

    for y in 0..height {
        let (line, tail) = match rest.split_once('\n') {
            Some(split) => split,
            None => {
                let found = rest.chars().count();
                return Err(if found == width {
                    FormatError::MissingNewline { row: y }
                } else {
                    FormatError::RowLength { row: y, found, expected: width }
                });
            }
        };

        let found = line.chars().count();
        if found != width {
            return Err(FormatError::RowLength { row: y, found, expected: width });
        }

        for (x, ch) in line.chars().enumerate() {
            let cell = Cell::from_char(ch).ok_or(FormatError::InvalidCharacter { x, y, ch })?;
            cells.push(cell);
        }
        rest = tail;
    }

    if !rest.is_empty() {
        return Err(FormatError::TrailingData);
    }

    Ok(Grid::from_raw(width, height, cells))
}

fn parse_header(header: &str) -> Result<(usize, usize), FormatError> {
    let bad = || FormatError::BadHeader(format!("expected \"<width> <height>\", found {header:?}"));

    let (width, height) = header.split_once(' ').ok_or_else(bad)?;
    let parse = |field: &str| {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        field.parse::<usize>().map_err(|_| bad())
    };

    Ok((parse(width)?, parse(height)?))
}

/// Render a grid in the text format
pub fn encode_ascii(grid: &Grid) -> String {
    let (width, height) = grid.dimensions();
    let mut out = String::with_capacity(16 + height * (width + 1));

    out.push_str(&format!("{width} {height}\n"));
    for y in 0..height {
        out.extend(grid.cells()[y * width..(y + 1) * width].iter().map(|cell| cell.as_char()));
        out.push('\n');
    }

    out
}
