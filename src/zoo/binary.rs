//! Packed binary grid format.
//!
//! Two little-endian `u32` values (width, height) followed by one bit per
//! cell in row-major order, least significant bit first, with the last byte
//! zero-padded.

use crate::error::{FormatError, ZooError};
use crate::game_of_life::{Cell, Grid};
use std::path::Path;
use tracing::debug;

const HEADER_LEN: usize = 8;

/// Load a grid from a binary file
pub fn load_binary<P: AsRef<Path>>(path: P) -> Result<Grid, ZooError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| ZooError::io(path, e))?;

    let grid = decode_binary(&bytes).map_err(|e| ZooError::format(path, e))?;
    debug!(path = %path.display(), width = grid.width(), height = grid.height(), "loaded binary grid");
    Ok(grid)
}

/// Save a grid to a binary file
pub fn save_binary<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<(), ZooError> {
    let path = path.as_ref();
    let bytes = encode_binary(grid).map_err(|e| ZooError::format(path, e))?;
    std::fs::write(path, &bytes).map_err(|e| ZooError::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "saved binary grid");
    Ok(())
}

/// Number of payload bytes needed for `cells` packed bits
pub fn payload_len(cells: usize) -> usize {
    cells.div_ceil(8)
}

/// Decode the binary format. Bytes after the payload are ignored.
pub fn decode_binary(bytes: &[u8]) -> Result<Grid, FormatError> {
    if bytes.len() < HEADER_LEN {
        return Err(FormatError::Truncated {
            expected: HEADER_LEN,
            found: bytes.len(),
        });
    }

    let (header, payload) = bytes.split_at(HEADER_LEN);
    let width = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let height = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

    let too_large = FormatError::TooLarge {
        width: width.into(),
        height: height.into(),
    };
    let width = usize::try_from(width).map_err(|_| too_large.clone())?;
    let height = usize::try_from(height).map_err(|_| too_large.clone())?;
    let total = width.checked_mul(height).ok_or(too_large)?;

    let needed = payload_len(total);
    if payload.len() < needed {
        return Err(FormatError::Truncated {
            expected: HEADER_LEN + needed,
            found: bytes.len(),
        });
    }

    let cells = (0..total)
        .map(|bit| Cell::from((payload[bit / 8] >> (bit % 8)) & 1 == 1))
        .collect();

    Ok(Grid::from_raw(width, height, cells))
}

/// Encode a grid into exactly `8 + ceil(width * height / 8)` bytes
pub fn encode_binary(grid: &Grid) -> Result<Vec<u8>, FormatError> {
    let (width, height) = grid.dimensions();
    let too_large = || FormatError::TooLarge {
        width: width as u64,
        height: height as u64,
    };
    let width32 = u32::try_from(width).map_err(|_| too_large())?;
    let height32 = u32::try_from(height).map_err(|_| too_large())?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload_len(grid.total_cells()));
    bytes.extend_from_slice(&width32.to_le_bytes());
    bytes.extend_from_slice(&height32.to_le_bytes());
    bytes.extend(grid.cells().chunks(8).map(|chunk| {
        chunk
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .fold(0u8, |byte, (bit, _)| byte | (1 << bit))
    }));

    Ok(bytes)
}
