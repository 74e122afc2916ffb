//! Game of Life simulation with text and packed-binary grid files
//!
//! This library provides a bounds-checked grid, a double-buffered world that
//! advances it under Conway's rules (optionally on a torus) and codecs that
//! persist grids losslessly.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;
pub mod zoo;

pub use config::Settings;
pub use error::{FormatError, GridError, ZooError};
pub use game_of_life::{Cell, Grid, World};

use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid, advance it `generations` steps and return the final state
pub fn simulate_file<P: AsRef<Path>>(path: P, generations: usize, toroidal: bool) -> Result<Grid> {
    let path = path.as_ref();
    let grid = zoo::load(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let mut world = World::from_grid(grid);
    world.advance(generations, toroidal);
    Ok(world.into_state())
}
