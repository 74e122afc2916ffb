//! Well known starting patterns

use super::ascii::save_ascii;
use crate::game_of_life::{Cell, Grid};
use anyhow::{Context, Result};
use std::path::Path;

/// Names accepted by [`by_name`]
pub const NAMES: [&str; 5] = ["glider", "r_pentomino", "light_weight_spaceship", "block", "blinker"];

fn pattern(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(width, height);
    for &(x, y) in alive {
        grid[(x, y)] = Cell::Alive;
    }
    grid
}

/// 3x3 glider travelling towards +x, +y
pub fn glider() -> Grid {
    pattern(3, 3, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)])
}

/// 3x3 R-pentomino, a methuselah that settles after 1103 generations
pub fn r_pentomino() -> Grid {
    pattern(3, 3, &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)])
}

/// 5x4 light weight spaceship travelling towards -x
pub fn light_weight_spaceship() -> Grid {
    pattern(
        5,
        4,
        &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
    )
}

/// 2x2 still life
pub fn block() -> Grid {
    pattern(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)])
}

/// 3x3 period two oscillator
pub fn blinker() -> Grid {
    pattern(3, 3, &[(0, 1), (1, 1), (2, 1)])
}

pub fn by_name(name: &str) -> Option<Grid> {
    match name {
        "glider" => Some(glider()),
        "r_pentomino" => Some(r_pentomino()),
        "light_weight_spaceship" | "lwss" => Some(light_weight_spaceship()),
        "block" => Some(block()),
        "blinker" => Some(blinker()),
        _ => None,
    }
}

/// Write every named pattern to `<name>.gol` in `output_dir`
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for name in NAMES {
        let grid = by_name(name).with_context(|| format!("Unknown pattern: {name}"))?;
        save_ascii(dir.join(format!("{name}.gol")), &grid)
            .with_context(|| format!("Failed to write {name}.gol"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::World;
    use crate::zoo::load_ascii;
    use tempfile::tempdir;

    #[test]
    fn test_pattern_sizes() {
        assert_eq!(glider().dimensions(), (3, 3));
        assert_eq!(glider().alive_cells(), 5);
        assert_eq!(r_pentomino().alive_cells(), 5);
        assert_eq!(light_weight_spaceship().dimensions(), (5, 4));
        assert_eq!(light_weight_spaceship().alive_cells(), 9);
    }

    #[test]
    fn test_by_name() {
        for name in NAMES {
            assert!(by_name(name).is_some(), "{name} should resolve");
        }
        assert_eq!(by_name("lwss"), Some(light_weight_spaceship()));
        assert!(by_name("pulsar").is_none());
    }

    #[test]
    fn test_spaceship_moves() {
        let mut start = Grid::new(12, 8);
        start.merge(&light_weight_spaceship(), 6, 2, false).unwrap();
        let mut expected = Grid::new(12, 8);
        expected.merge(&light_weight_spaceship(), 4, 2, false).unwrap();

        let mut world = World::from_grid(start);
        world.advance(4, false);
        assert_eq!(world.state(), &expected);
    }

    #[test]
    fn test_create_example_grids() {
        let temp_dir = tempdir().unwrap();
        create_example_grids(temp_dir.path()).unwrap();

        for name in NAMES {
            assert!(temp_dir.path().join(format!("{name}.gol")).exists());
        }

        let glider_grid = load_ascii(temp_dir.path().join("glider.gol")).unwrap();
        assert_eq!(glider_grid, glider());
    }
}
