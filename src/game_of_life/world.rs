//! Double-buffered Game of Life world

use super::{Cell, GameOfLifeRules, Grid};
use crate::error::GridError;
use itertools::iproduct;
use tracing::{debug, trace};

/// Offsets of the Moore neighbourhood, excluding the cell itself
const NEIGHBOURHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A world owns the current generation and a scratch buffer of the same
/// size that the next generation is written into before the two are
/// swapped.
#[derive(Debug, Clone, Default)]
pub struct World {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl World {
    /// Create a 0x0 world
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Create a world where every cell is dead
    pub fn new(width: usize, height: usize) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    /// Wrap an initial state
    pub fn from_grid(initial_state: Grid) -> Self {
        Self {
            next: initial_state.clone(),
            current: initial_state,
            generation: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    pub fn total_cells(&self) -> usize {
        self.current.total_cells()
    }

    pub fn alive_cells(&self) -> usize {
        self.current.alive_cells()
    }

    pub fn dead_cells(&self) -> usize {
        self.current.dead_cells()
    }

    /// Number of steps taken since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The current generation
    pub fn state(&self) -> &Grid {
        &self.current
    }

    pub fn into_state(self) -> Grid {
        self.current
    }

    pub fn resize_square(&mut self, size: usize) {
        self.resize(size, size);
    }

    /// Resize the current state, keeping the overlapping region.
    ///
    /// The scratch buffer is only reallocated to match, its contents are
    /// fully rewritten by the next step.
    ///
    /// # Panics
    ///
    /// Panics when `width * height` overflows `usize`, see [`World::try_resize`].
    pub fn resize(&mut self, width: usize, height: usize) {
        if let Err(err) = self.try_resize(width, height) {
            panic!("{err}");
        }
    }

    /// Like [`World::resize`], leaving both buffers untouched on overflow
    pub fn try_resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        debug!(
            from_width = self.width(),
            from_height = self.height(),
            width,
            height,
            "resizing world"
        );
        let next = Grid::try_new(width, height)?;
        self.current.try_resize(width, height)?;
        self.next = next;
        Ok(())
    }

    /// Count the living neighbours of `(x, y)` in the current generation.
    ///
    /// Without `toroidal` neighbours outside the grid are absent; with it
    /// each coordinate wraps to the opposite edge.
    pub fn count_neighbours(&self, x: usize, y: usize, toroidal: bool) -> Result<u8, GridError> {
        self.current.get(x, y)?;
        Ok(self.neighbours_of(x, y, toroidal))
    }

    fn neighbours_of(&self, x: usize, y: usize, toroidal: bool) -> u8 {
        let grid = &self.current;
        let width = grid.width() as isize;
        let height = grid.height() as isize;

        let alive = NEIGHBOURHOOD
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if toroidal {
                    Some((nx.rem_euclid(width) as usize, ny.rem_euclid(height) as usize))
                } else if (0..width).contains(&nx) && (0..height).contains(&ny) {
                    Some((nx as usize, ny as usize))
                } else {
                    None
                }
            })
            .filter(|&(nx, ny)| grid.cells()[grid.index(nx, ny)].is_alive())
            .count();

        alive as u8
    }

    /// Advance the world by one generation
    pub fn step(&mut self, toroidal: bool) {
        let (width, height) = self.current.dimensions();

        for (y, x) in iproduct!(0..height, 0..width) {
            let neighbours = self.neighbours_of(x, y, toroidal);
            let idx = self.current.index(x, y);
            let cell: Cell = GameOfLifeRules::next_state(self.current.cells()[idx], neighbours);
            self.next.cells_mut()[idx] = cell;
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!(generation = self.generation, alive = self.alive_cells(), "stepped world");
    }

    /// Take `steps` generations in order
    pub fn advance(&mut self, steps: usize, toroidal: bool) {
        debug!(steps, toroidal, from_generation = self.generation, "advancing world");
        for _ in 0..steps {
            self.step(toroidal);
        }
    }
}

impl From<Grid> for World {
    fn from(grid: Grid) -> Self {
        Self::from_grid(grid)
    }
}
