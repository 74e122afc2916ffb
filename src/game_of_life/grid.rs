//! Grid representation and utilities for Game of Life

use super::Cell;
use crate::error::GridError;
use itertools::iproduct;
use std::fmt;
use std::ops::{Index, IndexMut};

/// A rectangular grid of cells stored row-major in a single buffer.
///
/// The buffer always holds exactly `width * height` cells and the cell at
/// `(x, y)` lives at `y * width + x`. Every coordinate access is bounds
/// checked; nothing is clamped or wrapped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a 0x0 grid
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a square grid with every cell dead
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Create a grid with every cell dead
    ///
    /// # Panics
    ///
    /// Panics when `width * height` overflows `usize`, see [`Grid::try_new`].
    pub fn new(width: usize, height: usize) -> Self {
        match Self::try_new(width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a grid with every cell dead, failing when the cell count overflows
    pub fn try_new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; cell_count(width, height)?],
        })
    }

    /// Create a grid from a list of rows
    pub fn from_cells(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    found: cells.len(),
                    expected: width,
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Wrap a row-major buffer that already holds `width * height` cells
    pub(crate) fn from_raw(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Create a dead grid and mark the listed coordinates alive
    pub fn from_alive(width: usize, height: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive)?;
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn total_cells(&self) -> usize {
        self.width * self.height
    }

    pub fn alive_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn dead_cells(&self) -> usize {
        self.total_cells() - self.alive_cells()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Coordinates of every living cell in row-major order
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(y, x)| self.cells[self.index(x, y)].is_alive())
            .map(|(y, x)| (x, y))
            .collect()
    }

    /// Row-major view of the cell buffer
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn checked_index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(self.index(x, y))
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell, GridError> {
        self.cell(x, y).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, value: Cell) -> Result<(), GridError> {
        *self.cell_mut(x, y)? = value;
        Ok(())
    }

    /// Borrow the cell at `(x, y)`
    pub fn cell(&self, x: usize, y: usize) -> Result<&Cell, GridError> {
        let idx = self.checked_index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Mutably borrow the cell at `(x, y)` for in-place updates
    pub fn cell_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, GridError> {
        let idx = self.checked_index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// Resize to a square grid, see [`Grid::resize`]
    pub fn resize_square(&mut self, size: usize) {
        self.resize(size, size);
    }

    /// Rebuild the grid at a new size.
    ///
    /// The top-left region shared by the old and new sizes keeps its values,
    /// every newly introduced cell is dead and everything else is dropped.
    ///
    /// # Panics
    ///
    /// Panics when `width * height` overflows `usize`, see [`Grid::try_resize`].
    pub fn resize(&mut self, width: usize, height: usize) {
        if let Err(err) = self.try_resize(width, height) {
            panic!("{err}");
        }
    }

    /// Like [`Grid::resize`], leaving the grid untouched when the new cell
    /// count overflows
    pub fn try_resize(&mut self, width: usize, height: usize) -> Result<(), GridError> {
        let mut cells = vec![Cell::Dead; cell_count(width, height)?];
        let keep = self.width.min(width);

        for y in 0..self.height.min(height) {
            let src = y * self.width;
            let dst = y * width;
            cells[dst..dst + keep].copy_from_slice(&self.cells[src..src + keep]);
        }

        self.width = width;
        self.height = height;
        self.cells = cells;
        Ok(())
    }

    /// Copy the half-open window `[x0, x1) x [y0, y1)` into a new grid
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<Grid, GridError> {
        if x0 > x1 || y0 > y1 || x1 > self.width || y1 > self.height {
            return Err(GridError::InvalidCrop {
                x0,
                y0,
                x1,
                y1,
                width: self.width,
                height: self.height,
            });
        }

        let width = x1 - x0;
        let mut cropped = Grid::new(width, y1 - y0);
        for y in y0..y1 {
            let src = self.index(x0, y);
            let dst = cropped.index(0, y - y0);
            cropped.cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        Ok(cropped)
    }

    /// Overlay `other` with its top-left corner at `(x0, y0)`.
    ///
    /// With `alive_only` set only alive cells of `other` are written, so no
    /// alive cell of `self` is ever turned dead.
    pub fn merge(&mut self, other: &Grid, x0: usize, y0: usize, alive_only: bool) -> Result<(), GridError> {
        let fits_x = x0.checked_add(other.width).is_some_and(|x1| x1 <= self.width);
        let fits_y = y0.checked_add(other.height).is_some_and(|y1| y1 <= self.height);
        if !fits_x || !fits_y {
            return Err(GridError::MergeOutOfBounds {
                x0,
                y0,
                other_width: other.width,
                other_height: other.height,
                width: self.width,
                height: self.height,
            });
        }

        for y in 0..other.height {
            let src = &other.cells[other.index(0, y)..other.index(0, y) + other.width];
            let dst = self.index(x0, y0 + y);
            let dst = &mut self.cells[dst..dst + other.width];

            if alive_only {
                dst.iter_mut()
                    .zip(src)
                    .filter(|(_, cell)| cell.is_alive())
                    .for_each(|(target, _)| *target = Cell::Alive);
            } else {
                dst.copy_from_slice(src);
            }
        }

        Ok(())
    }

    /// Copy of the grid rotated clockwise by `rotation * 90` degrees.
    ///
    /// Negative values rotate anticlockwise. The rotation is normalised first,
    /// so the cost does not depend on its magnitude.
    pub fn rotate(&self, rotation: i32) -> Grid {
        let (w, h) = (self.width, self.height);
        match rotation.rem_euclid(4) {
            1 => self.remapped(h, w, |x, y| (y, h - 1 - x)),
            2 => self.remapped(w, h, |x, y| (w - 1 - x, h - 1 - y)),
            3 => self.remapped(h, w, |x, y| (w - 1 - y, x)),
            _ => self.clone(),
        }
    }

    /// Build a grid where each target cell reads from `source(x, y)` in `self`
    fn remapped<F>(&self, width: usize, height: usize, source: F) -> Grid
    where
        F: Fn(usize, usize) -> (usize, usize),
    {
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| {
                let (sx, sy) = source(x, y);
                self.cells[self.index(sx, sy)]
            })
            .collect();

        Grid { width, height, cells }
    }
}

/// Number of cells in a `width` x `height` grid
pub fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
    width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    /// Panics when `(x, y)` is out of bounds, use [`Grid::cell`] to handle it
    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        match self.cell(x, y) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Cell {
        match self.cell_mut(x, y) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("+{}+", "-".repeat(self.width));

        writeln!(f, "{border}")?;
        for y in 0..self.height {
            let start = self.index(0, y);
            let line: String = self.cells[start..start + self.width]
                .iter()
                .map(|cell| cell.as_char())
                .collect();
            writeln!(f, "|{line}|")?;
        }
        writeln!(f, "{border}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider() -> Grid {
        Grid::from_alive(3, 3, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.total_cells(), 12);
        assert_eq!(grid.dead_cells(), 12);
        assert!(grid.is_empty());

        let empty = Grid::empty();
        assert_eq!(empty.dimensions(), (0, 0));
        assert_eq!(empty.total_cells(), 0);

        assert_eq!(Grid::square(5).dimensions(), (5, 5));
    }

    #[test]
    fn test_grid_from_cells() {
        let grid = Grid::from_cells(vec![
            vec![Cell::Alive, Cell::Dead, Cell::Alive],
            vec![Cell::Dead, Cell::Alive, Cell::Dead],
        ])
        .unwrap();
        assert_eq!(grid.dimensions(), (3, 2));
        assert_eq!(grid.alive_cells(), 3);
        assert_eq!(grid.get(1, 1), Ok(Cell::Alive));

        let ragged = Grid::from_cells(vec![vec![Cell::Dead; 3], vec![Cell::Dead; 2]]);
        assert!(matches!(ragged, Err(GridError::RaggedRows { row: 1, .. })));
    }

    #[test]
    fn test_get_set_only_touches_target() {
        let mut grid = Grid::new(4, 4);
        grid.set(2, 1, Cell::Alive).unwrap();

        assert_eq!(grid.get(2, 1), Ok(Cell::Alive));
        assert_eq!(grid.alive_cells(), 1);
        assert_eq!(grid.living_cells(), vec![(2, 1)]);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 2);
        assert_eq!(
            grid.get(3, 0),
            Err(GridError::OutOfBounds { x: 3, y: 0, width: 3, height: 2 })
        );
        assert!(grid.get(0, 2).is_err());
        assert!(grid.set(5, 5, Cell::Alive).is_err());
        assert!(grid.cell_mut(0, 2).is_err());
        assert!(Grid::empty().get(0, 0).is_err());
    }

    #[test]
    fn test_indexed_access() {
        let mut grid = Grid::new(2, 2);
        grid[(1, 0)] = Cell::Alive;
        grid[(0, 1)] = grid[(0, 1)].toggle();

        assert_eq!(grid[(1, 0)], Cell::Alive);
        assert_eq!(grid[(0, 1)], Cell::Alive);
        assert_eq!(grid[(0, 0)], Cell::Dead);

        let cell = grid.cell_mut(1, 1).unwrap();
        *cell = cell.toggle();
        assert_eq!(grid.get(1, 1), Ok(Cell::Alive));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_out_of_bounds() {
        let grid = Grid::new(2, 2);
        let _ = grid[(2, 0)];
    }

    #[test]
    fn test_resize_preserves_overlap() {
        let mut grid = Grid::from_alive(3, 3, &[(0, 0), (2, 0), (1, 1), (2, 2)]).unwrap();

        grid.resize(5, 2);
        assert_eq!(grid.dimensions(), (5, 2));
        assert_eq!(grid.cells().len(), 10);
        assert_eq!(grid.living_cells(), vec![(0, 0), (2, 0), (1, 1)]);

        grid.resize(2, 4);
        assert_eq!(grid.living_cells(), vec![(0, 0), (1, 1)]);
        assert_eq!(grid.get(1, 3), Ok(Cell::Dead));

        grid.resize_square(0);
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(grid.cells().is_empty());
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        assert_eq!(
            Grid::try_new(usize::MAX, 2),
            Err(GridError::TooLarge { width: usize::MAX, height: 2 })
        );
        assert!(cell_count(usize::MAX / 2 + 1, 2).is_err());
        assert_eq!(cell_count(usize::MAX, 1), Ok(usize::MAX));

        let mut grid = Grid::from_alive(2, 2, &[(1, 1)]).unwrap();
        assert!(grid.try_resize(usize::MAX, 3).is_err());
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.cells().len(), 4);
        assert_eq!(grid.get(1, 1), Ok(Cell::Alive));

        grid.try_resize(3, 1).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.cells().len(), 3);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_new_panics_on_overflow() {
        let _ = Grid::new(usize::MAX, usize::MAX);
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn test_resize_panics_on_overflow() {
        Grid::new(2, 2).resize(usize::MAX, 2);
    }

    #[test]
    fn test_crop() {
        let grid = glider();
        let cropped = grid.crop(1, 1, 3, 3).unwrap();
        assert_eq!(cropped.dimensions(), (2, 2));
        assert_eq!(cropped.living_cells(), vec![(1, 0), (0, 1), (1, 1)]);

        let degenerate = grid.crop(1, 0, 1, 3).unwrap();
        assert_eq!(degenerate.dimensions(), (0, 3));

        assert!(grid.crop(2, 0, 1, 3).is_err());
        assert!(grid.crop(0, 2, 3, 1).is_err());
        assert!(grid.crop(0, 0, 4, 3).is_err());
        assert!(grid.crop(0, 0, 3, 4).is_err());
    }

    #[test]
    fn test_crop_then_merge_round_trip() {
        let source = glider();
        let window = source.crop(1, 1, 3, 3).unwrap();

        let mut target = source.clone();
        target.merge(&Grid::new(2, 2), 1, 1, false).unwrap();
        target.merge(&window, 1, 1, false).unwrap();

        assert_eq!(target, source);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut grid = Grid::from_alive(4, 4, &[(1, 1), (3, 3)]).unwrap();
        let stamp = Grid::from_alive(2, 2, &[(1, 0)]).unwrap();

        grid.merge(&stamp, 0, 0, false).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 0), (3, 3)]);
    }

    #[test]
    fn test_merge_alive_only_never_kills() {
        let mut grid = Grid::from_alive(4, 4, &[(1, 1), (2, 2)]).unwrap();
        let stamp = Grid::from_alive(3, 3, &[(0, 0)]).unwrap();

        grid.merge(&stamp, 1, 1, true).unwrap();
        assert_eq!(grid.living_cells(), vec![(1, 1), (2, 2)]);

        grid.merge(&Grid::new(4, 4), 0, 0, true).unwrap();
        assert_eq!(grid.alive_cells(), 2);
    }

    #[test]
    fn test_merge_bounds() {
        let mut grid = Grid::new(4, 4);
        let stamp = Grid::new(2, 2);

        assert!(grid.merge(&stamp, 2, 2, false).is_ok());
        assert!(matches!(
            grid.merge(&stamp, 3, 0, false),
            Err(GridError::MergeOutOfBounds { .. })
        ));
        assert!(grid.merge(&stamp, 0, 3, true).is_err());
        assert!(grid.merge(&stamp, usize::MAX, 0, false).is_err());
        assert!(grid.merge(&Grid::new(0, 0), 4, 4, false).is_ok());
    }

    #[test]
    fn test_rotate() {
        let grid = Grid::from_alive(3, 2, &[(0, 0), (1, 0), (2, 1)]).unwrap();

        let quarter = grid.rotate(1);
        assert_eq!(quarter.dimensions(), (2, 3));
        assert_eq!(quarter.living_cells(), vec![(1, 0), (1, 1), (0, 2)]);

        let half = grid.rotate(2);
        assert_eq!(half.dimensions(), (3, 2));
        assert_eq!(half.living_cells(), vec![(0, 0), (1, 1), (2, 1)]);

        assert_eq!(grid.rotate(-1), grid.rotate(3));
        assert_eq!(grid.rotate(0), grid);
        assert_eq!(grid.rotate(4), grid);
        assert_eq!(grid.rotate(-8), grid);
        assert_eq!(grid.rotate(i32::MAX), grid.rotate(3));
    }

    #[test]
    fn test_rotate_composition() {
        let grid = glider();
        let composed = grid.rotate(1).rotate(1).rotate(1).rotate(1);
        assert_eq!(composed, grid);
        assert_eq!(grid.rotate(1).rotate(1), grid.rotate(2));
        assert_eq!(Grid::new(0, 3).rotate(1).dimensions(), (3, 0));
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_alive(3, 2, &[(0, 0), (2, 1)]).unwrap();
        assert_eq!(grid.to_string(), "+---+\n|#  |\n|  #|\n+---+\n");
        assert_eq!(Grid::empty().to_string(), "++\n++\n");
        assert_eq!(Grid::new(0, 2).to_string(), "++\n||\n||\n++\n");
    }
}
