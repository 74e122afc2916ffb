//! Conway's B3/S23 transition rule

use super::Cell;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// State of a cell in the next generation given its current state and
    /// the number of living cells in its Moore neighbourhood
    pub fn next_state(current: Cell, neighbours: u8) -> Cell {
        let counts = match current {
            Cell::Alive => Self::survival_neighbour_counts(),
            Cell::Dead => Self::birth_neighbour_counts(),
        };
        Cell::from(counts.contains(&neighbours))
    }

    /// Neighbour counts that bring a dead cell to life
    pub fn birth_neighbour_counts() -> &'static [u8] {
        &[3]
    }

    /// Neighbour counts that keep a living cell alive
    pub fn survival_neighbour_counts() -> &'static [u8] {
        &[2, 3]
    }
}
