//! Game of Life core functionality

pub mod cell;
pub mod grid;
pub mod rules;
pub mod world;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::GameOfLifeRules;
pub use world::World;
