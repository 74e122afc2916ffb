//! Display and output formatting utilities

use crate::game_of_life::{Grid, World};
use serde::Serialize;
use std::fmt;

/// Cell counts of a grid, printable as text or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridStats {
    pub width: usize,
    pub height: usize,
    pub total_cells: usize,
    pub alive_cells: usize,
    pub dead_cells: usize,
}

impl GridStats {
    pub fn of(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            total_cells: grid.total_cells(),
            alive_cells: grid.alive_cells(),
            dead_cells: grid.dead_cells(),
        }
    }

    /// Share of living cells in percent
    pub fn density(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.alive_cells as f64 / self.total_cells as f64 * 100.0
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid Statistics:")?;
        writeln!(f, "  Size: {}x{}", self.width, self.height)?;
        writeln!(f, "  Living cells: {}", self.alive_cells)?;
        writeln!(f, "  Dead cells: {}", self.dead_cells)?;
        write!(f, "  Density: {:.1}%", self.density())
    }
}

/// Format grids for the terminal
pub struct GridFormatter;

impl GridFormatter {
    /// One generation of a running world, with the bordered rendering
    pub fn format_frame(world: &World) -> String {
        format!(
            "Generation {} (Living: {}):\n{}",
            world.generation(),
            world.alive_cells(),
            world.state()
        )
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                output.push_str(if grid[(x, y)].is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zoo::patterns;

    #[test]
    fn test_grid_formatting() {
        let grid = patterns::blinker();

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains(" 1 ██████"));

        let mut world = World::from_grid(grid);
        world.step(false);
        let frame = GridFormatter::format_frame(&world);
        assert!(frame.starts_with("Generation 1 (Living: 3):\n+---+\n"));
    }

    #[test]
    fn test_grid_stats() {
        let stats = GridStats::of(&patterns::block());
        assert_eq!(stats.alive_cells, 4);
        assert_eq!(stats.dead_cells, 0);
        assert!((stats.density() - 100.0).abs() < f64::EPSILON);
        assert_eq!(GridStats::of(&Grid::empty()).density(), 0.0);

        let json: serde_json::Value = serde_json::from_str(&stats.to_json().unwrap()).unwrap();
        assert_eq!(json["width"], 2);
        assert_eq!(json["alive_cells"], 4);

        assert!(stats.to_string().contains("Density: 100.0%"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
