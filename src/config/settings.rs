//! Configuration settings for running simulations

use crate::game_of_life::{grid::cell_count, Grid};
use crate::zoo::{self, patterns, FileFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub generations: usize,
    pub toroidal: bool,
    /// Size of the blank world used when no grid file is given
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub grid_file: Option<PathBuf>,
    /// Preset placed onto the blank world, see [`patterns::NAMES`]
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub pattern_offset: [usize; 2],
    /// Quarter turns applied to the preset before placing it
    #[serde(default)]
    pub pattern_rotation: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub grid_file: Option<PathBuf>,
    /// Codec for `grid_file`, detected from the extension when absent
    #[serde(default)]
    pub format: Option<FileFormat>,
    pub show_frames: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                generations: 10,
                toroidal: false,
                width: 16,
                height: 16,
            },
            input: InputConfig {
                grid_file: None,
                pattern: Some("glider".to_string()),
                pattern_offset: [1, 1],
                pattern_rotation: 0,
            },
            output: OutputConfig {
                grid_file: Some(PathBuf::from("output/final.gol")),
                format: None,
                show_frames: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        match (&self.input.grid_file, &self.input.pattern) {
            (Some(_), Some(_)) => {
                anyhow::bail!("Specify either an input grid file or a pattern, not both");
            }
            (Some(file), None) => {
                if !file.exists() {
                    anyhow::bail!("Input grid file does not exist: {}", file.display());
                }
                if zoo::FileFormat::from_path(file).is_none() {
                    anyhow::bail!("Input grid file has an unknown extension: {}", file.display());
                }
            }
            (None, pattern) => {
                if self.simulation.width == 0 || self.simulation.height == 0 {
                    anyhow::bail!("World width and height must be positive");
                }
                cell_count(self.simulation.width, self.simulation.height)
                    .context("World dimensions are too large")?;
                if let Some(name) = pattern {
                    if patterns::by_name(name).is_none() {
                        anyhow::bail!(
                            "Unknown pattern '{}', expected one of: {}",
                            name,
                            patterns::NAMES.join(", ")
                        );
                    }
                }
            }
        }

        if let Some(file) = &self.output.grid_file {
            if self.output_format().is_none() {
                anyhow::bail!("Cannot determine output format for {}", file.display());
            }
        }

        Ok(())
    }

    /// Codec used for the output file
    pub fn output_format(&self) -> Option<FileFormat> {
        self.output
            .format
            .or_else(|| self.output.grid_file.as_ref().and_then(FileFormat::from_path))
    }

    /// Build the starting grid from the input file or the configured preset
    pub fn initial_grid(&self) -> Result<Grid> {
        if let Some(file) = &self.input.grid_file {
            return zoo::load(file).with_context(|| format!("Failed to load grid from {}", file.display()));
        }

        let mut grid = Grid::try_new(self.simulation.width, self.simulation.height)
            .context("Cannot allocate the blank world")?;
        if let Some(name) = &self.input.pattern {
            let preset = patterns::by_name(name)
                .with_context(|| format!("Unknown pattern: {}", name))?
                .rotate(self.input.pattern_rotation);
            let [x, y] = self.input.pattern_offset;
            grid.merge(&preset, x, y, true)
                .with_context(|| format!("Pattern '{}' does not fit at ({}, {})", name, x, y))?;
        }

        Ok(grid)
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(toroidal) = cli_overrides.toroidal {
            self.simulation.toroidal = toroidal;
        }
        if let Some(width) = cli_overrides.width {
            self.simulation.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.simulation.height = height;
        }
        if let Some(ref input) = cli_overrides.input {
            self.input.grid_file = Some(input.clone());
            self.input.pattern = None;
        }
        if let Some(ref pattern) = cli_overrides.pattern {
            self.input.pattern = Some(pattern.clone());
            self.input.grid_file = None;
        }
        if let Some(ref output) = cli_overrides.output {
            self.output.grid_file = Some(output.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub toroidal: Option<bool>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub input: Option<PathBuf>,
    pub pattern: Option<String>,
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        settings.validate().unwrap();
        assert_eq!(settings.output_format(), Some(FileFormat::Ascii));

        let grid = settings.initial_grid().unwrap();
        assert_eq!(grid.dimensions(), (16, 16));
        assert_eq!(grid.alive_cells(), 5);
        assert_eq!(grid.crop(1, 1, 4, 4).unwrap(), patterns::glider());
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.toroidal = true;
        settings.output.format = Some(FileFormat::Binary);
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert!(loaded.simulation.toroidal);
        assert_eq!(loaded.output.format, Some(FileFormat::Binary));
        assert_eq!(loaded.input.pattern.as_deref(), Some("glider"));
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.input.pattern = Some("pulsar".to_string());
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.width = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.input.grid_file = Some(PathBuf::from("does/not/exist.gol"));
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.output.grid_file = Some(PathBuf::from("final.png"));
        assert!(settings.validate().is_err());
        settings.output.format = Some(FileFormat::Binary);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        let mut settings = Settings::default();
        settings.simulation.width = usize::MAX;
        settings.simulation.height = 2;

        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(settings.initial_grid().is_err());
    }

    #[test]
    fn test_pattern_must_fit() {
        let mut settings = Settings::default();
        settings.input.pattern = Some("light_weight_spaceship".to_string());
        settings.input.pattern_offset = [14, 0];
        assert!(settings.initial_grid().is_err());

        settings.input.pattern_rotation = 1;
        settings.input.pattern_offset = [12, 0];
        let grid = settings.initial_grid().unwrap();
        assert_eq!(grid.alive_cells(), 9);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            generations: Some(3),
            toroidal: Some(true),
            input: Some(PathBuf::from("start.bgol")),
            ..CliOverrides::default()
        });

        assert_eq!(settings.simulation.generations, 3);
        assert!(settings.simulation.toroidal);
        assert_eq!(settings.input.grid_file, Some(PathBuf::from("start.bgol")));
        assert!(settings.input.pattern.is_none());

        // An explicit false clears a toroidal config, an absent flag keeps it
        settings.merge_with_cli(&CliOverrides::default());
        assert!(settings.simulation.toroidal);
        settings.merge_with_cli(&CliOverrides {
            toroidal: Some(false),
            ..CliOverrides::default()
        });
        assert!(!settings.simulation.toroidal);
    }
}
