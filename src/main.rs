//! Main CLI application for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_zoo::{
    config::{CliOverrides, Settings},
    utils::{ColorOutput, GridFormatter, GridStats},
    zoo::{self, patterns::create_example_grids, FileFormat},
    World,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "life_zoo")]
#[command(about = "Game of Life simulator with text and binary grid files")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Advance a grid by a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Starting grid file, .gol or .bgol (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Preset pattern placed on a blank world (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Width of the blank world (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Height of the blank world (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Wrap the edges of the world around; `--toroidal=false` turns off
        /// wrapping enabled by the config (overrides config)
        #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        toroidal: Option<bool>,

        /// Where to save the final state (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every generation
        #[arg(long)]
        show_frames: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a grid file with its statistics
    Show {
        /// Grid file, .gol or .bgol
        file: PathBuf,

        /// Annotate rows and columns with coordinates
        #[arg(long)]
        coords: bool,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a grid file between formats
    Convert {
        /// Source grid file
        input: PathBuf,

        /// Destination grid file
        output: PathBuf,

        /// Destination format (detected from the extension by default)
        #[arg(short, long, value_enum)]
        format: Option<FileFormat>,

        /// Quarter turns clockwise applied before saving, negative turns anticlockwise
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        rotate: i32,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config, input, pattern, width, height, generations, toroidal,
            output, show_frames, verbose,
        } => {
            let overrides = CliOverrides {
                generations,
                toroidal,
                width,
                height,
                input,
                pattern,
                output,
            };
            run_command(config, overrides, show_frames, verbose)
        }
        Commands::Show { file, coords, json } => show_command(file, coords, json),
        Commands::Convert { input, output, format, rotate } => {
            convert_command(input, output, format, rotate)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_command(
    config_path: PathBuf,
    cli_overrides: CliOverrides,
    show_frames: bool,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
        Settings::default()
    };

    settings.merge_with_cli(&cli_overrides);
    settings.output.show_frames |= show_frames;
    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Toroidal: {}", settings.simulation.toroidal);
        match (&settings.input.grid_file, &settings.input.pattern) {
            (Some(file), _) => println!("  Input: {}", file.display()),
            (None, Some(name)) => println!(
                "  Input: {} on {}x{}", name, settings.simulation.width, settings.simulation.height
            ),
            (None, None) => println!(
                "  Input: blank {}x{}", settings.simulation.width, settings.simulation.height
            ),
        }
        println!();
    }

    let mut world = World::from_grid(settings.initial_grid()?);
    info!(
        width = world.width(),
        height = world.height(),
        alive = world.alive_cells(),
        "starting simulation"
    );

    let start_time = Instant::now();
    let toroidal = settings.simulation.toroidal;
    if settings.output.show_frames {
        println!("{}", GridFormatter::format_frame(&world));
        for _ in 0..settings.simulation.generations {
            world.step(toroidal);
            println!("{}", GridFormatter::format_frame(&world));
        }
    } else {
        world.advance(settings.simulation.generations, toroidal);
        println!("{}", GridFormatter::format_frame(&world));
    }

    println!("{}", ColorOutput::success(&format!(
        "Simulated {} generation(s) in {:.3}s",
        world.generation(),
        start_time.elapsed().as_secs_f64()
    )));

    if let Some(path) = &settings.output.grid_file {
        let format = settings
            .output_format()
            .with_context(|| format!("Cannot determine output format for {}", path.display()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        format.save(path, world.state())
            .with_context(|| format!("Failed to save final state to {}", path.display()))?;
        println!("{}", ColorOutput::info(&format!("Final state saved to {}", path.display())));
    }

    Ok(())
}

fn show_command(file: PathBuf, coords: bool, json: bool) -> Result<()> {
    let grid = zoo::load(&file).with_context(|| format!("Failed to load {}", file.display()))?;
    let stats = GridStats::of(&grid);

    if json {
        println!("{}", stats.to_json().context("Failed to serialize statistics")?);
        return Ok(());
    }

    if coords {
        println!("{}", GridFormatter::format_grid_with_coords(&grid));
    } else {
        print!("{}", grid);
    }
    println!("{}", stats);

    Ok(())
}

fn convert_command(
    input: PathBuf,
    output: PathBuf,
    format: Option<FileFormat>,
    rotate: i32,
) -> Result<()> {
    let grid = zoo::load(&input).with_context(|| format!("Failed to load {}", input.display()))?;
    let grid = grid.rotate(rotate);

    let format = match format.or_else(|| FileFormat::from_path(&output)) {
        Some(format) => format,
        None => {
            println!("{}", ColorOutput::error(&format!(
                "Cannot determine format for {}, pass --format", output.display()
            )));
            anyhow::bail!("Unknown output format");
        }
    };

    debug!(?format, rotate, "converting grid");
    format.save(&output, &grid)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!("{}", ColorOutput::success(&format!(
        "Converted {} -> {} ({}x{})",
        input.display(),
        output.display(),
        grid.width(),
        grid.height()
    )));

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("input/patterns");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &patterns_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_grids(&patterns_dir).context("Failed to create example grids")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    // Toroidal spaceship run reading one of the generated files
    let examples_dir = config_dir.join("examples");
    let mut torus = Settings::default();
    torus.simulation.toroidal = true;
    torus.simulation.generations = 40;
    torus.input.pattern = Some("light_weight_spaceship".to_string());
    torus.input.pattern_offset = [4, 4];
    torus.output.grid_file = Some(PathBuf::from("output/spaceship.bgol"));
    torus.to_file(&examples_dir.join("torus.yaml"))?;

    let mut from_file = Settings::default();
    from_file.input.pattern = None;
    from_file.input.grid_file = Some(PathBuf::from("input/patterns/r_pentomino.gol"));
    from_file.output.grid_file = Some(PathBuf::from("output/r_pentomino.gol"));
    from_file.to_file(&examples_dir.join("from_file.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));

    Ok(())
}
