//! Power-strip mesh generator.
//!
//! # Commands
//!
//! - `powerstrip strip` - Assemble a strip and write `output_top.obj` and
//!   `output_bottom.obj`
//! - `powerstrip prism` - Write a regular polygon prism
//! - `powerstrip check <FILE>` - Print the closure report of a mesh file
//!
//! Logging follows `RUST_LOG` and defaults to `info`.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use strip_mesh::PartKind;

const DEFAULT_LOGGING_LEVEL: &str = "info";

/// Parametric power-strip mesh generator
#[derive(Parser)]
#[command(name = "powerstrip")]
#[command(about = "Generate power-strip enclosure meshes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a strip and write both artifacts
    Strip(StripArgs),

    /// Write a regular polygon prism
    Prism(PrismArgs),

    /// Parse a mesh file and print its closure report
    Check {
        /// Mesh file to inspect
        #[arg(name = "FILE")]
        file: PathBuf,
    },
}

#[derive(clap::Args)]
struct StripArgs {
    /// Receptacle standard (european or american)
    #[arg(long, default_value = "european")]
    kind: PartKind,

    /// Number of parts (2-8)
    #[arg(long, default_value_t = 4)]
    parts: u32,

    /// Distance between parts in mm (5-60)
    #[arg(long, default_value_t = 25.0)]
    pitch: f64,

    /// Side margin in mm (5-25)
    #[arg(long, default_value_t = 15.0)]
    lateral_gap: f64,

    /// End margin in mm (5-25)
    #[arg(long, default_value_t = 25.0)]
    vertical_gap: f64,

    /// JSON parameter file; replaces the flags above
    #[arg(long)]
    params: Option<PathBuf>,

    /// Directory holding the part models
    #[arg(long)]
    parts_dir: Option<PathBuf>,

    /// Enclosure template (defaults to Bottom_enclosure.obj in the parts directory)
    #[arg(long)]
    template: Option<PathBuf>,

    /// Output directory
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

#[derive(clap::Args)]
struct PrismArgs {
    /// Circumradius
    #[arg(long)]
    radius: f64,

    /// Height along Z
    #[arg(long)]
    height: f64,

    /// Number of sides (3 or more)
    #[arg(long)]
    sides: u32,

    /// Rotation about X, Y and Z in degrees
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    rotate: Option<Vec<f64>>,

    /// Translation applied after the rotation
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    translate: Option<Vec<f64>>,

    /// Output file
    #[arg(long, default_value = "prism.obj")]
    out: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Strip(args) => commands::strip(args),
        Commands::Prism(args) => commands::prism(args),
        Commands::Check { file } => commands::check(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
