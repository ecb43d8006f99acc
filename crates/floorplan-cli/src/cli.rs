//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Rectangular-room floor plans from plot dimensions and a template key
#[derive(Parser, Debug)]
#[command(name = "floorplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate one floor plan
    Generate {
        /// Plot width (x axis, West to East)
        #[arg(long)]
        width: f64,

        /// Plot height (y axis, South to North)
        #[arg(long)]
        height: f64,

        /// Room count: 1bhk, 2bhk, 3bhk
        #[arg(long)]
        rooms: String,

        /// Entrance side: north, east
        #[arg(long)]
        entrance: String,

        /// Configuration variant, e.g. 2normal, 1master1normal
        #[arg(long, default_value = "standard")]
        variant: String,

        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Seed for the layout id
        #[arg(long)]
        seed: Option<u64>,

        /// JSON generator config (tolerances, aspect window, report thresholds)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List catalog template keys
    Templates,

    /// Sweep every template over a grid of plots and report failures
    Check {
        #[arg(long)]
        verbose: bool,
    },
}
