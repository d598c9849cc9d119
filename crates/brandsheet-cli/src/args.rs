//! Command-line argument definitions for the brandsheet CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the output path, font lookup,
//! configuration file selection, and logging verbosity.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the brand poster renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output PNG file
    #[arg(short, long, default_value = "HIIC-AI-Lab-Brand-Guidelines.png")]
    pub output: PathBuf,

    /// Directory containing the brand font files (overrides the configuration)
    #[arg(short, long)]
    pub font_dir: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
