//! Command-line interface definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// inkwash - cleaning pipeline and detection service for scanned marks
#[derive(Debug, Parser)]
#[command(name = "inkwash", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean one image or a directory of images
    Clean(CleanArgs),
    /// Run the detection web server
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input image file or directory
    pub input: PathBuf,

    /// Output directory for cleaned images
    #[arg(short, long, default_value = "cleaned")]
    pub output: PathBuf,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to listen on (overrides config file)
    #[arg(long)]
    pub port: Option<u16>,

    /// Address to bind to (overrides config file)
    #[arg(long)]
    pub bind: Option<String>,

    /// Maximum upload size in bytes (overrides config file)
    #[arg(long)]
    pub upload_limit: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
