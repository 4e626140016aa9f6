//! CLI argument definitions.
//!
//! Running with no arguments verifies the current directory with the
//! built-in defaults. Every flag is optional.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Installation verification for the Royal Enfield Service Management System.
#[derive(Debug, Parser)]
#[command(name = "garage-verify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides <project>/.garage-verify.yml)
    #[arg(short, long, env = "GARAGE_VERIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Python interpreter name or path (overrides configured candidates)
    #[arg(long, env = "GARAGE_VERIFY_PYTHON")]
    pub python: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with emoji markers.
    #[default]
    Text,
    /// A single JSON object on stdout.
    Json,
}
