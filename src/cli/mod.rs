//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Config resolution, interpreter discovery and report output

pub mod args;
pub mod run;

pub use args::{Cli, OutputFormat};
pub use run::{execute, exit_code};
