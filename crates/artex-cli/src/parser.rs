//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the artwork explorer.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "artex")]
#[command(about = "Explore the Met Museum's public artwork collection")]
#[command(version)]
pub struct Cli {
    /// Override the collection API base URL
    #[arg(long = "base-url", global = true, env = "ARTEX_API_BASE")]
    pub base_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
