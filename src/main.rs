//! Entry point for termcfg, a display configuration resolver for embedded
//! terminal panels.
//!
//! This binary loads environment variables, initializes logging, parses CLI
//! arguments via [`termcfg::cli`], and dispatches to the chosen subcommand.

use anyhow::Result;

/// Runs the termcfg CLI.
///
/// Loads `.env` files (silently ignored if absent), initializes the logger
/// from `RUST_LOG`, parses command-line arguments into a
/// [`termcfg::cli::Cli`] struct, and dispatches the chosen subcommand.
fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();
    let cli = termcfg::cli::parse();
    termcfg::cli::run(cli)
}
