//! Command-line interface definition and dispatch for termcfg.
//!
//! Uses [`clap`] for argument parsing with derive macros. Each subcommand
//! inspects one resolved facet of the terminal display configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::font::{FontdueMeasurer, GlyphMeasurer, HeuristicMeasurer};
use crate::palette::rgb_components;
use crate::platform::Platform;
use crate::resolver::ConfigResolver;
use crate::settings::{FileSettings, SettingsProvider, StaticTheme, ThemeProvider};

/// Top-level CLI structure for termcfg.
///
/// Parsed from command-line arguments via [`clap::Parser`]. Contains a
/// single required subcommand that determines which facet to resolve.
#[derive(Parser)]
#[command(name = "termcfg", about = "Display configuration resolver for embedded terminal panels")]
pub struct Cli {
    /// Platform to resolve for (windows, mac, linux); defaults to the host
    #[arg(long, global = true)]
    pub platform: Option<String>,
    /// Theme identifier override (e.g. "vs-dark my-theme")
    #[arg(long, global = true)]
    pub theme: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for the termcfg CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by
/// clap.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the terminal font and measure its glyph cell
    Font {
        /// Measure with a real font file instead of the heuristic
        #[arg(long)]
        font_file: Option<PathBuf>,
    },
    /// Print the resolved shell path
    Shell,
    /// Print the 16-color ANSI palette for the current theme
    Palette,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Subcommands for the `config` command.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective settings
    Show,
    /// Print the settings file path
    Path,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid
/// input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub fn run(cli: Cli) -> Result<()> {
    let platform = match cli.platform.as_deref() {
        Some(s) => Platform::from_str(s)?,
        None => Platform::current(),
    };

    let settings = FileSettings::new()?;
    let theme: Box<dyn ThemeProvider> = match cli.theme {
        Some(id) => Box::new(StaticTheme(id)),
        None => Box::new(FileSettings::new()?),
    };

    match cli.command {
        Commands::Font { font_file } => {
            let measurer: Box<dyn GlyphMeasurer> = match font_file {
                Some(path) => {
                    let data = std::fs::read(&path)
                        .with_context(|| format!("Failed to read font file {path:?}"))?;
                    let mut measurer = FontdueMeasurer::new();
                    measurer.set_fallback(data);
                    Box::new(measurer)
                }
                None => Box::new(HeuristicMeasurer::new()),
            };

            let mut resolver = ConfigResolver::new(platform, Box::new(settings), theme)
                .with_measurer(measurer);
            let font = resolver.font()?;

            println!("{} {}", "family:".bold(), font.family);
            println!("{} {}px", "size:".bold(), font.size);
            println!("{} {}px", "line height:".bold(), font.line_height);
            println!(
                "{} {}x{}px",
                "glyph cell:".bold(),
                font.glyph_width,
                font.glyph_height
            );
        }
        Commands::Shell => {
            let resolver = ConfigResolver::new(platform, Box::new(settings), theme);
            println!("{}", resolver.shell()?);
        }
        Commands::Palette => {
            let resolver = ConfigResolver::new(platform, Box::new(settings), theme);
            let palette = resolver.palette()?;
            for (index, hex) in palette.iter().enumerate() {
                let swatch = match rgb_components(hex) {
                    Some((r, g, b)) => "  ".on_truecolor(r, g, b).to_string(),
                    None => "  ".to_string(),
                };
                let role = if index < 8 { "normal" } else { "bright" };
                println!("{index:2}  {swatch}  {hex}  {}", role.dimmed());
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let effective = settings.settings()?;
                print!("{}", toml::to_string_pretty(&effective)?);
            }
            ConfigAction::Path => {
                println!("{}", settings.path().display());
            }
        },
    }

    Ok(())
}
