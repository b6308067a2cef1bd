//! termcfg resolves display configuration for an embedded terminal panel:
//! the ANSI palette for the active theme, the terminal font with its
//! measured glyph cell, and the shell executable for the host platform.
//!
//! Terminal-specific settings fall back to editor-wide defaults, and every
//! resolution re-reads the settings snapshot rather than caching one. Hosts
//! plug in their own settings storage and glyph measurement through the
//! [`SettingsProvider`] and [`GlyphMeasurer`] traits.

pub mod cli;
pub mod constants;
pub mod error;
pub mod font;
pub mod palette;
pub mod platform;
pub mod resolver;
pub mod settings;
pub mod theme;

pub use error::ConfigError;
pub use font::{FontDescriptor, FontdueMeasurer, GlyphMeasurer, HeuristicMeasurer};
pub use palette::AnsiPalette;
pub use platform::Platform;
pub use resolver::ConfigResolver;
pub use settings::{
    FileSettings, Settings, SettingsProvider, StaticSettings, StaticTheme, ThemeProvider,
};
pub use theme::ThemeKind;
