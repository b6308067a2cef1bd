//! Error types for display configuration resolution.

use std::path::PathBuf;

/// Errors produced while resolving terminal display configuration.
///
/// None of these are fatal to the host: a failed resolution leaves the
/// terminal panel defaulting or disabling its display, nothing more.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The current theme identifier does not normalize to a known base
    /// theme, so no ANSI palette exists for it.
    #[error("no ANSI palette for theme {id:?}")]
    UnknownTheme { id: String },

    /// Font metrics were requested but the resolver was constructed
    /// without a glyph measurer.
    #[error("glyph measurement unavailable: no measurer attached")]
    MeasurerUnavailable,

    /// The measurer has no usable font for the requested family.
    #[error("no usable font for family {family:?}: {reason}")]
    FontUnavailable { family: String, reason: String },

    /// The platform's configuration directory could not be determined.
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings TOML in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
