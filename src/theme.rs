//! Base theme identity and normalization.
//!
//! Theme identifiers are many-to-one: a full identifier such as
//! `"vs-dark my-theme"` carries the base theme as its leading token.
//! [`ThemeKind`] is the normalized category the palette tables are keyed by.

use crate::error::ConfigError;

/// Base theme category a full theme identifier normalizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    /// High-contrast black (`hc-black`).
    HighContrastBlack,
    /// Light (`vs`).
    Light,
    /// Dark (`vs-dark`).
    Dark,
}

impl ThemeKind {
    /// The normalized identifier for this base theme.
    pub fn base_id(self) -> &'static str {
        match self {
            ThemeKind::HighContrastBlack => "hc-black",
            ThemeKind::Light => "vs",
            ThemeKind::Dark => "vs-dark",
        }
    }

    /// Normalizes a full theme identifier to its base kind.
    ///
    /// Only the leading whitespace-delimited token decides the category;
    /// anything after it is the theme's own name and is ignored. An
    /// unrecognized base yields [`ConfigError::UnknownTheme`] so callers
    /// must handle the miss explicitly.
    pub fn from_theme_id(id: &str) -> Result<Self, ConfigError> {
        let base = id.split_whitespace().next().unwrap_or("");
        match base {
            "hc-black" => Ok(Self::HighContrastBlack),
            "vs" => Ok(Self::Light),
            "vs-dark" => Ok(Self::Dark),
            _ => Err(ConfigError::UnknownTheme { id: id.to_string() }),
        }
    }
}
