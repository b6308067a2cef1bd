//! Struct definitions and serde defaults for termcfg settings.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE, DEFAULT_LINUX_SHELL, DEFAULT_OSX_SHELL,
    DEFAULT_THEME_ID, DEFAULT_WINDOWS_SHELL,
};

/// Root settings snapshot, deserialized from `config.toml`.
///
/// Fields use serde defaults so resolution works with sensible defaults
/// when no config file exists.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Current theme identifier (e.g. `"vs-dark my-theme"`).
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Editor-wide display settings, used as fallbacks.
    #[serde(default)]
    pub editor: EditorSettings,
    /// Terminal-panel overrides.
    #[serde(default)]
    pub terminal: TerminalSettings,
}

/// Returns the default theme identifier.
///
/// Used by serde's `#[serde(default)]` attribute during deserialization.
fn default_theme() -> String {
    DEFAULT_THEME_ID.to_string()
}

/// Editor-wide font settings the terminal falls back to.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditorSettings {
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Zero means "derive from the font size".
    #[serde(default)]
    pub line_height: u32,
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

/// Terminal-panel specific settings.
///
/// Font fields are optional overrides; absent, empty, or zero values fall
/// back to the editor settings during resolution.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TerminalSettings {
    /// Font family override. Empty or absent falls back to the editor font.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<LooseInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<LooseInt>,
    /// Shell executables per platform.
    #[serde(default)]
    pub shell: ShellSettings,
}

/// Shell executable paths keyed by platform.
///
/// Paths are taken as configured; nothing validates that they exist or are
/// executable.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShellSettings {
    #[serde(default = "default_windows_shell")]
    pub windows: String,
    #[serde(default = "default_osx_shell")]
    pub osx: String,
    #[serde(default = "default_linux_shell")]
    pub linux: String,
}

fn default_windows_shell() -> String {
    DEFAULT_WINDOWS_SHELL.to_string()
}

/// `$SHELL` wins when set and non-empty, the per-OS constant otherwise.
fn shell_from_env(fallback: &str) -> String {
    match std::env::var("SHELL") {
        Ok(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

fn default_osx_shell() -> String {
    shell_from_env(DEFAULT_OSX_SHELL)
}

fn default_linux_shell() -> String {
    shell_from_env(DEFAULT_LINUX_SHELL)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            editor: EditorSettings::default(),
            terminal: TerminalSettings::default(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_size: default_font_size(),
            line_height: 0,
        }
    }
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            windows: default_windows_shell(),
            osx: default_osx_shell(),
            linux: default_linux_shell(),
        }
    }
}

/// A loosely-typed numeric setting.
///
/// Host settings arrive untyped: a font size may be stored as an integer,
/// a float, or a string like `"14"` (or junk). [`LooseInt::to_integer`]
/// applies the tolerant parse the resolver expects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseInt {
    Int(i64),
    Float(f64),
    Text(String),
}

impl LooseInt {
    /// Converts to an integer, clamped to `floor`.
    ///
    /// Strings contribute their leading `[+-]?digits` prefix; anything
    /// non-numeric converts to 0 rather than an error. Floats truncate.
    pub fn to_integer(&self, floor: i64) -> i64 {
        let raw = match self {
            LooseInt::Int(i) => *i,
            LooseInt::Float(f) => *f as i64,
            LooseInt::Text(s) => parse_leading_int(s),
        };
        raw.max(floor)
    }
}

/// Prefix parse: optional sign, then digits. No digits parses to 0.
fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
