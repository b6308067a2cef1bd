//! Centralized constants for termcfg.
//!
//! All magic numbers, default strings, and configuration constants live here
//! so they can be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "termcfg";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

// --- Font defaults ---

/// Editor-wide fallback font family.
pub const DEFAULT_FONT_FAMILY: &str = "monospace";

/// Editor-wide fallback font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Multiplier that derives a line height from the font size when neither
/// the terminal nor the editor configures one.
pub const GOLDEN_LINE_HEIGHT_RATIO: f32 = 1.5;

/// Reference glyph rendered when measuring the terminal's character cell.
pub const MEASURE_SAMPLE_GLYPH: char = 'X';

/// Approximate advance-to-size ratio of a monospace glyph, used by the
/// heuristic measurer when no font data is available.
pub const HEURISTIC_WIDTH_RATIO: f32 = 0.6;

// --- Shell defaults ---

/// Default shell on Windows.
pub const DEFAULT_WINDOWS_SHELL: &str = "cmd.exe";

/// Default shell on macOS when `$SHELL` is unset.
pub const DEFAULT_OSX_SHELL: &str = "/bin/zsh";

/// Default shell on Linux when `$SHELL` is unset.
pub const DEFAULT_LINUX_SHELL: &str = "/bin/sh";

// --- Theme defaults ---

/// Theme identifier assumed when the configuration does not set one.
pub const DEFAULT_THEME_ID: &str = "vs-dark";
