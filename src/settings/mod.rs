//! Settings access for termcfg.
//!
//! Settings live as TOML at the platform's XDG config path
//! (e.g. `~/.config/termcfg/config.toml` on Linux). The resolver reads them
//! through [`SettingsProvider`] so hosts can supply their own storage:
//! [`FileSettings`] re-reads the file on every snapshot, while
//! [`StaticSettings`] serves a fixed in-memory snapshot.

mod loader;
mod types;

pub use loader::FileSettings;
pub use types::{EditorSettings, LooseInt, Settings, ShellSettings, TerminalSettings};

use crate::error::ConfigError;

/// Read-only access to the current settings snapshot.
///
/// Implementations must tolerate being called on every resolution — the
/// resolver never caches a snapshot and re-reads instead of subscribing to
/// change notifications.
pub trait SettingsProvider {
    fn settings(&self) -> Result<Settings, ConfigError>;
}

/// Supplies the current theme identifier.
pub trait ThemeProvider {
    fn theme_id(&self) -> String;
}

/// Fixed in-memory settings, for tests and embedding hosts.
pub struct StaticSettings(pub Settings);

impl SettingsProvider for StaticSettings {
    fn settings(&self) -> Result<Settings, ConfigError> {
        Ok(self.0.clone())
    }
}

/// Fixed theme identifier.
pub struct StaticTheme(pub String);

impl ThemeProvider for StaticTheme {
    fn theme_id(&self) -> String {
        self.0.clone()
    }
}
