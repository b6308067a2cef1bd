//! File loading for termcfg settings.

use std::fs;
use std::path::PathBuf;

use super::types::{Settings, ShellSettings};
use super::{SettingsProvider, ThemeProvider};
use crate::constants::{APP_NAME, CONFIG_FILENAME, DEFAULT_THEME_ID};
use crate::error::ConfigError;

/// Settings provider backed by a TOML file.
///
/// The file is re-read on every snapshot — there is no change notification
/// contract, so callers always see the current on-disk values. If the file
/// does not exist it is created with commented defaults on first load.
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    /// Creates a provider for the default config path
    /// (`~/.config/termcfg/config.toml` on Linux).
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            path: Self::config_path()?,
        })
    }

    /// Creates a provider for an explicit file path.
    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path this provider reads from.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the platform-specific configuration directory for termcfg.
    ///
    /// Returns `~/.config/termcfg/` on Linux (`XDG_CONFIG_HOME/termcfg`).
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?.join(APP_NAME);
        Ok(dir)
    }

    /// Returns the full path to the termcfg configuration file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads the settings file, creating it with defaults if missing.
    fn load(&self) -> Result<Settings, ConfigError> {
        if !self.path.exists() {
            let default_toml = default_config_toml();
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })?;
            }
            fs::write(&self.path, &default_toml).map_err(|source| ConfigError::Io {
                path: self.path.clone(),
                source,
            })?;
            log::info!("wrote default settings to {}", self.path.display());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsProvider for FileSettings {
    fn settings(&self) -> Result<Settings, ConfigError> {
        self.load()
    }
}

impl ThemeProvider for FileSettings {
    /// The configured `theme` key; the default theme if the file is
    /// unreadable, since a broken config should degrade, not crash.
    fn theme_id(&self) -> String {
        self.load()
            .map(|s| s.theme)
            .unwrap_or_else(|_| DEFAULT_THEME_ID.to_string())
    }
}

/// Renders the default config file, seeding shells detected from the
/// environment so the file works out of the box.
fn default_config_toml() -> String {
    let shell = ShellSettings::default();
    format!(
        r#"theme = "{DEFAULT_THEME_ID}"

[editor]
font_family = "monospace"
font_size = 14
# 0 derives the line height from the font size
line_height = 0

[terminal]
# font_family = "JetBrains Mono"
# font_size = 14
# line_height = 21

[terminal.shell]
windows = "{}"
osx = "{}"
linux = "{}"
"#,
        shell.windows, shell.osx, shell.linux
    )
}
