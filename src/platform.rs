//! Host platform identification.
//!
//! Defines [`Platform`], which selects one of the three configured shell
//! paths. It is an input to the resolver, never derived by it.

use anyhow::{anyhow, Result};

/// Identifies the platform the terminal panel runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    /// Returns the platform of the running process.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Mac
        } else {
            Self::Linux
        }
    }

    /// Parses a platform name string into a [`Platform`].
    ///
    /// Matching is case-insensitive. Returns an error for unknown names.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "windows" | "win" => Ok(Self::Windows),
            "mac" | "macos" | "osx" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            other => Err(anyhow!(
                "Unknown platform: {other}. Supported: windows, mac, linux"
            )),
        }
    }
}
